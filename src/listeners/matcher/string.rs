use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::listeners::key::ScheduleKey;
use crate::listeners::matcher::Matcher;

/// Comparison applied by [`NameMatcher`] and [`GroupMatcher`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringOperator {
    Equals,
    StartsWith,
    EndsWith,
    Contains,
    Anything,
}

impl StringOperator {
    pub fn evaluate(&self, value: &str, compare_to: &str) -> bool {
        match self {
            StringOperator::Equals => value == compare_to,
            StringOperator::StartsWith => value.starts_with(compare_to),
            StringOperator::EndsWith => value.ends_with(compare_to),
            StringOperator::Contains => value.contains(compare_to),
            StringOperator::Anything => true,
        }
    }
}

macro_rules! string_matcher {
    ($(#[$meta:meta])* $ty:ident, $field:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $ty<K> {
            compare_to: String,
            operator: StringOperator,
            _key: PhantomData<fn(&K) -> bool>,
        }

        impl<K> $ty<K> {
            pub fn new(operator: StringOperator, compare_to: impl Into<String>) -> Self {
                Self {
                    compare_to: compare_to.into(),
                    operator,
                    _key: PhantomData,
                }
            }

            pub fn equals(compare_to: impl Into<String>) -> Self {
                Self::new(StringOperator::Equals, compare_to)
            }

            pub fn starts_with(compare_to: impl Into<String>) -> Self {
                Self::new(StringOperator::StartsWith, compare_to)
            }

            pub fn ends_with(compare_to: impl Into<String>) -> Self {
                Self::new(StringOperator::EndsWith, compare_to)
            }

            pub fn contains(compare_to: impl Into<String>) -> Self {
                Self::new(StringOperator::Contains, compare_to)
            }

            pub fn anything() -> Self {
                Self::new(StringOperator::Anything, "")
            }

            pub fn operator(&self) -> StringOperator {
                self.operator
            }

            pub fn compare_to(&self) -> &str {
                &self.compare_to
            }
        }

        impl<K: ScheduleKey> Matcher<K> for $ty<K> {
            fn is_match(&self, key: &K) -> bool {
                self.operator.evaluate(key.$field(), &self.compare_to)
            }
        }
    };
}

string_matcher! {
    /// Compares the key name against a string
    NameMatcher, name
}

string_matcher! {
    /// Compares the key group against a string
    GroupMatcher, group
}
