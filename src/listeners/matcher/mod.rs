//! Matchers decide which job or trigger keys a listener is interested in.
//!
//! A [`Matcher`] is an opaque predicate over a key type. The registry stores
//! matchers as [`MatcherRef`] trait objects and compares them by value, so a
//! matcher can be removed by passing an equal instance rather than the one
//! originally registered.

mod everything;
mod key;
mod logical;
mod string;

use std::any::Any;
use std::fmt;
use std::sync::Arc;

pub use everything::EverythingMatcher;
pub use key::KeyMatcher;
pub use logical::{AndMatcher, NotMatcher, OrMatcher};
pub use string::{GroupMatcher, NameMatcher, StringOperator};

/// Shared handle to a matcher over keys of type `K`
pub type MatcherRef<K> = Arc<dyn Matcher<K>>;

/// Predicate over a job or trigger key
pub trait Matcher<K>: MatcherEq<K> + fmt::Debug + Send + Sync {
    /// Whether `key` is selected by this matcher
    fn is_match(&self, key: &K) -> bool;
}

/// Value equality between matcher trait objects.
///
/// Implemented for every `Matcher` that is also `PartialEq`; two matchers are
/// equal when they have the same concrete type and compare equal.
pub trait MatcherEq<K> {
    fn as_any(&self) -> &dyn Any;

    fn eq_matcher(&self, other: &dyn Matcher<K>) -> bool;
}

impl<K, T> MatcherEq<K> for T
where
    T: Matcher<K> + PartialEq + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_matcher(&self, other: &dyn Matcher<K>) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

impl<K> PartialEq for dyn Matcher<K> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_matcher(other)
    }
}

/// Wrap a matcher into a [`MatcherRef`]
pub fn matcher<K, M>(matcher: M) -> MatcherRef<K>
where
    M: Matcher<K> + 'static,
{
    Arc::new(matcher)
}
