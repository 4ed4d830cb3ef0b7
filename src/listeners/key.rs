use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Group assigned to keys created without an explicit group
pub const DEFAULT_GROUP: &str = "DEFAULT";

/// A `group.name` identity shared by jobs and triggers
pub trait ScheduleKey: Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    fn name(&self) -> &str;

    fn group(&self) -> &str;
}

macro_rules! schedule_key {
    ($(#[$meta:meta])* $ty:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $ty {
            name: String,
            group: String,
        }

        impl $ty {
            pub fn new(name: impl Into<String>, group: impl Into<String>) -> Self {
                Self {
                    name: name.into(),
                    group: group.into(),
                }
            }

            /// Create a key in [`DEFAULT_GROUP`]
            pub fn with_default_group(name: impl Into<String>) -> Self {
                Self::new(name, DEFAULT_GROUP)
            }
        }

        impl ScheduleKey for $ty {
            fn name(&self) -> &str {
                &self.name
            }

            fn group(&self) -> &str {
                &self.group
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}.{}", self.group, self.name)
            }
        }
    };
}

schedule_key! {
    /// Identity of a scheduled job
    JobKey
}

schedule_key! {
    /// Identity of a trigger firing a job
    TriggerKey
}
