//! Listener registry for the job scheduler.
//!
//! Tracks which job, trigger and scheduler listeners are registered and,
//! for job and trigger listeners, which keys each one is interested in.
//! Dispatching events to listeners happens elsewhere; this module only
//! answers "who is registered" and "who cares about this key".

pub mod error;
pub mod key;
pub mod manager;
pub mod matcher;
pub mod registry;
pub mod scheduler;
pub mod types;


pub use error::{ListenerError, ListenerResult};
pub use key::{JobKey, ScheduleKey, TriggerKey, DEFAULT_GROUP};
pub use manager::ListenerManager;
pub use matcher::{EverythingMatcher, Matcher, MatcherRef};
pub use registry::{JobListenerRegistry, KeyListenerRegistry, TriggerListenerRegistry};
pub use scheduler::SchedulerListenerList;
pub use types::{JobListener, ListenerKind, NamedListener, SchedulerListener, TriggerListener};
