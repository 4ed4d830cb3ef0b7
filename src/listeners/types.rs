use std::fmt;

/// Listener registered under a unique, non-empty name
pub trait NamedListener: Send + Sync {
    /// Registry key for this listener
    fn name(&self) -> &str;
}

/// Observer of job execution events
pub trait JobListener: NamedListener {}

/// Observer of trigger firing events
pub trait TriggerListener: NamedListener {}

/// Observer of scheduler-wide events. Has no name and no matchers.
pub trait SchedulerListener: Send + Sync {}

/// Kind of listener held by a keyed registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Job,
    Trigger,
}

impl ListenerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListenerKind::Job => "job",
            ListenerKind::Trigger => "trigger",
        }
    }
}

impl fmt::Display for ListenerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
