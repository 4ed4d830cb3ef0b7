use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListenerError {
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },
}

impl ListenerError {
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}

pub type ListenerResult<T> = Result<T, ListenerError>;
