use thiserror::Error;

use crate::config::ConfigError;
use crate::listeners::ListenerError;

/// Crate-wide error type.
///
/// Registry misuse, configuration problems and unexpected failures all
/// convert into this type so bootstrap code can use a single `?` chain.
#[derive(Error, Debug)]
pub enum AppError {
    /// A registry call was rejected before any state changed
    #[error(transparent)]
    Listener(#[from] ListenerError),

    /// Configuration could not be loaded or failed validation
    #[error("Configuration error")]
    Configuration {
        #[from]
        source: ConfigError,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
