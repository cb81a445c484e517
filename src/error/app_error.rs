use crate::config::error::ConfigError;
use crate::logger::LoggerError;
use thiserror::Error;

/// Application-wide error type that represents all possible errors in the system.
///
/// Module errors convert into it through `#[from]`, so `?` works across
/// module boundaries in the CLI and service layers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// One or more notifications could not be delivered
    #[error("{failed} of {attempted} notification(s) could not be delivered")]
    Delivery { attempted: usize, failed: usize },

    /// The command cannot be handled by the handler it was given to
    #[error("Unsupported command: {command}")]
    UnsupportedCommand { command: String },

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Logger setup error
    #[error(transparent)]
    Logger(#[from] LoggerError),

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
