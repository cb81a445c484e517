//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required configuration file is missing
    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The merged sources could not be deserialized into `Settings`
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// A setting has an unacceptable value
    #[error("Validation error: {field} - {message}")]
    ValidationError { field: String, message: String },

    /// `MEDIA_NOTIFY_APP_ENV` (or `--env`) names an unknown environment
    #[error("Unknown environment '{0}'. Valid values are: development, test, staging, production")]
    UnknownEnvironment(String),

    /// Two configuration sources that cannot be combined were both set
    #[error("Conflicting configuration sources: {0}")]
    Conflict(String),

    /// Error reported by the `config` crate while reading sources
    #[error("Configuration source error: {0}")]
    Source(#[from] config::ConfigError),
}

impl ConfigError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        ConfigError::FileNotFound(path.into())
    }
}
