//! Configuration validation logic
//!
//! This module provides validation methods for all configuration structures
//! to ensure configuration values are within acceptable ranges and formats.

use std::collections::HashSet;

use crate::config::error::ConfigError;
use crate::config::settings::{FileSettings, LoggerSettings, Settings};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl FileSettings {
    /// Validate file settings
    fn validate(&self) -> Result<(), ConfigError> {
        // If file logging is enabled, path must not be empty
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - If file logging is enabled, path must not be empty
    /// - Log format must be one of: full, compact, json
    /// - At least one output must be enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        self.file.validate()?;

        Ok(())
    }
}

impl Settings {
    /// Validate all configuration settings
    ///
    /// Provider-specific settings are checked when providers are built;
    /// here only the shape shared by every definition is validated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.application.name.trim().is_empty() {
            return Err(ConfigError::validation(
                "application.name",
                "Application name must not be empty.",
            ));
        }

        self.logger.validate()?;
        self.validate_notifications()?;
        Ok(())
    }

    /// Definition names must be non-empty and unique
    fn validate_notifications(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();

        for definition in &self.notifications {
            if definition.name.trim().is_empty() {
                return Err(ConfigError::validation(
                    "notifications.name",
                    "Notification name must not be empty.",
                ));
            }

            if !seen.insert(definition.name.as_str()) {
                return Err(ConfigError::ValidationError {
                    field: "notifications.name".to_string(),
                    message: format!("Duplicate notification name '{}'.", definition.name),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationDefinition;
    use serde_json::json;

    fn definition(name: &str) -> NotificationDefinition {
        serde_json::from_value(json!({ "name": name, "channel_type": "slack" })).unwrap()
    }

    // ========================================================================
    // LoggerSettings validation tests
    // ========================================================================

    #[test]
    fn test_logger_settings_valid() {
        assert!(LoggerSettings::default().validate().is_ok());
    }

    #[test]
    fn test_logger_settings_level_case_insensitive() {
        let mut settings = LoggerSettings::default();
        settings.level = "DEBUG".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_logger_settings_invalid_level() {
        let mut settings = LoggerSettings::default();
        settings.level = "verbose".to_string();

        match settings.validate() {
            Err(ConfigError::ValidationError { field, message }) => {
                assert_eq!(field, "logger.level");
                assert!(message.contains("verbose"));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_logger_settings_no_outputs() {
        let mut settings = LoggerSettings::default();
        settings.console.enabled = false;
        settings.file.enabled = false;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_file_settings_empty_path() {
        let mut settings = LoggerSettings::default();
        settings.file.enabled = true;
        settings.file.path = "  ".to_string();

        match settings.validate() {
            Err(ConfigError::ValidationError { field, .. }) => {
                assert_eq!(field, "logger.file.path");
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_file_settings_invalid_format() {
        let mut settings = LoggerSettings::default();
        settings.file.format = "xml".to_string();
        assert!(settings.validate().is_err());
    }

    // ========================================================================
    // Settings validation tests
    // ========================================================================

    #[test]
    fn test_settings_default_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_settings_empty_application_name() {
        let mut settings = Settings::default();
        settings.application.name = String::new();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_duplicate_notification_names() {
        let mut settings = Settings::default();
        settings.notifications = vec![definition("movies"), definition("movies")];

        match settings.validate() {
            Err(ConfigError::ValidationError { field, message }) => {
                assert_eq!(field, "notifications.name");
                assert!(message.contains("movies"));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_settings_blank_notification_name() {
        let mut settings = Settings::default();
        settings.notifications = vec![definition(" ")];
        assert!(settings.validate().is_err());
    }
}
