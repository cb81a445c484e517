//! Configuration settings structures for media-notify
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};
use crate::models::NotificationDefinition;

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "media-notify".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/media-notify.log".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name, used as the product name in test messages
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    /// Whether file output is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Path to the log file
    #[serde(default = "default_log_path")]
    pub path: String,

    /// Whether to append to existing file
    #[serde(default = "default_true")]
    pub append: bool,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: default_true(),
            format: default_log_format(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,

    /// File output settings
    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings to LoggerConfig
    ///
    /// This method transforms the configuration file representation into
    /// the runtime LoggerConfig used by the logger module.
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let console_config = self.console.into_console_config();
        let file_config = self.file.into_file_config()?;

        LoggerConfig::new(console_config, file_config, self.level).map_err(|e| {
            ConfigError::ValidationError {
                field: "logger".to_string(),
                message: e.to_string(),
            }
        })
    }
}

impl ConsoleSettings {
    /// Convert ConsoleSettings to ConsoleConfig
    pub fn into_console_config(self) -> ConsoleConfig {
        ConsoleConfig::new(self.enabled, self.colored)
    }
}

impl FileSettings {
    /// Convert FileSettings to FileConfig
    pub fn into_file_config(self) -> Result<FileConfig, ConfigError> {
        let format = self.parse_format()?;

        FileConfig::new(self.enabled, PathBuf::from(self.path), self.append, format).map_err(
            |e| ConfigError::ValidationError {
                field: "logger.file".to_string(),
                message: e.to_string(),
            },
        )
    }

    /// Parse the format string into LogFormat enum
    fn parse_format(&self) -> Result<LogFormat, ConfigError> {
        self.format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: e.to_string(),
            })
    }
}

// ============================================================================
// Root Settings
// ============================================================================

/// Complete application settings
///
/// This structure represents the entire configuration that can be loaded
/// from TOML files and environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,

    /// Configured notification providers
    #[serde(default)]
    pub notifications: Vec<NotificationDefinition>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChannelType;
    use proptest::prelude::*;

    // ========================================================================
    // Arbitrary implementations for property-based testing
    // ========================================================================

    fn arb_application_config() -> impl Strategy<Value = ApplicationConfig> {
        (
            "[a-z][a-z0-9-]{0,20}",                 // name: valid app name
            "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}", // version: semver-like
        )
            .prop_map(|(name, version)| ApplicationConfig { name, version })
    }

    fn arb_logger_settings() -> impl Strategy<Value = LoggerSettings> {
        (
            prop_oneof![
                Just("trace".to_string()),
                Just("debug".to_string()),
                Just("info".to_string()),
                Just("warn".to_string()),
                Just("error".to_string()),
            ],
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
            "[a-z]{1,10}/[a-z]{1,10}\\.log",
            prop_oneof![
                Just("full".to_string()),
                Just("compact".to_string()),
                Just("json".to_string()),
            ],
        )
            .prop_map(|(level, console_enabled, colored, file_enabled, path, format)| {
                LoggerSettings {
                    level,
                    console: ConsoleSettings {
                        enabled: console_enabled,
                        colored,
                    },
                    file: FileSettings {
                        enabled: file_enabled,
                        path,
                        append: true,
                        format,
                    },
                }
            })
    }

    fn arb_definition() -> impl Strategy<Value = NotificationDefinition> {
        (
            "[a-z][a-z0-9-]{0,15}",
            any::<[bool; 4]>(),
            "[a-z]{1,10}",
            proptest::option::of(":[a-z_]{1,10}:"),
        )
            .prop_map(|(name, toggles, username, icon)| {
                let mut config = serde_json::Map::new();
                config.insert(
                    "web_hook_url".to_string(),
                    format!("https://hooks.slack.com/services/{}", name).into(),
                );
                config.insert("username".to_string(), username.into());
                if let Some(icon) = icon {
                    config.insert("icon".to_string(), icon.into());
                }

                NotificationDefinition {
                    name,
                    channel_type: ChannelType::Slack,
                    on_grab: toggles[0],
                    on_download: toggles[1],
                    on_upgrade: toggles[2],
                    on_rename: toggles[3],
                    config: config.into(),
                }
            })
    }

    fn arb_settings() -> impl Strategy<Value = Settings> {
        (
            arb_application_config(),
            arb_logger_settings(),
            proptest::collection::vec(arb_definition(), 0..3),
        )
            .prop_map(|(application, logger, notifications)| Settings {
                application,
                logger,
                notifications,
            })
    }

    proptest! {
        /// Serializing to TOML and back yields the same settings
        #[test]
        fn prop_settings_round_trip_serialization(settings in arb_settings()) {
            let toml_str = toml::to_string(&settings)
                .expect("Settings should serialize to TOML");

            let deserialized: Settings = toml::from_str(&toml_str)
                .expect("TOML should deserialize back to Settings");

            prop_assert_eq!(settings, deserialized);
        }
    }

    // ========================================================================
    // Unit tests
    // ========================================================================

    #[test]
    fn test_application_config_defaults() {
        let config = ApplicationConfig::default();
        assert_eq!(config.name, "media-notify");
        assert_eq!(config.version, crate::pkg_version());
    }

    #[test]
    fn test_logger_settings_defaults() {
        let settings = LoggerSettings::default();
        assert_eq!(settings.level, "info");
        assert!(settings.console.enabled);
        assert!(settings.console.colored);
        assert!(!settings.file.enabled);
        assert_eq!(settings.file.format, "json");
    }

    #[test]
    fn test_into_logger_config() {
        let config = LoggerSettings::default().into_logger_config().unwrap();
        assert_eq!(config.level, "info");
        assert_eq!(config.file.format, LogFormat::Json);
    }

    #[test]
    fn test_into_logger_config_invalid_format() {
        let mut settings = LoggerSettings::default();
        settings.file.format = "xml".to_string();

        match settings.into_logger_config() {
            Err(ConfigError::ValidationError { field, .. }) => {
                assert_eq!(field, "logger.file.format");
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_settings_from_toml_with_notifications() {
        let settings: Settings = toml::from_str(
            r#"
[application]
name = "radarr"

[[notifications]]
name = "movies"
channel_type = "slack"
on_rename = false

[notifications.config]
web_hook_url = "https://hooks.slack.com/services/T000/B000/XXXX"
username = "radarr"
icon = ":movie_camera:"
"#,
        )
        .unwrap();

        assert_eq!(settings.application.name, "radarr");
        assert_eq!(settings.logger, LoggerSettings::default());
        assert_eq!(settings.notifications.len(), 1);

        let definition = &settings.notifications[0];
        assert_eq!(definition.channel_type, ChannelType::Slack);
        assert!(definition.on_grab);
        assert!(!definition.on_rename);
        assert_eq!(definition.config["icon"], ":movie_camera:");
    }
}
