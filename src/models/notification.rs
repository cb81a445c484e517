//! Notification definition models.
//!
//! A definition is one configured notification provider: which channel it
//! talks to, which events it cares about, and its provider-specific settings.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// ============================================================================
// Enums
// ============================================================================

/// Channel type for notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    Slack,
}

impl ChannelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::Slack => "slack",
        }
    }
}

impl std::fmt::Display for ChannelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// NotificationDefinition
// ============================================================================

fn default_true() -> bool {
    true
}

fn default_config() -> JsonValue {
    JsonValue::Object(Default::default())
}

/// A configured notification provider instance
///
/// Loaded from the `[[notifications]]` array of the configuration file.
/// The `config` table is kept as raw JSON and parsed into typed settings
/// by the provider factory, the same way for every channel type.
///
/// # Example
/// ```toml
/// [[notifications]]
/// name = "movies"
/// channel_type = "slack"
/// on_rename = false
///
/// [notifications.config]
/// web_hook_url = "https://hooks.slack.com/services/T000/B000/XXXX"
/// username = "radarr"
/// icon = ":movie_camera:"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationDefinition {
    /// Display name of this definition
    pub name: String,
    /// Which provider implementation to use
    pub channel_type: ChannelType,
    #[serde(default = "default_true")]
    pub on_grab: bool,
    #[serde(default = "default_true")]
    pub on_download: bool,
    #[serde(default = "default_true")]
    pub on_upgrade: bool,
    #[serde(default = "default_true")]
    pub on_rename: bool,
    /// Provider-specific settings
    #[serde(default = "default_config")]
    pub config: JsonValue,
}

impl NotificationDefinition {
    /// Whether a download event should be delivered through this definition
    ///
    /// Upgrades are governed by `on_upgrade`, first imports by `on_download`.
    pub fn wants_download(&self, is_upgrade: bool) -> bool {
        if is_upgrade {
            self.on_upgrade
        } else {
            self.on_download
        }
    }
}
