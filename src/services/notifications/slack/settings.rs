use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use validator::Validate;

/// Slack-specific configuration
///
/// Parsed from the `config` table of a notification definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SlackSettings {
    /// Incoming webhook URL
    #[validate(url(message = "Webhook URL must be a valid URL"))]
    pub web_hook_url: String,

    /// Name the message is posted as
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    /// Either an emoji token (`:ghost:`) or an image URL
    #[serde(default)]
    pub icon: Option<String>,
}

impl SlackSettings {
    /// Parse JSON config into typed SlackSettings
    ///
    /// # Example
    /// ```ignore
    /// let settings = SlackSettings::from_json(&definition.config)?;
    /// ```
    pub fn from_json(config: &JsonValue) -> Result<Self, serde_json::Error> {
        serde_json::from_value(config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_settings() -> SlackSettings {
        SlackSettings {
            web_hook_url: "https://hooks.slack.com/services/T000/B000/XXXX".to_string(),
            username: "radarr".to_string(),
            icon: None,
        }
    }

    #[test]
    fn test_valid_settings() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let settings = SlackSettings {
            web_hook_url: "not-a-url".to_string(),
            ..valid_settings()
        };

        let errors = settings.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("web_hook_url"));
    }

    #[test]
    fn test_empty_username() {
        let settings = SlackSettings {
            username: String::new(),
            ..valid_settings()
        };

        let errors = settings.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
    }

    #[test]
    fn test_from_json_icon_optional() {
        let settings = SlackSettings::from_json(&json!({
            "web_hook_url": "https://hooks.slack.com/services/T000/B000/XXXX",
            "username": "radarr",
        }))
        .unwrap();

        assert_eq!(settings.icon, None);
    }

    #[test]
    fn test_from_json_missing_url() {
        let result = SlackSettings::from_json(&json!({ "username": "radarr" }));
        assert!(result.is_err());
    }
}
