//! Slack notification provider implementation.
//!
//! Formats grab, import and rename events as Slack messages with a single
//! colored attachment and hands them to a [`SlackProxy`].

use super::payloads::{Attachment, AttachmentColor, SlackPayload};
use super::proxy::{HttpSlackProxy, SlackProxy};
use super::settings::SlackSettings;
use crate::models::{
    DownloadMessage, GrabMessage, Movie, ValidationFailure, ValidationResult,
};
use crate::services::notifications::error::NotificationResult;
use crate::services::notifications::provider::NotificationProvider;
use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

/// Slack notification provider
///
/// # Example
/// ```ignore
/// let settings = SlackSettings {
///     web_hook_url: "https://hooks.slack.com/services/T000/B000/XXXX".to_string(),
///     username: "radarr".to_string(),
///     icon: Some(":movie_camera:".to_string()),
/// };
/// let slack = Slack::new(settings, "media-notify");
/// slack.on_movie_rename(&movie).await?;
/// ```
#[derive(Clone)]
pub struct Slack {
    settings: SlackSettings,
    proxy: Arc<dyn SlackProxy>,
    product_name: String,
}

impl Slack {
    /// Creates a provider that posts over HTTP
    ///
    /// # Arguments
    /// * `settings` - Webhook URL, username and icon
    /// * `product_name` - Name used in the test message
    pub fn new(settings: SlackSettings, product_name: impl Into<String>) -> Self {
        Self::with_proxy(settings, product_name, Arc::new(HttpSlackProxy::new()))
    }

    /// Creates a provider with a custom transport
    pub fn with_proxy(
        settings: SlackSettings,
        product_name: impl Into<String>,
        proxy: Arc<dyn SlackProxy>,
    ) -> Self {
        Self {
            settings,
            proxy,
            product_name: product_name.into(),
        }
    }

    pub fn settings(&self) -> &SlackSettings {
        &self.settings
    }

    /// Sends the test message
    ///
    /// # Returns
    /// A failure labelled "Unable to post" when delivery failed
    pub async fn test_message(&self) -> Option<ValidationFailure> {
        let now = jiff::Zoned::now().strftime("%Y-%m-%d %H:%M:%S");
        let message = format!(
            "Test message from {} posted at {}",
            self.product_name, now
        );

        let payload = self.build_payload(message, None);

        match self.proxy.send_payload(&payload, &self.settings).await {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Slack test message failed");
                Some(ValidationFailure::new("Unable to post", e.to_string()))
            }
        }
    }

    /// Builds the payload common to every message
    ///
    /// An icon wrapped in colons (`:ghost:`) is sent as an emoji, anything
    /// else non-blank as an image URL.
    pub fn build_payload(
        &self,
        text: impl Into<String>,
        attachments: Option<Vec<Attachment>>,
    ) -> SlackPayload {
        let mut payload = SlackPayload {
            username: Some(self.settings.username.clone()),
            text: text.into(),
            attachments,
            ..Default::default()
        };

        if let Some(icon) = self
            .settings
            .icon
            .as_deref()
            .filter(|icon| !icon.trim().is_empty())
        {
            if icon.starts_with(':') && icon.ends_with(':') {
                payload.icon_emoji = Some(icon.to_string());
            } else {
                payload.icon_url = Some(icon.to_string());
            }
        }

        payload
    }

    fn event_attachment(message: &str, movie: &Movie, color: AttachmentColor) -> Attachment {
        Attachment {
            fallback: Some(message.to_string()),
            title: Some(movie.title.clone()),
            text: Some(message.to_string()),
            color: Some(color),
        }
    }

    async fn send(&self, payload: SlackPayload) -> NotificationResult<()> {
        tracing::debug!(text = %payload.text, "Sending Slack notification");
        self.proxy.send_payload(&payload, &self.settings).await
    }
}

#[async_trait]
impl NotificationProvider for Slack {
    fn name(&self) -> &'static str {
        "Slack"
    }

    fn link(&self) -> &'static str {
        "https://my.slack.com/services/new/incoming-webhook/"
    }

    async fn on_grab(&self, message: &GrabMessage) -> NotificationResult<()> {
        let attachments = vec![Self::event_attachment(
            &message.message,
            &message.movie,
            AttachmentColor::Warning,
        )];
        let payload =
            self.build_payload(format!("Grabbed: {}", message.message), Some(attachments));

        self.send(payload).await
    }

    async fn on_download(&self, message: &DownloadMessage) -> NotificationResult<()> {
        let attachments = vec![Self::event_attachment(
            &message.message,
            &message.movie,
            AttachmentColor::Good,
        )];
        let payload =
            self.build_payload(format!("Imported: {}", message.message), Some(attachments));

        self.send(payload).await
    }

    async fn on_movie_rename(&self, movie: &Movie) -> NotificationResult<()> {
        let attachments = vec![Attachment {
            title: Some(movie.title.clone()),
            ..Default::default()
        }];
        let payload = self.build_payload("Renamed", Some(attachments));

        self.send(payload).await
    }

    async fn test(&self) -> ValidationResult {
        let mut result = ValidationResult::default();
        result.push_if_some(self.test_message().await);
        result
    }

    fn validate_settings(&self) -> ValidationResult {
        match self.settings.validate() {
            Ok(()) => ValidationResult::default(),
            Err(errors) => errors.into(),
        }
    }
}
