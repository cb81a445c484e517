//! Transport for Slack payloads.
//!
//! Sends the serialized payload to the webhook URL using the global
//! HTTP_CLIENT.

use super::payloads::SlackPayload;
use super::settings::SlackSettings;
use crate::external::client::HTTP_CLIENT;
use crate::services::notifications::error::{NotificationError, NotificationResult};
use async_trait::async_trait;
use std::time::Instant;

/// Delivers a payload to the webhook in `settings`
///
/// Any non-success outcome is an error; nothing is retried.
#[async_trait]
pub trait SlackProxy: Send + Sync {
    async fn send_payload(
        &self,
        payload: &SlackPayload,
        settings: &SlackSettings,
    ) -> NotificationResult<()>;
}

/// Posts payloads over HTTP
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSlackProxy;

impl HttpSlackProxy {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SlackProxy for HttpSlackProxy {
    async fn send_payload(
        &self,
        payload: &SlackPayload,
        settings: &SlackSettings,
    ) -> NotificationResult<()> {
        let start = Instant::now();

        let response = HTTP_CLIENT
            .post(&settings.web_hook_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Unable to post payload to Slack");
                NotificationError::Request(e)
            })?;

        let status = response.status();
        let duration_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                duration_ms,
                "Slack webhook rejected payload"
            );
            return Err(NotificationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(status = status.as_u16(), duration_ms, "Slack payload delivered");
        Ok(())
    }
}
