//! Notification service for event dispatch.
//!
//! Holds the configured providers and fans each event out to every
//! definition that has the matching toggle enabled. A failing provider is
//! logged and skipped so the remaining providers still get notified.

use super::error::NotificationResult;
use super::provider::NotificationProvider;
use super::slack::{Slack, SlackSettings};
use crate::error::{AppError, AppResult};
use crate::models::{
    ChannelType, DownloadMessage, GrabMessage, Movie, NotificationDefinition, ValidationResult,
};
use std::future::Future;
use std::sync::Arc;

/// Outcome of delivering one event to all interested providers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub delivered: usize,
    pub failed: usize,
}

impl DispatchReport {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Registry entry describing a configured provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    /// Definition name from configuration
    pub name: String,
    /// Provider display name
    pub implementation: &'static str,
    /// Provider help link
    pub link: &'static str,
}

struct ConfiguredProvider {
    definition: NotificationDefinition,
    provider: Arc<dyn NotificationProvider>,
}

/// Notification service handling provider lookup and event dispatch
#[derive(Clone)]
pub struct NotificationService {
    providers: Arc<Vec<ConfiguredProvider>>,
}

impl NotificationService {
    /// Creates a service from already-built providers
    pub fn new(providers: Vec<(NotificationDefinition, Arc<dyn NotificationProvider>)>) -> Self {
        let providers = providers
            .into_iter()
            .map(|(definition, provider)| ConfiguredProvider {
                definition,
                provider,
            })
            .collect();

        Self {
            providers: Arc::new(providers),
        }
    }

    /// Builds providers from configured definitions
    ///
    /// # Arguments
    /// * `definitions` - The `[[notifications]]` entries from configuration
    /// * `product_name` - Application name used in test messages
    ///
    /// # Returns
    /// The service, or a validation error for the first unusable definition
    pub fn from_definitions(
        definitions: &[NotificationDefinition],
        product_name: &str,
    ) -> AppResult<Self> {
        let providers = definitions
            .iter()
            .map(|definition| {
                let provider = Self::create_provider(definition, product_name)?;
                Ok((definition.clone(), provider))
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self::new(providers))
    }

    /// Lists configured providers for display
    pub fn providers(&self) -> Vec<ProviderInfo> {
        self.providers
            .iter()
            .map(|entry| ProviderInfo {
                name: entry.definition.name.clone(),
                implementation: entry.provider.name(),
                link: entry.provider.link(),
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    // ========================================================================
    // Event Dispatch
    // ========================================================================

    /// Notifies every provider with `on_grab` enabled
    pub async fn on_grab(&self, message: &GrabMessage) -> DispatchReport {
        self.dispatch(
            "grab",
            |definition| definition.on_grab,
            |provider| provider.on_grab(message),
        )
        .await
    }

    /// Notifies every provider with `on_download` (or `on_upgrade`) enabled
    pub async fn on_download(&self, message: &DownloadMessage) -> DispatchReport {
        self.dispatch(
            "download",
            |definition| definition.wants_download(message.is_upgrade),
            |provider| provider.on_download(message),
        )
        .await
    }

    /// Notifies every provider with `on_rename` enabled
    pub async fn on_movie_rename(&self, movie: &Movie) -> DispatchReport {
        self.dispatch(
            "rename",
            |definition| definition.on_rename,
            |provider| provider.on_movie_rename(movie),
        )
        .await
    }

    /// Tests every configured provider
    ///
    /// Settings are validated first; the test message is only sent when the
    /// settings are valid.
    ///
    /// # Returns
    /// Definition name paired with its validation result, in configuration order
    pub async fn test_all(&self) -> Vec<(String, ValidationResult)> {
        let mut results = Vec::with_capacity(self.providers.len());

        for entry in self.providers.iter() {
            let settings_result = entry.provider.validate_settings();
            let result = if settings_result.is_valid() {
                entry.provider.test().await
            } else {
                settings_result
            };

            if result.is_valid() {
                tracing::info!(notification = %entry.definition.name, "Test notification sent");
            } else {
                tracing::warn!(
                    notification = %entry.definition.name,
                    failures = result.failures().len(),
                    "Test notification failed"
                );
            }

            results.push((entry.definition.name.clone(), result));
        }

        results
    }

    // ========================================================================
    // Private Helpers
    // ========================================================================

    async fn dispatch<'a, W, F, Fut>(&'a self, event: &'static str, wants: W, send: F) -> DispatchReport
    where
        W: Fn(&NotificationDefinition) -> bool,
        F: Fn(&'a dyn NotificationProvider) -> Fut,
        Fut: Future<Output = NotificationResult<()>>,
    {
        let mut report = DispatchReport::default();

        for entry in self.providers.iter().filter(|entry| wants(&entry.definition)) {
            match send(entry.provider.as_ref()).await {
                Ok(()) => {
                    tracing::debug!(
                        event,
                        notification = %entry.definition.name,
                        provider = entry.provider.name(),
                        "Notification sent"
                    );
                    report.delivered += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        event,
                        notification = %entry.definition.name,
                        provider = entry.provider.name(),
                        error = %e,
                        "Unable to send notification"
                    );
                    report.failed += 1;
                }
            }
        }

        report
    }

    /// Creates a provider instance from a definition
    ///
    /// Factory method pattern - returns Arc<dyn NotificationProvider> for
    /// dynamic dispatch.
    fn create_provider(
        definition: &NotificationDefinition,
        product_name: &str,
    ) -> AppResult<Arc<dyn NotificationProvider>> {
        match definition.channel_type {
            ChannelType::Slack => {
                let settings = SlackSettings::from_json(&definition.config).map_err(|e| {
                    AppError::Validation {
                        field: format!("notifications.{}.config", definition.name),
                        reason: format!("Invalid slack config: {}", e),
                    }
                })?;
                Ok(Arc::new(Slack::new(settings, product_name)))
            }
        }
    }
}
