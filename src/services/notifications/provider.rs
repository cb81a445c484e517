//! Core notification provider trait.
//!
//! This module provides the abstraction for notification providers,
//! allowing easy extension to support different chat channels.

use super::error::NotificationResult;
use crate::models::{DownloadMessage, GrabMessage, Movie, ValidationResult};
use async_trait::async_trait;

/// Trait for notification providers such as Slack
///
/// Uses `async_trait` to support async methods with dynamic dispatch.
/// All providers must be Send + Sync for use in async contexts.
///
/// Event handlers propagate delivery failures to the caller. `test` is the
/// exception: it folds failures into a `ValidationResult` so the settings
/// screen can show them inline.
///
/// # Example Implementation
/// ```ignore
/// use async_trait::async_trait;
///
/// pub struct Discord {
///     settings: DiscordSettings,
/// }
///
/// #[async_trait]
/// impl NotificationProvider for Discord {
///     fn name(&self) -> &'static str {
///         "Discord"
///     }
///
///     async fn on_grab(&self, message: &GrabMessage) -> NotificationResult<()> {
///         // Implementation here
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Display name shown in the provider registry
    fn name(&self) -> &'static str;

    /// Help link for configuring the provider
    fn link(&self) -> &'static str;

    /// A release was grabbed
    async fn on_grab(&self, message: &GrabMessage) -> NotificationResult<()>;

    /// A file was imported
    async fn on_download(&self, message: &DownloadMessage) -> NotificationResult<()>;

    /// A movie's files were renamed
    async fn on_movie_rename(&self, movie: &Movie) -> NotificationResult<()>;

    /// Sends a test notification
    ///
    /// # Returns
    /// Validation failures; empty when the test message was delivered
    async fn test(&self) -> ValidationResult;

    /// Validates provider settings (optional, default no-op)
    ///
    /// Override this method to check settings before saving.
    fn validate_settings(&self) -> ValidationResult {
        ValidationResult::default()
    }
}
