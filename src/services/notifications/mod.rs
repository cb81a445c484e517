//! Notification system with pluggable providers.
//!
//! This module provides the notification system abstraction and implementations.
//! The core trait `NotificationProvider` allows for easy extension to support
//! different chat channels; Slack is the one implemented today.

mod error;
mod provider;

pub mod notification_service;
pub mod slack;

pub use error::{NotificationError, NotificationResult};
pub use notification_service::{DispatchReport, NotificationService, ProviderInfo};
pub use provider::NotificationProvider;
pub use slack::Slack;
