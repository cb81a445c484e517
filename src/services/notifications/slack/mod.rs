//! Slack incoming-webhook provider.

mod payloads;
mod provider;
mod proxy;
mod settings;

pub use payloads::{Attachment, AttachmentColor, SlackPayload};
pub use provider::Slack;
pub use proxy::{HttpSlackProxy, SlackProxy};
pub use settings::SlackSettings;
