mod media;
mod notification;
mod validation;

pub use media::{DownloadMessage, GrabMessage, Movie};
pub use notification::{ChannelType, NotificationDefinition};
pub use validation::{ValidationFailure, ValidationResult};
