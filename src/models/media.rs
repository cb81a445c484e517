//! Media items and the event messages that reference them.

use serde::{Deserialize, Serialize};

/// A movie in the library
///
/// Only the title is consumed by notification providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
}

impl Movie {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Sent when a release has been grabbed for a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrabMessage {
    /// Human-readable description of the grab
    pub message: String,
    pub movie: Movie,
}

/// Sent when a movie file has been imported into the library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadMessage {
    /// Human-readable description of the import
    pub message: String,
    pub movie: Movie,
    /// True when the import replaced an existing file
    #[serde(default)]
    pub is_upgrade: bool,
}
