//! Media-Notify Library
//!
//! Core library modules for posting media library events to chat webhooks.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod models;
pub mod services;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
