//! CLI module for media-notify
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Configuration loading driven by CLI flags
//! - Command handlers for listing, testing and event dispatch

pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use executor::execute_command;
pub use parser::{Cli, Commands, Environment};

use crate::config::{ConfigLoader, Settings};
use crate::error::AppResult;
use crate::logger::LoggerConfig;

/// Load configuration according to CLI arguments
///
/// `--config` selects a single file; otherwise the layered directory from
/// `MEDIA_NOTIFY_CONFIG_DIR`/`MEDIA_NOTIFY_CONFIG_FILE` is used. `--env`
/// overrides `MEDIA_NOTIFY_APP_ENV`.
///
/// # Errors
/// Returns error if configuration loading or validation fails
pub fn load_settings(cli: &Cli) -> AppResult<Settings> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::from_file(path),
        None => ConfigLoader::new()?,
    };

    let loader = match cli.env {
        Some(env) => loader.with_environment(env.into()),
        None => loader,
    };

    Ok(loader.load()?)
}

/// Build the logger configuration, applying --verbose/--quiet
///
/// # Errors
/// Returns error if the logger section of the settings is invalid
pub fn logger_config(cli: &Cli, settings: &Settings) -> AppResult<LoggerConfig> {
    let config = settings.logger.clone().into_logger_config()?;

    match cli.log_level_override() {
        Some(level) => Ok(config.with_level(level)?),
        None => Ok(config),
    }
}
