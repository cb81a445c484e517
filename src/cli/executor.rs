//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::{EventCommandHandler, ListCommandHandler, TestCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::Settings;
use crate::error::AppResult;
use crate::services::notifications::NotificationService;

/// Execute a CLI command with the given settings
///
/// Builds the notification providers from `settings.notifications`, then
/// dispatches to the handler for the parsed command.
///
/// # Errors
/// Returns errors from provider construction or from the command handler
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    let service =
        NotificationService::from_definitions(&settings.notifications, &settings.application.name)?;

    tracing::debug!(
        providers = service.providers().len(),
        command = ?cli.command,
        "Executing command"
    );

    match &cli.command {
        Commands::List => ListCommandHandler::new(service).execute(),
        Commands::Test => TestCommandHandler::new(service).execute().await,
        command @ (Commands::Grab { .. } | Commands::Download { .. } | Commands::Rename { .. }) => {
            EventCommandHandler::new(service).execute(command).await
        }
    }
}
