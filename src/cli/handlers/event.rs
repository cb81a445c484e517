//! Event command handler
//!
//! Builds the event message from command arguments and dispatches it to
//! every interested provider.

use crate::cli::parser::Commands;
use crate::error::{AppError, AppResult};
use crate::models::{DownloadMessage, GrabMessage, Movie};
use crate::services::notifications::{DispatchReport, NotificationService};

/// Handler for the grab, download and rename commands
pub struct EventCommandHandler {
    service: NotificationService,
}

impl EventCommandHandler {
    pub fn new(service: NotificationService) -> Self {
        Self { service }
    }

    /// Dispatch the event described by `command`
    ///
    /// # Errors
    /// Returns `AppError::UnsupportedCommand` for non-event commands, or
    /// `AppError::Delivery` when every interested provider failed
    pub async fn execute(&self, command: &Commands) -> AppResult<()> {
        let (event, report) = match command {
            Commands::Grab { title, message } => {
                let message = GrabMessage {
                    message: message.clone(),
                    movie: Movie::new(title.as_str()),
                };
                ("grab", self.service.on_grab(&message).await)
            }
            Commands::Download {
                title,
                message,
                upgrade,
            } => {
                let message = DownloadMessage {
                    message: message.clone(),
                    movie: Movie::new(title.as_str()),
                    is_upgrade: *upgrade,
                };
                ("download", self.service.on_download(&message).await)
            }
            Commands::Rename { title } => {
                let movie = Movie::new(title.as_str());
                ("rename", self.service.on_movie_rename(&movie).await)
            }
            other => {
                return Err(AppError::UnsupportedCommand {
                    command: format!("{:?}", other),
                });
            }
        };

        println!(
            "Sent {} notification to {} provider(s), {} failed",
            event, report.delivered, report.failed
        );

        Self::check(report)
    }

    fn check(report: DispatchReport) -> AppResult<()> {
        if report.delivered == 0 && report.failed > 0 {
            return Err(AppError::Delivery {
                attempted: report.failed,
                failed: report.failed,
            });
        }
        Ok(())
    }
}
