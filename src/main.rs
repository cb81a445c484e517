use clap::Parser;
use media_notify::cli::{self, Cli};
use media_notify::logger::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli::load_settings(&cli)?;
    init_logger(cli::logger_config(&cli, &settings)?)?;

    tracing::debug!(
        name = %settings.application.name,
        version = %settings.application.version,
        notifications = settings.notifications.len(),
        "Configuration loaded"
    );

    cli::execute_command(&cli, settings).await?;

    Ok(())
}
