//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use super::validation::{validate_config_file_path, validate_title};
use crate::build;

/// Send media library notifications to chat webhooks
#[derive(Parser, Debug)]
#[command(name = "media-notify")]
#[command(about = "Send media library notifications to chat webhooks")]
#[command(long_about = "
media-notify formats media library events (grabs, imports, renames) and posts
them to every configured notification provider, such as a Slack incoming
webhook.

EXAMPLES:
    # List configured providers
    media-notify list

    # Send a test message through every provider
    media-notify test

    # Announce a grab
    media-notify grab --title \"Heat\" --message \"Heat (1995) [Bluray-1080p]\"

    # Announce an upgrade import using a specific configuration file
    media-notify --config /etc/media-notify.toml download --title \"Heat\" \\
        --message \"Heat (1995) [Remux-2160p]\" --upgrade
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    ///
    /// Load only this TOML file instead of the layered `config/` directory.
    /// `MEDIA_NOTIFY_*` environment variables still apply on top.
    #[arg(short, long, value_name = "FILE", value_parser = validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `config/{environment}.toml` is layered over the defaults.
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Raises the log level to debug. Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Lowers the log level to error. Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List configured notification providers
    List,

    /// Send a test message through every configured provider
    ///
    /// Exits non-zero when any provider fails.
    Test,

    /// Announce that a release was grabbed
    Grab {
        /// Movie title
        #[arg(long, value_parser = validate_title)]
        title: String,

        /// Human-readable description of the grab
        #[arg(long)]
        message: String,
    },

    /// Announce that a file was imported
    Download {
        /// Movie title
        #[arg(long, value_parser = validate_title)]
        title: String,

        /// Human-readable description of the import
        #[arg(long)]
        message: String,

        /// The import replaced an existing file
        #[arg(long)]
        upgrade: bool,
    },

    /// Announce that a movie's files were renamed
    Rename {
        /// Movie title
        #[arg(long, value_parser = validate_title)]
        title: String,
    },
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

impl Cli {
    /// Log level implied by --verbose/--quiet, if any
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["media-notify", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["media-notify"]).is_err());
    }

    #[test]
    fn test_grab_command() {
        let cli = Cli::try_parse_from([
            "media-notify",
            "grab",
            "--title",
            "Heat",
            "--message",
            "Heat (1995) [Bluray-1080p]",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Commands::Grab {
                title: "Heat".to_string(),
                message: "Heat (1995) [Bluray-1080p]".to_string(),
            }
        );
    }

    #[test]
    fn test_download_upgrade_flag() {
        let cli = Cli::try_parse_from([
            "media-notify",
            "download",
            "--title",
            "Heat",
            "--message",
            "m",
            "--upgrade",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::Download { upgrade: true, .. }));
    }

    #[test]
    fn test_blank_title_rejected() {
        let err = Cli::try_parse_from(["media-notify", "rename", "--title", "  "]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_missing_config_file_rejected() {
        let result = Cli::try_parse_from([
            "media-notify",
            "--config",
            "/nonexistent/media-notify.toml",
            "list",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let cli = Cli::try_parse_from([
            "media-notify",
            "--config",
            file.path().to_str().unwrap(),
            "--env",
            "prod",
            "--verbose",
            "test",
        ])
        .unwrap();

        assert_eq!(cli.config.as_deref(), Some(file.path()));
        assert_eq!(cli.env, Some(Environment::Production));
        assert_eq!(cli.log_level_override(), Some("debug"));
        assert_eq!(cli.command, Commands::Test);
    }

    #[test]
    fn test_conflicting_verbose_quiet() {
        let err = Cli::try_parse_from(["media-notify", "--verbose", "--quiet", "list"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
