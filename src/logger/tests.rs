//! Tests for the logger module

use crate::logger::config::*;
use crate::logger::writer::open_log_file;
use crate::logger::{LoggerError, build_layers};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn console_only() -> LoggerConfig {
    LoggerConfig {
        console: ConsoleConfig::new(true, false),
        file: FileConfig::default(),
        level: "info".to_string(),
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert!(config.console.enabled);
        assert!(config.console.colored);
        assert!(!config.file.enabled);
        assert_eq!(config.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_no_outputs_is_invalid() {
        let mut config = console_only();
        config.console.enabled = false;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_level() {
        let config = console_only().with_level("debug").unwrap();
        assert_eq!(config.parse_level().unwrap(), tracing::Level::DEBUG);

        assert!(console_only().with_level("chatty").is_err());
    }

    #[test]
    fn test_enabled_file_requires_path() {
        assert!(FileConfig::new(true, PathBuf::new(), true, LogFormat::Json).is_err());
        assert!(FileConfig::new(false, PathBuf::new(), true, LogFormat::Json).is_ok());
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::default(), LogFormat::Full);
    }
}

#[cfg(test)]
mod writer_tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/logs/app.log");
        let config = FileConfig::new(true, path.clone(), true, LogFormat::Json).unwrap();

        let writer = open_log_file(&config).unwrap();
        writer.lock().unwrap().write_all(b"line\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "line\n");
    }

    #[test]
    fn test_open_log_file_append_vs_truncate() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "old\n").unwrap();

        let append = FileConfig::new(true, path.clone(), true, LogFormat::Full).unwrap();
        open_log_file(&append)
            .unwrap()
            .lock()
            .unwrap()
            .write_all(b"new\n")
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old\nnew\n");

        let truncate = FileConfig::new(true, path.clone(), false, LogFormat::Full).unwrap();
        open_log_file(&truncate).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_build_layers_counts_outputs() {
        let dir = TempDir::new().unwrap();
        let mut config = console_only();
        assert_eq!(build_layers(&config).unwrap().len(), 1);

        config.file = FileConfig::new(true, dir.path().join("app.log"), true, LogFormat::Compact)
            .unwrap();
        assert_eq!(build_layers(&config).unwrap().len(), 2);

        config.console.enabled = false;
        config.file.enabled = false;
        assert!(matches!(
            build_layers(&config),
            Err(LoggerError::Config { .. })
        ));
    }
}
