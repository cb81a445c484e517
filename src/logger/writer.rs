//! File writer for log output.

use std::fs::{File, OpenOptions};
use std::sync::Mutex;

use super::config::FileConfig;
use super::error::LoggerError;

/// Opens the configured log file, creating parent directories as needed
///
/// The returned `Mutex<File>` implements `MakeWriter`, so it can be handed
/// straight to a `fmt` layer.
pub(crate) fn open_log_file(config: &FileConfig) -> Result<Mutex<File>, LoggerError> {
    let open_error = |source| LoggerError::OpenFile {
        path: config.path.clone(),
        source,
    };

    if let Some(parent) = config.path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(open_error)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(config.append)
        .truncate(!config.append)
        .open(&config.path)
        .map_err(open_error)?;

    Ok(Mutex::new(file))
}
