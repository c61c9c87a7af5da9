//! Tracing setup.
//!
//! The TUI owns stdout, so events go to `ledgerlens.log` in the user's data
//! directory unless `--log-stderr` is given. `LEDGERLENS_LOG` takes the usual
//! `EnvFilter` directives and defaults to `info`.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

use crate::state::config::APP_NAME;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "LEDGERLENS_LOG";

/// Where log events are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to the log file in the data directory.
    File,
    /// Write to stderr, for one-shot subcommands and debugging.
    Stderr,
}

/// Path of the log file, if the platform has a data directory.
#[must_use]
pub fn log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_NAME).join(format!("{APP_NAME}.log")))
}

/// Builds the filter from `LEDGERLENS_LOG`, falling back to `info`.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Opens `path` for appending, creating its directory first.
///
/// # Errors
///
/// Returns an error if the directory or the file cannot be created.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("creating log directory {}", dir.display()))?;
    }
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("opening log file {}", path.display()))
}

/// Installs the global subscriber.
///
/// An unusable log file never stops the application: a warning goes to
/// stderr before the terminal is taken over and events are dropped.
pub fn init(target: LogTarget) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true);

    if target == LogTarget::Stderr {
        builder.with_writer(std::io::stderr).init();
        return;
    }

    // Without a data directory the TUI stays silent rather than drawing
    // log lines over the screen.
    match log_path().map(|path| open_log_file(&path)) {
        Some(Ok(file)) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        Some(Err(e)) => {
            eprintln!("warning: logging disabled: {e:#}");
            builder.with_writer(std::io::sink).init();
        }
        None => builder.with_writer(std::io::sink).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_is_under_app_dir() {
        if let Some(path) = log_path() {
            assert!(path.ends_with("ledgerlens/ledgerlens.log"));
        }
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let dir = std::env::temp_dir().join(format!("ledgerlens-log-{}", uuid::Uuid::new_v4()));
        let path = dir.join("nested").join("ledgerlens.log");

        assert!(open_log_file(&path).is_ok());
        assert!(path.is_file());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_open_log_file_under_a_file_fails() {
        let blocker = std::env::temp_dir().join(format!("ledgerlens-log-{}", uuid::Uuid::new_v4()));
        fs::write(&blocker, "not a directory").unwrap();

        let path = blocker.join("logs").join("ledgerlens.log");
        let err = open_log_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("creating log directory"));
        fs::remove_file(&blocker).unwrap();
    }
}
