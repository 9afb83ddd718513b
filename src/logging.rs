//! File logging setup
//!
//! The TUI owns the terminal, so tracing output goes to a log file in the
//! user's cache directory instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "EARTHSENTINEL_LOG";

/// Filter used when the environment variable is unset or invalid
pub const DEFAULT_FILTER: &str = "earthsentinel=info";

const LOG_FILE_NAME: &str = "earthsentinel.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file: {0}")]
    Io(#[from] io::Error),

    #[error("A global logger is already installed: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Directory the log file lives in, if the platform has a cache dir
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "earthsentinel").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Opens (creating if needed) the log file inside `dir` for appending
pub fn open_log_file(dir: &Path) -> Result<(File, PathBuf), LoggingError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// Builds the filter from `EARTHSENTINEL_LOG`, falling back to the default
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber writing to `<dir>/earthsentinel.log`
///
/// # Returns
/// * `Ok(Some(path))` with the log file path
/// * `Ok(None)` if no directory is available, leaving logging disabled
pub fn init(dir: Option<&Path>) -> Result<Option<PathBuf>, LoggingError> {
    let Some(dir) = dir else {
        return Ok(None);
    };
    let (file, path) = open_log_file(dir)?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(Some(path))
}
