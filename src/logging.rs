//! Diagnostic logging to a file, so the terminal UI stays clean.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Errors that can occur while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The configured filter directive does not parse.
    #[error("invalid log filter '{value}': {source}")]
    Filter {
        value: String,
        #[source]
        source: ParseError,
    },

    /// The log file or its directory could not be created.
    #[error("could not open log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A global subscriber was already installed.
    #[error("log subscriber already set: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Returns the platform log file path, if the platform has a local data dir.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("jobform").join("jobform.log"))
}

/// Builds the event filter: `RUST_LOG` wins, otherwise `directive`.
pub fn build_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(directive).map_err(|source| LoggingError::Filter {
            value: directive.to_string(),
            source,
        }),
    }
}

/// Opens `path` for appending, creating missing parent directories.
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    let io_err = |source| LoggingError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)
}

/// Installs a global `fmt` subscriber writing to `path`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(directive: &str, path: &Path) -> Result<(), LoggingError> {
    let filter = build_filter(directive)?;
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(LoggingError::Subscriber)
}
