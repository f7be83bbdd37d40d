//! Tracing subscriber installation.
//!
//! `RUST_LOG` wins when set; otherwise the configured filter applies. CLI
//! commands log to stderr. The terminal board owns the screen, so it logs
//! to a file or nowhere.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter,
    filter::ParseError,
    fmt::{self, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directives do not parse.
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),
    /// The log file could not be opened.
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        /// File that was being opened.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error.
    Stderr,
    /// Appended to a file.
    File(PathBuf),
    /// Dropped.
    Discard,
}

impl LogTarget {
    /// File target when a path is configured, otherwise [`LogTarget::Discard`].
    #[must_use]
    pub fn file_or_discard(path: Option<&Path>) -> Self {
        path.map_or(Self::Discard, |file| Self::File(file.to_path_buf()))
    }

    fn make_writer(&self) -> Result<BoxMakeWriter, TelemetryError> {
        Ok(match self {
            Self::Stderr => BoxMakeWriter::new(io::stderr),
            Self::File(path) => BoxMakeWriter::new(Mutex::new(open_log_file(path)?)),
            Self::Discard => BoxMakeWriter::new(io::sink),
        })
    }
}

/// Builds the event filter: `RUST_LOG` when set and valid, else `fallback`.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when `fallback` is needed and
/// does not parse.
pub fn build_filter(fallback: &str) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(fallback)?),
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter is invalid, the log file
/// cannot be opened, or a subscriber is already installed.
pub fn init(fallback_filter: &str, target: &LogTarget) -> Result<(), TelemetryError> {
    let filter = build_filter(fallback_filter)?;
    let layer = fmt::layer()
        .with_target(true)
        .with_ansi(matches!(target, LogTarget::Stderr))
        .with_writer(target.make_writer()?);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()?;
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File, TelemetryError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| TelemetryError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}
