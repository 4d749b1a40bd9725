//! Error types for the bibv application.
//!
//! Hierarchical error taxonomy using `thiserror`, composing via `?` and
//! `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`ArchiveError`] - Bundled-dataset loading failures (fatal at startup)
//!   - [`SearchError`] - Remote search index failures (non-fatal; the
//!     previous page stays visible)
//!   - `std::io::Error` - Terminal/TUI failures
//!
//! # Recovery Strategy
//!
//! Archive errors are fatal: without a dataset the static flow cannot
//! proceed, so they propagate out of `main` as a load failure. Search
//! errors are non-fatal: the core keeps the previous results visible and
//! surfaces the failure on the status line. Missing or malformed record
//! fields are not errors at all; they render as empty/omitted (see
//! `model::record`).

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load the bundled dataset archive. Fatal at startup.
    #[error("Failed to load archive: {0}")]
    Archive(#[from] ArchiveError),

    /// Remote search index failure. Non-fatal during browsing; fatal only
    /// if the client cannot be constructed at startup.
    #[error("Search failed: {0}")]
    Search(#[from] SearchError),

    /// Data source selection failure (no source, or two sources given).
    #[error("{0}")]
    Source(#[from] crate::source::SourceError),

    /// Configuration loading or resolution failure.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging initialization failure.
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal, thread, or other I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered while loading the bundled dataset archive.
///
/// All of these are fatal for the static flow: the application cannot
/// render anything without a dataset.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The archive path does not exist.
    #[error("Archive not found: {path}")]
    NotFound {
        /// The filesystem path that was attempted.
        path: PathBuf,
    },

    /// I/O failure reading the archive bytes.
    #[error("IO error reading archive: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes are not a valid zip archive.
    #[error("Invalid zip archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The archive contains no `.json` member to parse.
    #[error("No JSON file found in the archive")]
    NoJsonEntry,

    /// The JSON member is not a valid record array.
    #[error("Failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors encountered talking to the remote search index.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The index base URL does not parse.
    #[error("Invalid search index URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport-level failure (connect, send, or response decode).
    #[error("Search request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The index answered with a non-success HTTP status.
    #[error("Search index returned status {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },

    /// The search worker thread is gone.
    #[error("Search worker disconnected")]
    WorkerGone,
}
