//! Error types for locale data loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading locale data.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a data file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A data file is not valid JSON or does not match the expected schema.
    #[error("failed to parse '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No data exists for the locale.
    #[error("no locale data for '{identifier}'")]
    NotFound { identifier: String },

    /// The identifier contains characters that cannot name a data file.
    #[error("invalid locale identifier '{identifier}'")]
    InvalidIdentifier { identifier: String },
}
