//! Error types for fixture loading.
use std::path::PathBuf;

use thiserror::Error;

/// Represents errors that can occur while reading or applying a fixture file.
///
/// File-level failures are fatal to the invocation and carry the offending
/// path; they are propagated, never swallowed.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed fixture file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
