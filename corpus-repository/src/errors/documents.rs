//! Error types for the documents repository.
//! Defines specific errors that can occur during database operations on the
//! documents table.
use thiserror::Error;

/// Represents errors that can occur within the documents repository.
///
/// Uniqueness violations get their own variant because the transfer engine
/// treats them as row-scoped and recoverable, unlike every other database
/// failure.
#[derive(Debug, Error)]
pub enum DocumentsRepositoryError {
    #[error("unique constraint violation for title '{title}'")]
    UniqueViolation { title: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
