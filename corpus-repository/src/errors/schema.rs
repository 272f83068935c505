//! Error types for schema provisioning.
use thiserror::Error;

/// Represents errors that can occur while creating databases or tables.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The database name is not a plain identifier. Identifiers cannot be
    /// bound server-side, so anything else is refused outright.
    #[error("invalid database name '{0}'")]
    InvalidDatabaseName(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
