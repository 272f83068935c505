//! This module defines the `DocumentsRepository` trait, which provides an
//! interface for interacting with one instance's documents table. The transfer
//! pipeline holds one implementation per instance (source and target).
use corpus_shared::types::DocumentRow;

use crate::errors::DocumentsRepositoryError;

/// A trait that defines the interface for one instance's documents table.
///
/// Implementors provide row counting, full-table extraction, and
/// insert-or-overwrite by primary key.
#[async_trait::async_trait]
pub trait DocumentsRepository: Send + Sync {
    /// Counts the rows of the documents table.
    async fn count(&self) -> Result<i64, DocumentsRepositoryError>;

    /// Fetches every row of the documents table, columns in fixed order
    /// (id, company_id, title, content). No filtering and no pagination; the
    /// full table is the unit of transfer.
    async fn fetch_all(&self) -> Result<Vec<DocumentRow>, DocumentsRepositoryError>;

    /// Inserts the row by primary key, overwriting every non-key column if a
    /// row with that id already exists (replace semantics, not a merge).
    ///
    /// # Returns
    ///
    /// `DocumentsRepositoryError::UniqueViolation` when the incoming title
    /// collides with a different existing row's title.
    async fn upsert(&self, row: &DocumentRow) -> Result<(), DocumentsRepositoryError>;
}
