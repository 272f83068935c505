//! This module defines the `TransferEngine`, which applies extracted rows to
//! the target instance with upsert semantics and per-row failure isolation.
use std::sync::Arc;

use corpus_repository::{DocumentsRepository, DocumentsRepositoryError};
use corpus_shared::types::DocumentRow;
use tracing::warn;

use crate::errors::TransferError;

/// Running totals of one apply pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferTally {
    /// Rows written to the target, whether net-new or overwritten in place.
    pub updated: u64,
    /// Rows dropped because their title collided with a different existing
    /// row.
    pub skipped: u64,
}

/// `TransferEngine` applies a row set to the target instance.
///
/// Each row's upsert is its own unit of work: a title collision is logged,
/// counted as skipped, and does not block the remaining rows; every other
/// failure aborts the run. Rows already applied stay applied; no batch
/// transaction wraps the run.
pub struct TransferEngine {
    repository: Arc<dyn DocumentsRepository>,
}

impl TransferEngine {
    /// Creates a new `TransferEngine` over the target instance's repository.
    pub fn new(repository: Arc<dyn DocumentsRepository>) -> Self {
        Self { repository }
    }

    /// Apply the rows in input order and return the tally.
    pub async fn apply(&self, rows: &[DocumentRow]) -> Result<TransferTally, TransferError> {
        let mut tally = TransferTally::default();

        for row in rows {
            match self.repository.upsert(row).await {
                Ok(()) => tally.updated += 1,
                Err(DocumentsRepositoryError::UniqueViolation { title }) => {
                    warn!(document_id = row.id, %title, "title collision, skipping row");
                    tally.skipped += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }

        Ok(tally)
    }
}
