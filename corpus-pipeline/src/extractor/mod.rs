//! This module defines the `DocumentExtractor`, which pulls the full document
//! row set from the source instance for transfer.
use std::sync::Arc;

use corpus_repository::DocumentsRepository;
use corpus_shared::types::DocumentRow;
use tracing::warn;

/// `DocumentExtractor` reads every row of the source documents table.
///
/// An empty table and a failed extraction both yield an empty set; the
/// failure is surfaced as a warning rather than an error, and the transfer
/// proceeds with nothing to apply.
pub struct DocumentExtractor {
    repository: Arc<dyn DocumentsRepository>,
}

impl DocumentExtractor {
    /// Creates a new `DocumentExtractor` over the source instance's
    /// repository.
    pub fn new(repository: Arc<dyn DocumentsRepository>) -> Self {
        Self { repository }
    }

    /// Extract all rows, in table order, columns fixed as
    /// (id, company_id, title, content).
    pub async fn extract(&self) -> Vec<DocumentRow> {
        match self.repository.fetch_all().await {
            Ok(rows) => rows,
            Err(err) => {
                warn!(error = %err, "failed to extract documents from source, continuing with an empty set");
                Vec::new()
            }
        }
    }
}
