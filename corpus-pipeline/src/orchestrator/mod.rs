//! This module defines the `Orchestrator` responsible for coordinating one
//! transfer run: count, extract, apply, re-count, report.
use std::sync::Arc;

use corpus_repository::DocumentsRepository;
use corpus_shared::types::SyncReport;
use tracing::{info, warn};

use crate::errors::OrchestratorError;
use crate::extractor::DocumentExtractor;
use crate::transfer::TransferEngine;

/// `Orchestrator` coordinates the extraction and application of one transfer
/// run between the source and target instances.
pub struct Orchestrator {
    source: Arc<dyn DocumentsRepository>,
    target: Arc<dyn DocumentsRepository>,
    extractor: DocumentExtractor,
    engine: TransferEngine,
}

impl Orchestrator {
    /// Creates a new `Orchestrator` instance.
    ///
    /// # Arguments
    ///
    /// * `source` - Repository over the source (DEV) instance
    /// * `target` - Repository over the target (PROD) instance
    /// * `extractor` - Extractor bound to the source repository
    /// * `engine` - Engine bound to the target repository
    pub fn new(
        source: Arc<dyn DocumentsRepository>,
        target: Arc<dyn DocumentsRepository>,
        extractor: DocumentExtractor,
        engine: TransferEngine,
    ) -> Self {
        Self {
            source,
            target,
            extractor,
            engine,
        }
    }

    /// Runs one transfer and returns its report.
    ///
    /// The before/after counts are observability only; they never influence
    /// which rows are applied. If the apply step aborts, the target is still
    /// re-counted best-effort before the error propagates.
    pub async fn run(&self) -> Result<SyncReport, OrchestratorError> {
        let source_count = self.source.count().await?;
        info!(source_count, "records in source documents table");

        let target_before = self.target.count().await?;
        info!(target_before, "records in target documents table before transfer");

        let rows = self.extractor.extract().await;
        info!(extracted = rows.len(), "extracted records from source");

        match self.engine.apply(&rows).await {
            Ok(tally) => {
                let target_after = self.target.count().await?;
                let report = SyncReport {
                    source_count,
                    target_before,
                    target_after,
                    updated: tally.updated,
                    skipped: tally.skipped,
                };
                info!(
                    target_after,
                    updated = report.updated,
                    skipped = report.skipped,
                    "transfer summary"
                );
                Ok(report)
            }
            Err(err) => {
                match self.target.count().await {
                    Ok(target_after) => {
                        info!(target_after, "records in target documents table after aborted transfer");
                    }
                    Err(count_err) => {
                        warn!(error = %count_err, "failed to re-count target after aborted transfer");
                    }
                }
                Err(err.into())
            }
        }
    }
}
