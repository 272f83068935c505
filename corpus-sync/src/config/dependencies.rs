use std::sync::Arc;

use corpus_pipeline::{DocumentExtractor, Orchestrator, TransferEngine};
use corpus_repository::postgres::connection;
use corpus_repository::{DocumentsRepository, PostgresDocumentsRepository};
use corpus_shared::ConnectionSettings;

use crate::errors::SyncJobError;

/// `Dependencies` holds the wired components of one transfer run.
///
/// Exactly two pools are opened (source and target); both are released when
/// the run's scope ends, on every exit path.
pub struct Dependencies {
    pub orchestrator: Orchestrator,
}

impl Dependencies {
    /// Wire up pools, repositories, extractor, and engine from the settings.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` on successful connection to both
    /// instances, or a `SyncJobError` carrying the connection failure.
    pub async fn new(settings: &ConnectionSettings) -> Result<Self, SyncJobError> {
        let source_pool = connection::connect(settings, &settings.source_db)
            .await
            .map_err(SyncJobError::Connect)?;
        let target_pool = connection::connect(settings, &settings.target_db)
            .await
            .map_err(SyncJobError::Connect)?;

        let source: Arc<dyn DocumentsRepository> =
            Arc::new(PostgresDocumentsRepository::new(source_pool));
        let target: Arc<dyn DocumentsRepository> =
            Arc::new(PostgresDocumentsRepository::new(target_pool));

        let extractor = DocumentExtractor::new(Arc::clone(&source));
        let engine = TransferEngine::new(Arc::clone(&target));
        let orchestrator = Orchestrator::new(source, target, extractor, engine);

        Ok(Self { orchestrator })
    }
}
