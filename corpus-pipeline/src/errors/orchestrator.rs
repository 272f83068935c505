//! Error types for the transfer orchestrator.
use corpus_repository::DocumentsRepositoryError;
use thiserror::Error;

use crate::errors::TransferError;

/// Represents errors that can occur while orchestrating one transfer run:
/// count queries around the transfer, or an aborted transfer itself.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("documents repository error: {0}")]
    Repository(#[from] DocumentsRepositoryError),
    #[error("transfer error: {0}")]
    Transfer(#[from] TransferError),
}
