//! Error types for the transfer engine.
use corpus_repository::DocumentsRepositoryError;
use thiserror::Error;

/// Represents errors that abort a transfer.
///
/// Uniqueness violations never surface here; the engine absorbs them into
/// the skipped tally. Anything that does surface stopped the remaining rows.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("documents repository error: {0}")]
    Repository(#[from] DocumentsRepositoryError),
}
