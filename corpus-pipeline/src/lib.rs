//! # Corpus Pipeline
//! The transfer pipeline: extraction of the full document row set from the
//! source instance, per-row upsert application against the target instance,
//! and the orchestrator that runs one transfer end to end and reports counts.
pub mod errors;
pub mod extractor;
pub mod orchestrator;
pub mod transfer;

pub use errors::{OrchestratorError, TransferError};
pub use extractor::DocumentExtractor;
pub use orchestrator::Orchestrator;
pub use transfer::{TransferEngine, TransferTally};
