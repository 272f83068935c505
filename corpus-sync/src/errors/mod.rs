//! Error types for the transfer job, consolidating errors from configuration,
//! connection setup, and the pipeline, and mapping each fatal class to a
//! distinct process exit status.
use corpus_pipeline::OrchestratorError;
use corpus_repository::postgres::connection::is_connectivity_error;
use corpus_shared::telemetry::TelemetryError;
use corpus_shared::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum SyncJobError {
    #[error("configuration error: {0}")]
    Settings(#[from] SettingsError),
    #[error("database connection error: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("orchestrator error: {0}")]
    Orchestrator(#[from] OrchestratorError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
}

impl SyncJobError {
    /// Exit status for this failure: 1 operation, 2 configuration,
    /// 3 connectivity.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Settings(_) | Self::Telemetry(_) => 2,
            Self::Connect(err) if is_connectivity_error(err) => 3,
            Self::Connect(_) => 1,
            Self::Orchestrator(_) => 1,
        }
    }
}
