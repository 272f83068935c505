use corpus_shared::{telemetry, ConnectionSettings};
use corpus_sync::{Dependencies, SyncJobError};
use dotenv::dotenv;
use tracing::{error, info};

/// Main entry point for the DEV→PROD transfer job.
///
/// Reads connection settings from the environment, wires the pipeline, runs
/// one transfer, and exits with a status reflecting the failure class (0 on
/// success).
#[tokio::main]
async fn main() {
    dotenv().ok();

    if let Err(err) = telemetry::init("sync") {
        eprintln!("failed to initialize logging: {err}");
        std::process::exit(2);
    }

    if let Err(err) = run().await {
        error!("data transfer failed: {err}");
        std::process::exit(err.exit_code());
    }
}

async fn run() -> Result<(), SyncJobError> {
    info!("starting data transfer");

    let settings = ConnectionSettings::from_env()?;
    let dependencies = Dependencies::new(&settings).await?;

    let report = dependencies.orchestrator.run().await?;
    info!(
        updated = report.updated,
        skipped = report.skipped,
        "data transfer completed"
    );
    Ok(())
}
