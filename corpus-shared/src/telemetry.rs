//! Tracing setup shared by the operational binaries.
//!
//! Every run logs timestamped human-readable lines to the console and to a
//! per-run file under `logs/`. The filter defaults to `info` and can be
//! overridden with `RUST_LOG`.

use std::fs::File;
use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_DIR: &str = "logs";

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("failed to create log file: {0}")]
    LogFile(#[from] std::io::Error),
}

/// Initialize the global subscriber for one job run.
///
/// `job` names the binary and becomes part of the log file name, e.g.
/// `logs/sync-20250301-120000.log`. Call once, before any other work.
pub fn init(job: &str) -> Result<(), TelemetryError> {
    std::fs::create_dir_all(LOG_DIR)?;
    let stamp = chrono::Utc::now().format("%Y%m%d-%H%M%S");
    let file = File::create(format!("{LOG_DIR}/{job}-{stamp}.log"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(fmt::layer().with_target(false).with_ansi(false).with_writer(Arc::new(file)))
        .init();

    Ok(())
}
