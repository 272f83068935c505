//! Connectivity smoke test: one connection to the server's administrative
//! database, one trivial query, no side effects.
use corpus_repository::postgres::connection::{self, is_connectivity_error, ADMIN_DATABASE};
use corpus_shared::{telemetry, ConnectionSettings, SettingsError};
use dotenv::dotenv;
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
enum PingError {
    #[error("configuration error: {0}")]
    Settings(#[from] SettingsError),
    #[error("connection failed: {0}")]
    Database(#[from] sqlx::Error),
}

impl PingError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::Settings(_) => 2,
            Self::Database(err) if is_connectivity_error(err) => 3,
            Self::Database(_) => 1,
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    if let Err(err) = telemetry::init("ping") {
        eprintln!("failed to initialize logging: {err}");
        std::process::exit(2);
    }

    if let Err(err) = run().await {
        error!("connection failed: {err}");
        std::process::exit(err.exit_code());
    }
}

async fn run() -> Result<(), PingError> {
    let settings = ConnectionSettings::from_env()?;

    let pool = connection::connect(&settings, ADMIN_DATABASE).await?;
    sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(&pool).await?;

    info!("connection successful");
    Ok(())
}
