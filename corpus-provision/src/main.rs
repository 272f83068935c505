//! One-shot provisioning job: create the source and target databases on the
//! configured server, then create the schema in each.
//!
//! Safe to re-run: databases, tables, and indexes are only created when
//! absent. A failure provisioning one database does not abort the other; the
//! process exits nonzero if either failed.
use corpus_repository::postgres::connection::{self, is_connectivity_error, ADMIN_DATABASE};
use corpus_repository::postgres::schema;
use corpus_repository::SchemaError;
use corpus_shared::{telemetry, ConnectionSettings, SettingsError};
use dotenv::dotenv;
use sqlx::PgPool;
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
enum ProvisionError {
    #[error("configuration error: {0}")]
    Settings(#[from] SettingsError),
    #[error("database connection error: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("provisioning failed for one or more databases")]
    Incomplete,
}

impl ProvisionError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::Settings(_) => 2,
            Self::Connect(err) if is_connectivity_error(err) => 3,
            Self::Connect(_) => 1,
            Self::Schema(_) | Self::Incomplete => 4,
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    if let Err(err) = telemetry::init("provision") {
        eprintln!("failed to initialize logging: {err}");
        std::process::exit(2);
    }

    if let Err(err) = run().await {
        error!("provisioning failed: {err}");
        std::process::exit(err.exit_code());
    }
}

async fn run() -> Result<(), ProvisionError> {
    info!("starting provisioning");

    let settings = ConnectionSettings::from_env()?;

    let admin_pool = connection::connect(&settings, ADMIN_DATABASE)
        .await
        .map_err(ProvisionError::Connect)?;

    let mut failed = false;
    for database in [&settings.source_db, &settings.target_db] {
        if let Err(err) = provision_database(&settings, &admin_pool, database).await {
            error!(database = %database, "failed to provision database: {err}");
            failed = true;
        }
    }

    if failed {
        return Err(ProvisionError::Incomplete);
    }
    info!("provisioning completed");
    Ok(())
}

/// Create one database if absent, then its tables and indexes.
async fn provision_database(
    settings: &ConnectionSettings,
    admin_pool: &PgPool,
    database: &str,
) -> Result<(), ProvisionError> {
    schema::create_database(admin_pool, database).await?;

    let pool = connection::connect(settings, database)
        .await
        .map_err(ProvisionError::Connect)?;
    schema::create_tables(&pool).await?;

    info!(database = %database, "database provisioned");
    Ok(())
}
