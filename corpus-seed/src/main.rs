//! One-shot seeding job: replace the contents of both instances with the rows
//! of their fixture files.
//!
//! Destructive to existing rows in the five tables; fixture and demo seeding
//! only, never a live-growing target. Both fixture files are parsed before
//! either database is touched, so a malformed file never leaves one instance
//! seeded and the other not.
use std::path::PathBuf;

use corpus_repository::postgres::connection::{self, is_connectivity_error};
use corpus_repository::postgres::fixtures_loader::{load_fixture_file, replace_all};
use corpus_repository::FixtureError;
use corpus_shared::types::FixtureSet;
use corpus_shared::{telemetry, ConnectionSettings, SettingsError};
use dotenv::dotenv;
use tracing::{error, info};

const DEFAULT_FIXTURES_DIR: &str = "fixtures";
const SOURCE_FIXTURE: &str = "dev.json";
const TARGET_FIXTURE: &str = "prod.json";

#[derive(Debug, thiserror::Error)]
enum SeedError {
    #[error("configuration error: {0}")]
    Settings(#[from] SettingsError),
    #[error("database connection error: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("fixture error: {0}")]
    Fixture(#[from] FixtureError),
    #[error("seeding failed for one or more databases")]
    Incomplete,
}

impl SeedError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::Settings(_) => 2,
            Self::Connect(err) if is_connectivity_error(err) => 3,
            Self::Connect(_) => 1,
            Self::Fixture(FixtureError::Io { .. } | FixtureError::Parse { .. }) => 5,
            Self::Fixture(FixtureError::Database(_)) | Self::Incomplete => 1,
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    if let Err(err) = telemetry::init("seed") {
        eprintln!("failed to initialize logging: {err}");
        std::process::exit(2);
    }

    if let Err(err) = run().await {
        error!("seeding failed: {err}");
        std::process::exit(err.exit_code());
    }
}

async fn run() -> Result<(), SeedError> {
    info!("starting fixture seeding");

    let settings = ConnectionSettings::from_env()?;
    let fixtures_dir =
        PathBuf::from(std::env::var("FIXTURES_DIR").unwrap_or_else(|_| DEFAULT_FIXTURES_DIR.to_string()));

    // Parse both files up front; a fixture error is fatal to the invocation.
    let source_fixtures = load_fixture_file(&fixtures_dir.join(SOURCE_FIXTURE))?;
    let target_fixtures = load_fixture_file(&fixtures_dir.join(TARGET_FIXTURE))?;

    let mut failed = false;
    let loads = [
        (&settings.source_db, &source_fixtures),
        (&settings.target_db, &target_fixtures),
    ];
    for (database, fixtures) in loads {
        if let Err(err) = seed_database(&settings, database, fixtures).await {
            error!(database = %database, "failed to seed database: {err}");
            failed = true;
        }
    }

    if failed {
        return Err(SeedError::Incomplete);
    }
    info!("fixture seeding completed");
    Ok(())
}

async fn seed_database(
    settings: &ConnectionSettings,
    database: &str,
    fixtures: &FixtureSet,
) -> Result<(), SeedError> {
    info!(database = %database, "loading fixtures");

    let pool = connection::connect(settings, database)
        .await
        .map_err(SeedError::Connect)?;
    let counts = replace_all(&pool, fixtures).await?;

    for count in counts {
        info!(database = %database, table = %count.table, rows = count.rows, "table seeded");
    }
    Ok(())
}
