//! PostgreSQL connection setup.
use corpus_shared::ConnectionSettings;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// The administrative database every server ships with; used for the
/// connectivity smoke test and for `CREATE DATABASE`.
pub const ADMIN_DATABASE: &str = "postgres";

const PG_MAX_CONNECTIONS: u32 = 5;

/// Connect to the named database on the configured server and return a pool.
///
/// Options are built programmatically rather than by assembling a URL, so
/// credentials never need escaping. The first connection is established
/// eagerly, making unreachable hosts and bad credentials fail here rather
/// than at first use.
pub async fn connect(settings: &ConnectionSettings, database: &str) -> Result<PgPool, sqlx::Error> {
    let options = PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.user)
        .password(&settings.password)
        .database(database);

    PgPoolOptions::new()
        .max_connections(PG_MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

/// Whether an error means the server could not be reached or refused the
/// credentials, as opposed to a failure of the statement itself. Binaries use
/// this to pick the connectivity exit code.
pub fn is_connectivity_error(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::PoolTimedOut => true,
        // SQLSTATE class 28: invalid authorization; 3D: invalid catalog name.
        sqlx::Error::Database(db) => db
            .code()
            .is_some_and(|code| code.starts_with("28") || code.starts_with("3D")),
        _ => false,
    }
}
