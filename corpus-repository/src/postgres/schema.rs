//! Schema provisioning.
//!
//! The DDL is a fixed statement list (five tables, two uniqueness indexes)
//! executed inside one transaction per database. Everything uses
//! `IF NOT EXISTS`, so provisioning an already-provisioned instance is a
//! no-op.
use sqlx::{Executor, PgPool};
use tracing::info;

use crate::errors::SchemaError;

const CREATE_CATEGORIES: &str = "CREATE TABLE IF NOT EXISTS categories (
    id SERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    description TEXT
)";

const CREATE_COMPANIES: &str = "CREATE TABLE IF NOT EXISTS companies (
    id SERIAL PRIMARY KEY,
    category_id INTEGER REFERENCES categories(id) ON DELETE SET NULL,
    site_url VARCHAR(255),
    title VARCHAR(255) NOT NULL,
    description TEXT
)";

const CREATE_DOCUMENTS: &str = "CREATE TABLE IF NOT EXISTS documents (
    id SERIAL PRIMARY KEY,
    company_id INTEGER REFERENCES companies(id) ON DELETE CASCADE,
    title VARCHAR(255) NOT NULL,
    content TEXT
)";

const CREATE_IMAGES: &str = "CREATE TABLE IF NOT EXISTS images (
    id SERIAL PRIMARY KEY,
    document_id INTEGER REFERENCES documents(id) ON DELETE CASCADE,
    image_url VARCHAR(255) NOT NULL,
    description TEXT
)";

const CREATE_COMPANIES_CATEGORIES: &str = "CREATE TABLE IF NOT EXISTS companies_categories (
    company_id INTEGER REFERENCES companies(id) ON DELETE CASCADE,
    category_id INTEGER REFERENCES categories(id) ON DELETE CASCADE,
    PRIMARY KEY (company_id, category_id)
)";

const INDEX_DOCUMENTS_TITLE: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_documents_title ON documents(title)";

const INDEX_IMAGES_URL: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_images_url ON images(image_url)";

/// Parents before children; the uniqueness indexes last.
const SCHEMA_STATEMENTS: [&str; 7] = [
    CREATE_CATEGORIES,
    CREATE_COMPANIES,
    CREATE_DOCUMENTS,
    CREATE_IMAGES,
    CREATE_COMPANIES_CATEGORIES,
    INDEX_DOCUMENTS_TITLE,
    INDEX_IMAGES_URL,
];

const DATABASE_EXISTS: &str = "SELECT 1 FROM pg_database WHERE datname = $1";

/// Whether a database with this name exists on the server.
pub async fn database_exists(admin_pool: &PgPool, name: &str) -> Result<bool, SchemaError> {
    let found = sqlx::query_scalar::<_, i32>(DATABASE_EXISTS)
        .bind(name)
        .fetch_optional(admin_pool)
        .await?;
    Ok(found.is_some())
}

/// Create the named database if it does not exist yet.
///
/// `CREATE DATABASE` cannot take a bound parameter, so the name is validated
/// as a plain identifier and quoted instead of being interpolated raw.
pub async fn create_database(admin_pool: &PgPool, name: &str) -> Result<(), SchemaError> {
    if !is_plain_identifier(name) {
        return Err(SchemaError::InvalidDatabaseName(name.to_string()));
    }

    if database_exists(admin_pool, name).await? {
        info!(database = name, "database already exists, skipping");
        return Ok(());
    }

    let statement = format!("CREATE DATABASE \"{name}\"");
    admin_pool.execute(statement.as_str()).await?;
    info!(database = name, "database created");
    Ok(())
}

/// Create the five tables and two uniqueness indexes if absent.
///
/// All statements run in one transaction: a DDL failure rolls the whole
/// schema change back and surfaces as a `SchemaError`.
pub async fn create_tables(pool: &PgPool) -> Result<(), SchemaError> {
    let mut tx = pool.begin().await?;
    for statement in SCHEMA_STATEMENTS {
        (&mut *tx).execute(statement).await?;
    }
    tx.commit().await?;
    info!("tables created");
    Ok(())
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::is_plain_identifier;

    #[test]
    fn identifier_validation() {
        assert!(is_plain_identifier("corpus_dev"));
        assert!(is_plain_identifier("_scratch2"));
        assert!(!is_plain_identifier(""));
        assert!(!is_plain_identifier("2fast"));
        assert!(!is_plain_identifier("bad-name"));
        assert!(!is_plain_identifier("x; DROP DATABASE y"));
    }
}
