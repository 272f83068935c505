//! Fixture bulk loading.
//!
//! Replaces the contents of the five tables with the rows of a fixture set,
//! verbatim, inside one transaction. Destructive: existing rows in the named
//! tables are deleted first. Fixture and demo seeding only, never a
//! live-growing instance. Ids come from the fixture file so they stay stable
//! across the two instances.
use std::path::Path;

use corpus_shared::types::{FixtureSet, Table};
use sqlx::{PgPool, Postgres, Transaction};

use crate::errors::FixtureError;

const INSERT_CATEGORY: &str =
    "INSERT INTO categories (id, title, description) VALUES ($1, $2, $3)";

const INSERT_COMPANY: &str = "INSERT INTO companies (id, category_id, site_url, title, description) \
     VALUES ($1, $2, $3, $4, $5)";

const INSERT_DOCUMENT: &str =
    "INSERT INTO documents (id, company_id, title, content) VALUES ($1, $2, $3, $4)";

const INSERT_IMAGE: &str =
    "INSERT INTO images (id, document_id, image_url, description) VALUES ($1, $2, $3, $4)";

const INSERT_COMPANY_CATEGORY: &str =
    "INSERT INTO companies_categories (company_id, category_id) VALUES ($1, $2)";

/// Post-load row count of one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCount {
    pub table: Table,
    pub rows: i64,
}

/// Read and parse one fixture file.
///
/// A missing file and malformed JSON are distinct, fatal errors carrying the
/// path.
pub fn load_fixture_file(path: &Path) -> Result<FixtureSet, FixtureError> {
    let raw = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| FixtureError::Parse {
        path: path.to_owned(),
        source,
    })
}

/// Delete all rows of the five tables, then insert the fixture rows.
///
/// Runs in one transaction; a failed insert leaves the prior contents
/// untouched. Deletion goes children-first and insertion parents-first, so
/// foreign keys hold throughout. Returns the post-load count of every table
/// for the seeding report.
pub async fn replace_all(pool: &PgPool, fixtures: &FixtureSet) -> Result<Vec<TableCount>, FixtureError> {
    let mut tx = pool.begin().await?;

    for table in Table::ALL.iter().rev() {
        sqlx::query(delete_statement(*table)).execute(&mut *tx).await?;
    }

    insert_rows(&mut tx, fixtures).await?;
    tx.commit().await?;

    let mut counts = Vec::with_capacity(Table::ALL.len());
    for table in Table::ALL {
        let rows = sqlx::query_scalar::<_, i64>(count_statement(table))
            .fetch_one(pool)
            .await?;
        counts.push(TableCount { table, rows });
    }
    Ok(counts)
}

async fn insert_rows(
    tx: &mut Transaction<'_, Postgres>,
    fixtures: &FixtureSet,
) -> Result<(), FixtureError> {
    for row in &fixtures.categories {
        sqlx::query(INSERT_CATEGORY)
            .bind(row.id)
            .bind(&row.title)
            .bind(&row.description)
            .execute(&mut **tx)
            .await?;
    }

    for row in &fixtures.companies {
        sqlx::query(INSERT_COMPANY)
            .bind(row.id)
            .bind(row.category_id)
            .bind(&row.site_url)
            .bind(&row.title)
            .bind(&row.description)
            .execute(&mut **tx)
            .await?;
    }

    for row in &fixtures.documents {
        sqlx::query(INSERT_DOCUMENT)
            .bind(row.id)
            .bind(row.company_id)
            .bind(&row.title)
            .bind(&row.content)
            .execute(&mut **tx)
            .await?;
    }

    for row in &fixtures.images {
        sqlx::query(INSERT_IMAGE)
            .bind(row.id)
            .bind(row.document_id)
            .bind(&row.image_url)
            .bind(&row.description)
            .execute(&mut **tx)
            .await?;
    }

    for row in &fixtures.companies_categories {
        sqlx::query(INSERT_COMPANY_CATEGORY)
            .bind(row.company_id)
            .bind(row.category_id)
            .execute(&mut **tx)
            .await?;
    }

    Ok(())
}

fn delete_statement(table: Table) -> &'static str {
    match table {
        Table::Categories => "DELETE FROM categories",
        Table::Companies => "DELETE FROM companies",
        Table::Documents => "DELETE FROM documents",
        Table::Images => "DELETE FROM images",
        Table::CompaniesCategories => "DELETE FROM companies_categories",
    }
}

fn count_statement(table: Table) -> &'static str {
    match table {
        Table::Categories => "SELECT COUNT(*) FROM categories",
        Table::Companies => "SELECT COUNT(*) FROM companies",
        Table::Documents => "SELECT COUNT(*) FROM documents",
        Table::Images => "SELECT COUNT(*) FROM images",
        Table::CompaniesCategories => "SELECT COUNT(*) FROM companies_categories",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_fixture_file(Path::new("/nonexistent/fixtures/dev.json"));
        assert!(matches!(result, Err(FixtureError::Io { .. })));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let path = std::env::temp_dir().join("corpus-fixture-malformed.json");
        std::fs::write(&path, "{ not json").unwrap();
        let result = load_fixture_file(&path);
        assert!(matches!(result, Err(FixtureError::Parse { .. })));
        std::fs::remove_file(&path).ok();
    }
}
