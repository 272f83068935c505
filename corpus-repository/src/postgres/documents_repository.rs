//! PostgreSQL implementation of the documents repository.
//!
//! Statements are fixed constants; rows are mapped manually so the crate
//! compiles without a live database. Each statement checks a pooled
//! connection out and back in on every exit path.
use async_trait::async_trait;
use corpus_shared::types::DocumentRow;
use sqlx::{PgPool, Row};

use crate::errors::DocumentsRepositoryError;
use crate::interfaces::DocumentsRepository;

const COUNT_DOCUMENTS: &str = "SELECT COUNT(*) FROM documents";

const SELECT_DOCUMENTS: &str = "SELECT id, company_id, title, content FROM documents";

const UPSERT_DOCUMENT: &str = "INSERT INTO documents (id, company_id, title, content) \
     VALUES ($1, $2, $3, $4) \
     ON CONFLICT (id) \
     DO UPDATE SET company_id = EXCLUDED.company_id, \
                   title = EXCLUDED.title, \
                   content = EXCLUDED.content";

/// PostgreSQL-backed documents repository for one instance.
pub struct PostgresDocumentsRepository {
    pool: PgPool,
}

impl PostgresDocumentsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentsRepository for PostgresDocumentsRepository {
    async fn count(&self) -> Result<i64, DocumentsRepositoryError> {
        let count = sqlx::query_scalar::<_, i64>(COUNT_DOCUMENTS)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn fetch_all(&self) -> Result<Vec<DocumentRow>, DocumentsRepositoryError> {
        let rows = sqlx::query(SELECT_DOCUMENTS).fetch_all(&self.pool).await?;

        Ok(rows
            .iter()
            .map(|row| DocumentRow {
                id: row.get("id"),
                company_id: row.get("company_id"),
                title: row.get("title"),
                content: row.get("content"),
            })
            .collect())
    }

    async fn upsert(&self, row: &DocumentRow) -> Result<(), DocumentsRepositoryError> {
        let result = sqlx::query(UPSERT_DOCUMENT)
            .bind(row.id)
            .bind(row.company_id)
            .bind(&row.title)
            .bind(&row.content)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(DocumentsRepositoryError::UniqueViolation {
                    title: row.title.clone(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }
}
