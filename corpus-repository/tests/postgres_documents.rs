//! Integration tests for the PostgreSQL documents repository.
//!
//! These tests require a real PostgreSQL database; each test gets an isolated
//! one. The schema is provisioned by the provisioner itself at test start.
//!
//! Run with: `cargo test --test postgres_documents`

use corpus_repository::postgres::schema;
use corpus_repository::{DocumentsRepository, DocumentsRepositoryError, PostgresDocumentsRepository};
use corpus_shared::types::DocumentRow;
use sqlx::PgPool;

fn doc(id: i32, title: &str, content: Option<&str>) -> DocumentRow {
    DocumentRow {
        id,
        company_id: None,
        title: title.to_string(),
        content: content.map(str::to_string),
    }
}

#[sqlx::test]
async fn count_and_fetch_on_empty_table(pool: PgPool) {
    schema::create_tables(&pool).await.unwrap();
    let repository = PostgresDocumentsRepository::new(pool);

    assert_eq!(repository.count().await.unwrap(), 0);
    assert!(repository.fetch_all().await.unwrap().is_empty());
}

#[sqlx::test]
async fn upsert_inserts_new_rows(pool: PgPool) {
    schema::create_tables(&pool).await.unwrap();
    let repository = PostgresDocumentsRepository::new(pool.clone());

    repository.upsert(&doc(1, "First", Some("body"))).await.unwrap();
    repository.upsert(&doc(2, "Second", None)).await.unwrap();

    assert_eq!(repository.count().await.unwrap(), 2);

    let rows = repository.fetch_all().await.unwrap();
    let first = rows.iter().find(|row| row.id == 1).unwrap();
    assert_eq!(first.title, "First");
    assert_eq!(first.content.as_deref(), Some("body"));
}

#[sqlx::test]
async fn upsert_overwrites_every_non_key_column(pool: PgPool) {
    schema::create_tables(&pool).await.unwrap();
    let repository = PostgresDocumentsRepository::new(pool.clone());

    repository.upsert(&doc(1, "A", Some("old content"))).await.unwrap();
    repository.upsert(&doc(1, "B", Some("new content"))).await.unwrap();

    // Still one row, fully replaced rather than merged.
    assert_eq!(repository.count().await.unwrap(), 1);
    let rows = repository.fetch_all().await.unwrap();
    assert_eq!(rows[0].title, "B");
    assert_eq!(rows[0].content.as_deref(), Some("new content"));
    assert_eq!(rows[0].company_id, None);
}

#[sqlx::test]
async fn upsert_overwrite_clears_columns_absent_from_the_incoming_row(pool: PgPool) {
    schema::create_tables(&pool).await.unwrap();
    let repository = PostgresDocumentsRepository::new(pool.clone());

    repository.upsert(&doc(1, "A", Some("content"))).await.unwrap();
    repository.upsert(&doc(1, "A", None)).await.unwrap();

    let rows = repository.fetch_all().await.unwrap();
    assert_eq!(rows[0].content, None);
}

#[sqlx::test]
async fn title_collision_with_a_different_row_is_a_unique_violation(pool: PgPool) {
    schema::create_tables(&pool).await.unwrap();
    let repository = PostgresDocumentsRepository::new(pool.clone());

    repository.upsert(&doc(1, "Taken", None)).await.unwrap();
    let result = repository.upsert(&doc(2, "Taken", Some("other"))).await;

    match result {
        Err(DocumentsRepositoryError::UniqueViolation { title }) => assert_eq!(title, "Taken"),
        other => panic!("expected a unique violation, got {other:?}"),
    }

    // The existing row is untouched and no second row appeared.
    assert_eq!(repository.count().await.unwrap(), 1);
    let rows = repository.fetch_all().await.unwrap();
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].content, None);
}

#[sqlx::test]
async fn company_delete_cascades_to_documents_and_images(pool: PgPool) {
    schema::create_tables(&pool).await.unwrap();

    sqlx::query("INSERT INTO categories (id, title) VALUES (1, 'Cat')")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO companies (id, category_id, title) VALUES (1, 1, 'Co')")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO documents (id, company_id, title) VALUES (1, 1, 'Doc')")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO images (id, document_id, image_url) VALUES (1, 1, 'http://example.com/i.jpg')")
        .execute(&pool)
        .await
        .unwrap();

    sqlx::query("DELETE FROM companies WHERE id = 1")
        .execute(&pool)
        .await
        .unwrap();

    let documents = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM documents")
        .fetch_one(&pool)
        .await
        .unwrap();
    let images = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM images")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(documents, 0);
    assert_eq!(images, 0);

    // The category is independent of the company and survives.
    let categories = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(categories, 1);
}

#[sqlx::test]
async fn category_delete_nulls_the_company_reference(pool: PgPool) {
    schema::create_tables(&pool).await.unwrap();

    sqlx::query("INSERT INTO categories (id, title) VALUES (1, 'Cat')")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO companies (id, category_id, title) VALUES (1, 1, 'Co')")
        .execute(&pool)
        .await
        .unwrap();

    sqlx::query("DELETE FROM categories WHERE id = 1")
        .execute(&pool)
        .await
        .unwrap();

    let category_id = sqlx::query_scalar::<_, Option<i32>>("SELECT category_id FROM companies WHERE id = 1")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(category_id, None);
}
