//! Integration tests for the fixture bulk loader.
//!
//! Run with: `cargo test --test postgres_fixtures`

use corpus_repository::postgres::fixtures_loader::{replace_all, TableCount};
use corpus_repository::postgres::schema;
use corpus_shared::types::{FixtureSet, Table};
use sqlx::PgPool;

fn sample_fixtures() -> FixtureSet {
    serde_json::from_str(
        r#"{
        "categories": [
            {"id": 1, "title": "Research", "description": "Research providers"},
            {"id": 2, "title": "Media", "description": null}
        ],
        "companies": [
            {"id": 1, "category_id": 1, "site_url": "http://acme.example.com", "title": "Acme Research", "description": "Lab"},
            {"id": 2, "category_id": null, "site_url": null, "title": "Orbit Media", "description": null}
        ],
        "documents": [
            {"id": 1, "company_id": 1, "title": "Annual Report", "content": "Numbers."},
            {"id": 2, "company_id": 1, "title": "Whitepaper", "content": null},
            {"id": 3, "company_id": 2, "title": "Press Kit", "content": "Assets."}
        ],
        "images": [
            {"id": 1, "document_id": 1, "image_url": "http://acme.example.com/cover.png", "description": "Cover"}
        ],
        "companies_categories": [
            {"company_id": 1, "category_id": 1},
            {"company_id": 2, "category_id": 2}
        ]
    }"#,
    )
    .unwrap()
}

fn rows_for(counts: &[TableCount], table: Table) -> i64 {
    counts.iter().find(|count| count.table == table).unwrap().rows
}

#[sqlx::test]
async fn load_reports_per_table_counts(pool: PgPool) {
    schema::create_tables(&pool).await.unwrap();

    let counts = replace_all(&pool, &sample_fixtures()).await.unwrap();

    assert_eq!(rows_for(&counts, Table::Categories), 2);
    assert_eq!(rows_for(&counts, Table::Companies), 2);
    assert_eq!(rows_for(&counts, Table::Documents), 3);
    assert_eq!(rows_for(&counts, Table::Images), 1);
    assert_eq!(rows_for(&counts, Table::CompaniesCategories), 2);
}

#[sqlx::test]
async fn load_preserves_fixture_ids(pool: PgPool) {
    schema::create_tables(&pool).await.unwrap();

    replace_all(&pool, &sample_fixtures()).await.unwrap();

    let ids = sqlx::query_scalar::<_, i32>("SELECT id FROM documents ORDER BY id")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[sqlx::test]
async fn reload_replaces_prior_rows(pool: PgPool) {
    schema::create_tables(&pool).await.unwrap();

    replace_all(&pool, &sample_fixtures()).await.unwrap();

    let replacement: FixtureSet = serde_json::from_str(
        r#"{"documents": [{"id": 9, "company_id": null, "title": "Only Doc", "content": null}]}"#,
    )
    .unwrap();
    let counts = replace_all(&pool, &replacement).await.unwrap();

    assert_eq!(rows_for(&counts, Table::Documents), 1);
    assert_eq!(rows_for(&counts, Table::Categories), 0);
    assert_eq!(rows_for(&counts, Table::Images), 0);

    let title = sqlx::query_scalar::<_, String>("SELECT title FROM documents WHERE id = 9")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(title, "Only Doc");
}

#[sqlx::test]
async fn failed_load_leaves_prior_contents_untouched(pool: PgPool) {
    schema::create_tables(&pool).await.unwrap();

    replace_all(&pool, &sample_fixtures()).await.unwrap();

    // References a company that does not exist; the insert fails and the
    // transaction rolls back.
    let broken: FixtureSet = serde_json::from_str(
        r#"{"documents": [{"id": 50, "company_id": 999, "title": "Orphan", "content": null}]}"#,
    )
    .unwrap();
    assert!(replace_all(&pool, &broken).await.is_err());

    let documents = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM documents")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(documents, 3);
}
