use serde::{Deserialize, Serialize};

/// A row of the `companies` table.
///
/// `category_id` is nullable and is set to null by the database when the
/// referenced category is deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanyRow {
    pub id: i32,
    pub category_id: Option<i32>,
    pub site_url: Option<String>,
    pub title: String,
    pub description: Option<String>,
}
