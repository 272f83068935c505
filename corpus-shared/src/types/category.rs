use serde::{Deserialize, Serialize};

/// A row of the `categories` table.
///
/// Categories group companies; a company may reference one category directly
/// and any number through the join table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryRow {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
}
