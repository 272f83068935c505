use serde::{Deserialize, Serialize};

/// A row of the `documents` table, the unit of transfer between the source
/// and target instances.
///
/// Ids are assigned by the database at insert time and are stable across
/// instances for a given logical record; the transfer engine relies on id
/// equality to detect "same record". Titles are unique across an instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentRow {
    pub id: i32,
    pub company_id: Option<i32>,
    pub title: String,
    pub content: Option<String>,
}
