use serde::{Deserialize, Serialize};

/// A row of the `companies_categories` join table.
///
/// Composite primary key; both sides cascade on delete.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanyCategoryRow {
    pub company_id: i32,
    pub category_id: i32,
}
