use serde::{Deserialize, Serialize};

use crate::types::{CategoryRow, CompanyCategoryRow, CompanyRow, DocumentRow, ImageRow};

/// The contents of one fixture file: rows to seed, keyed by table.
///
/// Tables absent from the file load as empty. Unknown keys are rejected so a
/// typo'd table name fails the load instead of silently seeding nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FixtureSet {
    #[serde(default)]
    pub categories: Vec<CategoryRow>,
    #[serde(default)]
    pub companies: Vec<CompanyRow>,
    #[serde(default)]
    pub documents: Vec<DocumentRow>,
    #[serde(default)]
    pub images: Vec<ImageRow>,
    #[serde(default)]
    pub companies_categories: Vec<CompanyCategoryRow>,
}
