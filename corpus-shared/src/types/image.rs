use serde::{Deserialize, Serialize};

/// A row of the `images` table. Image URLs are unique across an instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageRow {
    pub id: i32,
    pub document_id: Option<i32>,
    pub image_url: String,
    pub description: Option<String>,
}
