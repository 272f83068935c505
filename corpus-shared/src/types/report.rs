use serde::{Deserialize, Serialize};

/// Outcome of one transfer run.
///
/// `source_count`, `target_before` and `target_after` are observability-only
/// row counts of the documents table; they carry no decision weight during the
/// transfer itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncReport {
    pub source_count: i64,
    pub target_before: i64,
    pub target_after: i64,
    pub updated: u64,
    pub skipped: u64,
}
