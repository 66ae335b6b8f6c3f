//! Database row models that have no counterpart in the domain records.
//! These are thin wrappers around SQLite rows and statement results.

/// Result of a cascading skill delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub skill_deleted: bool,
    pub sessions_deleted: usize,
}

/// One row of the internal `log` table.
#[derive(Debug, Clone)]
pub struct LogRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}
