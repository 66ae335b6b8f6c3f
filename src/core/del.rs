use crate::db::log::ttlog_soft;
use crate::db::models::DeleteOutcome;
use crate::db::pool::DbPool;
use crate::db::queries::delete_skill;
use crate::errors::AppResult;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete a skill together with its sessions.
    /// Deleting an unknown id succeeds and reports that nothing was removed.
    pub fn apply(pool: &mut DbPool, skill_id: i64) -> AppResult<DeleteOutcome> {
        let outcome = pool.with_conn(|conn| delete_skill(conn, skill_id))?;

        if outcome.skill_deleted || outcome.sessions_deleted > 0 {
            ttlog_soft(
                &pool.conn,
                "del",
                &format!("skill #{}", skill_id),
                &format!(
                    "Deleted skill #{} and {} session(s)",
                    skill_id, outcome.sessions_deleted
                ),
            );
        }

        Ok(outcome)
    }

    /// One-line, human readable description of a delete result.
    pub fn describe(skill_id: i64, outcome: &DeleteOutcome) -> String {
        match (outcome.skill_deleted, outcome.sessions_deleted) {
            (true, n) => format!("Deleted skill #{} and {} session(s).", skill_id, n),
            (false, 0) => format!("No skill with id {}; nothing deleted.", skill_id),
            (false, n) => format!(
                "No skill with id {}; removed {} unlinked session(s).",
                skill_id, n
            ),
        }
    }
}
