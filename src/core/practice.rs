use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::insert_session;
use crate::errors::{AppError, AppResult};
use crate::models::PracticeSession;

/// High-level business logic for logging a practice session.
pub struct PracticeLogic;

impl PracticeLogic {
    /// Persist `session` and return it with its assigned id.
    /// Fails with `SkillNotFound` when the skill id does not exist.
    pub fn apply(pool: &mut DbPool, mut session: PracticeSession) -> AppResult<PracticeSession> {
        if session.duration_minutes < 0 {
            return Err(AppError::NegativeValue {
                field: "duration",
                value: session.duration_minutes,
            });
        }

        let id = insert_session(&pool.conn, &session)?;
        session.id = Some(id);

        ttlog_soft(
            &pool.conn,
            "practice",
            &format!("skill #{}", session.skill_id),
            &format!(
                "Logged {} min on {} (session #{})",
                session.duration_minutes,
                session.date_str(),
                id
            ),
        );

        Ok(session)
    }
}
