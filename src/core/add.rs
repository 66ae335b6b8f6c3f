use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::insert_skill;
use crate::errors::{AppError, AppResult};
use crate::models::Skill;

/// High-level business logic for adding a skill.
pub struct AddLogic;

impl AddLogic {
    /// Persist `skill` and return it with its assigned id.
    pub fn apply(pool: &mut DbPool, mut skill: Skill) -> AppResult<Skill> {
        if skill.id.is_some() {
            return Err(AppError::Other(format!(
                "Skill '{}' is already stored",
                skill.name
            )));
        }
        if skill.target_hours < 0 {
            return Err(AppError::NegativeValue {
                field: "target hours",
                value: skill.target_hours,
            });
        }

        let id = insert_skill(&pool.conn, &skill)?;
        skill.id = Some(id);

        ttlog_soft(
            &pool.conn,
            "add",
            &format!("skill #{}", id),
            &format!(
                "Added skill '{}' ({}), target {} h",
                skill.name, skill.category, skill.target_hours
            ),
        );

        Ok(skill)
    }
}
