use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::practice::PracticeLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::PracticeSession;
use crate::ui::messages::success;
use crate::utils::date::resolve_date_input;
use crate::utils::input::{parse_int, parse_non_negative};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Practice {
        skill_id,
        minutes,
        notes,
        date,
    } = cmd
    {
        //
        // 1. Parse and validate every field
        //
        let skill_id = parse_int("skill id", skill_id)?;
        let minutes = parse_non_negative("duration", minutes)?;
        let date = resolve_date_input(date.as_deref().unwrap_or(""))?;

        //
        // 2. Store
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let session = PracticeLogic::apply(
            &mut pool,
            PracticeSession::new(skill_id, minutes, notes.trim(), date),
        )?;

        success(format!(
            "Logged {} min for skill #{} on {} (session #{}).",
            session.duration_minutes,
            session.skill_id,
            session.date_str(),
            session.id.unwrap_or_default()
        ));
    }

    Ok(())
}
