use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Skill;
use crate::ui::messages::success;
use crate::utils::input::parse_non_negative;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        category,
        target_hours,
    } = cmd
    {
        // Validate before touching the database
        let target = parse_non_negative("target hours", target_hours)?;
        let category = match category.trim() {
            "" => cfg.default_category.clone(),
            c => c.to_string(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let skill = AddLogic::apply(&mut pool, Skill::new(name.trim(), category, target))?;

        success(format!(
            "Skill '{}' added with id {}.",
            skill.name,
            skill.id.unwrap_or_default()
        ));
    }

    Ok(())
}
