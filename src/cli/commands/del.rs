use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::db::queries::get_skill;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::input::parse_int;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> AppResult<bool> {
    warning(prompt);
    print!("Confirm [y/N]: ");
    io::stdout().flush()?;

    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(matches!(s.trim().to_lowercase().as_str(), "y" | "yes"))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { skill_id, yes } = cmd {
        let skill_id = parse_int("skill id", skill_id)?;

        let mut pool = DbPool::new(&cfg.database)?;

        //
        // Confirmation prompt
        //
        if !*yes {
            let prompt = match get_skill(&pool.conn, skill_id)? {
                Some(s) => format!(
                    "Delete skill #{} '{}' and all its sessions? This action is irreversible.",
                    skill_id, s.name
                ),
                None => format!(
                    "Skill #{} does not exist. Remove any sessions still linked to it?",
                    skill_id
                ),
            };

            if !ask_confirmation(&prompt)? {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        //
        // Execute deletion
        //
        let outcome = DeleteLogic::apply(&mut pool, skill_id)?;
        let msg = DeleteLogic::describe(skill_id, &outcome);

        if outcome.skill_deleted {
            success(msg);
        } else {
            info(msg);
        }
    }

    Ok(())
}
