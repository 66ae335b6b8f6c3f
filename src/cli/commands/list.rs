use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::db::queries::{load_sessions, load_skills};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { sessions, skill } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        if *sessions {
            let rows = load_sessions(&mut pool, *skill)?;
            if rows.is_empty() {
                info("No practice sessions found.");
                return Ok(());
            }

            match skill {
                Some(id) => header(format!("Sessions for skill #{}", id)),
                None => header("Sessions"),
            }
            print!("{}", ListLogic::sessions_table(&rows, cfg));
            return Ok(());
        }

        let skills = load_skills(&mut pool)?;
        if skills.is_empty() {
            info("No skills recorded yet.");
            return Ok(());
        }

        header("Skills");
        print!("{}", ListLogic::skills_table(&skills, cfg));
    }

    Ok(())
}
