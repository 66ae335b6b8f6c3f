use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::progress::ProgressLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Progress { category } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let rows = ProgressLogic::load(&mut pool, category.as_deref())?;

        if rows.is_empty() {
            match category {
                Some(c) => info(format!("No skills in category '{}'.", c)),
                None => info("No skills recorded yet."),
            }
            return Ok(());
        }

        header("Progress");
        print!("{}", ProgressLogic::table(&rows, cfg));

        let completed = rows.iter().filter(|p| p.is_complete()).count();
        println!("\n{} of {} skill(s) reached their target.", completed, rows.len());
    }

    Ok(())
}
