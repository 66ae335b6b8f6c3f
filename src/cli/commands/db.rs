use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, header, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    if *show_info {
        header("Database");
        stats::print_db_info(&mut pool, &cfg.database)?;
    }

    if *check {
        let problems = stats::integrity_problems(&pool.conn)?;
        if problems.is_empty() {
            success("Integrity check passed.");
        } else {
            error(format!("Integrity check failed ({} problem(s)):", problems.len()));
            for p in &problems {
                eprintln!("    {}", p);
            }
        }
    }

    if *vacuum {
        let (before, after) = stats::vacuum(&mut pool, &cfg.database)?;
        success("Vacuum completed.");
        info(format!(
            "Size: {:.1} KB -> {:.1} KB",
            before as f64 / 1024.0,
            after as f64 / 1024.0
        ));
    }

    Ok(())
}
