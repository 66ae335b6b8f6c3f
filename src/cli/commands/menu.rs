use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::menu::Menu;
use std::io;

/// Handle the interactive menu (default when no subcommand is given)
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    let stdin = io::stdin();
    let stdout = io::stdout();

    Menu::new(&mut pool, cfg, stdin.lock(), stdout.lock()).run()
}
