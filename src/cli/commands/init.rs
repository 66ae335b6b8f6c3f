use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its tables
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing SkillVault…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    // Opening the pool creates the tables when missing
    let pool = DbPool::new(&db_path)?;

    println!("✅ Database initialized at {}", &db_path);

    ttlog_soft(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 SkillVault initialization completed!");
    Ok(())
}
