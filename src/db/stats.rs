use crate::db::pool::DbPool;
use crate::db::queries::{count_orphan_sessions, count_rows};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::formatting::mins2readable;
use rusqlite::Connection;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let skills = count_rows(&pool.conn, "skills")?;
    let sessions = count_rows(&pool.conn, "sessions")?;
    let orphans = count_orphan_sessions(&pool.conn)?;

    println!("{}• Skills:{} {}{}{}", CYAN, RESET, GREEN, skills, RESET);
    println!("{}• Sessions:{} {}{}{}", CYAN, RESET, GREEN, sessions, RESET);
    if orphans > 0 {
        println!(
            "{}• Unlinked sessions:{} {}{}{}",
            CYAN, RESET, YELLOW, orphans, RESET
        );
    }

    //
    // 3) TOTAL PRACTICE
    //
    let total_minutes: i64 = pool.conn.query_row(
        "SELECT IFNULL(SUM(duration_minutes), 0) FROM sessions",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{}• Total practice:{} {}",
        CYAN,
        RESET,
        mins2readable(total_minutes, false, false)
    );

    //
    // 4) DATE RANGE
    //
    let (first_date, last_date): (Option<String>, Option<String>) = pool.conn.query_row(
        "SELECT MIN(date), MAX(date) FROM sessions",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}

/// Problems reported by `PRAGMA integrity_check`; empty when the file is sound.
pub fn integrity_problems(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare("PRAGMA integrity_check")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        let line = r?;
        if line != "ok" {
            out.push(line);
        }
    }
    Ok(out)
}

/// Rebuild the database file and return its size in bytes before and after.
pub fn vacuum(pool: &mut DbPool, db_path: &str) -> AppResult<(u64, u64)> {
    let size = || fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);

    let before = size();
    pool.conn.execute_batch("VACUUM;")?;
    Ok((before, size()))
}
