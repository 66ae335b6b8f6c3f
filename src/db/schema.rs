use rusqlite::{Connection, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `skills` table.
fn ensure_skills_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS skills (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL,
            category     TEXT NOT NULL,
            target_hours INTEGER NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `sessions` table.
///
/// The foreign key carries no ON DELETE clause so databases written by older
/// versions keep the same layout; the cascade lives in `delete_skill`.
fn ensure_sessions_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            skill_id         INTEGER,
            duration_minutes INTEGER,
            notes            TEXT,
            date             TEXT,
            FOREIGN KEY(skill_id) REFERENCES skills(id)
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_skill ON sessions(skill_id);
        "#,
    )?;
    Ok(())
}

/// Public entry point: create every table that is still missing.
///
/// Invoked by `db::initialize::init_db()`.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    ensure_skills_table(conn)?;
    ensure_sessions_table(conn)?;
    Ok(())
}
