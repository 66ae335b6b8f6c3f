use crate::db::models::{DeleteOutcome, LogRow};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{PracticeSession, SessionDate, Skill, SkillProgress};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_skill(row: &Row) -> Result<Skill> {
    Ok(Skill {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        category: row.get("category")?,
        target_hours: row.get("target_hours")?,
    })
}

pub fn map_session(row: &Row) -> Result<PracticeSession> {
    Ok(PracticeSession {
        id: Some(row.get("id")?),
        skill_id: row.get::<_, Option<i64>>("skill_id")?.unwrap_or(0),
        duration_minutes: row
            .get::<_, Option<i64>>("duration_minutes")?
            .unwrap_or(0),
        notes: row.get::<_, Option<String>>("notes")?.unwrap_or_default(),
        date: SessionDate::from_db(row.get("date")?),
    })
}

/// Insert a new skill and return the id assigned by SQLite.
pub fn insert_skill(conn: &Connection, skill: &Skill) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO skills (name, category, target_hours) VALUES (?1, ?2, ?3)",
        params![skill.name, skill.category, skill.target_hours],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Insert a new practice session and return its id.
///
/// The referenced skill must exist: sessions are never written as orphans.
pub fn insert_session(conn: &Connection, session: &PracticeSession) -> AppResult<i64> {
    if let SessionDate::Unparsed(raw) = &session.date {
        return Err(AppError::InvalidDate(raw.clone()));
    }
    if !skill_exists(conn, session.skill_id)? {
        return Err(AppError::SkillNotFound(session.skill_id));
    }

    conn.execute(
        "INSERT INTO sessions (skill_id, duration_minutes, notes, date)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            session.skill_id,
            session.duration_minutes,
            session.notes,
            session.date_str(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn skill_exists(conn: &Connection, skill_id: i64) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM skills WHERE id = ?1")?;
    Ok(stmt.exists([skill_id])?)
}

pub fn get_skill(conn: &Connection, skill_id: i64) -> AppResult<Option<Skill>> {
    let skill = conn
        .query_row(
            "SELECT id, name, category, target_hours FROM skills WHERE id = ?1",
            [skill_id],
            map_skill,
        )
        .optional()?;
    Ok(skill)
}

pub fn load_skills(pool: &mut DbPool) -> AppResult<Vec<Skill>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT id, name, category, target_hours FROM skills ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_skill)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Load sessions, newest first. `skill_id` restricts the result to one skill.
pub fn load_sessions(pool: &mut DbPool, skill_id: Option<i64>) -> AppResult<Vec<PracticeSession>> {
    let mut out = Vec::new();

    match skill_id {
        Some(id) => {
            let mut stmt = pool.conn.prepare(
                "SELECT * FROM sessions
                 WHERE skill_id = ?1
                 ORDER BY date DESC, id DESC",
            )?;
            for r in stmt.query_map([id], map_session)? {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = pool
                .conn
                .prepare("SELECT * FROM sessions ORDER BY date DESC, id DESC")?;
            for r in stmt.query_map([], map_session)? {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

/// Per-skill practiced hours against target.
///
/// LEFT JOIN keeps skills without sessions (0 hours). Rows come back in
/// skill id order.
pub fn load_progress(conn: &Connection) -> AppResult<Vec<SkillProgress>> {
    let mut stmt = conn.prepare(
        "SELECT s.id, s.name, s.category, s.target_hours,
                COUNT(sess.id) AS session_count,
                IFNULL(SUM(sess.duration_minutes), 0) / 60.0 AS total_hours
         FROM skills s
         LEFT JOIN sessions sess ON s.id = sess.skill_id
         GROUP BY s.id
         ORDER BY s.id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(SkillProgress::from_hours(
            row.get("id")?,
            row.get("name")?,
            row.get("category")?,
            row.get("target_hours")?,
            row.get("session_count")?,
            row.get("total_hours")?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Delete a skill and every session that references it, atomically.
///
/// An unknown id is not an error: both statements simply affect no rows.
pub fn delete_skill(conn: &mut Connection, skill_id: i64) -> AppResult<DeleteOutcome> {
    let tx = conn.transaction()?;

    let sessions_deleted = tx.execute("DELETE FROM sessions WHERE skill_id = ?1", [skill_id])?;
    let skills_deleted = tx.execute("DELETE FROM skills WHERE id = ?1", [skill_id])?;

    tx.commit()?;

    Ok(DeleteOutcome {
        skill_deleted: skills_deleted > 0,
        sessions_deleted,
    })
}

pub fn count_rows(conn: &Connection, table: &str) -> AppResult<i64> {
    // table names cannot be bound as parameters
    let count = match table {
        "skills" => conn.query_row("SELECT COUNT(*) FROM skills", [], |row| row.get(0))?,
        "sessions" => conn.query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))?,
        "log" => conn.query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?,
        other => return Err(AppError::Other(format!("Unknown table: {}", other))),
    };
    Ok(count)
}

/// Sessions whose skill id no longer matches a skill.
pub fn count_orphan_sessions(conn: &Connection) -> AppResult<i64> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM sessions sess
         LEFT JOIN skills s ON s.id = sess.skill_id
         WHERE s.id IS NULL",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}

pub fn load_log(pool: &mut DbPool) -> AppResult<Vec<LogRow>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, '') AS target, message
         FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(LogRow {
            id: row.get("id")?,
            date: row.get("date")?,
            operation: row.get("operation")?,
            target: row.get("target")?,
            message: row.get("message")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
