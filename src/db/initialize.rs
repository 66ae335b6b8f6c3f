use crate::db::schema::ensure_schema;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Safe to call on every startup: existing tables and rows are left untouched.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    ensure_schema(conn)?;
    Ok(())
}
