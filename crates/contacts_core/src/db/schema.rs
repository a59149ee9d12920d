//! Contacts table definition.
//!
//! # Invariants
//! - Creation is idempotent (`CREATE TABLE IF NOT EXISTS`).
//! - `REQUIRED_COLUMNS` mirrors the column list in `schema.sql`.

use crate::db::DbResult;
use rusqlite::Connection;

/// Name of the single table owned by the store.
pub const CONTACTS_TABLE: &str = "contacts";

/// Columns every usable `contacts` table must carry.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "id", "first", "last", "twitter", "notes", "favorite", "avatar",
];

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Creates the `contacts` table when it is absent.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Returns whether `table` exists in the main schema.
pub fn table_exists(conn: &Connection, table: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

/// Returns the column names of `table` in declaration order.
pub fn table_columns(conn: &Connection, table: &str) -> DbResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let columns = stmt
        .query_map([table], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(columns)
}
