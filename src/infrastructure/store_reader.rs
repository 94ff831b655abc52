//! `SQLite` reader for Cursor's state.vscdb files.
//!
//! Chat data lives in the `ItemTable` key-value table, with each value a
//! JSON-encoded document.

use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, OptionalExtension};

use crate::domain::{AppError, Result};

/// Key holding the JSON array of user prompts.
pub const PROMPTS_KEY: &str = "aiService.prompts";

/// Key holding the JSON array of AI generations.
pub const GENERATIONS_KEY: &str = "aiService.generations";

/// `SQLite` reader for Cursor state databases.
pub struct StateDbReader {
    conn: Connection,
}

impl StateDbReader {
    /// Opens a state database in read-only mode.
    ///
    /// # Errors
    /// Returns error if database cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let conn = Connection::open_with_flags(path, flags).map_err(AppError::database)?;

        // Optimize for read-only access
        conn.execute_batch(
            "PRAGMA query_only = ON;
             PRAGMA temp_store = MEMORY;",
        )
        .map_err(AppError::database)?;

        Ok(Self { conn })
    }

    /// Number of rows stored under `key`.
    ///
    /// # Errors
    /// Returns error if the query fails (e.g. the file is not a state
    /// database at all).
    pub fn count_for_key(&self, key: &str) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM ItemTable WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .map_err(AppError::database)
    }

    /// Fetches the value stored under `key`, if any.
    ///
    /// Values are stored as TEXT or BLOB depending on the writing Cursor
    /// version; both are decoded as UTF-8.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub fn value_for_key(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM ItemTable WHERE key = ?1", [key], |row| {
                let value = match row.get_ref(0)? {
                    ValueRef::Blob(b) => String::from_utf8_lossy(b).into_owned(),
                    ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
                    _ => String::new(),
                };
                Ok(value)
            })
            .optional()
            .map_err(AppError::database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn create_store(path: &Path, entries: &[(&str, &str)]) {
        let conn = Connection::open(path).unwrap();
        conn.execute(
            "CREATE TABLE ItemTable (key TEXT UNIQUE ON CONFLICT REPLACE, value BLOB)",
            [],
        )
        .unwrap();
        for (key, value) in entries {
            conn.execute(
                "INSERT INTO ItemTable (key, value) VALUES (?1, ?2)",
                (key, value),
            )
            .unwrap();
        }
    }

    #[test]
    fn value_for_key_returns_stored_value() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("state.vscdb");
        create_store(&db_path, &[(PROMPTS_KEY, r#"[{"text":"hello"}]"#)]);

        let reader = StateDbReader::open(&db_path).unwrap();
        let value = reader.value_for_key(PROMPTS_KEY).unwrap();
        assert_eq!(value.as_deref(), Some(r#"[{"text":"hello"}]"#));
    }

    #[test]
    fn value_for_key_missing_returns_none() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("state.vscdb");
        create_store(&db_path, &[]);

        let reader = StateDbReader::open(&db_path).unwrap();
        assert!(reader.value_for_key(PROMPTS_KEY).unwrap().is_none());
    }

    #[test]
    fn value_for_key_decodes_blob_values() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("state.vscdb");

        let conn = Connection::open(&db_path).unwrap();
        conn.execute(
            "CREATE TABLE ItemTable (key TEXT UNIQUE ON CONFLICT REPLACE, value BLOB)",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO ItemTable (key, value) VALUES (?1, ?2)",
            (GENERATIONS_KEY, b"[]".to_vec()),
        )
        .unwrap();
        drop(conn);

        let reader = StateDbReader::open(&db_path).unwrap();
        assert_eq!(reader.value_for_key(GENERATIONS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn count_for_key_counts_rows() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("state.vscdb");
        create_store(&db_path, &[(PROMPTS_KEY, "[]")]);

        let reader = StateDbReader::open(&db_path).unwrap();
        assert_eq!(reader.count_for_key(PROMPTS_KEY).unwrap(), 1);
        assert_eq!(reader.count_for_key(GENERATIONS_KEY).unwrap(), 0);
    }

    #[test]
    fn count_for_key_fails_without_item_table() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("state.vscdb");
        // Valid SQLite file, but not a state database.
        let conn = Connection::open(&db_path).unwrap();
        conn.execute("CREATE TABLE other (x INTEGER)", []).unwrap();
        drop(conn);

        let reader = StateDbReader::open(&db_path).unwrap();
        assert!(reader.count_for_key(PROMPTS_KEY).is_err());
    }
}
