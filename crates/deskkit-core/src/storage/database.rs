//! SQLite-backed key-value storage.
//!
//! Every widget collection and timer record lives as one JSON text row in
//! the `kv` table, keyed by the names in [`keys`](super::keys).

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use super::backend::KvBackend;
use crate::error::StorageError;

/// Default database file name inside the data directory.
pub const DEFAULT_DB_FILE: &str = "deskkit.db";

/// SQLite database holding the kv table.
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Open (or create) the database at an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or migrated.
    pub fn open_at(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        tracing::debug!(path = %path.display(), "opened sqlite store");
        Ok(db)
    }

    #[cfg(test)]
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key        TEXT PRIMARY KEY,
                value      TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            );",
        )?;
        Ok(())
    }
}

impl KvBackend for SqliteBackend {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?1, ?2, datetime('now'))",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_raw(&self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv ORDER BY key")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut keys = Vec::new();
        for row in rows {
            keys.push(row?);
        }
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kv_store() {
        let db = SqliteBackend::open_memory().unwrap();
        assert!(db.get_raw("test").unwrap().is_none());
        db.set_raw("test", "hello").unwrap();
        assert_eq!(db.get_raw("test").unwrap().unwrap(), "hello");
    }

    #[test]
    fn set_replaces_previous_value() {
        let db = SqliteBackend::open_memory().unwrap();
        db.set_raw("todos", "[]").unwrap();
        db.set_raw("todos", "[1]").unwrap();
        assert_eq!(db.get_raw("todos").unwrap().as_deref(), Some("[1]"));
        assert_eq!(db.keys().unwrap(), vec!["todos".to_string()]);
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let db = SqliteBackend::open_memory().unwrap();
        db.remove_raw("never-written").unwrap();
        db.set_raw("notes", "[]").unwrap();
        db.remove_raw("notes").unwrap();
        assert!(db.get_raw("notes").unwrap().is_none());
    }

    #[test]
    fn persists_across_reopen() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("store.db");
        {
            let db = SqliteBackend::open_at(&path).unwrap();
            db.set_raw("stopwatch_lastTime", "4200").unwrap();
        }
        let db = SqliteBackend::open_at(&path).unwrap();
        assert_eq!(db.get_raw("stopwatch_lastTime").unwrap().as_deref(), Some("4200"));
    }
}
