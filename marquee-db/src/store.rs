use std::path::Path;
use std::sync::Mutex;

use marquee_core::{KeyValueStore, StorageError};
use rusqlite::{Connection, OptionalExtension, params};

use crate::schema::{self, SchemaError};

/// A [`KeyValueStore`] persisted in a single SQLite table.
///
/// Each call runs one statement on the shared connection. The connection lock
/// is held only for that statement, so a get followed by a set from a caller
/// is not atomic.
pub struct SqliteKeyValueStore {
    conn: Mutex<Connection>,
}

impl SqliteKeyValueStore {
    /// Open (or create) a store at `path`.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = schema::open_database(path)?;
        log::debug!("Opened key-value store at {}", path.display());
        Ok(Self::from_connection(conn))
    }

    /// Open a throwaway in-memory store.
    pub fn open_memory() -> Result<Self, StorageError> {
        Ok(Self::from_connection(schema::open_memory()?))
    }

    /// Wrap a connection that already has the schema applied.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// All stored keys, sorted.
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT key FROM kv ORDER BY key").map_err(sqlite_error)?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(sqlite_error)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(sqlite_error)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StorageError> {
        self.conn
            .lock()
            .map_err(|_| StorageError::backend("SQLite connection lock poisoned"))
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = self.lock()?;
        conn.query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
            row.get::<_, String>(0)
        })
        .optional()
        .map_err(sqlite_error)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET
                 value = excluded.value,
                 updated_at = excluded.updated_at",
            params![key, value],
        )
        .map_err(sqlite_error)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map_err(sqlite_error)?;
        Ok(())
    }
}

fn sqlite_error(e: rusqlite::Error) -> StorageError {
    StorageError::backend(format!("SQLite error: {e}"))
}

impl From<SchemaError> for StorageError {
    fn from(e: SchemaError) -> Self {
        StorageError::backend(e.to_string())
    }
}
