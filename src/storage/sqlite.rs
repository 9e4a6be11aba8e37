/// SQLite implementation of the snapshot store
///
/// The whole application state is one JSON blob, so the schema is a single
/// key/value table with the blob stored under a fixed key.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::PathBuf;

use crate::storage::{SnapshotStore, StorageError, STORAGE_KEY};

/// SQLite-backed snapshot storage
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file and ensure the schema exists
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS snapshots (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        tracing::info!("SQLite snapshot store initialized at: {:?}", db_path);

        Ok(Self { conn })
    }
}

impl SnapshotStore for SqliteStore {
    fn load_snapshot(&self) -> Result<Option<String>, StorageError> {
        let blob = self
            .conn
            .query_row(
                "SELECT value FROM snapshots WHERE key = ?1",
                params![STORAGE_KEY],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(blob)
    }

    fn save_snapshot(&self, blob: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO snapshots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![STORAGE_KEY, blob],
        )?;

        tracing::debug!("Saved snapshot ({} bytes)", blob.len());
        Ok(())
    }
}
