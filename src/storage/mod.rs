/// Storage layer for persisting the habit snapshot
///
/// State is persisted as a single serialized blob under a fixed key. This
/// module defines the SnapshotStore trait plus the Snapshot payload and its
/// lenient decoding; concrete backends live in the submodules.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{achievement, Achievement, Habit};

/// Key the snapshot blob is stored under
pub const STORAGE_KEY: &str = "habit-tracker-data";

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trait defining the snapshot persistence interface
///
/// The store loads once at startup and saves after every state change. A
/// failing backend never corrupts in-memory state: load failures fall back
/// to defaults and save failures are swallowed by the caller, to be retried
/// on the next mutation.
pub trait SnapshotStore {
    /// Load the persisted blob, if any
    fn load_snapshot(&self) -> Result<Option<String>, StorageError>;

    /// Persist the blob, replacing any previous one
    fn save_snapshot(&self, blob: &str) -> Result<(), StorageError>;
}

/// The persisted state: all habits plus the achievement catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default = "achievement::default_catalog")]
    pub achievements: Vec<Achievement>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            habits: Vec::new(),
            achievements: achievement::default_catalog(),
        }
    }
}

impl Snapshot {
    /// Decode a persisted blob, salvaging what is readable
    ///
    /// Each top-level key falls back independently: a malformed `habits`
    /// value yields an empty list without discarding a valid `achievements`
    /// value, and vice versa. A blob that is not JSON at all yields the
    /// full default snapshot. Loading never fails.
    pub fn from_json(blob: &str) -> Self {
        let value: serde_json::Value = match serde_json::from_str(blob) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!("Discarding unreadable snapshot: {}", error);
                return Self::default();
            }
        };

        let habits = value
            .get("habits")
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default();

        let achievements = value
            .get("achievements")
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_else(achievement::default_catalog);

        Self {
            habits,
            achievements,
        }
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(self)?)
    }
}
