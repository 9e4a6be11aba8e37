/// In-memory implementation of the snapshot store
///
/// Holds the blob in a RefCell; nothing survives the process. Used by tests
/// and available for embedding the store without a database file. Saves can
/// be made to fail on demand to exercise the swallow-and-retry behavior of
/// the habit store.

use std::cell::{Cell, RefCell};

use crate::storage::{SnapshotStore, StorageError};

/// Snapshot store that keeps the blob in memory
#[derive(Default)]
pub struct MemoryStore {
    blob: RefCell<Option<String>>,
    fail_saves: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent saves fail (or succeed again)
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// The last successfully saved blob, if any
    pub fn saved_blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn load_snapshot(&self) -> Result<Option<String>, StorageError> {
        Ok(self.blob.borrow().clone())
    }

    fn save_snapshot(&self, blob: &str) -> Result<(), StorageError> {
        if self.fail_saves.get() {
            return Err(StorageError::Connection(
                "storage unavailable".to_string(),
            ));
        }
        *self.blob.borrow_mut() = Some(blob.to_string());
        Ok(())
    }
}
