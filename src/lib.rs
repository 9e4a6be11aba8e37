/// Public library interface for habitgrid
///
/// Exposes the domain types, the habit store, the snapshot storage backends,
/// and the derived statistics so the CLI binary and tests share one surface.

use thiserror::Error;

pub mod cli;
pub mod domain;
pub mod stats;
pub mod storage;
pub mod store;

pub use domain::{
    Achievement, AchievementCategory, Category, DomainError, Habit, HabitId, HabitUpdate,
    StreakSummary,
};
pub use storage::{MemoryStore, Snapshot, SnapshotStore, SqliteStore, StorageError};
pub use store::{HabitStore, IdGenerator, StoreError, UuidIdGenerator};

/// Errors that can reach the binary's top level
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("'{0}' matches more than one habit; use the id instead")]
    AmbiguousHabit(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
