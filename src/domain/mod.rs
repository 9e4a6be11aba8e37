/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Habit, Achievement) and the pure
/// streak engine, along with their validation rules.

pub mod achievement;
pub mod habit;
pub mod streak;
pub mod types;

// Re-export public types for easy access
pub use achievement::*;
pub use habit::*;
pub use streak::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Unknown category: {0}")]
    InvalidCategory(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
