/// Core types and enums used throughout the domain layer
///
/// This module defines the fundamental types like HabitId and the category
/// enums used by Habit and Achievement.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::DomainError;

/// Unique identifier for a habit
///
/// This is a wrapper around UUID to provide type safety - a habit id cannot
/// be confused with any other string floating through the system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(pub Uuid);

impl HabitId {
    /// Generate a new random habit ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a habit ID from a string (useful for snapshot loading and CLI input)
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for HabitId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Life areas a habit can belong to
///
/// The set is fixed; category-based statistics group habits by these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Exercise, diet, sleep
    Health,
    /// Work and focus habits
    Productivity,
    /// Meditation, reflection, self-care
    Wellness,
    /// Studying and skill building
    Learning,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 4] = [
        Category::Health,
        Category::Productivity,
        Category::Wellness,
        Category::Learning,
    ];

    /// Get the display name for this category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Health => "Health",
            Category::Productivity => "Productivity",
            Category::Wellness => "Wellness",
            Category::Learning => "Learning",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Health => "health",
            Category::Productivity => "productivity",
            Category::Wellness => "wellness",
            Category::Learning => "learning",
        };
        f.write_str(s)
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "health" => Ok(Category::Health),
            "productivity" => Ok(Category::Productivity),
            "wellness" => Ok(Category::Wellness),
            "learning" => Ok(Category::Learning),
            other => Err(DomainError::InvalidCategory(other.to_string())),
        }
    }
}

/// Kind of milestone an achievement rewards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    /// Consecutive-day streak thresholds
    Streak,
    /// Completion-count milestones (e.g. creating the first habit)
    Completion,
    /// Sustained completion-rate milestones
    Consistency,
}
