/// Habit entity and related functionality
///
/// This module defines the core Habit struct representing something the user
/// wants to do regularly, along with validation and the completion-date set.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{streak, Category, DomainError, HabitId};

/// A habit the user is tracking
///
/// `completed_dates` is logically a set of calendar dates; it is kept sorted
/// ascending with no duplicates. `streak` and `best_streak` are a
/// denormalized cache of the streak engine's output: recomputed after every
/// completion toggle, and allowed to go stale between mutations (a streak
/// quietly expires at midnight with no write to trigger a recompute).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier, assigned at creation
    pub id: HabitId,
    /// Display name (e.g. "Morning Run")
    pub name: String,
    /// Category for grouping and statistics
    pub category: Category,
    /// Short display glyph, cosmetic only
    pub icon: String,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
    /// Calendar dates the habit was marked done, sorted ascending
    #[serde(default)]
    pub completed_dates: Vec<NaiveDate>,
    /// Current consecutive-day streak ending at today or yesterday
    #[serde(default)]
    pub streak: u32,
    /// Longest streak ever observed; never decreases
    #[serde(default)]
    pub best_streak: u32,
}

impl Habit {
    /// Create a new habit with validation
    pub fn new(
        id: HabitId,
        name: String,
        category: Category,
        icon: String,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;

        Ok(Self {
            id,
            name: name.trim().to_string(),
            category,
            icon,
            created_at: Utc::now(),
            completed_dates: Vec::new(),
            streak: 0,
            best_streak: 0,
        })
    }

    /// Whether the habit was marked done on the given date
    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completed_dates.binary_search(&date).is_ok()
    }

    /// Toggle the completion mark for a date
    ///
    /// Removes the date if present, inserts it (keeping the set sorted)
    /// otherwise. Returns true if the date is now marked complete. Callers
    /// are expected to recompute the streak cache afterwards.
    pub fn toggle_completion(&mut self, date: NaiveDate) -> bool {
        match self.completed_dates.binary_search(&date) {
            Ok(index) => {
                self.completed_dates.remove(index);
                false
            }
            Err(index) => {
                self.completed_dates.insert(index, date);
                true
            }
        }
    }

    /// Recompute the cached streak fields from the completion set
    ///
    /// `best_streak` is monotonic: un-completing a date never lowers it,
    /// even if the run it came from no longer exists in the history.
    pub fn recalculate_streaks(&mut self, today: NaiveDate) {
        let summary = streak::calculate(&self.completed_dates, today);
        self.streak = summary.current;
        self.best_streak = self.best_streak.max(summary.best);
    }

    /// Apply a partial update to display attributes
    ///
    /// Completion history and streak caches are untouched; edits here never
    /// trigger streak or achievement recomputation.
    pub fn apply_update(&mut self, update: HabitUpdate) -> Result<(), DomainError> {
        if let Some(ref new_name) = update.name {
            Self::validate_name(new_name)?;
        }

        if let Some(new_name) = update.name {
            self.name = new_name.trim().to_string();
        }
        if let Some(new_category) = update.category {
            self.category = new_category;
        }
        if let Some(new_icon) = update.icon {
            self.icon = new_icon;
        }

        Ok(())
    }

    /// Validate habit name according to business rules
    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be longer than 100 characters".to_string(),
            ));
        }

        Ok(())
    }
}

/// Partial set of habit fields for an update operation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HabitUpdate {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub icon: Option<String>,
}
