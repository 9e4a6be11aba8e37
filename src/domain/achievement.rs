/// Achievement entity and the default catalog
///
/// Achievements come from a fixed catalog seeded at first run; users never
/// create them. Unlocking is one-way: once `unlocked_at` is set it is never
/// cleared or overwritten, even if the streak that triggered it later drops.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::AchievementCategory;

/// Catalog id of the achievement granted for creating the first habit
pub const FIRST_HABIT: &str = "first-habit";

/// An unlockable milestone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Stable id from the fixed catalog
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Numeric threshold (streak length or count) that triggers unlock
    pub requirement: u32,
    pub category: AchievementCategory,
    /// Set on first unlock; immutable afterwards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Achievement {
    pub fn is_unlocked(&self) -> bool {
        self.unlocked_at.is_some()
    }

    /// Unlock at the given instant, if not already unlocked
    ///
    /// Returns true only on the transition from locked to unlocked, so
    /// callers can tell a fresh unlock from a repeat trigger.
    pub fn unlock(&mut self, now: DateTime<Utc>) -> bool {
        if self.unlocked_at.is_some() {
            return false;
        }
        self.unlocked_at = Some(now);
        true
    }
}

/// The fixed default catalog, in display order
pub fn default_catalog() -> Vec<Achievement> {
    fn entry(
        id: &str,
        title: &str,
        description: &str,
        icon: &str,
        requirement: u32,
        category: AchievementCategory,
    ) -> Achievement {
        Achievement {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            requirement,
            category,
            unlocked_at: None,
        }
    }

    vec![
        entry(
            FIRST_HABIT,
            "Getting Started",
            "Create your first habit",
            "🌱",
            1,
            AchievementCategory::Completion,
        ),
        entry(
            "streak-3",
            "3-Day Streak",
            "Complete a habit for 3 days in a row",
            "🔥",
            3,
            AchievementCategory::Streak,
        ),
        entry(
            "streak-7",
            "Week Warrior",
            "Complete a habit for 7 days in a row",
            "⭐",
            7,
            AchievementCategory::Streak,
        ),
        entry(
            "streak-30",
            "Monthly Master",
            "Complete a habit for 30 days in a row",
            "👑",
            30,
            AchievementCategory::Streak,
        ),
        entry(
            "consistency-90",
            "Consistency Champion",
            "Maintain 90% completion rate for a month",
            "💎",
            90,
            AchievementCategory::Consistency,
        ),
    ]
}
