/// The habit store: canonical in-memory state and its operation set
///
/// Owns the habit list and the achievement catalog for the whole session.
/// Constructed once from the persistence collaborator's snapshot, mutated
/// only through the operations here, and saved back after every change.
/// Execution is single-threaded and synchronous; each operation runs to
/// completion (mutate, recompute, unlock-check, persist) before the next.

use chrono::{NaiveDate, Utc};
use thiserror::Error;

use crate::domain::{
    achievement, streak, Achievement, AchievementCategory, Category, DomainError, Habit, HabitId,
    HabitUpdate,
};
use crate::storage::{Snapshot, SnapshotStore};

/// Errors surfaced by store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Habit not found: {habit_id}")]
    HabitNotFound { habit_id: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Pluggable unique-id source
///
/// Contract: produces a value no other current habit holds. Any
/// collision-resistant generator qualifies; the store retries on the rare
/// collision, so a counter works as well as randomness.
pub trait IdGenerator {
    fn generate(&self) -> HabitId;
}

/// Default generator: random UUIDv4
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> HabitId {
        HabitId::new()
    }
}

/// Owner of the habit and achievement collections
pub struct HabitStore<S: SnapshotStore> {
    habits: Vec<Habit>,
    achievements: Vec<Achievement>,
    storage: S,
    ids: Box<dyn IdGenerator>,
}

impl<S: SnapshotStore> HabitStore<S> {
    /// Build the store from the storage collaborator's snapshot
    ///
    /// A missing, unreadable, or partially corrupt snapshot falls back to
    /// safe defaults (empty habit list, full default catalog); opening the
    /// store never fails.
    pub fn open(storage: S) -> Self {
        Self::with_id_generator(storage, Box::new(UuidIdGenerator))
    }

    pub fn with_id_generator(storage: S, ids: Box<dyn IdGenerator>) -> Self {
        let snapshot = match storage.load_snapshot() {
            Ok(Some(blob)) => Snapshot::from_json(&blob),
            Ok(None) => Snapshot::default(),
            Err(error) => {
                tracing::warn!("Failed to load snapshot, starting fresh: {}", error);
                Snapshot::default()
            }
        };

        tracing::info!(
            "Store opened with {} habits, {} achievements",
            snapshot.habits.len(),
            snapshot.achievements.len()
        );

        Self {
            habits: snapshot.habits,
            achievements: snapshot.achievements,
            storage,
            ids,
        }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn habit(&self, id: &HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == *id)
    }

    /// Create a new habit
    ///
    /// Creating the very first habit unlocks the "first habit" achievement;
    /// later creations never re-trigger it.
    pub fn create_habit(
        &mut self,
        name: String,
        category: Category,
        icon: String,
    ) -> Result<&Habit, StoreError> {
        let was_empty = self.habits.is_empty();

        let habit = Habit::new(self.unique_id(), name, category, icon)?;
        tracing::debug!("Created habit: {} ({})", habit.name, habit.id);
        self.habits.push(habit);

        if was_empty {
            self.unlock_achievement(achievement::FIRST_HABIT);
        }

        self.persist();
        Ok(&self.habits[self.habits.len() - 1])
    }

    /// Delete a habit; unknown ids are a no-op
    ///
    /// Achievements already unlocked through this habit stay unlocked.
    pub fn delete_habit(&mut self, id: &HabitId) {
        let before = self.habits.len();
        self.habits.retain(|h| h.id != *id);
        if self.habits.len() != before {
            tracing::debug!("Deleted habit {}", id);
            self.persist();
        }
    }

    /// Toggle the completion mark for one date of one habit
    ///
    /// Adds the date if absent, removes it if present, then recomputes the
    /// streak cache and runs the streak-achievement unlock rules against
    /// the freshly computed value. Unknown ids are an error, not a silent
    /// no-op: the caller must not assume a state change occurred.
    pub fn toggle_completion(
        &mut self,
        id: &HabitId,
        date: NaiveDate,
    ) -> Result<&Habit, StoreError> {
        self.toggle_completion_at(id, date, streak::today())
    }

    /// Toggle with an explicit "today", for deterministic callers
    pub fn toggle_completion_at(
        &mut self,
        id: &HabitId,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<&Habit, StoreError> {
        let index = self
            .habits
            .iter()
            .position(|h| h.id == *id)
            .ok_or_else(|| StoreError::HabitNotFound {
                habit_id: id.to_string(),
            })?;

        let habit = &mut self.habits[index];
        let now_completed = habit.toggle_completion(date);
        habit.recalculate_streaks(today);
        let new_streak = habit.streak;
        tracing::debug!(
            "Toggled {} on {}: completed={}, streak={}",
            id,
            date,
            now_completed,
            new_streak
        );

        self.check_streak_achievements(new_streak);

        self.persist();
        Ok(&self.habits[index])
    }

    /// Merge display-attribute edits into a habit
    ///
    /// Does not touch completion history, streaks, or achievements.
    pub fn update_habit(
        &mut self,
        id: &HabitId,
        update: HabitUpdate,
    ) -> Result<&Habit, StoreError> {
        let index = self
            .habits
            .iter()
            .position(|h| h.id == *id)
            .ok_or_else(|| StoreError::HabitNotFound {
                habit_id: id.to_string(),
            })?;

        self.habits[index].apply_update(update)?;
        self.persist();
        Ok(&self.habits[index])
    }

    /// Unlock every locked streak achievement the new streak satisfies
    fn check_streak_achievements(&mut self, new_streak: u32) {
        let now = Utc::now();
        for achievement in &mut self.achievements {
            if achievement.category == AchievementCategory::Streak
                && new_streak >= achievement.requirement
                && achievement.unlock(now)
            {
                tracing::info!("Achievement unlocked: {}", achievement.title);
            }
        }
    }

    fn unlock_achievement(&mut self, id: &str) {
        let now = Utc::now();
        if let Some(achievement) = self.achievements.iter_mut().find(|a| a.id == id) {
            if achievement.unlock(now) {
                tracing::info!("Achievement unlocked: {}", achievement.title);
            }
        }
    }

    fn unique_id(&self) -> HabitId {
        loop {
            let id = self.ids.generate();
            if !self.habits.iter().any(|h| h.id == id) {
                return id;
            }
        }
    }

    /// Save the current state; failures are logged and swallowed
    ///
    /// In-memory state stays authoritative. The next successful save after
    /// a failure writes the full snapshot, so nothing is lost for good
    /// unless the process exits while storage is down.
    fn persist(&self) {
        let snapshot = Snapshot {
            habits: self.habits.clone(),
            achievements: self.achievements.clone(),
        };
        let result = snapshot
            .to_json()
            .and_then(|blob| self.storage.save_snapshot(&blob));
        if let Err(error) = result {
            tracing::warn!("Failed to save snapshot, keeping in-memory state: {}", error);
        }
    }
}
