/// Command handlers for the habitgrid binary
///
/// Each subcommand gets its own module. Handlers are plain functions over
/// the habit store; argument parsing lives in main.rs and everything here
/// just mutates state and prints.

pub mod add;
pub mod insights;
pub mod list;
pub mod log;
pub mod remove;
pub mod update;

use chrono::NaiveDate;

use crate::domain::{DomainError, HabitId};
use crate::storage::SnapshotStore;
use crate::store::HabitStore;
use crate::AppError;

/// Parse a `YYYY-MM-DD` argument
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDate(format!("Expected YYYY-MM-DD, got '{}'", s)))
}

/// Resolve a habit reference: a full id, or an unambiguous name match
pub(crate) fn resolve_habit<S: SnapshotStore>(
    store: &HabitStore<S>,
    reference: &str,
) -> Result<HabitId, AppError> {
    if let Ok(id) = HabitId::from_string(reference) {
        if store.habit(&id).is_some() {
            return Ok(id);
        }
    }

    let needle = reference.trim().to_lowercase();
    let mut matches = store
        .habits()
        .iter()
        .filter(|h| h.name.to_lowercase() == needle);

    match (matches.next(), matches.next()) {
        (Some(habit), None) => Ok(habit.id.clone()),
        (Some(_), Some(_)) => Err(AppError::AmbiguousHabit(reference.to_string())),
        (None, _) => Err(crate::store::StoreError::HabitNotFound {
            habit_id: reference.to_string(),
        }
        .into()),
    }
}
