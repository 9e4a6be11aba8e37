/// `habitgrid log` - toggle a completion mark for a habit

use crate::cli::{parse_date, resolve_habit};
use crate::domain::streak;
use crate::storage::SnapshotStore;
use crate::store::HabitStore;
use crate::AppError;

pub fn run<S: SnapshotStore>(
    store: &mut HabitStore<S>,
    reference: &str,
    date: Option<String>,
) -> Result<(), AppError> {
    let id = resolve_habit(store, reference)?;
    let date = match date {
        Some(s) => parse_date(&s)?,
        None => streak::today(),
    };

    let habit = store.toggle_completion(&id, date)?;
    if habit.is_completed_on(date) {
        println!(
            "🔥 Marked '{}' done on {}. Current streak: {} day{}",
            habit.name,
            date,
            habit.streak,
            if habit.streak == 1 { "" } else { "s" }
        );
    } else {
        println!(
            "Unmarked '{}' on {}. Current streak: {} day{}",
            habit.name,
            date,
            habit.streak,
            if habit.streak == 1 { "" } else { "s" }
        );
    }
    Ok(())
}
