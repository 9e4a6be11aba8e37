/// `habitgrid set` - edit a habit's display attributes

use crate::cli::resolve_habit;
use crate::domain::{Category, HabitUpdate};
use crate::storage::SnapshotStore;
use crate::store::HabitStore;
use crate::AppError;

pub fn run<S: SnapshotStore>(
    store: &mut HabitStore<S>,
    reference: &str,
    name: Option<String>,
    category: Option<Category>,
    icon: Option<String>,
) -> Result<(), AppError> {
    let id = resolve_habit(store, reference)?;
    let habit = store.update_habit(
        &id,
        HabitUpdate {
            name,
            category,
            icon,
        },
    )?;
    println!(
        "Updated {} {} [{}]",
        habit.icon,
        habit.name,
        habit.category.display_name()
    );
    Ok(())
}
