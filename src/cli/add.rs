/// `habitgrid add` - create a new habit

use crate::domain::Category;
use crate::storage::SnapshotStore;
use crate::store::HabitStore;
use crate::AppError;

pub fn run<S: SnapshotStore>(
    store: &mut HabitStore<S>,
    name: String,
    category: Category,
    icon: Option<String>,
) -> Result<(), AppError> {
    let icon = icon.unwrap_or_else(|| "✅".to_string());
    let habit = store.create_habit(name, category, icon)?;
    println!(
        "Added {} {} [{}] ({})",
        habit.icon,
        habit.name,
        habit.category.display_name(),
        habit.id
    );
    Ok(())
}
