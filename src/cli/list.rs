/// `habitgrid list` - show all habits with their streaks

use crate::domain::streak;
use crate::storage::SnapshotStore;
use crate::store::HabitStore;
use crate::AppError;

pub fn run<S: SnapshotStore>(store: &HabitStore<S>) -> Result<(), AppError> {
    if store.habits().is_empty() {
        println!("No habits yet. Add one with `habitgrid add <name>`.");
        return Ok(());
    }

    let today = streak::today();
    for habit in store.habits() {
        let done_today = if habit.is_completed_on(today) { "✓" } else { " " };
        println!(
            "[{}] {} {} ({}) - streak {}, best {} - {}",
            done_today,
            habit.icon,
            habit.name,
            habit.category.display_name(),
            habit.streak,
            habit.best_streak,
            habit.id
        );
    }
    Ok(())
}
