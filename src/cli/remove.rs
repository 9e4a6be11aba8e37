/// `habitgrid remove` - delete a habit

use crate::cli::resolve_habit;
use crate::storage::SnapshotStore;
use crate::store::{HabitStore, StoreError};
use crate::AppError;

pub fn run<S: SnapshotStore>(
    store: &mut HabitStore<S>,
    reference: &str,
) -> Result<(), AppError> {
    // Deletion itself is idempotent; resolving first just gives the user a
    // clear message when the reference matches nothing.
    match resolve_habit(store, reference) {
        Ok(id) => {
            let name = store
                .habit(&id)
                .map(|h| h.name.clone())
                .unwrap_or_else(|| reference.to_string());
            store.delete_habit(&id);
            println!("Removed '{}'", name);
            Ok(())
        }
        Err(AppError::Store(StoreError::HabitNotFound { .. })) => {
            println!("No habit matches '{}'; nothing removed", reference);
            Ok(())
        }
        Err(error) => Err(error),
    }
}
