/// Integration tests: full store lifecycle over on-disk SQLite
use habitgrid::*;

use chrono::{Duration, Local};
use tempfile::NamedTempFile;

mod persistence_tests {
    use super::*;

    #[test]
    fn test_full_workflow_survives_reopen() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();
        let today = Local::now().date_naive();

        let habit_id = {
            let storage = SqliteStore::new(db_path.clone()).expect("Failed to open storage");
            let mut store = HabitStore::open(storage);

            let id = store
                .create_habit("Journal".to_string(), Category::Wellness, "📓".to_string())
                .expect("create failed")
                .id
                .clone();

            for offset in (0..3).rev() {
                store
                    .toggle_completion(&id, today - Duration::days(offset))
                    .expect("toggle failed");
            }
            id
        };

        // A second session sees everything the first one wrote.
        let storage = SqliteStore::new(db_path).expect("Failed to reopen storage");
        let store = HabitStore::open(storage);

        let habit = store.habit(&habit_id).expect("habit missing after reopen");
        assert_eq!(habit.name, "Journal");
        assert_eq!(habit.completed_dates.len(), 3);
        assert_eq!(habit.streak, 3);
        assert_eq!(habit.best_streak, 3);

        let unlocked: Vec<&str> = store
            .achievements()
            .iter()
            .filter(|a| a.is_unlocked())
            .map(|a| a.id.as_str())
            .collect();
        assert!(unlocked.contains(&"first-habit"));
        assert!(unlocked.contains(&"streak-3"));
        assert!(!unlocked.contains(&"streak-7"));
    }

    #[test]
    fn test_corrupted_blob_starts_fresh_without_crashing() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        {
            let storage = SqliteStore::new(db_path.clone()).expect("Failed to open storage");
            storage
                .save_snapshot("this is not a snapshot")
                .expect("raw save failed");
        }

        let storage = SqliteStore::new(db_path).expect("Failed to reopen storage");
        let store = HabitStore::open(storage);
        assert!(store.habits().is_empty());
        assert_eq!(store.achievements().len(), 5);
    }

    #[test]
    fn test_delete_persists() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let id = {
            let storage = SqliteStore::new(db_path.clone()).expect("Failed to open storage");
            let mut store = HabitStore::open(storage);
            let id = store
                .create_habit("Stretch".to_string(), Category::Health, "🤸".to_string())
                .expect("create failed")
                .id
                .clone();
            store.delete_habit(&id);
            id
        };

        let storage = SqliteStore::new(db_path).expect("Failed to reopen storage");
        let store = HabitStore::open(storage);
        assert!(store.habit(&id).is_none());
        // First-habit unlock is monotonic: it survives the deletion.
        assert!(store
            .achievements()
            .iter()
            .find(|a| a.id == "first-habit")
            .expect("catalog entry missing")
            .is_unlocked());
    }

    #[test]
    fn test_snapshot_layout_matches_persisted_contract() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteStore::new(temp_file.path().to_path_buf()).expect("open failed");
        let mut store = HabitStore::open(storage);
        store
            .create_habit("Read".to_string(), Category::Learning, "📚".to_string())
            .expect("create failed");

        // Read the raw blob back through a second handle.
        let raw = SqliteStore::new(temp_file.path().to_path_buf())
            .expect("reopen failed")
            .load_snapshot()
            .expect("load failed")
            .expect("blob missing");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("blob is not JSON");

        let habit = &value["habits"][0];
        for key in ["id", "name", "category", "icon", "createdAt", "completedDates", "streak", "bestStreak"] {
            assert!(habit.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(habit["category"], "learning");
        assert_eq!(value["achievements"].as_array().map(|a| a.len()), Some(5));
    }
}
