/// Unit tests exercising the public library surface
use habitgrid::*;

use chrono::{Duration, Local, NaiveDate};

mod public_api_tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_streak_engine_is_pure() {
        let dates = vec![d("2024-01-01"), d("2024-01-02"), d("2024-01-03")];
        let today = d("2024-01-03");
        let first = domain::streak::calculate(&dates, today);
        let second = domain::streak::calculate(&dates, today);
        assert_eq!(first, second);
        assert_eq!(first, StreakSummary { current: 3, best: 3 });
    }

    #[test]
    fn test_best_streak_dominates_current_for_any_history() {
        let histories: Vec<Vec<NaiveDate>> = vec![
            vec![],
            vec![d("2024-01-03")],
            vec![d("2023-06-01"), d("2023-06-02"), d("2024-01-02"), d("2024-01-03")],
            vec![d("2024-01-01"), d("2024-01-03")],
        ];
        for history in histories {
            let summary = domain::streak::calculate(&history, d("2024-01-03"));
            assert!(summary.best >= summary.current);
        }
    }

    #[test]
    fn test_habit_creation_through_store() {
        let mut store = HabitStore::open(MemoryStore::new());
        let habit = store
            .create_habit("Meditate".to_string(), Category::Wellness, "🧘".to_string())
            .unwrap();
        assert_eq!(habit.name, "Meditate");
        assert_eq!(habit.category, Category::Wellness);
    }

    #[test]
    fn test_blank_name_rejected_through_store() {
        let mut store = HabitStore::open(MemoryStore::new());
        assert!(store
            .create_habit("  ".to_string(), Category::Health, "x".to_string())
            .is_err());
    }

    #[test]
    fn test_default_catalog_seeded_on_fresh_store() {
        let store = HabitStore::open(MemoryStore::new());
        assert!(store.habits().is_empty());
        assert_eq!(store.achievements().len(), 5);
        assert!(store.achievements().iter().all(|a| !a.is_unlocked()));
    }

    #[test]
    fn test_toggle_recomputes_streak_cache() {
        let mut store = HabitStore::open(MemoryStore::new());
        let id = store
            .create_habit("Run".to_string(), Category::Health, "🏃".to_string())
            .unwrap()
            .id
            .clone();

        let today = Local::now().date_naive();
        store.toggle_completion(&id, today - Duration::days(1)).unwrap();
        store.toggle_completion(&id, today).unwrap();
        assert_eq!(store.habit(&id).unwrap().streak, 2);
    }
}
