/// Derived statistics over the habit collection
///
/// Everything here is a pure function of the habit list plus an explicit
/// reference date; nothing is cached or stored. These feed the insights and
/// monthly-grid views.

use chrono::NaiveDate;

use crate::domain::{Category, Habit};

/// Completions across all habits for a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySummary {
    pub completed: usize,
    pub total: usize,
}

impl DailySummary {
    /// Share of habits completed, 0.0 to 1.0
    pub fn rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

/// How many habits were completed on `date`
pub fn daily_summary(habits: &[Habit], date: NaiveDate) -> DailySummary {
    DailySummary {
        completed: habits.iter().filter(|h| h.is_completed_on(date)).count(),
        total: habits.len(),
    }
}

/// Aggregate completions for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    /// Habit-days actually completed
    pub completed: usize,
    /// Habit-days that could have been completed (elapsed days only)
    pub possible: usize,
}

impl MonthlySummary {
    pub fn rate(&self) -> f64 {
        if self.possible == 0 {
            0.0
        } else {
            self.completed as f64 / self.possible as f64
        }
    }
}

/// Completion rate for a month, counting only days up to `today`
///
/// Days after `today` contribute nothing to `possible`, so a month in
/// progress is rated against its elapsed days rather than its full length.
pub fn monthly_summary(
    habits: &[Habit],
    year: i32,
    month: u32,
    today: NaiveDate,
) -> MonthlySummary {
    let mut completed = 0;
    let mut possible = 0;

    for day in 1..=31 {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        if date > today {
            continue;
        }
        possible += habits.len();
        completed += habits.iter().filter(|h| h.is_completed_on(date)).count();
    }

    MonthlySummary {
        year,
        month,
        completed,
        possible,
    }
}

/// Habits completed on a given day, for the calendar grid
pub fn completions_on<'a>(habits: &'a [Habit], date: NaiveDate) -> Vec<&'a Habit> {
    habits.iter().filter(|h| h.is_completed_on(date)).collect()
}

/// Per-category completion picture for a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStat {
    pub category: Category,
    pub habit_count: usize,
    pub completed_today: usize,
}

impl CategoryStat {
    pub fn rate(&self) -> f64 {
        if self.habit_count == 0 {
            0.0
        } else {
            self.completed_today as f64 / self.habit_count as f64
        }
    }
}

/// Today's completion rate per category; categories with no habits are
/// omitted
pub fn category_breakdown(habits: &[Habit], today: NaiveDate) -> Vec<CategoryStat> {
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let in_category: Vec<&Habit> =
                habits.iter().filter(|h| h.category == category).collect();
            if in_category.is_empty() {
                return None;
            }
            Some(CategoryStat {
                category,
                habit_count: in_category.len(),
                completed_today: in_category
                    .iter()
                    .filter(|h| h.is_completed_on(today))
                    .count(),
            })
        })
        .collect()
}

/// Streak counts across all habits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakOverview {
    /// Habits with a nonzero current streak
    pub active: usize,
    /// Sum of all current streak lengths
    pub total_days: u64,
}

pub fn streak_overview(habits: &[Habit]) -> StreakOverview {
    StreakOverview {
        active: habits.iter().filter(|h| h.streak > 0).count(),
        total_days: habits.iter().map(|h| u64::from(h.streak)).sum(),
    }
}

/// Number of days in a calendar month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|&day| NaiveDate::from_ymd_opt(year, month, day).is_some())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HabitId;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn habit(name: &str, category: Category, dates: &[&str]) -> Habit {
        let mut habit = Habit::new(
            HabitId::new(),
            name.to_string(),
            category,
            "x".to_string(),
        )
        .unwrap();
        for date in dates {
            habit.toggle_completion(d(date));
        }
        habit
    }

    #[test]
    fn test_daily_summary() {
        let habits = vec![
            habit("a", Category::Health, &["2024-01-02"]),
            habit("b", Category::Learning, &["2024-01-01", "2024-01-02"]),
            habit("c", Category::Learning, &[]),
        ];
        let summary = daily_summary(&habits, d("2024-01-02"));
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.total, 3);
        assert!((summary.rate() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_daily_summary_with_no_habits() {
        let summary = daily_summary(&[], d("2024-01-02"));
        assert_eq!(summary.rate(), 0.0);
    }

    #[test]
    fn test_monthly_summary_counts_only_elapsed_days() {
        let habits = vec![habit("a", Category::Health, &["2024-01-01", "2024-01-02"])];
        // Today is Jan 2: two elapsed days, both completed.
        let summary = monthly_summary(&habits, 2024, 1, d("2024-01-02"));
        assert_eq!(summary.possible, 2);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.rate(), 1.0);
    }

    #[test]
    fn test_monthly_summary_for_past_month_uses_full_month() {
        let habits = vec![habit("a", Category::Health, &["2024-01-31"])];
        let summary = monthly_summary(&habits, 2024, 1, d("2024-03-15"));
        assert_eq!(summary.possible, 31);
        assert_eq!(summary.completed, 1);
    }

    #[test]
    fn test_completions_on() {
        let habits = vec![
            habit("a", Category::Health, &["2024-01-02"]),
            habit("b", Category::Learning, &[]),
        ];
        let done = completions_on(&habits, d("2024-01-02"));
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].name, "a");
    }

    #[test]
    fn test_category_breakdown_skips_empty_categories() {
        let habits = vec![
            habit("a", Category::Health, &["2024-01-02"]),
            habit("b", Category::Health, &[]),
            habit("c", Category::Learning, &["2024-01-02"]),
        ];
        let breakdown = category_breakdown(&habits, d("2024-01-02"));
        assert_eq!(breakdown.len(), 2);

        let health = &breakdown[0];
        assert_eq!(health.category, Category::Health);
        assert_eq!(health.habit_count, 2);
        assert_eq!(health.completed_today, 1);
        assert_eq!(health.rate(), 0.5);

        let learning = &breakdown[1];
        assert_eq!(learning.category, Category::Learning);
        assert_eq!(learning.rate(), 1.0);
    }

    #[test]
    fn test_streak_overview() {
        let mut active = habit("a", Category::Health, &[]);
        active.streak = 4;
        let mut broken = habit("b", Category::Health, &[]);
        broken.streak = 0;
        let overview = streak_overview(&[active, broken]);
        assert_eq!(overview.active, 1);
        assert_eq!(overview.total_days, 4);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 2), 29); // leap year
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
    }
}
