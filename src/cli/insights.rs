/// `habitgrid stats`, `habitgrid month`, `habitgrid achievements`
///
/// Read-only views over the store: today's progress, the monthly completion
/// grid, per-category breakdown, and the achievement catalog.

use chrono::Datelike;

use crate::domain::streak;
use crate::stats;
use crate::storage::SnapshotStore;
use crate::store::HabitStore;
use crate::AppError;

/// Overall progress: today, this month, streaks, categories
pub fn stats<S: SnapshotStore>(store: &HabitStore<S>) -> Result<(), AppError> {
    let habits = store.habits();
    if habits.is_empty() {
        println!("Add your first habit to see progress insights.");
        return Ok(());
    }

    let today = streak::today();
    let daily = stats::daily_summary(habits, today);
    println!(
        "Today: {}/{} habits completed ({:.0}%)",
        daily.completed,
        daily.total,
        daily.rate() * 100.0
    );

    let monthly = stats::monthly_summary(habits, today.year(), today.month(), today);
    println!("This month: {:.0}% completion rate", monthly.rate() * 100.0);

    let overview = stats::streak_overview(habits);
    println!(
        "Active streaks: {} ({} total streak days)",
        overview.active, overview.total_days
    );

    let breakdown = stats::category_breakdown(habits, today);
    if !breakdown.is_empty() {
        println!("\nCategory performance today:");
        for stat in breakdown {
            println!(
                "  {:<13} {}/{} ({:.0}%)",
                stat.category.display_name(),
                stat.completed_today,
                stat.habit_count,
                stat.rate() * 100.0
            );
        }
    }
    Ok(())
}

/// Completion grid for one calendar month
pub fn month<S: SnapshotStore>(
    store: &HabitStore<S>,
    year: Option<i32>,
    month: Option<u32>,
) -> Result<(), AppError> {
    let today = streak::today();
    let year = year.unwrap_or_else(|| today.year());
    let month = month.unwrap_or_else(|| today.month());

    let habits = store.habits();
    let summary = stats::monthly_summary(habits, year, month, today);
    println!(
        "{:04}-{:02}: {:.0}% complete, {} habit{} tracked",
        year,
        month,
        summary.rate() * 100.0,
        habits.len(),
        if habits.len() == 1 { "" } else { "s" }
    );

    for day in 1..=stats::days_in_month(year, month) {
        let Some(date) = chrono::NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        let done = stats::completions_on(habits, date);
        if done.is_empty() {
            continue;
        }
        let names: Vec<&str> = done.iter().map(|h| h.name.as_str()).collect();
        println!("  {:02}: {}/{} - {}", day, done.len(), habits.len(), names.join(", "));
    }
    Ok(())
}

/// The achievement catalog with unlock state
pub fn achievements<S: SnapshotStore>(store: &HabitStore<S>) -> Result<(), AppError> {
    for achievement in store.achievements() {
        match achievement.unlocked_at {
            Some(at) => println!(
                "{} {} - {} (unlocked {})",
                achievement.icon,
                achievement.title,
                achievement.description,
                at.format("%Y-%m-%d")
            ),
            None => println!(
                "🔒 {} - {}",
                achievement.title, achievement.description
            ),
        }
    }
    Ok(())
}
