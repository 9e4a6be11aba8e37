/// Pure streak engine
///
/// Turns a habit's set of completion dates into the current streak and the
/// best streak. This is the only non-trivial computation in the system, so
/// it is kept free of state and I/O: same dates plus same "today" always
/// produce the same answer.

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Result of a streak computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Consecutive-day run ending at today or yesterday; 0 if the most
    /// recent completion is older than yesterday
    pub current: u32,
    /// Longest consecutive-day run anywhere in the history
    pub best: u32,
}

impl StreakSummary {
    /// Summary for a habit with no completions
    pub fn empty() -> Self {
        Self { current: 0, best: 0 }
    }
}

/// Today's date as seen by the streak engine
///
/// The current streak depends on the wall clock, so a cached streak value is
/// allowed to go stale between mutations; callers recompute after every
/// change to the completion set.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Compute current and best streak for a set of completion dates
///
/// `dates` is logically a set; it is sorted and deduplicated here so callers
/// may pass the stored sequence directly. The best streak scans adjacent
/// day-differences: a difference of exactly one day extends the run, anything
/// else resets it. The current streak only exists if the most recent date is
/// `today` or the day before; it then walks backward through consecutive
/// days until the first gap.
pub fn calculate(dates: &[NaiveDate], today: NaiveDate) -> StreakSummary {
    if dates.is_empty() {
        return StreakSummary::empty();
    }

    let mut sorted = dates.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut best = 1u32;
    let mut run = 1u32;
    for pair in sorted.windows(2) {
        if (pair[1] - pair[0]).num_days() == 1 {
            run += 1;
        } else {
            run = 1;
        }
        best = best.max(run);
    }

    let yesterday = today - Duration::days(1);
    let last = sorted[sorted.len() - 1];
    let mut current = 0u32;
    if last == today || last == yesterday {
        current = 1;
        for pair in sorted.windows(2).rev() {
            if (pair[1] - pair[0]).num_days() == 1 {
                current += 1;
            } else {
                break;
            }
        }
    }

    StreakSummary { current, best }
}
