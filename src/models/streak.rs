//! Streak computation over a habit's completion history.
//!
//! The current streak is anchored to "today" in UTC, falling back to
//! "yesterday" when today has not been completed yet, so an open day does not
//! reset a streak the instant midnight passes. The longest streak is pure
//! history and independent of the reference instant.

use std::collections::HashSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::calendar::{parse_iso_date, InvalidDate};

/// Current and longest consecutive-day streaks, in whole days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Compute both streaks for a completion set.
///
/// `reference` supplies "now"; day-boundary decisions use its UTC calendar
/// date.
pub fn compute_streaks(completions: &HashSet<NaiveDate>, reference: DateTime<Utc>) -> StreakSummary {
    StreakSummary {
        current_streak: current_streak(completions, reference),
        longest_streak: longest_streak(completions),
    }
}

/// Parse ISO date strings and compute both streaks.
///
/// Fails fast on the first malformed date rather than producing a wrong
/// count. Duplicate and unsorted input is tolerated (collected as a set).
pub fn compute_streaks_from_iso<'a, I>(
    dates: I,
    reference: DateTime<Utc>,
) -> Result<StreakSummary, InvalidDate>
where
    I: IntoIterator<Item = &'a str>,
{
    let completions = dates
        .into_iter()
        .map(parse_iso_date)
        .collect::<Result<HashSet<NaiveDate>, InvalidDate>>()?;
    Ok(compute_streaks(&completions, reference))
}

/// Consecutive days completed, counting backward from the anchor day.
///
/// The anchor is today if completed, else yesterday if completed, else the
/// streak is broken and the count is 0.
pub(crate) fn current_streak(completions: &HashSet<NaiveDate>, reference: DateTime<Utc>) -> u32 {
    if completions.is_empty() {
        return 0;
    }

    let today = reference.date_naive();
    let yesterday = today - Duration::days(1);

    let anchor = if completions.contains(&today) {
        today
    } else if completions.contains(&yesterday) {
        yesterday
    } else {
        return 0;
    };

    let mut streak = 0;
    let mut day = anchor;
    while completions.contains(&day) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}

/// Longest run of consecutive calendar days in the history.
pub(crate) fn longest_streak(completions: &HashSet<NaiveDate>) -> u32 {
    if completions.is_empty() {
        return 0;
    }

    let mut dates: Vec<NaiveDate> = completions.iter().copied().collect();
    dates.sort_unstable();

    let mut longest = 1;
    let mut run = 1;
    for pair in dates.windows(2) {
        let gap = (pair[1] - pair[0]).num_days();
        if gap == 1 {
            run += 1;
        } else if gap > 1 {
            run = 1;
        }
        // gap 0 (duplicate calendar day): no progression, no reset
        longest = longest.max(run);
    }
    longest
}
