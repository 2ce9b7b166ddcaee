//! Property tests for the streak/grouping engine.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use habits_rust::models::{compute_streaks, group_consecutive_dates};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid base date")
}

fn completion_set() -> impl Strategy<Value = HashSet<NaiveDate>> {
    // Offsets spanning a bit over a year so runs regularly cross month and
    // year boundaries
    prop::collection::hash_set(0i64..400, 0..60)
        .prop_map(|offsets| offsets.into_iter().map(|o| base_date() + Duration::days(o)).collect())
}

proptest! {
    #[test]
    fn prop_grouping_partitions_input_exactly(completions in completion_set()) {
        let groups = group_consecutive_dates(&completions);

        let mut union: Vec<NaiveDate> = Vec::new();
        union.extend(&groups.single);
        union.extend(&groups.start);
        union.extend(&groups.middle);
        union.extend(&groups.end);

        // No date lost or duplicated across categories
        prop_assert_eq!(union.len(), completions.len());
        let union_set: HashSet<NaiveDate> = union.into_iter().collect();
        prop_assert_eq!(union_set, completions);
    }

    #[test]
    fn prop_grouping_is_idempotent(completions in completion_set()) {
        prop_assert_eq!(
            group_consecutive_dates(&completions),
            group_consecutive_dates(&completions)
        );
    }

    #[test]
    fn prop_starts_and_ends_pair_up(completions in completion_set()) {
        let groups = group_consecutive_dates(&completions);
        prop_assert_eq!(groups.start.len(), groups.end.len());
    }

    #[test]
    fn prop_longest_bounds_current(completions in completion_set(), extra in 0i64..30) {
        // For any reference on or after the last completion, the longest
        // streak can never be below the current one
        let last = completions.iter().max().copied().unwrap_or_else(base_date);
        let reference = Utc.from_utc_datetime(
            &(last + Duration::days(extra)).and_hms_opt(12, 0, 0).expect("valid time"),
        );

        let streaks = compute_streaks(&completions, reference);
        prop_assert!(streaks.longest_streak >= streaks.current_streak);
    }

    #[test]
    fn prop_current_zero_iff_no_anchor(completions in completion_set(), offset in 0i64..430) {
        let today = base_date() + Duration::days(offset);
        let reference =
            Utc.from_utc_datetime(&today.and_hms_opt(12, 0, 0).expect("valid time"));

        let streaks = compute_streaks(&completions, reference);
        let anchored = completions.contains(&today)
            || completions.contains(&(today - Duration::days(1)));

        prop_assert_eq!(streaks.current_streak == 0, !anchored);
    }
}
