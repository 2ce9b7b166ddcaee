//! Grouping of completion dates into maximal consecutive runs.
//!
//! Drives calendar highlighting: a run of one day renders fully rounded, a
//! longer run renders rounded-left at its start, square in the middle and
//! rounded-right at its end. The grouping itself has no UI dependency.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Partition of a completion set by position within its consecutive run.
///
/// Every input date appears in exactly one of the four lists; each list is
/// sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeGroups {
    /// Isolated days with no adjacent completion on either side
    pub single: Vec<NaiveDate>,
    /// First day of each run of two or more consecutive days
    pub start: Vec<NaiveDate>,
    /// Interior days of runs of three or more consecutive days
    pub middle: Vec<NaiveDate>,
    /// Last day of each run of two or more consecutive days
    pub end: Vec<NaiveDate>,
}

impl DateRangeGroups {
    /// Total number of dates across all four roles.
    pub fn len(&self) -> usize {
        self.single.len() + self.start.len() + self.middle.len() + self.end.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition a completion set into maximal consecutive runs.
///
/// A gap of exactly one calendar day continues the current run; any other
/// gap closes it. The final run is closed after the scan.
pub fn group_consecutive_dates(completions: &HashSet<NaiveDate>) -> DateRangeGroups {
    let mut dates: Vec<NaiveDate> = completions.iter().copied().collect();
    dates.sort_unstable();

    let mut groups = DateRangeGroups::default();
    let mut run: Vec<NaiveDate> = Vec::new();

    for date in dates {
        if let Some(&last) = run.last() {
            if (date - last).num_days() != 1 {
                close_run(&mut groups, &run);
                run.clear();
            }
        }
        run.push(date);
    }
    close_run(&mut groups, &run);

    groups
}

fn close_run(groups: &mut DateRangeGroups, run: &[NaiveDate]) {
    match run {
        [] => {}
        [only] => groups.single.push(*only),
        [first, interior @ .., last] => {
            groups.start.push(*first);
            groups.middle.extend_from_slice(interior);
            groups.end.push(*last);
        }
    }
}
