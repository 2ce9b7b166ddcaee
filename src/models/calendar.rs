//! Calendar date utilities.
//!
//! Canonical date representation everywhere in this crate is the ISO
//! `YYYY-MM-DD` string computed from UTC calendar fields. Two instants inside
//! the same UTC calendar day always normalize to the same string, regardless
//! of server locale.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Canonical ISO date format used across the crate.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

const WEEKDAY_INITIALS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Error raised for strings that are not `YYYY-MM-DD` calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date: {input:?} is not a YYYY-MM-DD calendar date")]
pub struct InvalidDate {
    pub input: String,
}

/// One entry of the current calendar week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekDate {
    /// Display label, e.g. `"M, Jun 2nd"`
    pub display: String,
    /// Canonical ISO date
    pub iso: String,
    /// Single-letter weekday initial
    pub day_initial: String,
    /// Day of month as a string
    pub day_number: String,
}

/// Format an instant as its UTC calendar date, `YYYY-MM-DD` zero-padded.
pub fn to_utc_iso_date(instant: DateTime<Utc>) -> String {
    instant.date_naive().format(ISO_DATE_FORMAT).to_string()
}

/// Parse a canonical ISO date string, failing fast on malformed input.
pub fn parse_iso_date(raw: &str) -> Result<NaiveDate, InvalidDate> {
    NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT).map_err(|_| InvalidDate {
        input: raw.to_string(),
    })
}

/// English ordinal suffix for a day of month.
///
/// 11, 12 and 13 are always "th"; otherwise the suffix follows the last
/// digit (1 → "st", 2 → "nd", 3 → "rd", else "th").
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&day) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// The 7 days of the week containing `reference`, Sunday through Saturday.
///
/// The week starts on the Sunday of the UTC calendar day of `reference`.
/// Recomputed per call; callers near a day boundary pass the instant they
/// captured at the request edge.
pub fn current_week(reference: DateTime<Utc>) -> Vec<WeekDate> {
    let today = reference.date_naive();
    let start_of_week = today - Duration::days(today.weekday().num_days_from_sunday() as i64);

    (0..7)
        .map(|offset| week_date(start_of_week + Duration::days(offset)))
        .collect()
}

fn week_date(date: NaiveDate) -> WeekDate {
    let day = date.day();
    let initial = WEEKDAY_INITIALS[date.weekday().num_days_from_sunday() as usize];
    let display = format!(
        "{}, {} {}{}",
        initial,
        date.format("%b"),
        day,
        ordinal_suffix(day)
    );

    WeekDate {
        display,
        iso: date.format(ISO_DATE_FORMAT).to_string(),
        day_initial: initial.to_string(),
        day_number: day.to_string(),
    }
}
