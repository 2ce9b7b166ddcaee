//! Public API surface for the Rust backend.
//!
//! This file consolidates the identifier newtypes and the DTO types for the
//! HTTP API. All types derive Serialize/Deserialize for JSON serialization.
//! Field names follow the frontend contract (camelCase).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::models::{DateRangeGroups, StreakSummary, WeekDate};

/// Habit identifier (database primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct HabitId(pub i64);

impl HabitId {
    pub fn new(value: i64) -> Self {
        HabitId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for HabitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<HabitId> for i64 {
    fn from(id: HabitId) -> Self {
        id.0
    }
}

/// Opaque user identifier supplied by the identity provider.
///
/// Never parsed or interpreted; used only to scope habit queries to their
/// owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        UserId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Goal-completion progress for a habit with a numeric day-goal.
///
/// Absent entirely (not zero) when the habit has no goal set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    /// Goal in days
    pub goal: u32,
    /// Number of recorded completions
    pub completed_count: usize,
    /// Completion percentage, capped at 100
    pub percent: u32,
}

/// A habit together with its completion set (ISO dates).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitWithCompletions {
    pub id: HabitId,
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    /// Goal in days, if set
    pub goal: Option<u32>,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    /// Completion dates as canonical `YYYY-MM-DD` strings
    pub completions: Vec<String>,
}

/// Habits for one user, partitioned by archived flag.
///
/// Relative order within each list preserves creation time (ascending).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizedHabits {
    pub active_habits: Vec<HabitWithCompletions>,
    pub archived_habits: Vec<HabitWithCompletions>,
}

/// Detail view for a single habit: streaks plus the full completion history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitDetails {
    pub id: HabitId,
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub goal: Option<u32>,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    /// Consecutive days ending today/yesterday with no gap
    pub current_streak: u32,
    /// Longest consecutive run across the whole history
    pub longest_streak: u32,
    /// Completion dates ascending, canonical `YYYY-MM-DD`
    #[serde(rename = "completionDatesISO")]
    pub completion_dates_iso: Vec<String>,
    /// Goal progress; omitted when no goal is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<GoalProgress>,
}
