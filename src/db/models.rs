//! Storage-layer record types.
//!
//! These mirror the rows the persistence collaborator hands back: habits and
//! raw completion rows. The aggregation layer converts them into the
//! presentation shapes in [`crate::api`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{HabitId, UserId};

/// A stored habit row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitRecord {
    pub id: HabitId,
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    /// Goal in days, if set
    pub goal: Option<u32>,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
}

/// Insertion shape for a new habit (id and creation time are store-assigned).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHabit {
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub goal: Option<u32>,
}

/// Raw completion row as selected from the store.
///
/// The date is optional here on purpose: the aggregation adapter must
/// tolerate null/malformed dates defensively, skipping them with a warning
/// instead of failing the whole request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRow {
    pub habit_id: HabitId,
    pub date: Option<String>,
}
