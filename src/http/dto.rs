//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Most response shapes are re-exported from the api module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    CategorizedHabits, DateRangeGroups, GoalProgress, HabitDetails, HabitWithCompletions, WeekDate,
};

/// Request body for creating a new habit.
///
/// Fields arrive as raw form strings; validation happens in
/// [`crate::services::validation`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHabitRequest {
    /// Habit name
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Optional day-goal ("7", "14" or "30")
    #[serde(default)]
    pub goal: Option<String>,
}

/// Request body for toggling one completion date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleCompletionRequest {
    /// Canonical ISO date (`YYYY-MM-DD`)
    pub date: String,
    /// `true` marks the date completed, `false` unmarks it
    pub completed: bool,
}

/// Request body for archiving/unarchiving a habit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArchivedRequest {
    pub is_archived: bool,
}

/// Response for a completed mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message about the operation
    pub message: String,
}

/// Current calendar week response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekResponse {
    /// The 7 days of the current week, Sunday through Saturday
    pub days: Vec<WeekDate>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Store connection status
    pub database: String,
}
