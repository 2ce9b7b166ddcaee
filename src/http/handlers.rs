//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic. The reference instant for all day-boundary
//! decisions is captured once per request, at the edge.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use super::auth::CurrentUser;
use super::dto::{
    CategorizedHabits, CreateHabitRequest, DateRangeGroups, HabitDetails, HabitWithCompletions,
    HealthResponse, MessageResponse, ToggleCompletionRequest, UpdateArchivedRequest, WeekResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::HabitId;
use crate::db::services as db_services;
use crate::models::calendar;
use crate::services::validation::validate_habit_form;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Parse a habit id path segment.
///
/// An id that does not parse is reported as "not found", the same as an id
/// with no matching habit — distinct from a store failure.
fn parse_habit_id(raw: &str) -> Result<HabitId, AppError> {
    raw.trim()
        .parse::<i64>()
        .map(HabitId::new)
        .map_err(|_| AppError::NotFound(format!("Habit {:?} not found.", raw)))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Week View
// =============================================================================

/// GET /v1/week
///
/// The 7 days of the current calendar week (Sunday start, UTC), with display
/// labels for the habit grid header.
pub async fn get_current_week() -> HandlerResult<WeekResponse> {
    let days = calendar::current_week(Utc::now());
    Ok(Json(WeekResponse { days }))
}

// =============================================================================
// Habit CRUD
// =============================================================================

/// GET /v1/habits
///
/// All habits of the current user, partitioned into active and archived
/// lists, each habit carrying its completion dates.
pub async fn list_habits(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> HandlerResult<CategorizedHabits> {
    let categorized =
        db_services::fetch_habits_for_user(state.repository.as_ref(), &user).await?;
    Ok(Json(categorized))
}

/// POST /v1/habits
///
/// Create a new habit. Returns 400 with per-field errors when validation
/// fails, 201 with the stored habit otherwise.
pub async fn create_habit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CreateHabitRequest>,
) -> Result<(StatusCode, Json<HabitWithCompletions>), AppError> {
    let form = validate_habit_form(
        &request.name,
        request.description.as_deref(),
        request.goal.as_deref(),
    )
    .map_err(AppError::Form)?;

    let habit = db_services::create_habit(state.repository.as_ref(), &user, form).await?;

    let response = HabitWithCompletions {
        id: habit.id,
        user_id: habit.user_id,
        name: habit.name,
        description: habit.description,
        goal: habit.goal,
        is_archived: habit.is_archived,
        created_at: habit.created_at,
        completions: Vec::new(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /v1/habits/{id}
///
/// Detail view: streaks, full completion history (ascending) and goal
/// progress when a goal is set.
pub async fn get_habit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(habit_id): Path<String>,
) -> HandlerResult<HabitDetails> {
    let habit_id = parse_habit_id(&habit_id)?;

    let details =
        db_services::fetch_habit_details(state.repository.as_ref(), &user, habit_id, Utc::now())
            .await?;
    Ok(Json(details))
}

/// DELETE /v1/habits/{id}
///
/// Delete a habit and all its completions.
pub async fn delete_habit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(habit_id): Path<String>,
) -> HandlerResult<MessageResponse> {
    let habit_id = parse_habit_id(&habit_id)?;

    db_services::delete_habit(state.repository.as_ref(), &user, habit_id).await?;
    Ok(Json(MessageResponse {
        message: format!("Habit {} deleted successfully.", habit_id),
    }))
}

/// PATCH /v1/habits/{id}/archived
///
/// Set the archived flag on a habit.
pub async fn set_archived(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(habit_id): Path<String>,
    Json(request): Json<UpdateArchivedRequest>,
) -> HandlerResult<MessageResponse> {
    let habit_id = parse_habit_id(&habit_id)?;

    db_services::set_archived(
        state.repository.as_ref(),
        &user,
        habit_id,
        request.is_archived,
    )
    .await?;

    let action = if request.is_archived {
        "archived"
    } else {
        "unarchived"
    };
    Ok(Json(MessageResponse {
        message: format!("Habit successfully {}.", action),
    }))
}

// =============================================================================
// Completions & Calendar
// =============================================================================

/// PUT /v1/habits/{id}/completions
///
/// Mark or unmark one completion date.
pub async fn toggle_completion(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(habit_id): Path<String>,
    Json(request): Json<ToggleCompletionRequest>,
) -> HandlerResult<MessageResponse> {
    let habit_id = parse_habit_id(&habit_id)?;

    db_services::toggle_completion(
        state.repository.as_ref(),
        &user,
        habit_id,
        &request.date,
        request.completed,
    )
    .await?;

    let action = if request.completed {
        "marked"
    } else {
        "unmarked"
    };
    Ok(Json(MessageResponse {
        message: format!("Completion for {} {}.", request.date, action),
    }))
}

/// GET /v1/habits/{id}/calendar
///
/// Consecutive-run grouping of the habit's completions, used by the frontend
/// to pick rounded/square day highlighting.
pub async fn get_habit_calendar(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(habit_id): Path<String>,
) -> HandlerResult<DateRangeGroups> {
    let habit_id = parse_habit_id(&habit_id)?;

    let groups =
        db_services::fetch_habit_calendar(state.repository.as_ref(), &user, habit_id).await?;
    Ok(Json(groups))
}
