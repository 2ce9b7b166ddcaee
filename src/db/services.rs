//! High-level service layer over the repository.
//!
//! These functions orchestrate repository calls and the pure computation
//! engine ([`crate::models`], [`crate::services`]). They work with any
//! repository implementation; handlers and tests pass `&dyn FullRepository`.
//!
//! The reference instant ("now") is always an explicit parameter so that
//! day-boundary behavior is deterministic under test.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};

use crate::api::{CategorizedHabits, HabitDetails, HabitId, UserId};
use crate::db::models::{HabitRecord, NewHabit};
use crate::db::repository::{
    CompletionRepository, FullRepository, HabitRepository, RepositoryError, RepositoryResult,
};
use crate::models::calendar::{parse_iso_date, ISO_DATE_FORMAT};
use crate::models::ranges::{group_consecutive_dates, DateRangeGroups};
use crate::models::streak::compute_streaks;
use crate::services::aggregation;
use crate::services::progress::goal_progress;
use crate::services::validation::{ValidatedHabitForm, MAX_HABITS_PER_USER};

/// Check that the service and its store are reachable.
pub async fn health_check(repo: &dyn FullRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// All habits of one user with their completion sets, partitioned into
/// active and archived lists (creation order preserved).
pub async fn fetch_habits_for_user(
    repo: &dyn FullRepository,
    owner: &UserId,
) -> RepositoryResult<CategorizedHabits> {
    let habits = repo.list_habits(owner).await?;
    if habits.is_empty() {
        return Ok(CategorizedHabits::default());
    }

    let habit_ids: Vec<HabitId> = habits.iter().map(|h| h.id).collect();
    let rows = repo.fetch_completion_rows(&habit_ids).await?;

    Ok(aggregation::categorize_habits(habits, rows))
}

/// Detail view for one habit: streaks, ascending completion history and
/// optional goal progress.
pub async fn fetch_habit_details(
    repo: &dyn FullRepository,
    owner: &UserId,
    habit_id: HabitId,
    now: DateTime<Utc>,
) -> RepositoryResult<HabitDetails> {
    let habit = repo.get_habit(owner, habit_id).await?;
    let raw_dates = repo.fetch_completion_dates(habit_id).await?;

    let completions = parse_completion_set(habit_id, &raw_dates);
    let streaks = compute_streaks(&completions, now);

    let mut sorted: Vec<NaiveDate> = completions.iter().copied().collect();
    sorted.sort_unstable();
    let completion_dates_iso = sorted
        .iter()
        .map(|d| d.format(ISO_DATE_FORMAT).to_string())
        .collect();

    let progress = goal_progress(habit.goal, completions.len());

    Ok(HabitDetails {
        id: habit.id,
        user_id: habit.user_id,
        name: habit.name,
        description: habit.description,
        goal: habit.goal,
        is_archived: habit.is_archived,
        created_at: habit.created_at,
        current_streak: streaks.current_streak,
        longest_streak: streaks.longest_streak,
        completion_dates_iso,
        progress,
    })
}

/// Consecutive-run grouping of one habit's completions, for calendar
/// highlighting.
pub async fn fetch_habit_calendar(
    repo: &dyn FullRepository,
    owner: &UserId,
    habit_id: HabitId,
) -> RepositoryResult<DateRangeGroups> {
    repo.get_habit(owner, habit_id).await?;
    let raw_dates = repo.fetch_completion_dates(habit_id).await?;

    Ok(group_consecutive_dates(&parse_completion_set(
        habit_id, &raw_dates,
    )))
}

/// Create a habit from an already-validated form, enforcing the per-user
/// habit limit.
pub async fn create_habit(
    repo: &dyn FullRepository,
    owner: &UserId,
    form: ValidatedHabitForm,
) -> RepositoryResult<HabitRecord> {
    let count = repo.count_habits(owner).await?;
    if count >= MAX_HABITS_PER_USER {
        return Err(RepositoryError::validation(format!(
            "Habit limit ({}) reached",
            MAX_HABITS_PER_USER
        )));
    }

    let new_habit = NewHabit {
        user_id: owner.clone(),
        name: form.name,
        description: form.description,
        goal: form.goal,
    };
    repo.insert_habit(&new_habit).await
}

/// Mark or unmark one completion date.
///
/// The date string is validated up front (fail fast on malformed input);
/// marking an existing date or unmarking an absent one is a no-op. Returns
/// whether the store actually changed.
pub async fn toggle_completion(
    repo: &dyn FullRepository,
    owner: &UserId,
    habit_id: HabitId,
    date: &str,
    completed: bool,
) -> RepositoryResult<bool> {
    let parsed = parse_iso_date(date).map_err(|e| RepositoryError::validation(e.to_string()))?;

    // Owner check before any write
    repo.get_habit(owner, habit_id).await?;

    let canonical = parsed.format(ISO_DATE_FORMAT).to_string();
    if completed {
        repo.insert_completion(habit_id, &canonical).await
    } else {
        repo.delete_completion(habit_id, &canonical).await
    }
}

/// Set the archived flag on a habit.
pub async fn set_archived(
    repo: &dyn FullRepository,
    owner: &UserId,
    habit_id: HabitId,
    archived: bool,
) -> RepositoryResult<HabitRecord> {
    repo.set_archived(owner, habit_id, archived).await
}

/// Delete a habit and its completions.
pub async fn delete_habit(
    repo: &dyn FullRepository,
    owner: &UserId,
    habit_id: HabitId,
) -> RepositoryResult<()> {
    repo.delete_habit(owner, habit_id).await
}

/// Parse raw date strings into a completion set, skipping malformed entries
/// with a data-quality warning rather than failing the request.
fn parse_completion_set(habit_id: HabitId, raw_dates: &[String]) -> HashSet<NaiveDate> {
    let mut completions = HashSet::with_capacity(raw_dates.len());
    for raw in raw_dates {
        match parse_iso_date(raw) {
            Ok(date) => {
                completions.insert(date);
            }
            Err(err) => {
                log::warn!("habit {}: skipping completion row: {}", habit_id, err);
            }
        }
    }
    completions
}
