//! Repository trait definitions.
//!
//! The persistence layer is an external collaborator; these traits pin down
//! the interface the rest of the crate relies on. Implementations must
//! uphold the store invariants: at most one completion per (habit, date),
//! cascade deletion of completions with their habit, and creation-time
//! ascending listing order.

pub mod error;

use async_trait::async_trait;

use crate::api::{HabitId, UserId};
use crate::db::models::{CompletionRow, HabitRecord, NewHabit};
pub use error::{ErrorContext, RepositoryError, RepositoryResult};

/// Operations on habit rows, always scoped to their owner.
///
/// A habit that exists but belongs to a different user is reported as
/// `NotFound`; ownership leaks nothing.
#[async_trait]
pub trait HabitRepository: Send + Sync {
    /// Check that the store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Insert a new habit, assigning id and creation time.
    async fn insert_habit(&self, habit: &NewHabit) -> RepositoryResult<HabitRecord>;

    /// Fetch one habit by id, owner-scoped.
    async fn get_habit(&self, owner: &UserId, habit_id: HabitId) -> RepositoryResult<HabitRecord>;

    /// All habits of one owner, ordered by creation time ascending.
    async fn list_habits(&self, owner: &UserId) -> RepositoryResult<Vec<HabitRecord>>;

    /// Number of habits the owner currently has.
    async fn count_habits(&self, owner: &UserId) -> RepositoryResult<usize>;

    /// Set the archived flag, returning the updated row.
    async fn set_archived(
        &self,
        owner: &UserId,
        habit_id: HabitId,
        archived: bool,
    ) -> RepositoryResult<HabitRecord>;

    /// Delete a habit and, by cascade, all its completions.
    async fn delete_habit(&self, owner: &UserId, habit_id: HabitId) -> RepositoryResult<()>;
}

/// Operations on completion rows.
#[async_trait]
pub trait CompletionRepository: Send + Sync {
    /// Record a completion for a date. Idempotent: returns `false` when the
    /// (habit, date) pair already existed (conflict-do-nothing).
    async fn insert_completion(&self, habit_id: HabitId, date: &str) -> RepositoryResult<bool>;

    /// Remove a completion. Returns `false` when there was nothing to remove.
    async fn delete_completion(&self, habit_id: HabitId, date: &str) -> RepositoryResult<bool>;

    /// Raw completion rows for a set of habits, for aggregation.
    async fn fetch_completion_rows(
        &self,
        habit_ids: &[HabitId],
    ) -> RepositoryResult<Vec<CompletionRow>>;

    /// Completion dates of one habit, ascending.
    async fn fetch_completion_dates(&self, habit_id: HabitId) -> RepositoryResult<Vec<String>>;
}

/// Combined repository interface used by the service layer.
pub trait FullRepository: HabitRepository + CompletionRepository {}

impl<T: HabitRepository + CompletionRepository> FullRepository for T {}
