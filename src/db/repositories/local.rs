//! In-memory local repository implementation.
//!
//! This module provides a local implementation of the repository traits
//! suitable for unit testing and local development. All data is stored in
//! memory using HashMap and BTreeSet structures, providing fast,
//! deterministic, and isolated execution.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

use crate::api::{HabitId, UserId};
use crate::db::models::{CompletionRow, HabitRecord, NewHabit};
use crate::db::repository::{
    CompletionRepository, HabitRepository, RepositoryError, RepositoryResult,
};

/// In-memory local repository.
///
/// Stores habits and completion sets in maps behind an `RwLock`. The
/// per-habit `BTreeSet<String>` of ISO dates gives both the (habit, date)
/// uniqueness invariant and ascending iteration for free (zero-padded ISO
/// strings sort chronologically).
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    habits: HashMap<HabitId, HabitRecord>,
    completions: HashMap<HabitId, BTreeSet<String>>,

    // ID counter
    next_habit_id: i64,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            habits: HashMap::new(),
            completions: HashMap::new(),
            next_habit_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of habits stored (across all users).
    pub fn habit_count(&self) -> usize {
        self.data.read().unwrap().habits.len()
    }

    /// Check if a habit exists, regardless of owner.
    pub fn has_habit(&self, habit_id: HabitId) -> bool {
        self.data.read().unwrap().habits.contains_key(&habit_id)
    }

    /// Number of stored completions for a habit, regardless of owner.
    pub fn completion_count(&self, habit_id: HabitId) -> usize {
        self.data
            .read()
            .unwrap()
            .completions
            .get(&habit_id)
            .map(|set| set.len())
            .unwrap_or(0)
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(RepositoryError::connection("Store is not healthy"));
        }
        Ok(())
    }

    /// Helper to get an owner-scoped habit or return NotFound.
    fn get_habit_impl(&self, owner: &UserId, habit_id: HabitId) -> RepositoryResult<HabitRecord> {
        let data = self.data.read().unwrap();
        data.habits
            .get(&habit_id)
            .filter(|habit| &habit.user_id == owner)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found(format!(
                    "Habit {} not found for user {}",
                    habit_id, owner
                ))
            })
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HabitRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn insert_habit(&self, habit: &NewHabit) -> RepositoryResult<HabitRecord> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();
        let habit_id = HabitId::new(data.next_habit_id);
        data.next_habit_id += 1;

        let record = HabitRecord {
            id: habit_id,
            user_id: habit.user_id.clone(),
            name: habit.name.clone(),
            description: habit.description.clone(),
            goal: habit.goal,
            is_archived: false,
            created_at: Utc::now(),
        };

        data.habits.insert(habit_id, record.clone());
        Ok(record)
    }

    async fn get_habit(&self, owner: &UserId, habit_id: HabitId) -> RepositoryResult<HabitRecord> {
        self.check_health()?;
        self.get_habit_impl(owner, habit_id)
    }

    async fn list_habits(&self, owner: &UserId) -> RepositoryResult<Vec<HabitRecord>> {
        self.check_health()?;

        let data = self.data.read().unwrap();
        let mut habits: Vec<HabitRecord> = data
            .habits
            .values()
            .filter(|habit| &habit.user_id == owner)
            .cloned()
            .collect();

        // Creation time ascending; ids break ties between same-instant inserts
        habits.sort_by_key(|h| (h.created_at, h.id));
        Ok(habits)
    }

    async fn count_habits(&self, owner: &UserId) -> RepositoryResult<usize> {
        self.check_health()?;

        let data = self.data.read().unwrap();
        Ok(data
            .habits
            .values()
            .filter(|habit| &habit.user_id == owner)
            .count())
    }

    async fn set_archived(
        &self,
        owner: &UserId,
        habit_id: HabitId,
        archived: bool,
    ) -> RepositoryResult<HabitRecord> {
        self.check_health()?;
        // Owner check first so a foreign habit stays invisible
        self.get_habit_impl(owner, habit_id)?;

        let mut data = self.data.write().unwrap();
        let habit = data
            .habits
            .get_mut(&habit_id)
            .ok_or_else(|| RepositoryError::not_found(format!("Habit {} not found", habit_id)))?;
        habit.is_archived = archived;
        Ok(habit.clone())
    }

    async fn delete_habit(&self, owner: &UserId, habit_id: HabitId) -> RepositoryResult<()> {
        self.check_health()?;
        self.get_habit_impl(owner, habit_id)?;

        let mut data = self.data.write().unwrap();
        data.habits.remove(&habit_id);
        // Cascade: completions go with their habit
        data.completions.remove(&habit_id);
        Ok(())
    }
}

#[async_trait]
impl CompletionRepository for LocalRepository {
    async fn insert_completion(&self, habit_id: HabitId, date: &str) -> RepositoryResult<bool> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();
        if !data.habits.contains_key(&habit_id) {
            return Err(RepositoryError::not_found(format!(
                "Habit {} not found",
                habit_id
            )));
        }

        // BTreeSet::insert is the conflict-do-nothing of the unique index
        Ok(data
            .completions
            .entry(habit_id)
            .or_default()
            .insert(date.to_string()))
    }

    async fn delete_completion(&self, habit_id: HabitId, date: &str) -> RepositoryResult<bool> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();
        Ok(data
            .completions
            .get_mut(&habit_id)
            .map(|set| set.remove(date))
            .unwrap_or(false))
    }

    async fn fetch_completion_rows(
        &self,
        habit_ids: &[HabitId],
    ) -> RepositoryResult<Vec<CompletionRow>> {
        self.check_health()?;

        let data = self.data.read().unwrap();
        let mut rows = Vec::new();
        for habit_id in habit_ids {
            if let Some(dates) = data.completions.get(habit_id) {
                rows.extend(dates.iter().map(|date| CompletionRow {
                    habit_id: *habit_id,
                    date: Some(date.clone()),
                }));
            }
        }
        Ok(rows)
    }

    async fn fetch_completion_dates(&self, habit_id: HabitId) -> RepositoryResult<Vec<String>> {
        self.check_health()?;

        let data = self.data.read().unwrap();
        Ok(data
            .completions
            .get(&habit_id)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default())
    }
}
