//! Habit aggregation: raw store rows into presentation shapes.
//!
//! Combines habit records with their completion rows, skipping rows whose
//! date is missing or malformed (logged as data-quality warnings, never a
//! request failure), then partitions the result into active and archived
//! lists preserving creation order.

use std::collections::HashMap;

use crate::api::{CategorizedHabits, HabitId, HabitWithCompletions};
use crate::db::models::{CompletionRow, HabitRecord};
use crate::models::calendar::parse_iso_date;

/// Group completion rows by habit id.
///
/// Rows with a null or malformed date are dropped with a warning; the store's
/// uniqueness constraint makes duplicates impossible, but a duplicate row
/// would simply appear twice here and be collapsed by the set-based
/// consumers downstream.
pub fn completion_sets(rows: Vec<CompletionRow>) -> HashMap<HabitId, Vec<String>> {
    let mut sets: HashMap<HabitId, Vec<String>> = HashMap::new();

    for row in rows {
        match row.date {
            Some(date) if parse_iso_date(&date).is_ok() => {
                sets.entry(row.habit_id).or_default().push(date);
            }
            Some(date) => {
                log::warn!(
                    "habit {}: skipping completion row with malformed date {:?}",
                    row.habit_id,
                    date
                );
            }
            None => {
                log::warn!(
                    "habit {}: skipping completion row with missing date",
                    row.habit_id
                );
            }
        }
    }

    sets
}

/// Attach completion sets to habits and partition by archived flag.
///
/// `habits` is expected in creation-time ascending order (the store's
/// listing contract); that relative order is preserved within both lists.
pub fn categorize_habits(habits: Vec<HabitRecord>, rows: Vec<CompletionRow>) -> CategorizedHabits {
    let mut sets = completion_sets(rows);
    let mut categorized = CategorizedHabits::default();

    for habit in habits {
        let completions = sets.remove(&habit.id).unwrap_or_default();
        let with_completions = HabitWithCompletions {
            id: habit.id,
            user_id: habit.user_id,
            name: habit.name,
            description: habit.description,
            goal: habit.goal,
            is_archived: habit.is_archived,
            created_at: habit.created_at,
            completions,
        };

        if with_completions.is_archived {
            categorized.archived_habits.push(with_completions);
        } else {
            categorized.active_habits.push(with_completions);
        }
    }

    categorized
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{categorize_habits, completion_sets};
    use crate::api::{HabitId, UserId};
    use crate::db::models::{CompletionRow, HabitRecord};

    fn habit(id: i64, name: &str, archived: bool) -> HabitRecord {
        HabitRecord {
            id: HabitId::new(id),
            user_id: UserId::new("alice"),
            name: name.to_string(),
            description: None,
            goal: None,
            is_archived: archived,
            created_at: Utc
                .with_ymd_and_hms(2024, 1, 1, 0, 0, id as u32)
                .single()
                .expect("valid instant"),
        }
    }

    fn row(habit_id: i64, date: Option<&str>) -> CompletionRow {
        CompletionRow {
            habit_id: HabitId::new(habit_id),
            date: date.map(str::to_string),
        }
    }

    #[test]
    fn test_rows_grouped_by_habit() {
        let sets = completion_sets(vec![
            row(1, Some("2024-06-01")),
            row(2, Some("2024-06-01")),
            row(1, Some("2024-06-02")),
        ]);

        assert_eq!(sets[&HabitId::new(1)], ["2024-06-01", "2024-06-02"]);
        assert_eq!(sets[&HabitId::new(2)], ["2024-06-01"]);
    }

    #[test]
    fn test_null_and_malformed_rows_skipped() {
        let sets = completion_sets(vec![
            row(1, Some("2024-06-01")),
            row(1, None),
            row(1, Some("garbage")),
            row(1, Some("2024-02-30")),
        ]);

        assert_eq!(sets[&HabitId::new(1)], ["2024-06-01"]);
    }

    #[test]
    fn test_partition_by_archived_flag() {
        let categorized = categorize_habits(
            vec![
                habit(1, "Active A", false),
                habit(2, "Archived", true),
                habit(3, "Active B", false),
            ],
            vec![],
        );

        let active: Vec<&str> = categorized
            .active_habits
            .iter()
            .map(|h| h.name.as_str())
            .collect();
        assert_eq!(active, ["Active A", "Active B"]);
        assert_eq!(categorized.archived_habits.len(), 1);
        assert_eq!(categorized.archived_habits[0].name, "Archived");
    }

    #[test]
    fn test_habit_without_rows_gets_empty_set() {
        let categorized = categorize_habits(vec![habit(1, "Lonely", false)], vec![]);
        assert!(categorized.active_habits[0].completions.is_empty());
    }

    #[test]
    fn test_completions_attached_to_right_habit() {
        let categorized = categorize_habits(
            vec![habit(1, "A", false), habit(2, "B", false)],
            vec![row(2, Some("2024-06-01"))],
        );

        assert!(categorized.active_habits[0].completions.is_empty());
        assert_eq!(categorized.active_habits[1].completions, ["2024-06-01"]);
    }

    #[test]
    fn test_empty_input() {
        let categorized = categorize_habits(vec![], vec![]);
        assert!(categorized.active_habits.is_empty());
        assert!(categorized.archived_habits.is_empty());
    }
}
