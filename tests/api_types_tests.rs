//! Serialization contract tests: the JSON field names the frontend depends
//! on must not drift.

use std::collections::HashSet;

use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::json;

use habits_rust::api::{
    CategorizedHabits, GoalProgress, HabitDetails, HabitId, HabitWithCompletions, UserId,
};
use habits_rust::models::{current_week, group_consecutive_dates, StreakSummary};

fn sample_details(progress: Option<GoalProgress>) -> HabitDetails {
    HabitDetails {
        id: HabitId::new(1),
        user_id: UserId::new("alice"),
        name: "Read".to_string(),
        description: None,
        goal: progress.as_ref().map(|p| p.goal),
        is_archived: false,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap(),
        current_streak: 2,
        longest_streak: 5,
        completion_dates_iso: vec!["2024-06-01".to_string(), "2024-06-02".to_string()],
        progress,
    }
}

#[test]
fn test_week_date_field_names() {
    let week = current_week(Utc.with_ymd_and_hms(2024, 6, 5, 12, 0, 0).single().unwrap());
    let value = serde_json::to_value(&week[0]).unwrap();

    let obj = value.as_object().unwrap();
    assert!(obj.contains_key("display"));
    assert!(obj.contains_key("iso"));
    assert!(obj.contains_key("dayInitial"));
    assert!(obj.contains_key("dayNumber"));
}

#[test]
fn test_streak_summary_field_names() {
    let value = serde_json::to_value(StreakSummary {
        current_streak: 3,
        longest_streak: 7,
    })
    .unwrap();

    assert_eq!(value, json!({"currentStreak": 3, "longestStreak": 7}));
}

#[test]
fn test_habit_details_field_names() {
    let value = serde_json::to_value(sample_details(None)).unwrap();
    let obj = value.as_object().unwrap();

    assert!(obj.contains_key("currentStreak"));
    assert!(obj.contains_key("longestStreak"));
    assert!(obj.contains_key("completionDatesISO"));
    assert!(obj.contains_key("isArchived"));
    assert!(obj.contains_key("createdAt"));
    assert!(obj.contains_key("userId"));
    // No goal: the progress key is absent, not null
    assert!(!obj.contains_key("progress"));
}

#[test]
fn test_habit_details_with_progress() {
    let value = serde_json::to_value(sample_details(Some(GoalProgress {
        goal: 7,
        completed_count: 2,
        percent: 29,
    })))
    .unwrap();

    assert_eq!(
        value["progress"],
        json!({"goal": 7, "completedCount": 2, "percent": 29})
    );
}

#[test]
fn test_categorized_habits_field_names() {
    let habit = HabitWithCompletions {
        id: HabitId::new(1),
        user_id: UserId::new("alice"),
        name: "Read".to_string(),
        description: None,
        goal: None,
        is_archived: false,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap(),
        completions: vec!["2024-06-01".to_string()],
    };
    let value = serde_json::to_value(CategorizedHabits {
        active_habits: vec![habit],
        archived_habits: vec![],
    })
    .unwrap();

    let obj = value.as_object().unwrap();
    assert!(obj.contains_key("activeHabits"));
    assert!(obj.contains_key("archivedHabits"));
    assert_eq!(value["activeHabits"][0]["completions"][0], "2024-06-01");
}

#[test]
fn test_date_range_groups_serialize_as_iso_strings() {
    let completions: HashSet<NaiveDate> = ["2023-01-01", "2023-01-02", "2023-01-05"]
        .iter()
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap())
        .collect();

    let value = serde_json::to_value(group_consecutive_dates(&completions)).unwrap();

    assert_eq!(value["start"], json!(["2023-01-01"]));
    assert_eq!(value["end"], json!(["2023-01-02"]));
    assert_eq!(value["single"], json!(["2023-01-05"]));
    assert_eq!(value["middle"], json!([]));
}

#[test]
fn test_habit_details_roundtrip() {
    let details = sample_details(Some(GoalProgress {
        goal: 14,
        completed_count: 3,
        percent: 21,
    }));

    let encoded = serde_json::to_string(&details).unwrap();
    let decoded: HabitDetails = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, details);
}
