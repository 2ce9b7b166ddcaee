//! Precondition checks for habit form input.
//!
//! Plain field checks at the API boundary: length bounds on name and
//! description, an enumerated goal value, and the per-user habit limit
//! constant enforced by the service layer.

use serde::{Deserialize, Serialize};

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;
pub const DESCRIPTION_MIN_LEN: usize = 2;
pub const DESCRIPTION_MAX_LEN: usize = 150;

/// Allowed day-goal values.
pub const GOAL_VALUES: [u32; 3] = [7, 14, 30];

/// Maximum number of habits one user may have.
pub const MAX_HABITS_PER_USER: usize = 6;

/// One failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A habit form that passed all precondition checks.
///
/// Name and description are trimmed; empty optional fields are normalized to
/// `None`; the goal is parsed into days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedHabitForm {
    pub name: String,
    pub description: Option<String>,
    pub goal: Option<u32>,
}

/// Validate raw habit form fields.
///
/// Returns every failed check, not just the first, so the frontend can
/// render per-field messages.
pub fn validate_habit_form(
    name: &str,
    description: Option<&str>,
    goal: Option<&str>,
) -> Result<ValidatedHabitForm, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = name.trim();
    let name_len = name.chars().count();
    if name_len < NAME_MIN_LEN {
        errors.push(FieldError::new(
            "name",
            format!("Name must be at least {} characters.", NAME_MIN_LEN),
        ));
    } else if name_len > NAME_MAX_LEN {
        errors.push(FieldError::new(
            "name",
            format!("Name must not exceed {} characters.", NAME_MAX_LEN),
        ));
    }

    // Empty string counts as "not provided"
    let description = description.map(str::trim).filter(|d| !d.is_empty());
    if let Some(desc) = description {
        let desc_len = desc.chars().count();
        if desc_len < DESCRIPTION_MIN_LEN {
            errors.push(FieldError::new(
                "description",
                format!(
                    "Description must be at least {} characters.",
                    DESCRIPTION_MIN_LEN
                ),
            ));
        } else if desc_len > DESCRIPTION_MAX_LEN {
            errors.push(FieldError::new(
                "description",
                format!(
                    "Description must not exceed {} characters.",
                    DESCRIPTION_MAX_LEN
                ),
            ));
        }
    }

    let goal = goal.map(str::trim).filter(|g| !g.is_empty());
    let parsed_goal = match goal {
        None => None,
        Some(raw) => match raw.parse::<u32>() {
            Ok(days) if GOAL_VALUES.contains(&days) => Some(days),
            _ => {
                errors.push(FieldError::new(
                    "goal",
                    format!("Goal must be one of {:?} days.", GOAL_VALUES),
                ));
                None
            }
        },
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidatedHabitForm {
        name: name.to_string(),
        description: description.map(str::to_string),
        goal: parsed_goal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_valid_form() {
        let form = validate_habit_form("Read", None, None).unwrap();
        assert_eq!(form.name, "Read");
        assert_eq!(form.description, None);
        assert_eq!(form.goal, None);
    }

    #[test]
    fn test_name_is_trimmed() {
        let form = validate_habit_form("  Read  ", None, None).unwrap();
        assert_eq!(form.name, "Read");
    }

    #[test]
    fn test_name_too_short() {
        let errors = validate_habit_form("R", None, None).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn test_name_length_edges() {
        assert!(validate_habit_form(&"x".repeat(2), None, None).is_ok());
        assert!(validate_habit_form(&"x".repeat(50), None, None).is_ok());
        assert!(validate_habit_form(&"x".repeat(51), None, None).is_err());
    }

    #[test]
    fn test_empty_description_is_absent() {
        let form = validate_habit_form("Read", Some(""), None).unwrap();
        assert_eq!(form.description, None);
    }

    #[test]
    fn test_description_length_edges() {
        assert!(validate_habit_form("Read", Some("ab"), None).is_ok());
        assert!(validate_habit_form("Read", Some("a"), None).is_err());
        assert!(validate_habit_form("Read", Some(&"x".repeat(150)), None).is_ok());
        assert!(validate_habit_form("Read", Some(&"x".repeat(151)), None).is_err());
    }

    #[test]
    fn test_goal_enum() {
        assert_eq!(validate_habit_form("Read", None, Some("7")).unwrap().goal, Some(7));
        assert_eq!(validate_habit_form("Read", None, Some("14")).unwrap().goal, Some(14));
        assert_eq!(validate_habit_form("Read", None, Some("30")).unwrap().goal, Some(30));
    }

    #[test]
    fn test_goal_rejects_other_values() {
        assert!(validate_habit_form("Read", None, Some("8")).is_err());
        assert!(validate_habit_form("Read", None, Some("0")).is_err());
        assert!(validate_habit_form("Read", None, Some("week")).is_err());
        assert!(validate_habit_form("Read", None, Some("-7")).is_err());
    }

    #[test]
    fn test_empty_goal_is_absent() {
        let form = validate_habit_form("Read", None, Some("")).unwrap();
        assert_eq!(form.goal, None);
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let errors = validate_habit_form("R", Some("x"), Some("9")).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["name", "description", "goal"]);
    }
}
