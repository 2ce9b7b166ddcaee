//! Pure business logic.
//!
//! This module contains the side-effect-free pieces that sit between the
//! repository rows and the API shapes: form validation, completion-row
//! aggregation and goal progress. Orchestration with the store lives in
//! [`crate::db::services`].

pub mod aggregation;

pub mod progress;

pub mod validation;

pub use aggregation::categorize_habits;
pub use progress::goal_progress;
pub use validation::validate_habit_form;
