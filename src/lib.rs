//! # Habits Rust Backend
//!
//! Habit-tracking backend with a streak/date-aggregation engine.
//!
//! This crate provides a Rust backend for a personal habit tracker. Users
//! create habits with an optional day-goal, mark daily completions, and read
//! progress data: current and longest streaks, calendar groupings of
//! consecutive completion days, and goal-completion percentage. The backend
//! exposes a REST API via Axum for the web frontend.
//!
//! ## Features
//!
//! - **Streak Engine**: current/longest streak computation anchored to UTC
//!   calendar days
//! - **Calendar Grouping**: partition of completion dates into consecutive
//!   runs for calendar highlighting
//! - **Week View**: current-week enumeration with display labels
//! - **Habit CRUD**: creation (with per-user limit), archiving, deletion,
//!   completion toggling
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes and DTOs for API responses
//! - [`models`]: The pure date/streak computation engine
//! - [`db`]: Repository pattern and persistence interface
//! - [`services`]: Pure business logic (validation, aggregation, progress)
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! All engine functions are pure and take an explicit reference instant, so
//! day-boundary behavior is deterministic and testable with fixed clocks.

// Allow large error types - RepositoryError carries rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
