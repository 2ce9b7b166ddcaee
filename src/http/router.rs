//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Week header for the habit grid
        .route("/week", get(handlers::get_current_week))
        // Habit CRUD
        .route("/habits", get(handlers::list_habits))
        .route("/habits", post(handlers::create_habit))
        .route("/habits/{id}", get(handlers::get_habit))
        .route("/habits/{id}", delete(handlers::delete_habit))
        .route("/habits/{id}/archived", patch(handlers::set_archived))
        // Completions and calendar view
        .route("/habits/{id}/completions", put(handlers::toggle_completion))
        .route("/habits/{id}/calendar", get(handlers::get_habit_calendar));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
