use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/countdown", get(handlers::get_countdown))
        .route("/api/events", post(handlers::add_event))
        .route("/api/events/:id", delete(handlers::delete_event))
        .route("/api/failed", get(handlers::get_failed))
        .route("/api/failed/cached", get(handlers::get_failed_cached))
        .route("/api/contests/status", post(handlers::contests_status))
        .route("/api/contests/reset", post(handlers::contests_reset))
        .with_state(state)
}
