//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{health, index, submit, AppState};

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Page
        .route("/", get(index).post(submit))
        // Health endpoint
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
