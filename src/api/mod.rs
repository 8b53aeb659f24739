//! HTTP API module for the facts page and health endpoint.

pub mod handlers;
pub mod routes;

pub use handlers::{build_page, AppState};
pub use routes::create_router;
