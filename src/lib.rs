//! Cat facts and dog pictures, merged into one page.
//!
//! Submitting the form calls the cat facts API with the requested limit and
//! then the random dog image API, and renders whatever came back. Either call
//! may fail without failing the request:
//!
//! ```text
//! cat facts fail  -> empty list + "Failed to fetch cat facts. Please try again."
//! dog image fails -> no picture, nothing shown to the user
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`limit`]: Validation of the requested number of facts
//! - [`sources`]: Clients for the external APIs
//! - [`page`]: HTML rendering
//! - [`api`]: HTTP routes and handlers
//! - [`server`]: Server startup and shutdown
//! - [`metrics`]: Outbound call metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod limit;
pub mod metrics;
pub mod page;
pub mod server;
pub mod sources;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
pub use limit::Limit;
pub use page::PageContext;
