//! Unified error types for the pet facts page.

use reqwest::StatusCode;
use thiserror::Error;

/// Startup-level error type. Request handling never produces one of these.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// HTTP client construction error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejected `limit` form values. Always recovered by falling back to the
/// default limit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LimitParseError {
    /// Value is not an integer.
    #[error("limit {0:?} is not an integer")]
    NotANumber(String),

    /// Integer outside the accepted range.
    #[error("limit {value} is outside {min}..={max}")]
    OutOfRange {
        /// The rejected value.
        value: i64,
        /// Smallest accepted value.
        min: u8,
        /// Largest accepted value.
        max: u8,
    },
}

/// Failure talking to one of the external APIs.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection failure, timeout, or other transport error.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("unexpected status {status}")]
    Status {
        /// Status returned by the API.
        status: StatusCode,
    },

    /// The body could not be decoded as the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Whether the failure was caused by the request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Request(e) if e.is_timeout())
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
