//! Clients for the external APIs the page is built from.
//!
//! This module handles:
//! - Building the shared HTTP client with the configured timeout
//! - The cat facts API
//! - The random dog image API

pub mod cat_facts;
pub mod dog_images;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::error::FetchError;
use crate::metrics::LatencyTimer;

pub use cat_facts::{CatFactsApi, FactRecord};
pub use dog_images::DogImagesApi;

/// Build the HTTP client shared by both API clients.
pub fn build_http_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(config.http_timeout())
        .build()
}

/// Send a GET request and decode a JSON body.
///
/// Transport errors and timeouts become [`FetchError::Request`], non-2xx
/// answers [`FetchError::Status`] and undecodable bodies [`FetchError::Decode`].
async fn get_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    api: &'static str,
) -> Result<T, FetchError> {
    let timer = LatencyTimer::new(api);

    let response = request.send().await?;

    let status = response.status();
    debug!(api, status = %status, elapsed_ms = timer.elapsed_ms(), "External API responded");
    if !status.is_success() {
        return Err(FetchError::Status { status });
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
}
