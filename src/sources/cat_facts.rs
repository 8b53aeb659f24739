//! Cat facts API client.

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::error::FetchError;
use crate::limit::Limit;
use crate::metrics::{self, API_CAT_FACTS};

/// A single fact as returned by the API. Opaque to this service.
pub type FactRecord = Value;

/// Cat facts API client.
#[derive(Debug, Clone)]
pub struct CatFactsApi {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Facts endpoint, e.g. `https://catfact.ninja/facts`.
    url: String,
}

/// Facts page response from API.
#[derive(Debug, Deserialize)]
struct FactsResponse {
    /// Fact records; absent or null means none.
    #[serde(default)]
    data: Option<Vec<FactRecord>>,
}

impl CatFactsApi {
    /// Create a client for the given facts endpoint.
    pub fn new(url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// Fetch up to `limit` facts.
    #[instrument(skip(self))]
    pub async fn fetch_facts(&self, limit: Limit) -> Result<Vec<FactRecord>, FetchError> {
        let request = self.http.get(&self.url).query(&[("limit", limit.get())]);

        let facts = super::get_json::<FactsResponse>(request, API_CAT_FACTS)
            .await
            .inspect_err(|_| metrics::inc_fetch_failures(API_CAT_FACTS))?
            .data
            .unwrap_or_default();

        metrics::add_cat_facts_fetched(facts.len());
        info!("Fetched {} cat facts", facts.len());

        Ok(facts)
    }
}
