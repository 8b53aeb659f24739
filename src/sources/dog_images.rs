//! Random dog image API client.

use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::FetchError;
use crate::metrics::{self, API_DOG_IMAGES};

/// Random dog image API client.
#[derive(Debug, Clone)]
pub struct DogImagesApi {
    http: reqwest::Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct RandomImageResponse {
    #[serde(default)]
    message: Option<String>,
}

impl DogImagesApi {
    /// Create a client for the given random image endpoint.
    pub fn new(url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// Fetch the URL of a random dog picture.
    ///
    /// A successful response without a `message` yields `Ok(None)`.
    #[instrument(skip(self))]
    pub async fn fetch_image_url(&self) -> Result<Option<String>, FetchError> {
        let response =
            super::get_json::<RandomImageResponse>(self.http.get(&self.url), API_DOG_IMAGES)
                .await
                .inspect_err(|_| metrics::inc_fetch_failures(API_DOG_IMAGES))?;

        info!("Fetched dog image");
        Ok(response.message)
    }
}
