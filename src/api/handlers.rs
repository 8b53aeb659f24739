//! HTTP API handlers.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;
use tracing::{debug, error, instrument};

use crate::config::Config;
use crate::error::Result;
use crate::limit::Limit;
use crate::page::{PageContext, CAT_FACTS_ERROR};
use crate::sources::{build_http_client, CatFactsApi, DogImagesApi};

/// Application state shared with handlers. Read-only.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Cat facts API client.
    pub cat_facts: Arc<CatFactsApi>,
    /// Dog image API client.
    pub dog_images: Arc<DogImagesApi>,
}

impl AppState {
    /// Create app state from the two API clients.
    pub fn new(cat_facts: CatFactsApi, dog_images: DogImagesApi) -> Self {
        Self {
            cat_facts: Arc::new(cat_facts),
            dog_images: Arc::new(dog_images),
        }
    }

    /// Build both clients from config, sharing one HTTP client.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = build_http_client(config)?;
        Ok(Self::new(
            CatFactsApi::new(config.cat_facts_api_url.clone(), http.clone()),
            DogImagesApi::new(config.dog_api_url.clone(), http),
        ))
    }
}

/// Name of the form field carrying the requested number of facts.
const LIMIT_FIELD: &str = "limit";

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
}

/// Fetch facts then the dog image and collect them into a page.
///
/// The calls run one after the other and the second runs whatever the first
/// returned. Only a cat facts failure sets the user-facing error.
#[instrument(skip(state))]
pub async fn build_page(state: &AppState, raw_limit: Option<&str>) -> PageContext {
    let mut page = PageContext {
        limit: Limit::resolve(raw_limit),
        ..PageContext::initial()
    };

    match state.cat_facts.fetch_facts(page.limit).await {
        Ok(facts) => page.cat_facts = facts,
        Err(e) => {
            error!(error = %e, timeout = e.is_timeout(), "Error fetching cat facts");
            page.error = Some(CAT_FACTS_ERROR.to_string());
        }
    }

    match state.dog_images.fetch_image_url().await {
        Ok(url) => page.dog_image = url,
        Err(e) => error!(error = %e, timeout = e.is_timeout(), "Error fetching dog image"),
    }

    page
}

/// Index page handler for GET - form only, no outbound calls.
pub async fn index() -> Html<String> {
    Html(PageContext::initial().render())
}

/// Index page handler for POST - fetches and renders the results.
pub async fn submit(State(state): State<AppState>, request: Request) -> Html<String> {
    let raw_limit = read_limit_field(request).await;
    let page = build_page(&state, raw_limit.as_deref()).await;
    Html(page.render())
}

/// First `limit` value of a urlencoded or multipart form body.
///
/// Bodies of any other content type, and bodies that cannot be read, have no
/// fields.
async fn read_limit_field(request: Request) -> Option<String> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_ascii_lowercase())
        .unwrap_or_default();

    if content_type.starts_with("multipart/form-data") {
        let mut multipart = match Multipart::from_request(request, &()).await {
            Ok(multipart) => multipart,
            Err(rejection) => {
                debug!(error = %rejection, "Unreadable multipart body");
                return None;
            }
        };
        loop {
            match multipart.next_field().await {
                Ok(Some(field)) if field.name() == Some(LIMIT_FIELD) => {
                    return field.text().await.ok();
                }
                Ok(Some(_)) => continue,
                Ok(None) => return None,
                Err(e) => {
                    debug!(error = %e, "Malformed multipart body");
                    return None;
                }
            }
        }
    }

    if content_type.starts_with("application/x-www-form-urlencoded") {
        let body = match Bytes::from_request(request, &()).await {
            Ok(body) => body,
            Err(rejection) => {
                debug!(error = %rejection, "Unreadable form body");
                return None;
            }
        };
        return url::form_urlencoded::parse(&body)
            .find(|(name, _)| name == LIMIT_FIELD)
            .map(|(_, value)| value.into_owned());
    }

    debug!(content_type = %content_type, "No form body, treating limit as missing");
    None
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "healthy" }))
}
