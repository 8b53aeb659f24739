//! Application configuration loaded from environment variables.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error;

/// Application configuration loaded from environment variables.
///
/// Every field has a default, so an empty environment gives the stock
/// service: port 5000 on all interfaces, the public APIs, 5 second timeouts.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Interface the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === External APIs ===
    /// Cat facts endpoint; receives a `limit` query parameter.
    #[serde(default = "default_cat_facts_url")]
    pub cat_facts_api_url: String,

    /// Random dog image endpoint.
    #[serde(default = "default_dog_url")]
    pub dog_api_url: String,

    /// Per-request timeout for both external APIs.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_cat_facts_url() -> String {
    "https://catfact.ninja/facts".to_string()
}

fn default_dog_url() -> String {
    "https://dog.ceo/api/breeds/image/random".to_string()
}

fn default_http_timeout_ms() -> u64 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cat_facts_api_url: default_cat_facts_url(),
            dog_api_url: default_dog_url(),
            http_timeout_ms: default_http_timeout_ms(),
            rust_log: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> error::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Build configuration from `(NAME, value)` pairs; unset names take
    /// their defaults.
    pub fn from_vars<I>(vars: I) -> error::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(vars)?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.http_timeout_ms == 0 {
            return Err("HTTP_TIMEOUT_MS must be greater than 0".to_string());
        }

        check_api_url("CAT_FACTS_API_URL", &self.cat_facts_api_url)?;
        check_api_url("DOG_API_URL", &self.dog_api_url)?;

        Ok(())
    }

    /// Timeout applied to each outbound request.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_millis(self.http_timeout_ms)
    }

    /// Address string the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn check_api_url(name: &str, raw: &str) -> Result<(), String> {
    let url = Url::parse(raw).map_err(|e| format!("{name} is not a valid URL: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("{name} must use http or https, got {other}")),
    }
}
