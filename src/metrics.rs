//! Metrics for the outbound API calls.
//!
//! Recorded through the `metrics` facade; they are no-ops until a recorder
//! is installed by the embedding process.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// External request latency metric name.
pub const METRIC_EXTERNAL_REQUEST_LATENCY: &str = "external_request_latency_ms";
/// Cat facts fetched counter metric name.
pub const METRIC_CAT_FACTS_FETCHED: &str = "cat_facts_fetched_total";
/// External fetch failures counter metric name.
pub const METRIC_EXTERNAL_FETCH_FAILURES: &str = "external_fetch_failures_total";

/// Label value for the cat facts API.
pub const API_CAT_FACTS: &str = "cat_facts";
/// Label value for the dog image API.
pub const API_DOG_IMAGES: &str = "dog_images";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_EXTERNAL_REQUEST_LATENCY,
        "External API request latency in milliseconds"
    );
    describe_counter!(
        METRIC_CAT_FACTS_FETCHED,
        "Total number of cat facts received from the cat facts API"
    );
    describe_counter!(
        METRIC_EXTERNAL_FETCH_FAILURES,
        "Total number of failed external API requests"
    );

    debug!("Metrics initialized");
}

/// Record external request latency.
pub fn record_external_latency(start: Instant, api: &'static str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_EXTERNAL_REQUEST_LATENCY, "api" => api).record(latency_ms);
}

/// Add to the cat facts fetched counter.
pub fn add_cat_facts_fetched(count: usize) {
    counter!(METRIC_CAT_FACTS_FETCHED).increment(count as u64);
}

/// Increment the failure counter for one API.
pub fn inc_fetch_failures(api: &'static str) {
    counter!(METRIC_EXTERNAL_FETCH_FAILURES, "api" => api).increment(1);
}

/// RAII guard for timing an external request.
/// Automatically records latency when dropped.
pub struct LatencyTimer {
    start: Instant,
    api: &'static str,
}

impl LatencyTimer {
    /// Create a new latency timer for the given API label.
    pub fn new(api: &'static str) -> Self {
        Self {
            start: Instant::now(),
            api,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        record_external_latency(self.start, self.api);
    }
}
