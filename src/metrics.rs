//! Prometheus metrics for request tracking and upstream monitoring.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// HTTP request counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// HTTP request duration metric name.
pub const METRIC_HTTP_REQUEST_DURATION: &str = "http_request_duration_seconds";
/// Upstream Giphy request counter metric name.
pub const METRIC_GIPHY_REQUESTS: &str = "giphy_requests_total";
/// Upstream Giphy failure counter metric name.
pub const METRIC_GIPHY_FAILURES: &str = "giphy_request_failures_total";
/// Upstream Giphy latency metric name.
pub const METRIC_GIPHY_LATENCY: &str = "giphy_request_latency_ms";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(METRIC_HTTP_REQUESTS, "Count of HTTP requests");
    describe_histogram!(
        METRIC_HTTP_REQUEST_DURATION,
        "Duration of HTTP requests in seconds"
    );
    describe_counter!(
        METRIC_GIPHY_REQUESTS,
        "Total number of requests sent to the Giphy API"
    );
    describe_counter!(
        METRIC_GIPHY_FAILURES,
        "Total number of Giphy API requests that failed"
    );
    describe_histogram!(
        METRIC_GIPHY_LATENCY,
        "Giphy API request latency in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Record one handled HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    counter!(
        METRIC_HTTP_REQUESTS,
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string(),
    )
    .increment(1);
    histogram!(
        METRIC_HTTP_REQUEST_DURATION,
        "method" => method.to_string(),
        "path" => path.to_string(),
    )
    .record(duration_secs);
}

/// Record upstream request latency for one Giphy endpoint.
pub fn record_giphy_latency(start: Instant, endpoint: &'static str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_GIPHY_LATENCY, "endpoint" => endpoint).record(latency_ms);
}

/// Increment the upstream request counter.
pub fn inc_giphy_requests(endpoint: &'static str) {
    counter!(METRIC_GIPHY_REQUESTS, "endpoint" => endpoint).increment(1);
}

/// Increment the upstream failure counter.
pub fn inc_giphy_failures(endpoint: &'static str) {
    counter!(METRIC_GIPHY_FAILURES, "endpoint" => endpoint).increment(1);
}
