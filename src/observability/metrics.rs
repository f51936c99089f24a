//! Metrics collection.
//!
//! # Metrics
//! - `beacon_endpoint_requests_total` (counter): attempts per endpoint
//! - `beacon_endpoint_errors_total` (counter): failed attempts per endpoint and failure kind
//!
//! Recorded through the `metrics` facade; nothing is exported unless the embedding process
//! installs a recorder.

pub const ENDPOINT_REQUESTS: &str = "beacon_endpoint_requests_total";
pub const ENDPOINT_ERRORS: &str = "beacon_endpoint_errors_total";

/// Record one attempt against `endpoint`.
pub fn record_endpoint_request(endpoint: &str) {
    ::metrics::counter!(ENDPOINT_REQUESTS, "endpoint" => endpoint.to_string()).increment(1);
}

/// Record one failed attempt against `endpoint`.
pub fn record_endpoint_error(endpoint: &str, kind: &'static str) {
    ::metrics::counter!(
        ENDPOINT_ERRORS,
        "endpoint" => endpoint.to_string(),
        "kind" => kind
    )
    .increment(1);
}
