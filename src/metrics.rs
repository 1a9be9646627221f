//! Request counters and latency histograms.
//!
//! The fixture records what a load generator would want to cross-check:
//! - Requests served, labeled per route
//! - End-to-end request latency observed by the self-benchmark
//!   (via [`LatencyTimer`], which records a sample on drop)

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// Requests served counter metric name.
pub const METRIC_REQUESTS_SERVED: &str = "requests_served_total";
/// Self-benchmark request latency metric name.
pub const METRIC_REQUEST_LATENCY: &str = "request_latency_ms";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_REQUESTS_SERVED,
        "Total number of requests served, labeled by route"
    );
    describe_histogram!(
        METRIC_REQUEST_LATENCY,
        "End-to-end request latency in milliseconds, labeled by route"
    );

    debug!("Metrics initialized");
}

/// Increment the served-request counter for a route.
pub fn inc_requests_served(route: &'static str) {
    counter!(METRIC_REQUESTS_SERVED, "route" => route).increment(1);
}

/// RAII guard for timing operations.
/// Automatically records latency when dropped.
pub struct LatencyTimer {
    start: Instant,
    route: &'static str,
}

impl LatencyTimer {
    /// Create a new latency timer for the given route.
    pub fn new(route: &'static str) -> Self {
        Self {
            start: Instant::now(),
            route,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        let latency_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        histogram!(METRIC_REQUEST_LATENCY, "route" => self.route).record(latency_ms);
    }
}
