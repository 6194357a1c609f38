//! Metrics for the polling loop.
//!
//! Recorded through the `metrics` facade; whatever recorder the operator
//! installs (if any) picks them up.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// Book fetch latency metric name.
pub const METRIC_BOOK_FETCH_LATENCY: &str = "book_fetch_latency_ms";
/// Poll cycles counter metric name.
pub const METRIC_POLL_CYCLES: &str = "poll_cycles_total";
/// Book fetch errors counter metric name.
pub const METRIC_BOOK_FETCH_ERRORS: &str = "book_fetch_errors_total";
/// Orders placed counter metric name.
pub const METRIC_ORDERS_PLACED: &str = "orders_placed_total";
/// Orders filled counter metric name.
pub const METRIC_ORDERS_FILLED: &str = "orders_filled_total";
/// Orders cancelled counter metric name.
pub const METRIC_ORDERS_CANCELLED: &str = "orders_cancelled_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_BOOK_FETCH_LATENCY,
        "Order book fetch latency in milliseconds"
    );

    describe_counter!(METRIC_POLL_CYCLES, "Total number of poll cycles started");
    describe_counter!(
        METRIC_BOOK_FETCH_ERRORS,
        "Total number of recoverable book fetch failures"
    );
    describe_counter!(
        METRIC_ORDERS_PLACED,
        "Total number of synthetic orders placed (logged)"
    );
    describe_counter!(
        METRIC_ORDERS_FILLED,
        "Total number of simulated fills"
    );
    describe_counter!(
        METRIC_ORDERS_CANCELLED,
        "Total number of orders cancelled for insufficient balance"
    );

    debug!("Metrics initialized");
}

/// Record order book fetch latency.
pub fn record_book_fetch_latency(start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_BOOK_FETCH_LATENCY).record(latency_ms);
}

/// Increment poll cycle counter.
pub fn inc_cycles() {
    counter!(METRIC_POLL_CYCLES).increment(1);
}

/// Increment recoverable fetch failure counter.
pub fn inc_fetch_errors() {
    counter!(METRIC_BOOK_FETCH_ERRORS).increment(1);
}

/// Increment orders placed counter.
pub fn inc_orders_placed() {
    counter!(METRIC_ORDERS_PLACED).increment(1);
}

/// Increment orders filled counter.
pub fn inc_orders_filled() {
    counter!(METRIC_ORDERS_FILLED).increment(1);
}

/// Increment orders cancelled counter.
pub fn inc_orders_cancelled() {
    counter!(METRIC_ORDERS_CANCELLED).increment(1);
}
