//! Prometheus metrics for the card service
//!
//! Provides observability metrics for the cache, the GitHub fetch path and
//! card rendering. Exposed at `GET /metrics`.

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec, register_histogram, CounterVec, Encoder, Histogram, TextEncoder,
};

lazy_static! {
    /// Counter: cache lookups by outcome (hit/miss)
    pub static ref CACHE_OPERATIONS: CounterVec = register_counter_vec!(
        "ghcards_cache_operations_total",
        "Cache lookups by outcome",
        &["operation"]
    )
    .expect("Failed to create cache_operations metric");

    /// Histogram: full paginated profile fetch duration (seconds)
    pub static ref FETCH_DURATION: Histogram = register_histogram!(
        "ghcards_github_fetch_duration_seconds",
        "Duration of paginated GitHub profile fetches",
        vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]
    )
    .expect("Failed to create fetch_duration metric");

    /// Counter: GitHub fetch errors by kind
    pub static ref FETCH_ERRORS: CounterVec = register_counter_vec!(
        "ghcards_github_fetch_errors_total",
        "GitHub profile fetch errors by kind",
        &["kind"]
    )
    .expect("Failed to create fetch_errors metric");

    /// Counter: cards rendered by card kind
    pub static ref CARDS_RENDERED: CounterVec = register_counter_vec!(
        "ghcards_cards_rendered_total",
        "Cards rendered by kind",
        &["card"]
    )
    .expect("Failed to create cards_rendered metric");
}

/// Record cache hit
pub fn record_cache_hit() {
    CACHE_OPERATIONS.with_label_values(&["hit"]).inc();
}

/// Record cache miss
pub fn record_cache_miss() {
    CACHE_OPERATIONS.with_label_values(&["miss"]).inc();
}

/// Record a completed profile fetch duration
pub fn record_fetch_duration(duration_secs: f64) {
    FETCH_DURATION.observe(duration_secs);
}

/// Increment the fetch error counter
pub fn record_fetch_error(kind: &str) {
    FETCH_ERRORS.with_label_values(&[kind]).inc();
}

/// Increment the rendered card counter
pub fn record_card_rendered(card: &str) {
    CARDS_RENDERED.with_label_values(&[card]).inc();
}

/// Encode all metrics as Prometheus text format
pub fn encode_metrics() -> crate::Result<String> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| crate::CardsError::Other(format!("Failed to encode metrics: {}", e)))?;
    String::from_utf8(buffer)
        .map_err(|e| crate::CardsError::Other(format!("Metrics are not UTF-8: {}", e)))
}
