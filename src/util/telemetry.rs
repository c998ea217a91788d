//! Telemetry helpers for structured logging and tracing.
//!
//! The scheduler only emits `tracing` events; installing a subscriber is the
//! caller's decision. These helpers cover the common cases.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "bounded_task_scheduler=info";

/// Install an env-filtered fmt subscriber unless one is already set.
///
/// Honors `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
pub fn init_tracing() {
    init_tracing_with_filter(DEFAULT_LOG_FILTER);
}

/// Like [`init_tracing`] but with a caller-chosen fallback filter.
pub fn init_tracing_with_filter(fallback: &str) {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Subscriber for tests: writes through the test harness so output is
/// captured per test. Safe to call from every test.
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
