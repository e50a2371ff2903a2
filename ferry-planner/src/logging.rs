//! Log output setup.
//!
//! Logs go to stderr so that stdout carries only the report. `RUST_LOG`
//! overrides the default filter.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber with `default_directive` as the fallback
/// filter, e.g. `"warn"` or `"ferry_planner=info"`.
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
