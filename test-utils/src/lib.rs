//! Shared helpers for the workspace's tests.

use tracing_subscriber::EnvFilter;

/// Install a pretty `tracing` subscriber that writes through the test harness.
///
/// Filtering is controlled by `RUST_LOG`. Safe to call from every test; only
/// the first call installs a subscriber.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .pretty()
        .try_init();
}

/// Run `f` with logging initialised, returning its result.
pub fn with_logging<T>(f: impl FnOnce() -> T) -> T {
    init_logging();
    let span = tracing::info_span!("test");
    span.in_scope(f)
}
