//! Test logging setup.

/// Install a `tracing` subscriber honoring `RUST_LOG`.
///
/// Safe to call from every test; only the first call in the process
/// installs a subscriber, later calls are no-ops.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
