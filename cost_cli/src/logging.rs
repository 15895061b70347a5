//! Logging setup for the CLI.
//!
//! Uses `tracing-subscriber` with an `EnvFilter`. Log lines go to stderr so
//! that reports and JSON on stdout stay machine-readable.

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "warn";

/// Initialize the global subscriber.
///
/// # Environment
/// - `RUST_LOG`: log filter (default: `warn`),
///   e.g. `RUST_LOG=debug` or `RUST_LOG=cost_core=debug`
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Subscriber for tests: debug level, captured by the test harness.
#[cfg(test)]
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
