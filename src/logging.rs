//! Logging System
//!
//! Structured logging via `tracing`. Events go to stderr so stdout stays the
//! user-facing progress stream.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber. `level` comes from the CLI or config;
/// the `REMEXT_LOG` environment variable overrides it entirely.
pub fn init(level: &str) {
    let filter =
        EnvFilter::try_from_env("REMEXT_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
