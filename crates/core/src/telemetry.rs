//! Structured logging initialization
//!
//! One bootstrap for library consumers and test binaries. Log level is
//! controlled through `RUST_LOG`; defaults to `info` when unset.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Safe to call more than once: subsequent calls are no-ops, which keeps
/// parallel test binaries from fighting over the global subscriber.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .ok();
}
