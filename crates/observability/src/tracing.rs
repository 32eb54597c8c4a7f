//! Tracing/logging initialization.
//!
//! JSON lines to stderr-adjacent output, filtered via `RUST_LOG` with an
//! `info` default. Small on purpose; a host embedding the listing can swap
//! in its own subscriber instead.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process.
///
/// Safe to call repeatedly: a second `try_init` simply loses to the first
/// registered subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}
