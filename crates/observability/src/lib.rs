//! Process-wide tracing/logging setup, shared by hosts and test harnesses.

/// Tracing configuration (filter, formatting layer).
pub mod tracing;

/// Initialize observability for the process.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
