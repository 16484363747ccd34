//! Tracing and logging setup for processes embedding the allocation pipeline.

/// Initialize process-wide observability (tracing/logging) from the
/// environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    self::tracing::init(&ObservabilityConfig::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogFormat, ObservabilityConfig};
