//! Tracing/logging setup shared by the binaries.

/// Initialize process-wide logging from `settings`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(settings: &LogSettings) {
    crate::tracing::init(settings);
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::{LogFormat, LogSettings};
