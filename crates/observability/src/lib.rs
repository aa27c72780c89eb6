//! Process-wide logging setup.

/// Tracing configuration (filters, formatting).
pub mod tracing;

pub use self::tracing::{LogFormat, UnknownLogFormat};

/// Initialize tracing in `format` with `RUST_LOG` filtering (default `info`).
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init(format: LogFormat) {
    tracing::init(format, "info");
}
