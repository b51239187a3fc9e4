//! Process-wide tracing setup shared by the binaries.

pub mod tracing;

pub use crate::tracing::{LogConfig, LogFormat};

/// Initialize tracing from the environment (`RUST_LOG`, `STOCKWISE_LOG_FORMAT`).
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    crate::tracing::init(&LogConfig::from_env());
}
