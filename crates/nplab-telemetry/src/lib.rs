//! Structured logging for nplab-dash.
//!
//! - JSON output when `RUST_ENV=production`
//! - Pretty, human-readable output otherwise
//! - Filtering via `RUST_LOG`, or the configured default directive

pub mod error;
pub mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{init_logging, LogFormat, DEFAULT_FILTER};
