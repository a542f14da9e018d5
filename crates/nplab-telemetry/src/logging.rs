//! Structured logging initialization.

use crate::error::{TelemetryError, TelemetryResult};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor a configured level is present.
pub const DEFAULT_FILTER: &str = "info,nplab=debug";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    Json,
    /// Multi-line human-readable output.
    Pretty,
}

impl LogFormat {
    /// JSON in production (`RUST_ENV=production`), pretty otherwise.
    pub fn from_env() -> Self {
        Self::for_environment(std::env::var("RUST_ENV").ok().as_deref())
    }

    fn for_environment(rust_env: Option<&str>) -> Self {
        match rust_env {
            Some("production") => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Build the env filter: `RUST_LOG` wins, then `default_directive`.
fn build_filter(default_directive: Option<&str>) -> TelemetryResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directive = default_directive.unwrap_or(DEFAULT_FILTER);
    EnvFilter::try_new(directive).map_err(|e| TelemetryError::Filter(format!("{directive}: {e}")))
}

/// Initialize structured logging.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn init_logging(default_directive: Option<&str>) -> TelemetryResult<()> {
    let env_filter = build_filter(default_directive)?;
    let format = LogFormat::from_env();

    let result = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init(),
    };

    result.map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;

    debug!(?format, "Logging initialized");
    Ok(())
}
