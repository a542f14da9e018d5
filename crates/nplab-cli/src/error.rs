//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Transport error: {0}")]
    Transport(#[from] nplab_client::TransportError),

    #[error("Invalid argument: {0}")]
    Core(#[from] nplab_core::CoreError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] nplab_telemetry::TelemetryError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
