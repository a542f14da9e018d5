//! Application configuration.

use crate::error::AppResult;
use config::{Config, Environment, File, FileFormat};
use nplab_client::ClientConfig;
use nplab_telemetry::DEFAULT_FILTER;
use serde::{Deserialize, Serialize};

/// Config file used when neither `--config` nor `NPLAB_CONFIG` is given.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "NPLAB_CONFIG";

/// Prefix for environment overrides (`NPLAB__CLIENT__BASE_URL`).
const ENV_PREFIX: &str = "NPLAB";
const ENV_SEPARATOR: &str = "__";

/// Where the Authorization value comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Literal Authorization value. Takes precedence over `token_env`.
    #[serde(default)]
    pub token: Option<String>,
    /// Environment variable holding the Authorization value.
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

fn default_token_env() -> String {
    "NPLAB_TOKEN".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: None,
            token_env: default_token_env(),
        }
    }
}

/// Telemetry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Default log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    DEFAULT_FILTER.to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Resolve the config path: CLI arg > `NPLAB_CONFIG` > default.
    ///
    /// Returns the path and whether it was explicitly requested.
    pub fn resolve_path(cli_path: Option<String>) -> (String, bool) {
        match cli_path.or_else(|| std::env::var(CONFIG_PATH_ENV).ok()) {
            Some(path) => (path, true),
            None => (DEFAULT_CONFIG_PATH.to_string(), false),
        }
    }

    /// Load from a TOML file layered with `NPLAB__*` environment variables.
    ///
    /// A missing file is an error only when `required` is set.
    pub fn load(path: &str, required: bool) -> AppResult<Self> {
        let config = Config::builder()
            .add_source(File::with_name(path).format(FileFormat::Toml).required(required))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Parse TOML content without environment overrides.
    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        let config = Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nplab_client::TokenPolicy;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.client.base_url, "http://localhost:8080");
        assert_eq!(config.client.daily_window, 14);
        assert_eq!(config.auth.token, None);
        assert_eq!(config.auth.token_env, "NPLAB_TOKEN");
        assert_eq!(config.telemetry.log_level, DEFAULT_FILTER);
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            [client]
            base_url = "http://dash:9090"
            token_policy = "per_request"

            [auth]
            token = "Bearer from-file"
            "#,
        )
        .unwrap();
        assert_eq!(config.client.base_url, "http://dash:9090");
        assert_eq!(config.client.token_policy, TokenPolicy::PerRequest);
        assert_eq!(config.client.daily_window, 14);
        assert_eq!(config.auth.token.as_deref(), Some("Bearer from-file"));
        assert_eq!(config.auth.token_env, "NPLAB_TOKEN");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_bundled_default_file_matches_defaults() {
        let content = include_str!("../config/default.toml");
        assert_eq!(AppConfig::from_toml_str(content).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_missing_optional_file() {
        let config = AppConfig::load("does/not/exist.toml", false).unwrap();
        assert_eq!(config.client.daily_window, AppConfig::default().client.daily_window);
    }

    #[test]
    fn test_missing_required_file() {
        assert!(AppConfig::load("does/not/exist.toml", true).is_err());
    }

    #[test]
    fn test_resolve_path_prefers_cli() {
        let (path, explicit) = AppConfig::resolve_path(Some("custom.toml".to_string()));
        assert_eq!(path, "custom.toml");
        assert!(explicit);
    }

    #[test]
    fn test_config_serialization() {
        let toml_str = toml::to_string(&AppConfig::default()).unwrap();
        assert!(toml_str.contains("base_url"));
        assert!(toml_str.contains("token_policy"));
        assert!(toml_str.contains("token_env"));
    }
}
