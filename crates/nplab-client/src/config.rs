//! Client configuration.

use crate::token::TokenPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Dashboard client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base URL, without trailing path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Number of days requested from the daily count endpoint.
    #[serde(default = "default_daily_window")]
    pub daily_window: u32,
    /// When the token provider is read.
    #[serde(default)]
    pub token_policy: TokenPolicy,
    /// Send `Access-Control-Allow-Headers: *` on requests.
    #[serde(default = "default_send_allow_headers")]
    pub send_allow_headers: bool,
    /// Per-request timeout for the reqwest transport (ms). 0 = no timeout.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_daily_window() -> u32 {
    14
}

fn default_send_allow_headers() -> bool {
    true
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            daily_window: default_daily_window(),
            token_policy: TokenPolicy::default(),
            send_allow_headers: default_send_allow_headers(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl ClientConfig {
    /// Request timeout, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_ms > 0).then(|| Duration::from_millis(self.request_timeout_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.daily_window, 14);
        assert_eq!(config.token_policy, TokenPolicy::CaptureOnce);
        assert!(config.send_allow_headers);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ClientConfig = toml::from_str(
            r#"
            base_url = "https://dash.example.org"
            token_policy = "per_request"
            request_timeout_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url, "https://dash.example.org");
        assert_eq!(config.daily_window, 14);
        assert_eq!(config.token_policy, TokenPolicy::PerRequest);
        assert_eq!(config.request_timeout(), None);
    }
}
