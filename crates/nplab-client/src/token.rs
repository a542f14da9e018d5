//! Token providers for the `Authorization` header.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Source of the `Authorization` header value.
///
/// The returned string is sent verbatim, so it should already carry its
/// scheme (e.g., "Bearer eyJ...").
#[cfg_attr(test, mockall::automock)]
pub trait TokenProvider: Send + Sync {
    fn header_value(&self) -> String;
}

/// Arc wrapper for TokenProvider trait objects.
pub type DynTokenProvider = Arc<dyn TokenProvider>;

/// When the client reads its token provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenPolicy {
    /// Read once when the client is built. Later token changes are not seen.
    #[default]
    CaptureOnce,
    /// Read every time a query executes.
    PerRequest,
}

/// Fixed header value.
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl TokenProvider for StaticToken {
    fn header_value(&self) -> String {
        self.0.clone()
    }
}

/// Header value read from an environment variable on each call.
///
/// An unset variable yields an empty string.
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl TokenProvider for EnvToken {
    fn header_value(&self) -> String {
        std::env::var(&self.var).unwrap_or_default()
    }
}

/// Replaceable in-memory header value, e.g. updated after a re-login.
#[derive(Debug, Default)]
pub struct SharedToken {
    value: RwLock<String>,
}

impl SharedToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: RwLock::new(value.into()),
        }
    }

    /// Replace the current value.
    pub fn set(&self, value: impl Into<String>) {
        *self.value.write() = value.into();
    }
}

impl TokenProvider for SharedToken {
    fn header_value(&self) -> String {
        self.value.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_token() {
        assert_eq!(StaticToken::new("Bearer x").header_value(), "Bearer x");
    }

    #[test]
    fn test_env_token_missing_is_empty() {
        let provider = EnvToken::new("NPLAB_TEST_TOKEN_THAT_IS_NEVER_SET");
        assert_eq!(provider.header_value(), "");
        assert_eq!(provider.var(), "NPLAB_TEST_TOKEN_THAT_IS_NEVER_SET");
    }

    #[test]
    fn test_shared_token_set() {
        let provider = SharedToken::new("old");
        assert_eq!(provider.header_value(), "old");
        provider.set("new");
        assert_eq!(provider.header_value(), "new");
    }

    #[test]
    fn test_token_policy_serde() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: TokenPolicy,
        }
        let parsed: Wrapper = toml::from_str(r#"policy = "per_request""#).unwrap();
        assert_eq!(parsed.policy, TokenPolicy::PerRequest);
        assert_eq!(TokenPolicy::default(), TokenPolicy::CaptureOnce);
    }

    #[test]
    fn test_mock_provider_called_once_per_read() {
        let mut provider = MockTokenProvider::new();
        provider
            .expect_header_value()
            .times(2)
            .returning(|| "Bearer mocked".to_string());

        assert_eq!(provider.header_value(), "Bearer mocked");
        assert_eq!(provider.header_value(), "Bearer mocked");
    }
}
