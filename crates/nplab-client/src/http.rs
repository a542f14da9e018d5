//! reqwest-backed transport for the dashboard backend.

use crate::config::ClientConfig;
use crate::error::{TransportError, TransportResult};
use crate::transport::{BoxFuture, Request, Transport};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Transport issuing real HTTP requests.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    /// HTTP client.
    client: Client,
    /// Backend base URL (e.g., "http://localhost:8080").
    base_url: String,
}

impl ReqwestTransport {
    /// Create a new transport.
    ///
    /// # Arguments
    /// * `base_url` - Backend origin; request paths are appended to it
    /// * `timeout` - Whole-request timeout, `None` to wait indefinitely
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> TransportResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            TransportError::ClientBuild(format!("Failed to create HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Create a transport from client configuration.
    pub fn from_config(config: &ClientConfig) -> TransportResult<Self> {
        Self::new(config.base_url.clone(), config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn execute(&self, request: Request) -> TransportResult<Value> {
        let url = self.url(&request.path);
        debug!(method = %request.method, url = %url, "Sending dashboard request");

        let mut builder = self.client.request(request.method.clone(), &url);
        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    TransportError::InvalidRequest(format!("Failed to build request: {e}"))
                } else {
                    TransportError::Network(format!("HTTP request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(url = %url, status = status.as_u16(), "Dashboard request rejected");
            return Err(TransportError::status(status.as_u16(), body));
        }

        let value: Value = response.json().await.map_err(|e| {
            if e.is_decode() {
                TransportError::Decode(format!("Failed to parse response: {e}"))
            } else {
                TransportError::Network(format!("Failed to read response: {e}"))
            }
        })?;

        debug!(url = %url, "Dashboard response received");
        Ok(value)
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, request: Request) -> BoxFuture<'_, TransportResult<Value>> {
        Box::pin(self.execute(request))
    }
}
