//! Transport trait for dashboard requests.
//!
//! Abstracts the HTTP GET so the client can run against:
//! - `ReqwestTransport` for the real backend
//! - `MockTransport` for tests

use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Arc;

use parking_lot::Mutex;
use reqwest::Method;
use serde_json::Value;

use crate::error::{TransportError, TransportResult};
use crate::headers::HeaderSet;

/// Boxed future for dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

/// A bodiless request against the dashboard backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// Path relative to the backend base URL (e.g., "/api/dashboard/count/month").
    pub path: String,
    pub headers: HeaderSet,
}

impl Request {
    /// Create a GET request.
    pub fn get(path: impl Into<String>, headers: HeaderSet) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            headers,
        }
    }
}

/// Trait for issuing dashboard requests.
pub trait Transport: Send + Sync {
    /// Issue the request and return the decoded JSON body.
    ///
    /// Network failures, non-2xx statuses and malformed JSON all surface as
    /// `TransportError`.
    fn get(&self, request: Request) -> BoxFuture<'_, TransportResult<Value>>;
}

/// Arc wrapper for Transport trait objects.
pub type DynTransport = Arc<dyn Transport>;

/// In-memory transport for testing.
///
/// Records every request and answers from a path → response table.
#[derive(Debug)]
pub struct MockTransport {
    /// Recorded requests for verification.
    requests: Mutex<Vec<Request>>,
    /// Canned responses keyed by path.
    responses: Mutex<HashMap<String, TransportResult<Value>>>,
    /// Response for paths without a canned entry.
    fallback: Mutex<TransportResult<Value>>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    /// Create a mock that answers 404 for every path.
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(HashMap::new()),
            fallback: Mutex::new(Err(TransportError::status(404, "no mock response"))),
        }
    }

    /// Answer `path` with a JSON value.
    pub fn set_response(&self, path: impl Into<String>, value: Value) {
        self.responses.lock().insert(path.into(), Ok(value));
    }

    /// Answer `path` with an error.
    pub fn set_error(&self, path: impl Into<String>, error: TransportError) {
        self.responses.lock().insert(path.into(), Err(error));
    }

    /// Set the response for paths without a canned entry.
    pub fn set_fallback(&self, result: TransportResult<Value>) {
        *self.fallback.lock() = result;
    }

    /// Get recorded requests.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().clone()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Clear recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().clear();
    }
}

impl Transport for MockTransport {
    fn get(&self, request: Request) -> BoxFuture<'_, TransportResult<Value>> {
        Box::pin(async move {
            let result = self
                .responses
                .lock()
                .get(&request.path)
                .cloned()
                .unwrap_or_else(|| self.fallback.lock().clone());
            self.requests.lock().push(request);
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers() -> HeaderSet {
        HeaderSet::authorized("Bearer t", true)
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let transport = MockTransport::new();
        transport.set_response("/a", json!(1));

        let value = transport.get(Request::get("/a", headers())).await.unwrap();
        assert_eq!(value, json!(1));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].path, "/a");
    }

    #[tokio::test]
    async fn test_mock_fallback_is_not_found() {
        let transport = MockTransport::new();
        let err = transport
            .get(Request::get("/missing", headers()))
            .await
            .unwrap_err();
        assert_eq!(err, TransportError::status(404, "no mock response"));
        // Failed requests are recorded too.
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_configured_error() {
        let transport = MockTransport::new();
        transport.set_error("/b", TransportError::Network("refused".to_string()));
        transport.set_fallback(Ok(json!(null)));

        let err = transport.get(Request::get("/b", headers())).await.unwrap_err();
        assert_eq!(err, TransportError::Network("refused".to_string()));

        let other = transport.get(Request::get("/c", headers())).await.unwrap();
        assert_eq!(other, Value::Null);

        transport.clear_requests();
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn test_get_request_has_no_body_and_get_method() {
        let request = Request::get("/api/dashboard/count/year", headers());
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/api/dashboard/count/year");
    }
}
