//! Cold, re-executable dashboard queries.

use std::future::IntoFuture;
use std::marker::PhantomData;
use std::sync::Arc;

use futures_util::stream::{self, Stream};
use serde::de::DeserializeOwned;

use crate::error::{TransportError, TransportResult};
use crate::headers::HeaderSet;
use crate::token::DynTokenProvider;
use crate::transport::{BoxFuture, DynTransport, Request};

/// Where a query gets its headers from.
#[derive(Clone)]
pub(crate) enum HeaderSource {
    /// Built once at client construction.
    Captured(Arc<HeaderSet>),
    /// Rebuilt from the provider on every execution.
    Live {
        tokens: DynTokenProvider,
        send_allow_headers: bool,
    },
}

impl HeaderSource {
    fn resolve(&self) -> HeaderSet {
        match self {
            Self::Captured(headers) => HeaderSet::clone(headers),
            Self::Live {
                tokens,
                send_allow_headers,
            } => HeaderSet::authorized(tokens.header_value(), *send_allow_headers),
        }
    }
}

impl std::fmt::Debug for HeaderSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Captured(headers) => f.debug_tuple("Captured").field(headers).finish(),
            Self::Live { .. } => f.write_str("Live"),
        }
    }
}

/// A GET against one dashboard path, decoded as `T`.
///
/// Building a query does no I/O. Each execution (`.await`, [`Query::fetch`]
/// or polling [`Query::into_stream`]) issues exactly one new request; nothing
/// is cached or shared between executions. Dropping the future abandons the
/// request.
pub struct Query<T> {
    transport: DynTransport,
    headers: HeaderSource,
    path: String,
    _payload: PhantomData<fn() -> T>,
}

impl<T> Query<T> {
    pub(crate) fn new(transport: DynTransport, headers: HeaderSource, path: String) -> Self {
        Self {
            transport,
            headers,
            path,
            _payload: PhantomData,
        }
    }

    /// Request path relative to the backend base URL.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl<T: DeserializeOwned + Send + 'static> Query<T> {
    /// Execute the query once.
    ///
    /// The returned future is lazy: the transport is not called until it is
    /// polled.
    pub fn fetch(&self) -> BoxFuture<'static, TransportResult<T>> {
        let transport = Arc::clone(&self.transport);
        let headers = self.headers.clone();
        let path = self.path.clone();

        Box::pin(async move {
            let request = Request::get(path, headers.resolve());
            let value = transport.get(request).await?;
            serde_json::from_value(value).map_err(|e| TransportError::Decode(e.to_string()))
        })
    }

    /// Single-item stream: one value (or error), then end.
    pub fn into_stream(self) -> impl Stream<Item = TransportResult<T>> + Send + Unpin + 'static {
        stream::once(self.fetch())
    }
}

impl<T: DeserializeOwned + Send + 'static> IntoFuture for Query<T> {
    type Output = TransportResult<T>;
    type IntoFuture = BoxFuture<'static, TransportResult<T>>;

    fn into_future(self) -> Self::IntoFuture {
        self.fetch()
    }
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            headers: self.headers.clone(),
            path: self.path.clone(),
            _payload: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Query")
            .field("path", &self.path)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}
