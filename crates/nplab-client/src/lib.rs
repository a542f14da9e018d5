//! Authenticated read-only client for the NP-lab dashboard API.
//!
//! Every operation on [`DashboardClient`] returns a [`Query`]: a cold producer
//! that performs no I/O until it is awaited, fetched or streamed, and issues a
//! fresh GET each time it is executed.
//!
//! The client composes two capabilities:
//! - [`Transport`]: issues the GET and returns the decoded JSON document
//! - [`TokenProvider`]: yields the `Authorization` header value
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use nplab_client::{ClientConfig, DashboardClient, StaticToken};
//!
//! let config = ClientConfig::default();
//! let client = DashboardClient::from_config(&config, Arc::new(StaticToken::new("Bearer abc")))?;
//!
//! let month = client.month_count().await?;
//! let days = client.samples().await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod headers;
pub mod http;
pub mod query;
pub mod token;
pub mod transport;

pub use client::DashboardClient;
pub use config::ClientConfig;
pub use error::{TransportError, TransportResult};
pub use headers::HeaderSet;
pub use http::ReqwestTransport;
pub use query::Query;
pub use token::{DynTokenProvider, EnvToken, SharedToken, StaticToken, TokenPolicy, TokenProvider};
pub use transport::{BoxFuture, DynTransport, MockTransport, Request, Transport};
