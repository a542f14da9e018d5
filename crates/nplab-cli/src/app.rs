//! Command execution.
//!
//! Runs one dashboard command against the client and renders the decoded
//! payload as JSON for stdout.

use crate::cli::Command;
use crate::config::AppConfig;
use crate::error::AppResult;
use nplab_client::{DashboardClient, DynTokenProvider, EnvToken, StaticToken};
use nplab_core::{Interval, Intervals, PendingScope, SampleType};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::{debug, info};

/// Main application.
#[derive(Debug, Clone)]
pub struct Application {
    client: DashboardClient,
}

impl Application {
    /// Create an application talking to the configured backend.
    ///
    /// Token precedence: `token_override` (CLI) > `auth.token` > `auth.token_env`.
    pub fn new(config: &AppConfig, token_override: Option<String>) -> AppResult<Self> {
        let tokens = Self::token_provider(config, token_override);
        let client = DashboardClient::from_config(&config.client, tokens)?;

        info!(
            base_url = %config.client.base_url,
            token_policy = ?config.client.token_policy,
            "Dashboard client ready"
        );

        Ok(Self { client })
    }

    /// Create an application over an existing client.
    pub fn with_client(client: DashboardClient) -> Self {
        Self { client }
    }

    fn token_provider(config: &AppConfig, token_override: Option<String>) -> DynTokenProvider {
        match token_override.or_else(|| config.auth.token.clone()) {
            Some(token) => Arc::new(StaticToken::new(token)),
            None => {
                debug!(var = %config.auth.token_env, "Reading token from environment");
                Arc::new(EnvToken::new(config.auth.token_env.clone()))
            }
        }
    }

    /// Run a command and return its JSON rendering.
    pub async fn run(&self, command: Command) -> AppResult<Value> {
        debug!(?command, "Running command");

        let output = match command {
            Command::Stats => serde_json::to_value(self.client.stats().await?)?,
            Command::Samples => serde_json::to_value(self.client.samples().await?)?,
            Command::Month => serde_json::to_value(self.client.month_count().await?)?,
            Command::Year => serde_json::to_value(self.client.year_count().await?)?,
            Command::Overview => self.overview().await?,
            Command::Pending { origin, parity } => {
                let scope = PendingScope::from_filters(origin, parity)?;
                serde_json::to_value(self.client.pending_assets(scope).await?)?
            }
            Command::PendingCount => serde_json::to_value(self.client.pending_count().await?)?,
            Command::PendingChart {
                intervals,
                origin,
                parity,
            } => {
                let scope = PendingScope::from_filters(origin, parity)?;
                let intervals = Intervals::new(intervals)?;
                let counts = self.client.pending_breakout(scope, &intervals).await?;
                bucketed(&intervals, &counts)
            }
            Command::Cases { from, to } => {
                let counts = self.client.sample_type_breakout(from, to).await?;
                by_sample_type(&counts)
            }
            Command::Tat {
                sample_type,
                intervals,
            } => {
                let intervals = Intervals::new(intervals)?;
                let counts = self.client.tat_breakout(sample_type, &intervals).await?;
                bucketed(&intervals, &counts)
            }
            Command::Requests {
                sample_type,
                interval,
            } => {
                let rows = self.client.request_breakout(sample_type, interval).await?;
                serde_json::to_value(rows)?
            }
        };

        Ok(output)
    }

    /// The four summary queries, issued concurrently.
    async fn overview(&self) -> AppResult<Value> {
        let (stats, samples, month, year) = tokio::join!(
            self.client.stats().fetch(),
            self.client.samples().fetch(),
            self.client.month_count().fetch(),
            self.client.year_count().fetch(),
        );

        Ok(json!({
            "stats": stats?,
            "samples": samples?,
            "month_count": month?,
            "year_count": year?,
        }))
    }
}

/// Pair each interval with its count: `[{"interval": "0-3", "count": 4}, ...]`.
fn bucketed(intervals: &Intervals, counts: &[u64]) -> Value {
    let rows = intervals
        .as_slice()
        .iter()
        .zip(counts)
        .map(|(interval, count): (&Interval, &u64)| {
            json!({ "interval": interval.to_string(), "count": count })
        })
        .collect();
    Value::Array(rows)
}

/// Key positional sample-type counts by name.
fn by_sample_type(counts: &[u64]) -> Value {
    let map: Map<String, Value> = SampleType::label(counts)
        .into_iter()
        .map(|(sample_type, count)| (sample_type.to_string(), Value::from(count)))
        .collect();
    Value::Object(map)
}
