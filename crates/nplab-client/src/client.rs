//! Dashboard data client.
//!
//! Builds one authenticated GET per operation and hands it back as a cold
//! [`Query`]. No retries, caching or error translation happen here.

use crate::config::ClientConfig;
use crate::error::TransportResult;
use crate::headers::HeaderSet;
use crate::http::ReqwestTransport;
use crate::query::{HeaderSource, Query};
use crate::token::{DynTokenProvider, TokenPolicy};
use crate::transport::DynTransport;
use chrono::NaiveDate;
use nplab_core::{
    CaseCount, DailyCaseCount, Interval, Intervals, PendingAsset, PendingScope, RequestCount,
    SampleType, StatsSummary,
};
use std::sync::Arc;

const STATS_PATH: &str = "/api/dashboard/summary/tat";
const DAILY_COUNT_PATH: &str = "/api/dashboard/count/daily";
const MONTH_COUNT_PATH: &str = "/api/dashboard/count/month";
const YEAR_COUNT_PATH: &str = "/api/dashboard/count/year";
const PENDING_PATH: &str = "/api/dashboard/pending";
const CASES_PATH: &str = "/api/dashboard/cases";
const TAT_PATH: &str = "/api/dashboard/tat";
const REQUESTS_PATH: &str = "/api/dashboard/requests";

/// Date format expected in report paths.
const PATH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Read-only client for the dashboard API.
#[derive(Clone)]
pub struct DashboardClient {
    transport: DynTransport,
    headers: HeaderSource,
    daily_window: u32,
}

impl std::fmt::Debug for DashboardClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardClient")
            .field("headers", &self.headers)
            .field("daily_window", &self.daily_window)
            .finish_non_exhaustive()
    }
}

impl DashboardClient {
    /// Create a client over an existing transport.
    ///
    /// With [`TokenPolicy::CaptureOnce`] the provider is read exactly once,
    /// here; later changes to the token are not picked up.
    pub fn new(transport: DynTransport, tokens: DynTokenProvider, config: &ClientConfig) -> Self {
        let headers = match config.token_policy {
            TokenPolicy::CaptureOnce => HeaderSource::Captured(Arc::new(HeaderSet::authorized(
                tokens.header_value(),
                config.send_allow_headers,
            ))),
            TokenPolicy::PerRequest => HeaderSource::Live {
                tokens,
                send_allow_headers: config.send_allow_headers,
            },
        };

        Self {
            transport,
            headers,
            daily_window: config.daily_window,
        }
    }

    /// Create a client backed by [`ReqwestTransport`].
    pub fn from_config(config: &ClientConfig, tokens: DynTokenProvider) -> TransportResult<Self> {
        let transport = ReqwestTransport::from_config(config)?;
        Ok(Self::new(Arc::new(transport), tokens, config))
    }

    /// Headers captured at construction (`None` under `PerRequest`).
    pub fn captured_headers(&self) -> Option<&HeaderSet> {
        match &self.headers {
            HeaderSource::Captured(headers) => Some(headers.as_ref()),
            HeaderSource::Live { .. } => None,
        }
    }

    fn query<T>(&self, path: String) -> Query<T> {
        Query::new(Arc::clone(&self.transport), self.headers.clone(), path)
    }

    /// Turnaround-time summary.
    pub fn stats(&self) -> Query<StatsSummary> {
        self.query(STATS_PATH.to_string())
    }

    /// Daily internal/external counts for the configured window, newest first.
    pub fn samples(&self) -> Query<Vec<DailyCaseCount>> {
        self.query(format!("{DAILY_COUNT_PATH}/{}", self.daily_window))
    }

    /// Cases registered this month.
    pub fn month_count(&self) -> Query<CaseCount> {
        self.query(MONTH_COUNT_PATH.to_string())
    }

    /// Cases registered this year.
    pub fn year_count(&self) -> Query<CaseCount> {
        self.query(YEAR_COUNT_PATH.to_string())
    }

    /// Pending cases, oldest first.
    pub fn pending_assets(&self, scope: PendingScope) -> Query<Vec<PendingAsset>> {
        self.query(format!("{PENDING_PATH}{}", scope.path_segments()))
    }

    /// Total number of pending cases.
    pub fn pending_count(&self) -> Query<CaseCount> {
        self.query(format!("{PENDING_PATH}/count"))
    }

    /// Pending case counts per "days ago" interval, one count per interval.
    pub fn pending_breakout(&self, scope: PendingScope, intervals: &Intervals) -> Query<Vec<u64>> {
        self.query(format!(
            "{PENDING_PATH}/chart{}/{}",
            scope.path_segments(),
            intervals.to_path_segments()
        ))
    }

    /// Cases per sample type processed between two dates.
    ///
    /// Counts are positional over [`SampleType::ALL`]; see [`SampleType::label`].
    pub fn sample_type_breakout(&self, from: NaiveDate, to: NaiveDate) -> Query<Vec<u64>> {
        self.query(format!(
            "{CASES_PATH}/{}/{}",
            from.format(PATH_DATE_FORMAT),
            to.format(PATH_DATE_FORMAT)
        ))
    }

    /// Cases of one sample type per TAT interval.
    ///
    /// Counts are restricted to the date range of the most recent
    /// [`sample_type_breakout`](Self::sample_type_breakout) call. The backend
    /// keeps that range as server-side state, so issue that query first.
    pub fn tat_breakout(&self, sample_type: SampleType, intervals: &Intervals) -> Query<Vec<u64>> {
        self.query(format!(
            "{TAT_PATH}/{sample_type}/{}",
            intervals.to_path_segments()
        ))
    }

    /// Cases of one sample type within a TAT range, grouped by special request.
    ///
    /// Like [`tat_breakout`](Self::tat_breakout), this counts within the date
    /// range set by the last `sample_type_breakout` call on the backend.
    pub fn request_breakout(&self, sample_type: SampleType, tat: Interval) -> Query<Vec<RequestCount>> {
        self.query(format!(
            "{REQUESTS_PATH}/{sample_type}/{}/{}",
            tat.start, tat.end
        ))
    }
}
