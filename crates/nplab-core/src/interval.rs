//! Inclusive ranges used by the chart and TAT breakdown endpoints.
//!
//! The backend takes a list of ranges as two comma-separated path segments:
//! all starts, then all ends (`/0,3,7/3,7,14`).

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Inclusive `[start, end]` range of days (days ago, or TAT days).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: u32,
    pub end: u32,
}

impl Interval {
    /// Create an interval. `start` must not exceed `end`.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start > end {
            return Err(CoreError::InvalidInterval(format!(
                "start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Parses `"<start>-<end>"`, e.g. `"3-7"`.
impl FromStr for Interval {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| CoreError::InvalidInterval(format!("expected <start>-<end>: {s}")))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|e| CoreError::InvalidInterval(format!("{s}: {e}")))
        };
        Self::new(parse(start)?, parse(end)?)
    }
}

/// Non-empty ordered list of intervals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intervals(Vec<Interval>);

impl Intervals {
    /// Wrap a list of intervals, rejecting an empty one.
    pub fn new(intervals: Vec<Interval>) -> Result<Self> {
        if intervals.is_empty() {
            return Err(CoreError::EmptyIntervals);
        }
        Ok(Self(intervals))
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed list.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode as `<starts>/<ends>` path segments.
    pub fn to_path_segments(&self) -> String {
        let join = |f: fn(&Interval) -> u32| {
            self.0
                .iter()
                .map(|i| f(i).to_string())
                .collect::<Vec<_>>()
                .join(",")
        };
        format!("{}/{}", join(|i| i.start), join(|i| i.end))
    }
}

impl TryFrom<Vec<Interval>> for Intervals {
    type Error = CoreError;

    fn try_from(intervals: Vec<Interval>) -> Result<Self> {
        Self::new(intervals)
    }
}
