//! Report breakdown payloads.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Label the backend uses for cases without special requests.
pub const NO_INSTRUCTION: &str = "No instruction";

/// Separator between request names in `RequestCount::request_type`.
const REQUEST_SEPARATOR: &str = " + ";

/// Biopsy categories, in the order the backend reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleType {
    Tumor,
    Nerve,
    Muscle,
    #[serde(rename = "Multiple Biopsies")]
    MultipleBiopsies,
    Epilepsy,
    Block,
    Slides,
    Other,
}

impl SampleType {
    /// All sample types in backend order.
    ///
    /// Sample-type breakdowns are positional over this slice.
    pub const ALL: [SampleType; 8] = [
        Self::Tumor,
        Self::Nerve,
        Self::Muscle,
        Self::MultipleBiopsies,
        Self::Epilepsy,
        Self::Block,
        Self::Slides,
        Self::Other,
    ];

    /// Name as stored in the biopsy type column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tumor => "Tumor",
            Self::Nerve => "Nerve",
            Self::Muscle => "Muscle",
            Self::MultipleBiopsies => "Multiple Biopsies",
            Self::Epilepsy => "Epilepsy",
            Self::Block => "Block",
            Self::Slides => "Slides",
            Self::Other => "Other",
        }
    }

    /// Pair a positional breakdown with its sample types.
    ///
    /// Extra counts are dropped; missing counts leave later types out.
    pub fn label(counts: &[u64]) -> Vec<(SampleType, u64)> {
        Self::ALL.iter().copied().zip(counts.iter().copied()).collect()
    }
}

impl std::fmt::Display for SampleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownSampleType(s.to_string()))
    }
}

/// Number of cases sharing a combination of special requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestCount {
    /// Requests joined with " + " (e.g., "Special stain + IHC").
    pub request_type: String,
    pub count: u64,
}

impl RequestCount {
    /// Individual request names; empty when no special request was made.
    pub fn requests(&self) -> Vec<&str> {
        if self.request_type == NO_INSTRUCTION || self.request_type.is_empty() {
            return Vec::new();
        }
        self.request_type.split(REQUEST_SEPARATOR).collect()
    }
}
