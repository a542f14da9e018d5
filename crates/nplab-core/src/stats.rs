//! Dashboard summary and counter payloads.
//!
//! Shapes follow the backend's JSON serialization (camelCase field names).

use serde::{Deserialize, Serialize};

/// Turnaround-time summary over the backend's recent window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Mean turnaround time in days.
    pub mean: f64,
    /// Maximum turnaround time in days.
    pub max: i64,
}

/// Internal / external cases registered on a single day.
///
/// The daily endpoint returns these most recent day first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCaseCount {
    /// Cases registered in-house (NP number without the `X` prefix).
    pub internal_cases_count: u64,
    /// Cases referred from outside (NP number starting with `X`).
    pub external_cases_count: u64,
}

impl DailyCaseCount {
    /// Combined internal and external count, saturating at `u64::MAX`.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.internal_cases_count
            .saturating_add(self.external_cases_count)
    }
}

/// Wire forms accepted for a scalar count.
#[derive(Deserialize)]
#[serde(untagged)]
enum CountRepr {
    Bare(u64),
    Wrapped { count: u64 },
}

/// A single case count (month, year, pending).
///
/// Decodes from either a bare integer (`5`) or a wrapped object
/// (`{"count": 5}`); always serializes as a bare integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "CountRepr")]
pub struct CaseCount(pub u64);

impl CaseCount {
    /// Raw count value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<CountRepr> for CaseCount {
    fn from(repr: CountRepr) -> Self {
        match repr {
            CountRepr::Bare(count) | CountRepr::Wrapped { count } => Self(count),
        }
    }
}

impl From<CaseCount> for u64 {
    fn from(count: CaseCount) -> Self {
        count.0
    }
}

impl std::fmt::Display for CaseCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_summary_ignores_unknown_fields() {
        let summary: StatsSummary =
            serde_json::from_str(r#"{"mean": 4.25, "max": 17, "stat": "tat"}"#).unwrap();
        assert_eq!(summary.mean, 4.25);
        assert_eq!(summary.max, 17);
    }

    #[test]
    fn test_stats_summary_rejects_missing_field() {
        let result = serde_json::from_str::<StatsSummary>(r#"{"mean": 4.25}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_daily_case_count_camel_case() {
        let day: DailyCaseCount =
            serde_json::from_str(r#"{"internalCasesCount": 7, "externalCasesCount": 2}"#)
                .unwrap();
        assert_eq!(day.internal_cases_count, 7);
        assert_eq!(day.external_cases_count, 2);
        assert_eq!(day.total(), 9);
    }

    #[test]
    fn test_daily_total_saturates() {
        let day: DailyCaseCount = serde_json::from_str(
            r#"{"internalCasesCount": 18446744073709551615, "externalCasesCount": 1}"#,
        )
        .unwrap();
        assert_eq!(day.total(), u64::MAX);
    }

    #[test]
    fn test_case_count_bare_integer() {
        let count: CaseCount = serde_json::from_str("5").unwrap();
        assert_eq!(count.get(), 5);
    }

    #[test]
    fn test_case_count_wrapped_object() {
        let count: CaseCount = serde_json::from_str(r#"{"count": 5}"#).unwrap();
        assert_eq!(count, CaseCount(5));
    }

    #[test]
    fn test_case_count_rejects_negative() {
        assert!(serde_json::from_str::<CaseCount>("-1").is_err());
        assert!(serde_json::from_str::<CaseCount>(r#""5""#).is_err());
    }

    #[test]
    fn test_case_count_serializes_bare() {
        assert_eq!(serde_json::to_string(&CaseCount(12)).unwrap(), "12");
    }
}
