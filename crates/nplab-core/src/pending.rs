//! Pending case listings and their filters.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Prefix marking externally referred NP numbers.
const EXTERNAL_PREFIX: char = 'X';

/// A case that has been registered but not yet completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingAsset {
    /// Lab number (e.g., "1234/20" or "X56/20").
    pub np_number: String,
    /// Free-text biopsy type.
    pub biopsy_type: String,
    /// Display string formatted by the backend ("Today, 10:30", "Now", ...).
    pub start_time: String,
}

impl PendingAsset {
    /// Where the case was registered, derived from the NP number.
    #[must_use]
    pub fn origin(&self) -> Origin {
        Origin::of_np_number(&self.np_number)
    }

    /// Parity of the NP number, if it has the `<digits>/<year>` shape.
    #[must_use]
    pub fn parity(&self) -> Option<Parity> {
        Parity::of_np_number(&self.np_number)
    }
}

/// Where a case was registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Internal,
    External,
}

impl Origin {
    /// Path segment used by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::External => "external",
        }
    }

    /// Classify an NP number: `X`-prefixed numbers are external.
    pub fn of_np_number(np_number: &str) -> Self {
        if np_number.starts_with(EXTERNAL_PREFIX) {
            Self::External
        } else {
            Self::Internal
        }
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Origin {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "internal" => Ok(Self::Internal),
            "external" => Ok(Self::External),
            _ => Err(CoreError::InvalidOrigin(s.to_string())),
        }
    }
}

/// Parity of the serial part of an NP number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Path segment used by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Even => "even",
            Self::Odd => "odd",
        }
    }

    /// Parity of the digit immediately before the first `/`.
    pub fn of_np_number(np_number: &str) -> Option<Self> {
        let (serial, _) = np_number.split_once('/')?;
        let digit = serial.chars().last()?.to_digit(10)?;
        Some(if digit % 2 == 0 { Self::Even } else { Self::Odd })
    }
}

impl std::fmt::Display for Parity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Parity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "even" => Ok(Self::Even),
            "odd" => Ok(Self::Odd),
            _ => Err(CoreError::InvalidParity(s.to_string())),
        }
    }
}

/// Which pending cases a listing or chart covers.
///
/// The backend only filters by parity together with an origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PendingScope {
    #[default]
    All,
    Origin(Origin),
    OriginAndParity(Origin, Parity),
}

impl PendingScope {
    /// Build a scope from optional filters.
    ///
    /// A parity without an origin is rejected.
    pub fn from_filters(origin: Option<Origin>, parity: Option<Parity>) -> Result<Self, CoreError> {
        match (origin, parity) {
            (None, None) => Ok(Self::All),
            (Some(origin), None) => Ok(Self::Origin(origin)),
            (Some(origin), Some(parity)) => Ok(Self::OriginAndParity(origin, parity)),
            (None, Some(parity)) => Err(CoreError::InvalidParity(format!(
                "{parity} requires an origin"
            ))),
        }
    }

    /// Path segments (with leading `/`), empty for `All`.
    pub fn path_segments(&self) -> String {
        match self {
            Self::All => String::new(),
            Self::Origin(origin) => format!("/{origin}"),
            Self::OriginAndParity(origin, parity) => format!("/{origin}/{parity}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(np_number: &str) -> PendingAsset {
        PendingAsset {
            np_number: np_number.to_string(),
            biopsy_type: "Muscle".to_string(),
            start_time: "Today, 09:15".to_string(),
        }
    }

    #[test]
    fn test_pending_asset_deserialize() {
        let raw = r#"{"npNumber": "X12/20", "biopsyType": "Nerve", "startTime": "Yesterday, 14:02"}"#;
        let parsed: PendingAsset = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.np_number, "X12/20");
        assert_eq!(parsed.biopsy_type, "Nerve");
        assert_eq!(parsed.start_time, "Yesterday, 14:02");
    }

    #[test]
    fn test_origin_from_np_number() {
        assert_eq!(asset("X12/20").origin(), Origin::External);
        assert_eq!(asset("1234/20").origin(), Origin::Internal);
    }

    #[test]
    fn test_parity_from_np_number() {
        assert_eq!(asset("1234/20").parity(), Some(Parity::Even));
        assert_eq!(asset("X57/21").parity(), Some(Parity::Odd));
        assert_eq!(asset("no-slash").parity(), None);
        assert_eq!(asset("12a/20").parity(), None);
    }

    #[test]
    fn test_origin_parse() {
        assert_eq!("internal".parse::<Origin>().unwrap(), Origin::Internal);
        assert_eq!("EXTERNAL".parse::<Origin>().unwrap(), Origin::External);
        assert_eq!(
            "remote".parse::<Origin>(),
            Err(CoreError::InvalidOrigin("remote".to_string()))
        );
    }

    #[test]
    fn test_pending_scope_segments() {
        assert_eq!(PendingScope::All.path_segments(), "");
        assert_eq!(PendingScope::Origin(Origin::External).path_segments(), "/external");
        assert_eq!(
            PendingScope::OriginAndParity(Origin::Internal, Parity::Odd).path_segments(),
            "/internal/odd"
        );
    }

    #[test]
    fn test_pending_scope_from_filters() {
        assert_eq!(PendingScope::from_filters(None, None).unwrap(), PendingScope::All);
        assert_eq!(
            PendingScope::from_filters(Some(Origin::Internal), Some(Parity::Even)).unwrap(),
            PendingScope::OriginAndParity(Origin::Internal, Parity::Even)
        );
        assert!(PendingScope::from_filters(None, Some(Parity::Even)).is_err());
    }

    #[test]
    fn test_parity_parse_and_display() {
        let parity: Parity = "Odd".parse().unwrap();
        assert_eq!(parity, Parity::Odd);
        assert_eq!(parity.to_string(), "odd");
        assert!("three".parse::<Parity>().is_err());
    }
}
