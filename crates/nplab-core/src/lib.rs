//! Core payload types for the NP-lab dashboard.
//!
//! This crate provides the data shapes exchanged with the dashboard backend:
//! - `StatsSummary`: turnaround-time summary (mean / max)
//! - `DailyCaseCount`, `CaseCount`: case counters
//! - `PendingAsset`, `Origin`, `Parity`: pending case listings and filters
//! - `SampleType`, `RequestCount`: report breakdowns
//! - `Interval`, `Intervals`: day / TAT ranges encoded into request paths

pub mod error;
pub mod interval;
pub mod pending;
pub mod report;
pub mod stats;

pub use error::{CoreError, Result};
pub use interval::{Interval, Intervals};
pub use pending::{Origin, Parity, PendingAsset, PendingScope};
pub use report::{RequestCount, SampleType, NO_INSTRUCTION};
pub use stats::{CaseCount, DailyCaseCount, StatsSummary};
