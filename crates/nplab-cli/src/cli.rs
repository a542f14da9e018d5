//! Command-line arguments.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use nplab_core::{Interval, Origin, Parity, SampleType};

/// Query the NP-lab dashboard API and print the result as JSON.
#[derive(Parser, Debug)]
#[command(name = "nplab-dash", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (can also be set via NPLAB_CONFIG env var)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Authorization header value, e.g. "Bearer eyJ..." (overrides config)
    #[arg(long)]
    pub token: Option<String>,

    /// Backend base URL (overrides config)
    #[arg(long)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Turnaround-time summary (mean / max)
    Stats,
    /// Daily internal / external case counts
    Samples,
    /// Cases registered this month
    Month,
    /// Cases registered this year
    Year,
    /// Stats, daily counts, month and year counts fetched together
    Overview,
    /// Pending cases, optionally filtered
    Pending {
        #[arg(long)]
        origin: Option<Origin>,
        /// Requires --origin
        #[arg(long, requires = "origin")]
        parity: Option<Parity>,
    },
    /// Total number of pending cases
    PendingCount,
    /// Pending case counts per "days ago" interval
    PendingChart {
        /// Interval as <start>-<end> days ago; repeat for more buckets
        #[arg(long = "interval", required = true)]
        intervals: Vec<Interval>,
        #[arg(long)]
        origin: Option<Origin>,
        #[arg(long, requires = "origin")]
        parity: Option<Parity>,
    },
    /// Cases per sample type between two dates
    Cases {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: NaiveDate,
    },
    /// Cases of one sample type per TAT interval
    Tat {
        #[arg(long)]
        sample_type: SampleType,
        /// TAT interval as <start>-<end> days; repeat for more buckets
        #[arg(long = "interval", required = true)]
        intervals: Vec<Interval>,
    },
    /// Special request breakdown for one sample type and TAT range
    Requests {
        #[arg(long)]
        sample_type: SampleType,
        /// TAT range as <start>-<end> days
        #[arg(long)]
        interval: Interval,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_core_command() {
        let cli = Cli::try_parse_from(["nplab-dash", "--token", "Bearer x", "month"]).unwrap();
        assert_eq!(cli.token.as_deref(), Some("Bearer x"));
        assert_eq!(cli.command, Command::Month);
    }

    #[test]
    fn test_parse_pending_filters() {
        let cli = Cli::try_parse_from([
            "nplab-dash",
            "pending",
            "--origin",
            "external",
            "--parity",
            "odd",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::Pending {
                origin: Some(Origin::External),
                parity: Some(Parity::Odd),
            }
        );
    }

    #[test]
    fn test_parity_requires_origin() {
        let result = Cli::try_parse_from(["nplab-dash", "pending", "--parity", "even"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_repeated_intervals() {
        let cli = Cli::try_parse_from([
            "nplab-dash",
            "tat",
            "--sample-type",
            "Multiple Biopsies",
            "--interval",
            "0-3",
            "--interval",
            "4-7",
        ])
        .unwrap();
        match cli.command {
            Command::Tat {
                sample_type,
                intervals,
            } => {
                assert_eq!(sample_type, SampleType::MultipleBiopsies);
                assert_eq!(intervals.len(), 2);
                assert_eq!(intervals[1], Interval { start: 4, end: 7 });
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_dates() {
        let cli = Cli::try_parse_from([
            "nplab-dash",
            "cases",
            "--from",
            "2020-01-01",
            "--to",
            "2020-03-31",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Cases { .. }));
        assert!(Cli::try_parse_from(["nplab-dash", "cases", "--from", "01-01-2020", "--to", "x"]).is_err());
    }

    #[test]
    fn test_pending_chart_needs_interval() {
        assert!(Cli::try_parse_from(["nplab-dash", "pending-chart"]).is_err());
    }
}
