#![warn(missing_docs)]
//! Sortbench Report - Ranking and Rendering
//!
//! Turns one run into a ranked, serializable report:
//! - Ranking (elapsed-time order, slowdown ratios, mean and median)
//! - JSON (machine-readable)
//! - CSV (spreadsheet-compatible)
//!
//! Terminal rendering lives with the CLI.

mod csv;
mod json;
mod ranking;
#[allow(missing_docs)]
mod report;

pub use csv::generate_csv_report;
pub use json::generate_json_report;
pub use ranking::{RankedRow, RankedTable, Ranking, Standing, rank};
pub use report::{
    DatasetInfo, FailureInfo, Report, ReportMeta, ReportSummary, ResultRow, SCHEMA_VERSION,
    SystemInfo,
};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Human,
    /// JSON with full schema
    Json,
    /// CSV for spreadsheets
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Format a duration given in seconds with an adaptive unit
///
/// # Examples
///
/// ```
/// # use sortbench_report::format_duration;
/// assert_eq!(format_duration(0.000_000_5), "500.00 ns");
/// assert_eq!(format_duration(0.000_25), "250.00 μs");
/// assert_eq!(format_duration(0.0123), "12.30 ms");
/// assert_eq!(format_duration(2.5), "2.50 s");
/// ```
pub fn format_duration(seconds: f64) -> String {
    if seconds < 1e-6 {
        format!("{:.2} ns", seconds * 1e9)
    } else if seconds < 1e-3 {
        format!("{:.2} μs", seconds * 1e6)
    } else if seconds < 1.0 {
        format!("{:.2} ms", seconds * 1e3)
    } else {
        format!("{:.2} s", seconds)
    }
}
