//! Report Data Structures

use crate::ranking::Ranking;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sortbench_core::{BenchError, BenchmarkResult, Severity};
use sortbench_logic::VerificationReport;

/// Version of the serialized report layout
pub const SCHEMA_VERSION: u32 = 1;

/// Complete record of one benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    /// Successful results in completion order
    pub results: Vec<ResultRow>,
    /// Per-algorithm failures in the order they happened
    pub failures: Vec<FailureInfo>,
    pub ranking: Ranking,
    pub verification: VerificationReport,
    pub summary: ReportSummary,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub schema_version: u32,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub dataset: DatasetInfo,
    pub system: SystemInfo,
}

/// The dataset a run sorted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub name: String,
    pub records: usize,
}

/// System information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    pub cpu: String,
    pub cpu_cores: u32,
    pub memory_gb: f64,
}

/// One successful strategy execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRow {
    pub algorithm: String,
    pub elapsed_secs: f64,
    pub elapsed_ns: u64,
    pub cycles: u64,
    /// Number of records the strategy returned
    pub records: usize,
}

impl From<&BenchmarkResult> for ResultRow {
    fn from(result: &BenchmarkResult) -> Self {
        Self {
            algorithm: result.algorithm.clone(),
            elapsed_secs: result.elapsed_secs(),
            elapsed_ns: u64::try_from(result.elapsed.as_nanos()).unwrap_or(u64::MAX),
            cycles: result.cycles,
            records: result.output.len(),
        }
    }
}

/// Failure information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureInfo {
    pub algorithm: String,
    pub kind: String,
    pub severity: Severity,
    pub message: String,
}

impl FailureInfo {
    /// Describe a failure of `algorithm`
    pub fn new(algorithm: impl Into<String>, error: &BenchError) -> Self {
        Self {
            algorithm: algorithm.into(),
            kind: error.kind().to_string(),
            severity: error.severity(),
            message: error.to_string(),
        }
    }
}

/// Report summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Algorithms scheduled
    pub requested: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Verification mismatches (warnings)
    pub mismatches: usize,
    pub fastest: Option<String>,
}

impl Report {
    /// Whether more than one algorithm was scheduled
    pub fn is_comparison(&self) -> bool {
        self.summary.requested > 1
    }
}
