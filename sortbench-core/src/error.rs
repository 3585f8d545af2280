//! Error taxonomy
//!
//! Shared setup failures are critical and end the run. Failures local to one
//! algorithm are warnings: they are reported and the batch continues.

use std::path::PathBuf;
use thiserror::Error;

/// Severity levels for reporting and exit-code decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Fatal - the run cannot continue
    Critical,
    /// Reported, but the run continues
    Warning,
    /// Informational only
    Info,
}

/// Every failure a benchmark run can surface
#[derive(Debug, Error)]
pub enum BenchError {
    /// The discovery source holds no candidates at all
    #[error("discovery source missing: {source_name}")]
    DiscoverySourceMissing {
        /// Label of the empty source
        source_name: String,
    },

    /// No public strategy is registered under the requested name
    #[error("unknown algorithm '{name}' (available: {})", .available.join(", "))]
    AlgorithmNotFound {
        /// Requested name
        name: String,
        /// Names that could have been loaded instead
        available: Vec<String>,
    },

    /// The candidate exists but cannot be used as a strategy
    #[error("algorithm '{name}' does not satisfy the sorting contract: {reason}")]
    InvalidContract {
        /// Offending strategy
        name: String,
        /// What is wrong with it
        reason: String,
    },

    /// The strategy panicked while sorting
    #[error("algorithm '{algorithm}' failed during execution: {cause}")]
    StrategyExecutionFailed {
        /// Strategy that failed
        algorithm: String,
        /// Panic message
        cause: String,
    },

    /// Sorted output could not be persisted
    #[error("failed to write output of '{algorithm}' to {}: {source}", .path.display())]
    OutputWriteFailed {
        /// Strategy whose output was being saved
        algorithm: String,
        /// Destination file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A strategy's output disagrees with the reference output
    #[error("'{algorithm}' produced different results than '{reference}': {detail}")]
    VerificationMismatch {
        /// Strategy that disagrees
        algorithm: String,
        /// Strategy whose output is the reference
        reference: String,
        /// First difference found
        detail: String,
    },

    /// The dataset file could not be read
    #[error("dataset '{}' could not be read: {source}", .path.display())]
    DatasetUnavailable {
        /// Dataset path as given
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

impl BenchError {
    /// Severity of this error in the context of a whole run.
    ///
    /// `AlgorithmNotFound` is a warning here; callers that resolved the name
    /// from explicit operator input escalate it themselves.
    pub fn severity(&self) -> Severity {
        match self {
            BenchError::DiscoverySourceMissing { .. } | BenchError::DatasetUnavailable { .. } => {
                Severity::Critical
            }
            BenchError::AlgorithmNotFound { .. }
            | BenchError::InvalidContract { .. }
            | BenchError::StrategyExecutionFailed { .. }
            | BenchError::OutputWriteFailed { .. }
            | BenchError::VerificationMismatch { .. } => Severity::Warning,
        }
    }

    /// Whether this error terminates the whole run
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Critical
    }

    /// Short machine-readable kind, used in reports
    pub fn kind(&self) -> &'static str {
        match self {
            BenchError::DiscoverySourceMissing { .. } => "discovery_source_missing",
            BenchError::AlgorithmNotFound { .. } => "algorithm_not_found",
            BenchError::InvalidContract { .. } => "invalid_contract",
            BenchError::StrategyExecutionFailed { .. } => "strategy_execution_failed",
            BenchError::OutputWriteFailed { .. } => "output_write_failed",
            BenchError::VerificationMismatch { .. } => "verification_mismatch",
            BenchError::DatasetUnavailable { .. } => "dataset_unavailable",
        }
    }
}
