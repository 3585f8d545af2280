//! Verification Execution

use serde::{Deserialize, Serialize};
use sortbench_core::{BenchError, BenchmarkResult, Severity};
use std::fmt;

/// Where two outputs first disagree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MismatchDetail {
    /// The outputs hold a different number of records
    Length {
        /// Reference output length
        expected: usize,
        /// Compared output length
        actual: usize,
    },
    /// Same length, first differing record at `index`
    Element {
        /// Zero-based position of the first difference
        index: usize,
    },
}

impl fmt::Display for MismatchDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchDetail::Length { expected, actual } => {
                write!(f, "expected {} records, got {}", expected, actual)
            }
            MismatchDetail::Element { index } => write!(f, "first difference at record {}", index),
        }
    }
}

/// One strategy whose output disagrees with the reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    /// The disagreeing strategy
    pub algorithm: String,
    /// The strategy that produced the reference output
    pub reference: String,
    /// Where the outputs diverge
    pub detail: MismatchDetail,
}

impl Mismatch {
    /// Mismatches never stop a run
    pub fn severity(&self) -> Severity {
        Severity::Warning
    }
}

impl From<Mismatch> for BenchError {
    fn from(mismatch: Mismatch) -> Self {
        BenchError::VerificationMismatch {
            algorithm: mismatch.algorithm,
            reference: mismatch.reference,
            detail: mismatch.detail.to_string(),
        }
    }
}

/// Outcome of comparing every result of a run against the first one
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Strategy whose output served as the reference (`None` for an empty run)
    pub reference: Option<String>,
    /// Number of results compared against the reference
    pub compared: usize,
    /// Every disagreement found, in result order
    pub mismatches: Vec<Mismatch>,
}

impl VerificationReport {
    /// Whether every compared output matched the reference
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Compare each result's output against the first result's output.
///
/// Fewer than two results pass trivially.
pub fn verify(results: &[BenchmarkResult]) -> VerificationReport {
    let Some((reference, rest)) = results.split_first() else {
        return VerificationReport::default();
    };

    let mismatches = rest
        .iter()
        .filter_map(|result| {
            first_difference(&reference.output, &result.output).map(|detail| Mismatch {
                algorithm: result.algorithm.clone(),
                reference: reference.algorithm.clone(),
                detail,
            })
        })
        .collect();

    VerificationReport {
        reference: Some(reference.algorithm.clone()),
        compared: rest.len(),
        mismatches,
    }
}

fn first_difference(expected: &[String], actual: &[String]) -> Option<MismatchDetail> {
    if expected.len() != actual.len() {
        return Some(MismatchDetail::Length {
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    expected
        .iter()
        .zip(actual)
        .position(|(a, b)| a != b)
        .map(|index| MismatchDetail::Element { index })
}
