//! Aggregator / Ranker
//!
//! Orders one run's results by elapsed time and derives the comparison
//! columns. The input slice is never reordered; ranking works on indices.

use serde::{Deserialize, Serialize};
use sortbench_core::BenchmarkResult;
use sortbench_stats::{mean, median};

/// Where a row sits in the ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Standing {
    /// Rank 0
    Fastest,
    /// Last rank (only when there are at least two rows)
    Slowest,
    /// Everything in between
    Slower,
}

/// One ranked result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    /// Zero-based rank, 0 being the fastest
    pub rank: usize,
    /// Strategy name
    pub algorithm: String,
    /// Elapsed wall time in seconds
    pub elapsed_secs: f64,
    /// Cycles over the timed window
    pub cycles: u64,
    /// `elapsed_secs / fastest.elapsed_secs`
    pub ratio: f64,
    /// Fastest / slowest / in between
    pub standing: Standing,
}

/// Display-ready ranking plus summary statistics over all elapsed times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTable {
    /// Rows ordered by elapsed time ascending, ties in run order
    pub rows: Vec<RankedRow>,
    /// Arithmetic mean of the elapsed times, in seconds
    pub mean_secs: f64,
    /// Median of the elapsed times, in seconds
    pub median_secs: f64,
}

impl RankedTable {
    /// The fastest row, `None` for a table with no rows
    pub fn fastest(&self) -> Option<&RankedRow> {
        self.rows.first()
    }

    /// The slowest row (the fastest one when only one result exists)
    pub fn slowest(&self) -> Option<&RankedRow> {
        self.rows.last()
    }
}

/// Ranking of a run, or an explicit marker that there is nothing to rank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ranking {
    /// No results; no statistics were computed
    Empty,
    /// At least one result
    Ranked(RankedTable),
}

impl Ranking {
    /// The table, if any result was ranked
    pub fn table(&self) -> Option<&RankedTable> {
        match self {
            Ranking::Empty => None,
            Ranking::Ranked(table) => Some(table),
        }
    }

    /// Whether there was nothing to rank
    pub fn is_empty(&self) -> bool {
        matches!(self, Ranking::Empty)
    }
}

/// Rank results by elapsed time, ascending and stable.
pub fn rank(results: &[BenchmarkResult]) -> Ranking {
    let times: Vec<f64> = results.iter().map(BenchmarkResult::elapsed_secs).collect();
    let (Some(mean_secs), Some(median_secs)) = (mean(&times), median(&times)) else {
        return Ranking::Empty;
    };

    let mut order: Vec<usize> = (0..results.len()).collect();
    order.sort_by_key(|&idx| results[idx].elapsed);

    let fastest = results[order[0]].elapsed_secs();
    let last = order.len() - 1;

    let rows = order
        .into_iter()
        .enumerate()
        .map(|(rank, idx)| {
            let result = &results[idx];
            let elapsed_secs = result.elapsed_secs();
            let standing = match rank {
                0 => Standing::Fastest,
                r if r == last => Standing::Slowest,
                _ => Standing::Slower,
            };
            RankedRow {
                rank,
                algorithm: result.algorithm.clone(),
                elapsed_secs,
                cycles: result.cycles,
                ratio: slowdown(elapsed_secs, fastest),
                standing,
            }
        })
        .collect();

    Ranking::Ranked(RankedTable {
        rows,
        mean_secs,
        median_secs,
    })
}

/// Relative slowdown. A zero fastest time only divides evenly into another zero.
fn slowdown(elapsed: f64, fastest: f64) -> f64 {
    if fastest > 0.0 {
        elapsed / fastest
    } else if elapsed > 0.0 {
        f64::INFINITY
    } else {
        1.0
    }
}
