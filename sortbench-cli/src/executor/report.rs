//! Report Building
//!
//! Assembles one run's outcome into a [`Report`]:
//!
//! ```text
//! RunOutcome + VerificationReport
//!              │
//!              ▼
//!   ┌─────────────────────┐
//!   │       rank()        │  elapsed order, ratios, mean/median
//!   └──────────┬──────────┘
//!              │
//!              ▼
//!   ┌─────────────────────┐
//!   │      Report         │  Ready for human/JSON/CSV output
//!   └─────────────────────┘
//! ```

use super::execution::RunOutcome;
use sortbench_logic::VerificationReport;
use sortbench_report::{
    FailureInfo, RankedTable, Report, ReportMeta, ReportSummary, ResultRow, rank,
};

/// Build a complete Report from a run
///
/// # Arguments
/// * `meta` - Run metadata
/// * `requested` - Number of algorithms the plan scheduled
/// * `outcome` - Results and failures from the executor
/// * `verification` - Cross-strategy verification of the results
pub fn build_report(
    meta: ReportMeta,
    requested: usize,
    outcome: &RunOutcome,
    verification: VerificationReport,
) -> Report {
    let ranking = rank(&outcome.results);

    let results: Vec<ResultRow> = outcome.results.iter().map(ResultRow::from).collect();
    let failures: Vec<FailureInfo> = outcome
        .failures
        .iter()
        .map(|f| FailureInfo::new(&f.algorithm, &f.error))
        .collect();

    let summary = ReportSummary {
        requested,
        succeeded: results.len(),
        failed: failures.len(),
        mismatches: verification.mismatches.len(),
        fastest: ranking
            .table()
            .and_then(RankedTable::fastest)
            .map(|row| row.algorithm.clone()),
    };

    Report {
        meta,
        results,
        failures,
        ranking,
        verification,
        summary,
    }
}
