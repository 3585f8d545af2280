//! Output Formatting
//!
//! Human-readable output formatting for benchmark reports.
//!
//! Generates terminal-friendly output with:
//! - Per-algorithm outcome lines with status icons (✓/✗)
//! - Verification warnings naming both algorithms involved
//! - A ranked comparison table with average and median rows, shown only
//!   when the run compared more than one algorithm

use sortbench_report::{RankedTable, Ranking, Report, Standing, format_duration};

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("Sortbench Results\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "Dataset: {} ({} records)\n\n",
        report.meta.dataset.name, report.meta.dataset.records
    ));

    for result in &report.results {
        output.push_str(&format!(
            "  ✓ {} completed in {}\n",
            result.algorithm,
            format_duration(result.elapsed_secs)
        ));
    }
    for failure in &report.failures {
        output.push_str(&format!("  ✗ {}: {}\n", failure.algorithm, failure.message));
    }

    if !report.verification.passed() {
        output.push_str("\nVerification\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for mismatch in &report.verification.mismatches {
            output.push_str(&format!(
                "  ⚠ {} produced different results than {} ({})\n",
                mismatch.algorithm, mismatch.reference, mismatch.detail
            ));
        }
    }

    if report.is_comparison() {
        output.push_str("\nPerformance Comparison\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        match &report.ranking {
            Ranking::Empty => output.push_str("  No results to display\n"),
            Ranking::Ranked(table) => push_ranked_table(&mut output, table),
        }
    }

    output
}

fn push_ranked_table(output: &mut String, table: &RankedTable) {
    const SUMMARY_LABEL: &str = "Average Time";

    let name_width = table
        .rows
        .iter()
        .map(|r| r.algorithm.chars().count())
        .max()
        .unwrap_or(0)
        .max(SUMMARY_LABEL.len());

    output.push_str(&format!(
        "  {:<width$}  {:>12}  {}\n",
        "Algorithm",
        "Time",
        "Relative Performance",
        width = name_width
    ));
    output.push_str(&format!("  {}\n", "-".repeat(name_width + 36)));

    for row in &table.rows {
        let performance = match row.standing {
            Standing::Fastest => "Fastest 🥇".to_string(),
            Standing::Slowest => "Slowest 🐢".to_string(),
            Standing::Slower => format!("{:.2}x slower", row.ratio),
        };
        output.push_str(&format!(
            "  {:<width$}  {:>12}  {}\n",
            row.algorithm,
            format_duration(row.elapsed_secs),
            performance,
            width = name_width
        ));
    }

    output.push_str(&format!("  {}\n", "-".repeat(name_width + 36)));
    output.push_str(&format!(
        "  {:<width$}  {:>12}\n",
        SUMMARY_LABEL,
        format_duration(table.mean_secs),
        width = name_width
    ));
    output.push_str(&format!(
        "  {:<width$}  {:>12}\n",
        "Median Time",
        format_duration(table.median_secs),
        width = name_width
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::execution::RunOutcome;
    use crate::executor::metadata::build_report_meta;
    use crate::executor::report::build_report;
    use sortbench_core::{BenchmarkResult, Dataset};
    use sortbench_logic::verify;
    use std::time::Duration;

    fn result(algorithm: &str, micros: u64, output: &[&str]) -> BenchmarkResult {
        BenchmarkResult {
            algorithm: algorithm.to_string(),
            elapsed: Duration::from_micros(micros),
            cycles: 0,
            output: output.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn report(requested: usize, results: Vec<BenchmarkResult>) -> Report {
        let outcome = RunOutcome {
            results,
            failures: Vec::new(),
        };
        let verification = verify(&outcome.results);
        let meta = build_report_meta(&Dataset::new("words.txt", Vec::new()));
        build_report(meta, requested, &outcome, verification)
    }

    #[test]
    fn comparison_table_has_standings_and_summary_rows() {
        let text = format_human_output(&report(
            3,
            vec![
                result("middle", 2000, &["a"]),
                result("quick", 1000, &["a"]),
                result("slow", 4000, &["a"]),
            ],
        ));

        assert!(text.contains("Performance Comparison"));
        assert!(text.contains("Fastest 🥇"));
        assert!(text.contains("2.00x slower"));
        assert!(text.contains("Slowest 🐢"));
        assert!(text.contains("Average Time"));
        assert!(text.contains("2.33 ms"));
        assert!(text.contains("Median Time"));

        let quick = text.find("  quick ").unwrap();
        let middle = text.find("  middle ").unwrap();
        assert!(quick < middle);
    }

    #[test]
    fn single_algorithm_has_no_table() {
        let text = format_human_output(&report(1, vec![result("merge", 1500, &["a"])]));

        assert!(text.contains("✓ merge completed in 1.50 ms"));
        assert!(!text.contains("Performance Comparison"));
    }

    #[test]
    fn empty_comparison_says_so() {
        let text = format_human_output(&report(2, Vec::new()));
        assert!(text.contains("No results to display"));
    }

    #[test]
    fn mismatches_are_listed() {
        let text = format_human_output(&report(
            2,
            vec![result("merge", 10, &["a", "b"]), result("radix", 5, &["b", "a"])],
        ));

        assert!(text.contains("⚠ radix produced different results than merge"));
    }
}
