#![warn(missing_docs)]
//! Sortbench CLI Library
//!
//! Command-line surface for benchmarking sorting strategies on text files.
//! Use `sortbench::run()` in a binary's `main` so the shipped strategies are
//! linked in; `run_with_registry` drives a run against any registry.
//!
//! # Example
//!
//! ```ignore
//! fn main() {
//!     if let Err(e) = sortbench::run() {
//!         eprintln!("Error: {e:#}");
//!         std::process::exit(1);
//!     }
//! }
//! ```

mod config;
mod dataset;
mod executor;
mod planner;
mod sink;

pub use config::*;
pub use dataset::{basename, load_dataset};
pub use executor::{
    Executor, NoopObserver, ProgressObserver, RunFailure, RunObserver, RunOutcome,
    build_report, build_report_meta, format_human_output,
};
pub use planner::{ExecutionPlan, PlanMode, build_plan};
pub use sink::ResultSink;

use clap::Parser;
use regex::Regex;
use sortbench_core::{BenchError, Registry, pin_to_cpu};
use sortbench_logic::{VerificationReport, verify};
use sortbench_report::{OutputFormat, Report, generate_csv_report, generate_json_report};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Sortbench CLI arguments
#[derive(Parser, Debug, Default)]
#[command(name = "sortbench")]
#[command(author, version, about = "Benchmark sorting algorithms on text files")]
pub struct Cli {
    /// Text file to sort, one record per line
    #[arg(required_unless_present = "list")]
    pub file: Option<PathBuf>,

    /// Benchmark only this algorithm (default: all)
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Save sorted output to the output directory
    #[arg(short, long)]
    pub output: bool,

    /// Directory for saved output (default: config or sorted_output)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Report format: human, json, csv
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Only run algorithms whose name matches this regex
    #[arg(long)]
    pub filter: Option<String>,

    /// List discovered algorithms and exit
    #[arg(long)]
    pub list: bool,

    /// Skip cross-algorithm output verification
    #[arg(long)]
    pub no_verify: bool,

    /// Pin the benchmarking thread to this CPU core
    #[arg(long)]
    pub pin_cpu: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the Sortbench CLI with the process arguments against every linked
/// strategy.
///
/// # Returns
/// Returns `Ok(())` on a completed run, even when individual algorithms
/// failed, or an error for fatal conditions.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the Sortbench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    let config = SortbenchConfig::discover().unwrap_or_default();
    let mut registry = Registry::discover();

    run_with_registry(&cli, &config, &mut registry).map(|_| ())
}

/// Install the global tracing subscriber (no-op if one is already set)
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        "sortbench=debug"
    } else {
        "sortbench=info"
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Execute a run against `registry`.
///
/// Returns the report of the run, or `None` for `--list`.
pub fn run_with_registry(
    cli: &Cli,
    config: &SortbenchConfig,
    registry: &mut Registry,
) -> anyhow::Result<Option<Report>> {
    if cli.list {
        list_algorithms(registry)?;
        return Ok(None);
    }

    let available = registry.list_available()?;

    let filter = cli.filter.as_deref().map(Regex::new).transpose()?;
    let plan = build_plan(
        &available,
        cli.algorithm.as_deref(),
        &config.registry.skip,
        filter.as_ref(),
    )?;

    let path = cli
        .file
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("a dataset file is required"))?;
    info!("Reading file: {}", path.display());
    let dataset = load_dataset(path)?;
    info!("Read {} lines from file.", dataset.len());

    if let Some(cpu) = cli.pin_cpu.or(config.runner.pin_cpu) {
        if let Err(e) = pin_to_cpu(cpu) {
            warn!("could not pin to CPU {}: {}", cpu, e);
        }
    }

    if plan.algorithms.is_empty() {
        warn!("no algorithms selected");
    }

    let mut progress = ProgressObserver::new();
    let outcome = Executor::new(registry).execute(&plan.algorithms, &dataset, &mut progress);

    let verification = if config.runner.verify && !cli.no_verify {
        verify(&outcome.results)
    } else {
        VerificationReport::default()
    };
    for mismatch in &verification.mismatches {
        warn!("{}", BenchError::from(mismatch.clone()));
    }

    let report = build_report(
        build_report_meta(&dataset),
        plan.algorithms.len(),
        &outcome,
        verification,
    );

    if cli.output || config.output.save {
        let directory = cli
            .output_dir
            .clone()
            .unwrap_or_else(|| config.output.directory.clone());
        save_output(&ResultSink::new(directory), &plan, &report, &outcome, dataset.name());
    }

    let format = cli.format.unwrap_or(config.output.format);
    let rendered = match format {
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Csv => generate_csv_report(&report),
        OutputFormat::Human => format_human_output(&report),
    };

    if let Some(ref path) = cli.report {
        let mut file = std::fs::File::create(path)?;
        file.write_all(rendered.as_bytes())?;
        println!("Report written to: {}", path.display());
    } else {
        print!("{}", rendered);
    }

    Ok(Some(report))
}

/// Persist the single result, or the fastest one in an all-algorithms run.
///
/// A failed write is reported and otherwise ignored.
fn save_output(
    sink: &ResultSink,
    plan: &ExecutionPlan,
    report: &Report,
    outcome: &RunOutcome,
    dataset_name: &str,
) {
    let Some(fastest) = report.summary.fastest.as_deref() else {
        warn!("nothing to save: no algorithm produced a result");
        return;
    };
    let chosen = match plan.mode {
        PlanMode::Single => outcome.results.first(),
        PlanMode::All => outcome.results.iter().find(|r| r.algorithm == fastest),
    };
    let Some(result) = chosen else {
        return;
    };

    match sink.write(&result.algorithm, plan.output_label(), dataset_name, &result.output) {
        Ok(path) => info!("Sorted data saved to {}", path.display()),
        Err(e) => warn!("{}", e),
    }
}

fn list_algorithms(registry: &Registry) -> anyhow::Result<()> {
    println!("Sortbench Algorithms:");

    let definitions = registry.definitions()?;
    for def in &definitions {
        let description = if def.description.is_empty() {
            String::new()
        } else {
            format!(" - {}", def.description)
        };
        println!("├── {}{} ({}:{})", def.name, description, def.file, def.line);
    }

    println!("{} algorithms found.", definitions.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_core::{AlgorithmDef, SortFn};

    fn std_sort(mut data: Vec<String>) -> Vec<String> {
        data.sort();
        data
    }

    fn reverse_sort(mut data: Vec<String>) -> Vec<String> {
        data.sort();
        data.reverse();
        data
    }

    fn broken(_data: Vec<String>) -> Vec<String> {
        panic!("broken on purpose");
    }

    const fn candidate(name: &'static str, entry: SortFn) -> AlgorithmDef {
        AlgorithmDef {
            name,
            description: "",
            entry: Some(entry),
            setup: None,
            file: file!(),
            line: line!(),
            module_path: module_path!(),
        }
    }

    static GOOD: AlgorithmDef = candidate("good", std_sort);
    static BROKEN: AlgorithmDef = candidate("broken", broken);
    static GOOD2: AlgorithmDef = candidate("good2", std_sort);
    static BACKWARDS: AlgorithmDef = candidate("backwards", reverse_sort);

    fn registry() -> Registry {
        Registry::from_defs("test table", [&GOOD, &BROKEN, &GOOD2, &BACKWARDS])
    }

    struct Workspace {
        dir: tempfile::TempDir,
    }

    impl Workspace {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            std::fs::write(dir.path().join("words.txt"), "pear\napple\nfig\n").unwrap();
            Self { dir }
        }

        fn cli(&self) -> Cli {
            Cli {
                file: Some(self.dir.path().join("words.txt")),
                output_dir: Some(self.dir.path().join("sorted_output")),
                report: Some(self.dir.path().join("report.txt")),
                ..Cli::default()
            }
        }

        fn output(&self, name: &str) -> PathBuf {
            self.dir.path().join("sorted_output").join(name)
        }
    }

    #[test]
    fn partial_failure_still_completes() {
        let ws = Workspace::new();
        let cli = Cli {
            filter: Some("^(good|broken|good2)$".to_string()),
            ..ws.cli()
        };

        let report = run_with_registry(&cli, &SortbenchConfig::default(), &mut registry())
            .unwrap()
            .unwrap();

        let names: Vec<&str> = report.results.iter().map(|r| r.algorithm.as_str()).collect();
        assert_eq!(names, ["good", "good2"]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].algorithm, "broken");
        assert!(report.verification.passed());
    }

    #[test]
    fn unknown_requested_algorithm_is_fatal() {
        let ws = Workspace::new();
        let cli = Cli {
            algorithm: Some("bogo".to_string()),
            ..ws.cli()
        };

        let err = run_with_registry(&cli, &SortbenchConfig::default(), &mut registry())
            .unwrap_err();
        assert!(err.to_string().contains("unknown algorithm 'bogo'"));
    }

    #[test]
    fn missing_dataset_is_fatal() {
        let ws = Workspace::new();
        let cli = Cli {
            file: Some(ws.dir.path().join("nope.txt")),
            ..ws.cli()
        };

        let err = run_with_registry(&cli, &SortbenchConfig::default(), &mut registry())
            .unwrap_err();
        let bench = err.downcast_ref::<BenchError>().unwrap();
        assert!(bench.is_fatal());
    }

    #[test]
    fn empty_discovery_source_is_fatal() {
        let ws = Workspace::new();
        let mut empty = Registry::from_defs("nowhere", std::iter::empty());

        let err = run_with_registry(&ws.cli(), &SortbenchConfig::default(), &mut empty)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BenchError>(),
            Some(BenchError::DiscoverySourceMissing { .. })
        ));
    }

    #[test]
    fn out_of_range_pin_cpu_only_warns() {
        let ws = Workspace::new();
        let cli = Cli {
            algorithm: Some("good".to_string()),
            pin_cpu: Some(5000),
            ..ws.cli()
        };

        let report = run_with_registry(&cli, &SortbenchConfig::default(), &mut registry())
            .unwrap()
            .unwrap();
        assert_eq!(report.results.len(), 1);
    }

    #[test]
    fn invalid_filter_is_an_error() {
        let ws = Workspace::new();
        let cli = Cli {
            filter: Some("(".to_string()),
            ..ws.cli()
        };

        assert!(run_with_registry(&cli, &SortbenchConfig::default(), &mut registry()).is_err());
    }

    #[test]
    fn single_mode_saves_named_output() {
        let ws = Workspace::new();
        let cli = Cli {
            algorithm: Some("good".to_string()),
            output: true,
            ..ws.cli()
        };

        run_with_registry(&cli, &SortbenchConfig::default(), &mut registry()).unwrap();

        let saved = std::fs::read_to_string(ws.output("good_words.txt")).unwrap();
        assert_eq!(saved, "apple\nfig\npear\n");
    }

    #[test]
    fn all_mode_saves_fastest_output() {
        let ws = Workspace::new();
        let cli = Cli {
            filter: Some("^good".to_string()),
            output: true,
            ..ws.cli()
        };

        let report = run_with_registry(&cli, &SortbenchConfig::default(), &mut registry())
            .unwrap()
            .unwrap();

        assert!(report.summary.fastest.is_some());
        let saved = std::fs::read_to_string(ws.output("fastest_words.txt")).unwrap();
        assert_eq!(saved, "apple\nfig\npear\n");
    }

    #[test]
    fn nothing_is_saved_without_results() {
        let ws = Workspace::new();
        let cli = Cli {
            algorithm: Some("broken".to_string()),
            output: true,
            ..ws.cli()
        };

        let report = run_with_registry(&cli, &SortbenchConfig::default(), &mut registry())
            .unwrap()
            .unwrap();

        assert!(report.ranking.is_empty());
        assert!(!ws.output("broken_words.txt").exists());
    }

    #[test]
    fn disagreeing_algorithms_are_a_warning() {
        let ws = Workspace::new();
        let cli = Cli {
            filter: Some("^(good|backwards)$".to_string()),
            ..ws.cli()
        };

        let report = run_with_registry(&cli, &SortbenchConfig::default(), &mut registry())
            .unwrap()
            .unwrap();

        assert_eq!(report.verification.reference.as_deref(), Some("backwards"));
        assert_eq!(report.summary.mismatches, 1);
        assert_eq!(report.verification.mismatches[0].algorithm, "good");
    }

    #[test]
    fn verification_can_be_disabled() {
        let ws = Workspace::new();
        let cli = Cli {
            filter: Some("^(good|backwards)$".to_string()),
            no_verify: true,
            ..ws.cli()
        };

        let report = run_with_registry(&cli, &SortbenchConfig::default(), &mut registry())
            .unwrap()
            .unwrap();

        assert_eq!(report.summary.mismatches, 0);
    }

    #[test]
    fn config_skip_list_and_format_apply() {
        let ws = Workspace::new();
        let mut config = SortbenchConfig::default();
        config.registry.skip = vec!["broken".to_string(), "backwards".to_string()];
        config.output.format = OutputFormat::Csv;

        let report = run_with_registry(&ws.cli(), &config, &mut registry())
            .unwrap()
            .unwrap();

        assert_eq!(report.summary.requested, 2);
        let csv = std::fs::read_to_string(ws.dir.path().join("report.txt")).unwrap();
        assert!(csv.starts_with("rank,algorithm,"));
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn list_needs_no_dataset() {
        let cli = Cli {
            list: true,
            ..Cli::default()
        };

        let report = run_with_registry(&cli, &SortbenchConfig::default(), &mut registry()).unwrap();
        assert!(report.is_none());
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "sortbench", "data.txt", "-a", "merge", "-o", "--format", "json", "--pin-cpu", "1",
        ])
        .unwrap();

        assert_eq!(cli.file, Some(PathBuf::from("data.txt")));
        assert_eq!(cli.algorithm.as_deref(), Some("merge"));
        assert!(cli.output);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.pin_cpu, Some(1));
    }

    #[test]
    fn cli_requires_a_file_unless_listing() {
        assert!(Cli::try_parse_from(["sortbench"]).is_err());
        assert!(Cli::try_parse_from(["sortbench", "--list"]).is_ok());
    }
}
