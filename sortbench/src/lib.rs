#![warn(missing_docs)]
//! # Sortbench
//!
//! Benchmark interchangeable sorting strategies against a shared text
//! dataset, verify they agree, and rank them by wall time.
//!
//! - **Pluggable strategies**: any `fn(Vec<String>) -> Vec<String>` marked
//!   `#[algorithm]` is discovered at startup
//! - **Isolated timing**: each strategy sorts its own copy of the dataset; a
//!   panicking strategy is reported and the run carries on
//! - **Cross-verification**: every output is compared with the first result
//! - **Ranking**: fastest, slowest, slowdown ratios, mean and median
//! - **Reports**: terminal table, JSON or CSV
//!
//! ## Adding a strategy
//!
//! ```ignore
//! use sortbench::algorithm;
//!
//! #[algorithm(name = "std", description = "Slice sort from the standard library")]
//! pub fn sort(mut data: Vec<String>) -> Vec<String> {
//!     data.sort();
//!     data
//! }
//! ```
//!
//! The attribute expands to paths under `sortbench_core`, so the defining
//! crate depends on `sortbench-core` as well.

// Re-export core types
pub use sortbench_core::{
    AlgorithmDef, AlgorithmDescriptor, BenchError, BenchmarkResult, Dataset, Registry, Severity,
    SortFn, run_timed,
};

// Re-export macros
pub use sortbench_macros::algorithm;

// Re-export logic types
pub use sortbench_logic::{Mismatch, MismatchDetail, VerificationReport, verify};

// Re-export report types
pub use sortbench_report::{
    OutputFormat, RankedRow, RankedTable, Ranking, Report, Standing, format_duration, rank,
};

// Re-export stats
pub use sortbench_stats::{compute_percentile, mean, median};

// Re-export the harness
pub use sortbench_cli::{
    Cli, Executor, NoopObserver, ResultSink, RunObserver, RunOutcome, SortbenchConfig,
    load_dataset, run_with_registry,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BenchError, BenchmarkResult, Dataset, Registry, Standing, algorithm, rank, verify,
    };
}

/// Registry over every strategy linked into this binary, shipped ones included
pub fn registry() -> Registry {
    sortbench_algorithms::link();
    Registry::discover()
}

/// Run the Sortbench CLI harness over the shipped strategies.
///
/// Call this from a binary's `main()`:
/// ```ignore
/// fn main() {
///     sortbench::run().unwrap();
/// }
/// ```
pub fn run() -> anyhow::Result<()> {
    sortbench_algorithms::link();
    sortbench_cli::run()
}

/// Run the Sortbench CLI harness with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    sortbench_algorithms::link();
    sortbench_cli::run_with_cli(cli)
}
