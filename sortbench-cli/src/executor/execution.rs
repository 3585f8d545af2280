//! Benchmark Execution
//!
//! Runs the timing harness once per planned algorithm, strictly in order on
//! the calling thread. One algorithm failing to load or panicking never
//! stops the others.
//!
//! ## Data Flow
//!
//! ```text
//! ExecutionPlan (ordered names)
//!        │
//!        ▼
//!   Registry::load ──── error ───┐
//!        │                       │
//!        ▼                       │
//!   run_timed ───────── error ───┤
//!        │                       │
//!        ▼                       ▼
//!  RunOutcome.results    RunOutcome.failures
//! ```
//!
//! Progress reporting goes through a [`RunObserver`], called only between
//! timed invocations.

use sortbench_core::{BenchError, BenchmarkResult, Dataset, Registry, run_timed};
use sortbench_report::format_duration;
use tracing::{debug, info, warn};

/// Receives run events; every method defaults to doing nothing
pub trait RunObserver {
    /// The run is about to execute `total` algorithms
    fn on_plan(&mut self, _total: usize) {}
    /// `algorithm` is about to be loaded and timed
    fn on_start(&mut self, _algorithm: &str) {}
    /// An algorithm finished successfully
    fn on_success(&mut self, _result: &BenchmarkResult) {}
    /// An algorithm failed to load or execute
    fn on_failure(&mut self, _algorithm: &str, _error: &BenchError) {}
    /// Every algorithm has been attempted
    fn on_finish(&mut self) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RunObserver for NoopObserver {}

/// One algorithm that produced no result
#[derive(Debug)]
pub struct RunFailure {
    /// The algorithm that failed
    pub algorithm: String,
    /// Why
    pub error: BenchError,
}

/// Everything one run produced
#[derive(Debug, Default)]
pub struct RunOutcome {
    /// Successful results in completion order
    pub results: Vec<BenchmarkResult>,
    /// Failures in the order they happened
    pub failures: Vec<RunFailure>,
}

impl RunOutcome {
    /// Number of algorithms attempted
    pub fn attempted(&self) -> usize {
        self.results.len() + self.failures.len()
    }
}

/// Execute planned algorithms against one dataset (in-process, sequential)
pub struct Executor<'r> {
    registry: &'r mut Registry,
}

impl<'r> Executor<'r> {
    /// Executor resolving names through `registry`
    pub fn new(registry: &'r mut Registry) -> Self {
        Self { registry }
    }

    /// Run every algorithm in `algorithms`, in order
    pub fn execute(
        &mut self,
        algorithms: &[String],
        dataset: &Dataset,
        observer: &mut dyn RunObserver,
    ) -> RunOutcome {
        let mut outcome = RunOutcome::default();
        observer.on_plan(algorithms.len());

        for name in algorithms {
            observer.on_start(name);
            debug!(algorithm = %name, records = dataset.len(), "benchmarking");

            match self.execute_single(name, dataset) {
                Ok(result) => {
                    info!(
                        "{} completed in {}",
                        result.algorithm,
                        format_duration(result.elapsed_secs())
                    );
                    observer.on_success(&result);
                    outcome.results.push(result);
                }
                Err(error) => {
                    warn!("failed to benchmark {}: {}", name, error);
                    observer.on_failure(name, &error);
                    outcome.failures.push(RunFailure {
                        algorithm: name.clone(),
                        error,
                    });
                }
            }
        }

        observer.on_finish();
        outcome
    }

    fn execute_single(
        &mut self,
        name: &str,
        dataset: &Dataset,
    ) -> Result<BenchmarkResult, BenchError> {
        let descriptor = self.registry.load(name)?;
        run_timed(&descriptor, dataset)
    }
}
