//! Timing Harness
//!
//! Runs exactly one strategy against exactly one dataset. The timed window
//! covers the entry-point call and nothing else: the dataset copy is made
//! before the timer starts and the result is packaged after it stops.

use crate::dataset::Dataset;
use crate::error::BenchError;
use crate::measure::Timer;
use crate::registry::AlgorithmDescriptor;
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

/// Outcome of one successful strategy execution
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    /// Strategy name
    pub algorithm: String,
    /// Wall time of the entry-point call (monotonic clock)
    pub elapsed: Duration,
    /// CPU cycles over the same window (0 without a cycle counter)
    pub cycles: u64,
    /// The strategy's sorted output
    pub output: Vec<String>,
}

impl BenchmarkResult {
    /// Elapsed time in seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Execute one strategy on a private copy of `dataset` and time it.
///
/// A panic inside the strategy comes back as
/// [`BenchError::StrategyExecutionFailed`]; isolating it from the rest of the
/// batch is the caller's job.
pub fn run_timed(
    descriptor: &AlgorithmDescriptor,
    dataset: &Dataset,
) -> Result<BenchmarkResult, BenchError> {
    let input = dataset.fresh_copy();
    let entry = descriptor.entry();

    let outcome = catch_unwind(AssertUnwindSafe(move || {
        let timer = Timer::start();
        let output = entry(input);
        let (elapsed, cycles) = timer.stop();
        (output, elapsed, cycles)
    }));

    match outcome {
        Ok((output, elapsed, cycles)) => Ok(BenchmarkResult {
            algorithm: descriptor.name().to_string(),
            elapsed,
            cycles,
            output,
        }),
        Err(panic) => Err(BenchError::StrategyExecutionFailed {
            algorithm: descriptor.name().to_string(),
            cause: panic_message(panic.as_ref()),
        }),
    }
}

/// Best-effort text of a panic payload
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
