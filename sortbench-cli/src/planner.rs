//! Benchmark Planner
//!
//! Decides which algorithms a run schedules, in which order.
//!
//! - Single mode (`-a NAME`): exactly that algorithm, which must exist
//! - All mode: every available algorithm, minus the configured skip list,
//!   optionally narrowed by a regex filter
//!
//! Ordering follows the registry: names sorted alphabetically.

use regex::Regex;
use sortbench_core::BenchError;

/// How the plan was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanMode {
    /// One algorithm named by the operator
    Single,
    /// Every eligible algorithm
    All,
}

/// Execution plan for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionPlan {
    /// How the algorithms were selected
    pub mode: PlanMode,
    /// Ordered list of algorithms to run
    pub algorithms: Vec<String>,
}

impl ExecutionPlan {
    /// Label used for the saved output file: the algorithm in single mode,
    /// `fastest` otherwise
    pub fn output_label(&self) -> &str {
        match self.mode {
            PlanMode::Single => &self.algorithms[0],
            PlanMode::All => "fastest",
        }
    }
}

/// Build the execution plan from the registry's available names.
///
/// A requested name that is not available is an error; it was asked for
/// explicitly, so the caller treats it as fatal.
pub fn build_plan(
    available: &[String],
    requested: Option<&str>,
    skip: &[String],
    filter: Option<&Regex>,
) -> Result<ExecutionPlan, BenchError> {
    if let Some(name) = requested {
        if !available.iter().any(|a| a == name) {
            return Err(BenchError::AlgorithmNotFound {
                name: name.to_string(),
                available: available.to_vec(),
            });
        }
        return Ok(ExecutionPlan {
            mode: PlanMode::Single,
            algorithms: vec![name.to_string()],
        });
    }

    let mut algorithms: Vec<String> = available
        .iter()
        .filter(|name| !skip.contains(name))
        .filter(|name| filter.is_none_or(|re| re.is_match(name)))
        .cloned()
        .collect();

    algorithms.sort();
    algorithms.dedup();

    Ok(ExecutionPlan {
        mode: PlanMode::All,
        algorithms,
    })
}
