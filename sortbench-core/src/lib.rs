#![warn(missing_docs)]
//! Sortbench Core - Contract, Registry and Timing Harness
//!
//! This crate provides the pieces every benchmark run is built from:
//! - `SortFn` / `AlgorithmDef`: the contract a sorting strategy satisfies
//! - `Registry`: discovery and lazy loading of registered strategies
//! - `run_timed`: the timing harness for one strategy against one dataset
//! - `BenchError`: the error taxonomy shared by every crate in the workspace
//! - `pin_to_cpu`: optional core pinning for steadier timings

mod dataset;
mod error;
mod harness;
mod measure;
mod registry;

pub use dataset::Dataset;
pub use error::{BenchError, Severity};
pub use harness::{BenchmarkResult, run_timed};
pub use measure::pin_to_cpu;
pub use registry::{AlgorithmDescriptor, Registry};

/// Entry point of a sorting strategy.
///
/// Receives its own copy of the dataset and returns the records ordered
/// non-decreasingly under `str` ordering. The returned sequence must be a
/// permutation of the input.
pub type SortFn = fn(Vec<String>) -> Vec<String>;

/// Strategy definition registered via `#[algorithm]`
#[derive(Debug, Clone)]
pub struct AlgorithmDef {
    /// Unique name; names starting with `_` are private and never discovered
    pub name: &'static str,
    /// One-line description shown by `--list`
    pub description: &'static str,
    /// The conforming entry point, if the candidate exposes one
    pub entry: Option<SortFn>,
    /// Side effects to run once per process, before the first load
    pub setup: Option<fn()>,
    /// Source file path
    pub file: &'static str,
    /// Source line number
    pub line: u32,
    /// Module path
    pub module_path: &'static str,
}

impl AlgorithmDef {
    /// Whether this definition is an internal helper excluded from discovery
    pub fn is_private(&self) -> bool {
        self.name.is_empty() || self.name.starts_with('_')
    }
}

inventory::collect!(AlgorithmDef);

/// Anchor to prevent LTO from stripping inventory entries
#[used]
#[doc(hidden)]
pub static REGISTRY_ANCHOR: fn() = || {
    for _ in inventory::iter::<AlgorithmDef> {}
};

/// Internal re-exports for macro use
#[doc(hidden)]
pub mod internal {
    pub use inventory;
}
