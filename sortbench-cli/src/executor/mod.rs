//! Benchmark Executor
//!
//! Runs the planned algorithms and turns the outcome into a report.
//!
//! ## Pipeline Overview
//!
//! ```text
//! ExecutionPlan + Dataset
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  Load, time and isolate each algorithm
//! └──────┬──────┘
//!        │         RunObserver ──▶ progress
//!        ▼
//! ┌─────────────┐
//! │   report    │  Rank results, attach verification and metadata
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`execution`] - Sequential execution with per-algorithm isolation
//! - [`progress`] - Terminal progress bar observer
//! - [`report`] - Report building
//! - [`formatting`] - Human-readable output formatting
//! - [`metadata`] - System metadata collection

mod execution;
mod formatting;
mod metadata;
mod progress;
mod report;

// Re-export public API
pub use execution::{Executor, NoopObserver, RunFailure, RunObserver, RunOutcome};
pub use formatting::format_human_output;
pub use metadata::build_report_meta;
pub use progress::ProgressObserver;
pub use report::build_report;
