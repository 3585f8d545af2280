//! Terminal progress bar
//!
//! An [`indicatif`] bar driven by runner events. It is hidden automatically
//! when stderr is not a terminal.

use super::execution::RunObserver;
use indicatif::{ProgressBar, ProgressStyle};
use sortbench_core::{BenchError, BenchmarkResult};

/// Observer that renders one bar tick per attempted algorithm
#[derive(Default)]
pub struct ProgressObserver {
    bar: Option<ProgressBar>,
}

impl ProgressObserver {
    /// Observer with no bar until the plan arrives
    pub fn new() -> Self {
        Self::default()
    }
}

impl RunObserver for ProgressObserver {
    fn on_plan(&mut self, total: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        self.bar = Some(pb);
    }

    fn on_start(&mut self, algorithm: &str) {
        if let Some(pb) = &self.bar {
            pb.set_message(format!("Benchmarking {}", algorithm));
        }
    }

    fn on_success(&mut self, _result: &BenchmarkResult) {
        if let Some(pb) = &self.bar {
            pb.inc(1);
        }
    }

    fn on_failure(&mut self, _algorithm: &str, _error: &BenchError) {
        if let Some(pb) = &self.bar {
            pb.inc(1);
        }
    }

    fn on_finish(&mut self) {
        if let Some(pb) = self.bar.take() {
            pb.finish_with_message("Complete");
        }
    }
}
