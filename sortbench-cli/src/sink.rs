//! Result Sink
//!
//! Persists one sorted output as plain text: one record per line, in order,
//! under `<directory>/<label>_<dataset-name>`. The directory is created on
//! demand.

use sortbench_core::BenchError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes sorted records into a fixed output directory
#[derive(Debug, Clone)]
pub struct ResultSink {
    directory: PathBuf,
}

impl ResultSink {
    /// Sink writing under `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Output directory
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Deterministic destination for `label` applied to `dataset_name`
    pub fn path_for(&self, label: &str, dataset_name: &str) -> PathBuf {
        self.directory.join(format!("{}_{}", label, dataset_name))
    }

    /// Write `records` for `label`, returning the file written.
    ///
    /// `algorithm` names the strategy whose output this is, for error reports.
    pub fn write(
        &self,
        algorithm: &str,
        label: &str,
        dataset_name: &str,
        records: &[String],
    ) -> Result<PathBuf, BenchError> {
        let path = self.path_for(label, dataset_name);
        let fail = |source: std::io::Error| BenchError::OutputWriteFailed {
            algorithm: algorithm.to_string(),
            path: path.clone(),
            source,
        };

        std::fs::create_dir_all(&self.directory).map_err(fail)?;

        let mut writer = BufWriter::new(File::create(&path).map_err(fail)?);
        for record in records {
            writer.write_all(record.as_bytes()).map_err(fail)?;
            writer.write_all(b"\n").map_err(fail)?;
        }
        writer.flush().map_err(fail)?;

        Ok(path)
    }
}
