//! Dataset ingestion
//!
//! Reads a newline-delimited text file into a [`Dataset`] named after the
//! file's basename. Any failure to read is fatal for the run.

use sortbench_core::{BenchError, Dataset};
use std::path::Path;

/// Read `path` into a dataset, trimming each line
pub fn load_dataset(path: &Path) -> Result<Dataset, BenchError> {
    let text = std::fs::read_to_string(path).map_err(|source| BenchError::DatasetUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Dataset::from_text(basename(path), &text))
}

/// Final path component, or the whole path when it has none
pub fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
