//! Benchmark input

use std::sync::Arc;

/// Ordered text records shared read-only by every strategy invocation.
///
/// Records live behind an `Arc<[String]>`, so cloning a `Dataset` never
/// copies them and nothing can mutate them after construction. Strategies
/// only ever see the private `Vec` produced by [`Dataset::fresh_copy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    name: String,
    records: Arc<[String]>,
}

impl Dataset {
    /// Create a dataset from its display name (usually the source file's basename)
    pub fn new(name: impl Into<String>, records: Vec<String>) -> Self {
        Self {
            name: name.into(),
            records: records.into(),
        }
    }

    /// Parse newline-delimited text, trimming surrounding whitespace from each record
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        let records = text.lines().map(|line| line.trim().to_string()).collect();
        Self::new(name, records)
    }

    /// Name used to derive output file names
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of the records
    pub fn records(&self) -> &[String] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// An independent copy handed to exactly one strategy invocation
    pub fn fresh_copy(&self) -> Vec<String> {
        self.records.to_vec()
    }
}
