//! Configuration loading from sortbench.toml
//!
//! Sortbench configuration can be specified in a `sortbench.toml` file in the
//! project root. The configuration is automatically discovered by walking up
//! from the current directory. Command-line flags override file values.

use serde::{Deserialize, Serialize};
use sortbench_report::OutputFormat;
use std::path::{Path, PathBuf};

/// File name searched for by [`SortbenchConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "sortbench.toml";

/// Sortbench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SortbenchConfig {
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Registry configuration
    #[serde(default)]
    pub registry: RegistryConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Compare every output against the first result
    #[serde(default = "default_verify")]
    pub verify: bool,
    /// Pin the benchmarking thread to this core before the run
    #[serde(default)]
    pub pin_cpu: Option<usize>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            verify: default_verify(),
            pin_cpu: None,
        }
    }
}

fn default_verify() -> bool {
    true
}

/// Registry configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegistryConfig {
    /// Algorithms never scheduled in an all-algorithms run
    #[serde(default)]
    pub skip: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory sorted output is written to
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,
    /// Save sorted output after each run
    #[serde(default)]
    pub save: bool,
    /// Default report format
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            save: false,
            format: OutputFormat::default(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("sorted_output")
}

impl SortbenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        Self::discover_from(std::env::current_dir().ok()?)
    }

    /// Walk up from `dir` looking for [`CONFIG_FILE_NAME`]
    pub fn discover_from(mut dir: PathBuf) -> Option<Self> {
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!(
                            "ignoring {}: {}",
                            config_path.display(),
                            e
                        );
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# Sortbench Configuration

[runner]
# Check that every algorithm produced the same output as the first one
verify = true
# Pin the benchmarking thread to a core (Linux only, uncomment to enable)
# pin_cpu = 2

[registry]
# Algorithms left out of all-algorithms runs
skip = []

[output]
# Where -o/--output writes sorted records
directory = "sorted_output"
# Always save sorted output
save = false
# Report format: human, json, csv
format = "human"
"#
        .to_string()
    }
}
