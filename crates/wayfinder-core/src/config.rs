//! Configuration file loading for wayfinder.
//!
//! Reads `.wayfinder/wayfinder.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level wayfinder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WayfinderConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Edge weight policy applied by the graph store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default = "default_true")]
    pub allow_zero_weight: bool,
    /// Largest accepted weight. Values above `u32::MAX` are clamped.
    #[serde(default = "default_max_weight")]
    pub max_weight: i64,
}

/// Shortest-path engine tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Heap extractions between two cancellation checks.
    #[serde(default = "default_cancel_check_interval")]
    pub cancel_check_interval: u32,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

fn default_version() -> String {
    "0.1.0".to_string()
}
fn default_true() -> bool {
    true
}
fn default_max_weight() -> i64 {
    u32::MAX as i64
}
fn default_cancel_check_interval() -> u32 {
    64
}
fn default_format() -> OutputFormat {
    OutputFormat::Human
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            allow_zero_weight: true,
            max_weight: default_max_weight(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cancel_check_interval: default_cancel_check_interval(),
        }
    }
}

impl EngineConfig {
    /// Check interval clamped to at least one extraction.
    pub fn check_interval(&self) -> u32 {
        self.cancel_check_interval.max(1)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Default for WayfinderConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            graph: GraphConfig::default(),
            engine: EngineConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl WayfinderConfig {
    /// Load configuration from `wayfinder.json` inside the given wayfinder directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(wayfinder_dir: &Path) -> Self {
        let config_path = wayfinder_dir.join("wayfinder.json");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!(
                    "wayfinder: warning: failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
