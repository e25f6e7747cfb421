//
//  config.rs
//  SchemaModel
//
//  Created by hak (tharun)
//

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default config file name, looked up next to the analyzed project.
pub const CONFIG_FILE: &str = "schema-model.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Registry construction and finalize behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Seed built-in scalars and directives into new registries.
    #[serde(default)]
    pub include_builtins: bool,
    /// Reject directives that reach finalize without any location.
    #[serde(default = "default_true")]
    pub require_directive_locations: bool,
    /// Collapse repeated locations on a directive at finalize.
    #[serde(default)]
    pub dedup_directive_locations: bool,
    /// Require a query root type at finalize.
    #[serde(default)]
    pub require_query_type: bool,
}

/// Output settings for the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Where `snapshot` writes the finalized schema.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
}

fn default_true() -> bool {
    true
}

fn default_snapshot_path() -> String {
    "schema.bin".to_string()
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_builtins: false,
            require_directive_locations: default_true(),
            dedup_directive_locations: false,
            require_query_type: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
        }
    }
}

impl ModelConfig {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                warn!(path = %path.display(), "invalid config, using defaults: {e}");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Resolve the snapshot path relative to the config file's directory.
    pub fn resolve_snapshot_path(&self, config_path: &Path) -> PathBuf {
        let parent = config_path.parent().unwrap_or(config_path);
        parent.join(&self.output.snapshot_path)
    }
}
