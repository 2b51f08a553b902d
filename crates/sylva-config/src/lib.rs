//! Configuration management and loading for sylva.
//!
//! A config file describes the three demo scenarios and the logging setup.
//! Every field has a default, so an empty file (or no file at all) yields
//! the reference scenarios.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use sylva_logging::LoggingConfig;

/// Configuration format types supported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Json,
    #[default]
    Yaml,
}

impl ConfigFormat {
    /// `.json` selects JSON; anything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Main sylva configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SylvaConfig {
    #[serde(default)]
    pub bst: BstScenario,

    /// Binary tree in `1(2,3(4,-))` notation
    #[serde(default = "default_binary_tree")]
    pub binary_tree: TreeScenario,

    /// General tree in `0(1(5,6,7),2(8),3)` notation
    #[serde(default = "default_forest")]
    pub forest: TreeScenario,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values inserted into a binary search tree, then deleted, then inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BstScenario {
    #[serde(default = "default_bst_values")]
    pub values: Vec<i32>,
    #[serde(default)]
    pub delete: Vec<i32>,
    #[serde(default)]
    pub insert: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeScenario {
    pub notation: String,
}

impl TreeScenario {
    pub fn new(notation: impl Into<String>) -> Self {
        Self {
            notation: notation.into(),
        }
    }
}

fn default_bst_values() -> Vec<i32> {
    vec![25, 60, 35, 10, 5, 20, 65, 45, 30, 15]
}

fn default_binary_tree() -> TreeScenario {
    TreeScenario::new("1(2,3(4,-))")
}

fn default_forest() -> TreeScenario {
    TreeScenario::new("0(1(5,6,7),2(8),3)")
}

impl Default for BstScenario {
    fn default() -> Self {
        Self {
            values: default_bst_values(),
            delete: vec![60],
            insert: vec![22],
        }
    }
}

impl Default for SylvaConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SylvaConfig {
    pub fn new() -> Self {
        Self {
            bst: BstScenario::default(),
            binary_tree: default_binary_tree(),
            forest: default_forest(),
            logging: LoggingConfig::default(),
        }
    }

    /// Parse config text in the given format.
    pub fn from_str_with(contents: &str, format: ConfigFormat) -> anyhow::Result<Self> {
        match format {
            ConfigFormat::Json => {
                serde_json::from_str(contents).context("Failed to parse JSON config")
            }
            ConfigFormat::Yaml => {
                // An empty YAML document deserialises to unit, not a map.
                if contents.trim().is_empty() {
                    return Ok(Self::new());
                }
                serde_yaml::from_str(contents).context("Failed to parse YAML config")
            }
        }
    }
}

/// Load configuration from a file
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<SylvaConfig> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    SylvaConfig::from_str_with(&contents, ConfigFormat::from_path(path))
        .with_context(|| format!("Invalid config {}", path.display()))
}

/// Save configuration to a file
pub fn save_config(config: &SylvaConfig, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let contents = match ConfigFormat::from_path(path) {
        ConfigFormat::Json => {
            serde_json::to_string_pretty(config).context("Failed to serialize JSON config")?
        }
        ConfigFormat::Yaml => {
            serde_yaml::to_string(config).context("Failed to serialize YAML config")?
        }
    };

    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config {}", path.display()))?;
    Ok(())
}
