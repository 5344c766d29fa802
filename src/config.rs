//! Configuration file handling.
//!
//! Settings live in `<config dir>/sjphy/config.toml`. Every field has a
//! default, so a missing file or a partial one is fine.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::prompt::DEFAULT_PANEL_WIDTH;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub experiments: ExperimentsConfig,
    pub profile: ProfileConfig,
    pub jupyter: JupyterConfig,
    pub ui: UiConfig,
}

/// Where experiments live and what they contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentsConfig {
    /// Experiments directory, relative to the project root
    pub dir: PathBuf,
    /// Notebook file inside each experiment directory
    pub notebook: String,
    /// Data file written by `sjphy init`
    pub data_file: String,
    /// Index of the notebook cell holding the AI prompt
    pub prompt_cell: usize,
}

impl Default for ExperimentsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("experiments"),
            notebook: "main.ipynb".to_string(),
            data_file: "data.yaml".to_string(),
            prompt_cell: 1,
        }
    }
}

/// Student profile location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Profile file, relative to the project root
    pub file: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            file: "me.yaml".to_string(),
        }
    }
}

/// How notebooks are opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JupyterConfig {
    pub command: String,
    pub args: Vec<String>,
}

impl Default for JupyterConfig {
    fn default() -> Self {
        Self {
            command: "jupyter".to_string(),
            args: vec!["notebook".to_string()],
        }
    }
}

/// Prompt appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Maximum width of boxed yes/no prompts
    pub panel_width: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            panel_width: DEFAULT_PANEL_WIDTH,
        }
    }
}

impl Config {
    /// Path of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("sjphy").join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse TOML content; missing fields take their defaults.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Write the configuration, creating its directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, self.to_toml()?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
