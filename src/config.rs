use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML_STR: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub results_dir: PathBuf,
    pub results_filename: String,
    pub incremental: bool,
    pub include_elapsed_time: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from("results"),
            results_filename: "SalesResults.txt".to_string(),
            incremental: false,
            include_elapsed_time: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
}

impl Config {
    pub fn from_default_config() -> Result<Self> {
        Self::from_toml_str(DEFAULT_TOML_STR)
    }

    pub fn from_toml_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        use std::fs;
        let contents = fs::read_to_string(&path).with_context(|| {
            format!(
                "Failed to read configuration from {}",
                path.as_ref().display()
            )
        })?;
        Self::from_toml_str(&contents)
    }

    fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("Failed to parse configuration")
    }
}
