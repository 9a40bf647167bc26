use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use movie_ranking_core::rank::DEFAULT_LIMIT;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("movie_dataset.csv")
}

#[derive(Debug, Deserialize, Clone)]
pub struct RankingConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

fn default_top_n() -> usize {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default)]
    pub explain: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            explain: false,
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

impl Config {
    /// All defaults. Used when no `--config` is given.
    pub fn minimal() -> Self {
        Self::default()
    }
}

pub fn validate_format(format: &str) -> Result<()> {
    match format {
        "text" | "json" => Ok(()),
        other => anyhow::bail!("Unknown output format: '{}'. Must be text or json.", other),
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.ranking.top_n == 0 {
        anyhow::bail!("ranking.top_n must be >= 1");
    }

    validate_format(&config.output.format)?;

    Ok(config)
}
