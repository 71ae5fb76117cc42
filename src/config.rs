//! Configuration management for the compatibility tool

use crate::error::{CompatError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub advisor: AdvisorConfig,
    pub ranking: RankingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// How many of the most requested skills to consider
    pub max_demanded_skills: usize,
    /// Experience below this share of the average requirement triggers a suggestion
    pub experience_gap_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Maximum entries shown; 0 shows everything
    pub limit: usize,
    pub min_score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            advisor: AdvisorConfig {
                max_demanded_skills: 5,
                experience_gap_ratio: 0.8,
            },
            ranking: RankingConfig {
                limit: 10,
                min_score: 0,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from `config_path`, writing defaults on first use.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| CompatError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CompatError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("job-compat")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let ratio = self.advisor.experience_gap_ratio;
        if !ratio.is_finite() || ratio < 0.0 {
            return Err(CompatError::Configuration(format!(
                "advisor.experience_gap_ratio must be a non-negative number, got {}",
                ratio
            )));
        }
        if self.ranking.min_score > 100 {
            return Err(CompatError::Configuration(format!(
                "ranking.min_score must be between 0 and 100, got {}",
                self.ranking.min_score
            )));
        }
        Ok(())
    }

    /// Set a value by its dotted key, e.g. `ranking.limit`.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "advisor.max_demanded_skills" => {
                self.advisor.max_demanded_skills = parse_value(key, value)?;
            }
            "advisor.experience_gap_ratio" => {
                self.advisor.experience_gap_ratio = parse_value(key, value)?;
            }
            "ranking.limit" => self.ranking.limit = parse_value(key, value)?,
            "ranking.min_score" => self.ranking.min_score = parse_value(key, value)?,
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(CompatError::Configuration)?;
            }
            "output.detailed" => self.output.detailed = parse_value(key, value)?,
            "output.color_output" => self.output.color_output = parse_value(key, value)?,
            _ => {
                return Err(CompatError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        self.validate()
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse::<T>().map_err(|_| {
        CompatError::Configuration(format!("Invalid value for {}: {}", key, value))
    })
}
