//! Configuration management for lane-rate
//!
//! Config stored at: ~/.config/lane-rate/config.json

use lanerate_domain::service::DEFAULT_MARGIN;
use lanerate_infra::synthetic::{DEFAULT_COUNT, DEFAULT_SEED};
use lanerate_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Tier margin in currency units
    #[serde(default = "default_margin")]
    pub margin: f64,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Shipment CSV to load. Synthetic data is used when unset.
    #[serde(default)]
    pub data_path: Option<PathBuf>,

    /// Seed for the synthetic data source
    #[serde(default = "default_seed")]
    pub synthetic_seed: u64,

    /// Record count for the synthetic data source
    #[serde(default = "default_count")]
    pub synthetic_count: usize,
}

fn default_margin() -> f64 {
    DEFAULT_MARGIN
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            margin: default_margin(),
            output_format: OutputFormat::Table,
            data_path: None,
            synthetic_seed: default_seed(),
            synthetic_count: default_count(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("lane-rate");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        validate_margin(self.margin)
    }
}

/// Margin must be a finite, non-negative amount
pub fn validate_margin(margin: f64) -> std::result::Result<(), ConfigError> {
    if margin.is_finite() && margin >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            key: "margin",
            value: margin.to_string(),
        })
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Lane Rate Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(f, "Margin:          ${:.2}", self.margin)?;
        writeln!(f, "Output format:   {}", self.output_format)?;
        writeln!(
            f,
            "Data file:       {}",
            self.data_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(synthetic)".to_string())
        )?;
        writeln!(f, "Synthetic seed:  {}", self.synthetic_seed)?;
        writeln!(f, "Synthetic count: {}", self.synthetic_count)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:     {}", path.display())?;
        }

        Ok(())
    }
}
