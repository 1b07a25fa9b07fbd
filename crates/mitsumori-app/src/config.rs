//! Configuration management for hikkoshi-mitsumori
//!
//! Config stored at: ~/.config/hikkoshi-mitsumori/config.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use mitsumori_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tariff master file override (defaults to <config_dir>/tariff.toml)
    #[serde(default)]
    pub tariff_path: Option<PathBuf>,

    /// Estimate store directory override
    #[serde(default)]
    pub store_dir: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Record estimate requests after a successful computation
    #[serde(default = "default_true")]
    pub save_requests: bool,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tariff_path: None,
            store_dir: None,
            output_format: default_output_format(),
            save_requests: true,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("hikkoshi-mitsumori");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the tariff master file path
    pub fn tariff_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.tariff_path {
            return Ok(path.clone());
        }
        Ok(Self::config_dir()?.join("tariff.toml"))
    }

    /// Get the estimate store directory
    pub fn store_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.store_dir {
            return Ok(dir.clone());
        }

        let store_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("hikkoshi-mitsumori");
        Ok(store_dir)
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Hikkoshi Mitsumori Configuration")?;
        writeln!(f, "================================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Tariff file:    {}",
            self.tariff_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(
            f,
            "Store dir:      {}",
            self.store_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Save requests:  {}", self.save_requests)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.save_requests);
        assert!(config.tariff_path.is_none());
    }

    #[test]
    fn test_overrides_win() {
        let config = Config {
            tariff_path: Some(PathBuf::from("/tmp/tariff.toml")),
            store_dir: Some(PathBuf::from("/tmp/store")),
            ..Config::default()
        };
        assert_eq!(config.tariff_path().unwrap(), PathBuf::from("/tmp/tariff.toml"));
        assert_eq!(config.store_dir().unwrap(), PathBuf::from("/tmp/store"));
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.save_requests);
    }
}
