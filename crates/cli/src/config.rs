//! CLI preferences
//!
//! Handles loading and saving preferences from ~/.babybet/config.toml. Scoring
//! behaviour itself is configured through `babybet_common::AppConfig`.

use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Enable colored output
    #[serde(default = "default_colored")]
    pub colored: bool,

    /// Decimals shown for scores in tables
    #[serde(default = "default_decimals")]
    pub decimals: usize,

    /// Default number of leaderboard rows; all rows when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaderboard_limit: Option<usize>,

    /// Print snapshot warnings before results
    #[serde(default = "default_show_warnings")]
    pub show_warnings: bool,
}

fn default_colored() -> bool {
    true
}

fn default_decimals() -> usize {
    2
}

fn default_show_warnings() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            colored: default_colored(),
            decimals: default_decimals(),
            leaderboard_limit: None,
            show_warnings: default_show_warnings(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".babybet"))
    }

    /// Get the config file path
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load preferences from file, falling back to defaults
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from_file()?;

        // Override with environment variables
        if let Ok(format) = std::env::var("BABYBET_OUTPUT_FORMAT") {
            if let Some(format) = OutputFormat::parse(&format) {
                config.output_format = format;
            }
        }
        if std::env::var("NO_COLOR").is_ok() {
            config.colored = false;
        }

        Ok(config)
    }

    /// Load configuration from file only
    fn load_from_file() -> Result<Self> {
        let config_file = Self::config_file()?;

        if !config_file.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_file).context("Failed to read config file")?;
        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        }

        let config_file = Self::config_file()?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&config_file, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "output_format" | "output-format" | "format" => Some(self.output_format.to_string()),
            "colored" | "color" => Some(self.colored.to_string()),
            "decimals" => Some(self.decimals.to_string()),
            "leaderboard_limit" | "limit" => self.leaderboard_limit.map(|l| l.to_string()),
            "show_warnings" | "warnings" => Some(self.show_warnings.to_string()),
            _ => None,
        }
    }

    /// Change a value in memory
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output_format" | "output-format" | "format" => {
                self.output_format = OutputFormat::parse(value).with_context(|| {
                    format!("Invalid output format: {}. Use json, table, or plain", value)
                })?;
            }
            "colored" | "color" => {
                self.colored = value.parse().context("Invalid boolean value")?;
            }
            "decimals" => {
                let decimals: usize = value.parse().context("Invalid number of decimals")?;
                if decimals > 10 {
                    anyhow::bail!("Decimals must be between 0 and 10");
                }
                self.decimals = decimals;
            }
            "leaderboard_limit" | "limit" => {
                self.leaderboard_limit = match value {
                    "" | "none" | "all" => None,
                    n => match n.parse::<usize>().context("Invalid leaderboard limit")? {
                        0 => anyhow::bail!("Leaderboard limit must be at least 1"),
                        n => Some(n),
                    },
                };
            }
            "show_warnings" | "warnings" => {
                self.show_warnings = value.parse().context("Invalid boolean value")?;
            }
            _ => anyhow::bail!("Unknown configuration key: {}", key),
        }
        Ok(())
    }

    /// Set a configuration value by key and save
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.apply(key, value)?;
        self.save()
    }

    /// Reset configuration to defaults
    pub fn reset(&mut self) -> Result<()> {
        *self = Self::default();
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.colored);
        assert_eq!(config.decimals, 2);
        assert!(config.leaderboard_limit.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.leaderboard_limit = Some(10);
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("output_format = \"json\"").unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.show_warnings);
    }

    #[test]
    fn test_config_get_and_apply() {
        let mut config = Config::default();
        assert_eq!(config.get("format"), Some("table".to_string()));
        assert_eq!(config.get("limit"), None);
        assert_eq!(config.get("unknown"), None);

        config.apply("format", "plain").unwrap();
        config.apply("limit", "5").unwrap();
        config.apply("decimals", "3").unwrap();
        assert_eq!(config.get("format"), Some("plain".to_string()));
        assert_eq!(config.get("limit"), Some("5".to_string()));
        assert_eq!(config.decimals, 3);

        config.apply("limit", "all").unwrap();
        assert_eq!(config.leaderboard_limit, None);
    }

    #[test]
    fn test_config_apply_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.apply("format", "yaml").is_err());
        assert!(config.apply("limit", "0").is_err());
        assert!(config.apply("decimals", "42").is_err());
        assert!(config.apply("colour_scheme", "dark").is_err());
        assert_eq!(config, Config::default());
    }
}
