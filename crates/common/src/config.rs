//! Configuration management for the application.
//!
//! Settings are layered from optional files and environment variables.
//!
//! ## Example Configuration
//!
//! ```toml
//! [telemetry]
//! service_name = "babybet"
//! json_logging = false
//! log_level = "warn"
//!
//! [scoring]
//! exclude_game_creator = true
//! unknown_email_placeholder = "Unknown"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable selecting the environment-specific config file
pub const ENV_VAR: &str = "BABYBET_ENV";

/// Prefix of environment variable overrides, e.g. `BABYBET_TELEMETRY__LOG_LEVEL=debug`
pub const ENV_PREFIX: &str = "BABYBET";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to log output
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Enable JSON logging format
    #[serde(default)]
    pub json_logging: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// How game snapshots are turned into scoring input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoringConfig {
    /// Leave the game owner's own bets out of the participant list
    #[serde(default = "default_true")]
    pub exclude_game_creator: bool,

    /// Email shown for participants whose account has none
    #[serde(default = "default_unknown_email")]
    pub unknown_email_placeholder: String,
}

fn default_service_name() -> String {
    "babybet".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

fn default_unknown_email() -> String {
    "Unknown".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            json_logging: false,
            log_level: default_log_level(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            exclude_game_creator: default_true(),
            unknown_email_placeholder: default_unknown_email(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment variables.
    ///
    /// Later sources override earlier ones:
    /// 1. Default values
    /// 2. `config/default.toml` (if exists)
    /// 3. `config/{BABYBET_ENV}.toml` (if exists, default environment `development`)
    /// 4. `extra_file` (if given; must exist)
    /// 5. Environment variables prefixed with `BABYBET_`, sections split by `__`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use babybet_common::config::AppConfig;
    ///
    /// let config = AppConfig::load(None).expect("Failed to load configuration");
    /// println!("Log level: {}", config.telemetry.log_level);
    /// ```
    pub fn load(extra_file: Option<&Path>) -> Result<Self> {
        let env = std::env::var(ENV_VAR).unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false));

        if let Some(path) = extra_file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        Self::finish(config)
    }

    /// Parse configuration from a TOML document, without other sources
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()
            .context("Failed to build configuration")?;

        Self::finish(config)
    }

    fn finish(config: config::Config) -> Result<Self> {
        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        app_config.validate()?;
        Ok(app_config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.telemetry.service_name.trim().is_empty() {
            anyhow::bail!("Telemetry service name is required");
        }

        if !VALID_LOG_LEVELS.contains(&self.telemetry.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.telemetry.log_level,
                VALID_LOG_LEVELS.join(", ")
            );
        }

        if self.scoring.unknown_email_placeholder.trim().is_empty() {
            anyhow::bail!("Unknown email placeholder must not be empty");
        }

        Ok(())
    }
}
