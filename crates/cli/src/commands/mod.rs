//! CLI commands

pub mod leaderboard;
pub mod questions;
pub mod score;
pub mod scrabble;
pub mod snapshot;
pub mod validate;

use crate::config::Config;
use crate::output::{colors, OutputFormat};
use babybet_application::GameScoringService;
use babybet_common::AppConfig;
use babybet_domain::ValidationIssue;

/// Context passed to all commands
pub struct CommandContext {
    /// CLI preferences
    pub config: Config,
    /// Application configuration (scoring, telemetry)
    pub app_config: AppConfig,
    pub service: GameScoringService,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(config: Config, app_config: AppConfig) -> Self {
        let service = GameScoringService::new(app_config.scoring.clone());
        Self {
            config,
            app_config,
            service,
        }
    }

    /// Output format chosen for this run
    pub fn format(&self) -> OutputFormat {
        self.config.output_format
    }

    /// Print snapshot warnings to stderr, unless disabled or printing JSON
    pub fn print_warnings(&self, warnings: &[ValidationIssue]) {
        if !self.config.show_warnings || self.format() == OutputFormat::Json {
            return;
        }
        for warning in warnings {
            eprintln!("{} {}", colors::warning("warning:"), warning);
        }
    }
}
