//! Output formatting for CLI

use serde::{Deserialize, Serialize};

mod formatters;
mod table;

pub use formatters::{JsonFormatter, PlainFormatter};
pub use table::TableFormatter;

/// Output format enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Table output (default)
    #[default]
    Table,
    /// Tab-separated lines without headers
    Plain,
}

impl OutputFormat {
    /// Parse output format from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "table" => Some(Self::Table),
            "plain" => Some(Self::Plain),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Table => write!(f, "table"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

/// Format a score for display with a fixed number of decimals
pub fn format_score(score: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, score)
}

/// Color helpers
pub mod colors {
    use colored::*;

    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    pub fn error(s: &str) -> ColoredString {
        s.red()
    }

    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    pub fn bold(s: &str) -> ColoredString {
        s.bold()
    }

    /// Gold, silver and bronze for the top three positions
    pub fn rank(rank: usize) -> ColoredString {
        let label = format!("#{}", rank);
        match rank {
            1 => label.yellow().bold(),
            2 => label.white().bold(),
            3 => label.truecolor(205, 127, 50).bold(),
            _ => label.normal(),
        }
    }
}
