//! Babybet CLI Library
//!
//! Scores baby-shower prediction game snapshots from the command line: the
//! owner's breakdown, the public leaderboard, snapshot validation and a few
//! catalogue helpers. Also holds CLI preferences and output formatting.

pub mod commands;
pub mod config;
pub mod errors;
pub mod output;

pub use config::Config;
pub use output::{JsonFormatter, OutputFormat, PlainFormatter, TableFormatter};

/// Re-export common types
pub use anyhow::{Context, Result};
