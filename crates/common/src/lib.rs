//! Common utilities shared by the Babybet crates.
//!
//! This crate provides:
//! - Configuration management
//! - Telemetry (structured logging)
//! - Date and clock parsing used by distance scoring

pub mod config;
pub mod datetime;
pub mod telemetry;

// Re-export commonly used types
pub use config::{AppConfig, ScoringConfig, TelemetryConfig};
pub use datetime::{days_between, parse_calendar_date, parse_clock_minutes};
pub use telemetry::{init_from_config, init_tracing};

/// Common error type used throughout the crate
pub type Result<T> = std::result::Result<T, anyhow::Error>;
