//! Structured logging setup.
//!
//! Installs a `tracing` subscriber with either JSON or human-readable output.
//! `RUST_LOG` overrides the configured level.

use crate::config::TelemetryConfig;
use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Initialize the global tracing subscriber.
///
/// # Arguments
///
/// * `service_name` - Name recorded on the startup event
/// * `json_format` - Whether to use JSON formatting for logs
/// * `log_level` - Log level filter (e.g., "info", "debug")
///
/// # Examples
///
/// ```no_run
/// use babybet_common::telemetry::init_tracing;
///
/// init_tracing("babybet", false, "info").expect("Failed to initialize tracing");
/// ```
pub fn init_tracing(service_name: &str, json_format: bool, log_level: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let registry = Registry::default().with(env_filter);

    if json_format {
        registry
            .with(json_layer())
            .try_init()
            .context("Failed to initialize tracing subscriber")?;
    } else {
        registry
            .with(compact_layer())
            .try_init()
            .context("Failed to initialize tracing subscriber")?;
    }

    tracing::debug!(service = service_name, json = json_format, "Tracing initialized");
    Ok(())
}

/// Initialize tracing from the telemetry section of the application config
pub fn init_from_config(config: &TelemetryConfig) -> Result<()> {
    init_tracing(&config.service_name, config.json_logging, &config.log_level)
}

/// JSON logging layer
fn json_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
}

/// Human-readable logging layer; logs go to stderr so command output stays clean
fn compact_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .compact()
        .with_target(true)
        .with_level(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice_does_not_panic() {
        // A process can only install one global subscriber; the second call
        // must surface an error instead of panicking.
        let first = init_tracing("test-service", false, "warn");
        let second = init_tracing("test-service", true, "warn");
        assert!(first.is_err() || second.is_err());
    }
}
