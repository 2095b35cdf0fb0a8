use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter
pub const LOG_ENV: &str = "APS_CALC_LOG";

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter { value: String, source: ParseError },

    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Resolve the filter directive: `--verbose` wins, then `APS_CALC_LOG`,
/// then the configured level.
pub fn filter_directive(log_level: &str, verbose: bool) -> String {
    if verbose {
        return "debug".to_string();
    }
    std::env::var(LOG_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| log_level.to_string())
}

fn build_filter(value: String) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&value).map_err(|source| TelemetryError::EnvFilter { value, source })
}

/// Install the global subscriber. Output goes through the stderr buffer so
/// log lines never corrupt the TUI.
pub fn init(log_level: &str, verbose: bool) -> Result<(), TelemetryError> {
    let env_filter = build_filter(filter_directive(log_level, verbose))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .with_writer(crate::stderr_buffer::writer)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
