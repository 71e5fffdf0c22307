//! Log subscriber setup for binaries built on the evaluation engine.
//!
//! Filter precedence is `RUST_LOG`, then the configured level (which already falls back to
//! the environment's default). Output always goes to stderr so stdout can carry JSON.

use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Where the active log filter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOrigin {
    RustLog,
    Config,
}

impl fmt::Display for FilterOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterOrigin::RustLog => f.write_str("RUST_LOG"),
            FilterOrigin::Config => f.write_str("APP_LOG_LEVEL"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("log filter '{directive}' from {origin} is invalid")]
    InvalidFilter {
        directive: String,
        origin: FilterOrigin,
        #[source]
        source: ParseError,
    },
    #[error("a global log subscriber is already installed")]
    AlreadyInstalled(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Builds the filter from an explicit `RUST_LOG` value or the configured level.
///
/// A blank `RUST_LOG` counts as unset; a malformed one is an error rather than being
/// silently replaced by the configured level.
pub fn resolve_filter(
    config: &TelemetryConfig,
    rust_log: Option<&str>,
) -> Result<(EnvFilter, FilterOrigin), TelemetryError> {
    let (directive, origin) = match rust_log.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => (value, FilterOrigin::RustLog),
        None => (config.log_level.trim(), FilterOrigin::Config),
    };

    EnvFilter::try_new(directive)
        .map(|filter| (filter, origin))
        .map_err(|source| TelemetryError::InvalidFilter {
            directive: directive.to_string(),
            origin,
            source,
        })
}

pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (filter, origin) = resolve_filter(config, rust_log.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.show_targets)
        .with_ansi(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)?;

    tracing::debug!(%origin, "log subscriber installed");
    Ok(())
}
