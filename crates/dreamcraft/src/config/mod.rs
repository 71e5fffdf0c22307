use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    /// Log filter used when neither `RUST_LOG` nor `APP_LOG_LEVEL` is set.
    pub fn default_log_level(self) -> &'static str {
        match self {
            Self::Development => "dreamcraft=debug,info",
            Self::Test => "warn",
            Self::Production => "info",
        }
    }

    /// Module targets are only printed while developing.
    pub fn shows_log_targets(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL")
            .ok()
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| environment.default_log_level().to_string());

        let format = OutputFormat::parse(
            &env::var("APP_OUTPUT").unwrap_or_else(|_| "pretty".to_string()),
        )?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig {
                log_level,
                show_targets: environment.shows_log_targets(),
            },
            output: OutputConfig { format },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub show_targets: bool,
}

/// How evaluation payloads are rendered on stdout.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Compact,
}

impl OutputFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            _ => Err(ConfigError::InvalidOutputFormat {
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidOutputFormat { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidOutputFormat { value } => {
                write!(f, "APP_OUTPUT must be 'pretty' or 'compact' (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
