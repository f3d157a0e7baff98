//! Logging System
//!
//! Structured logging using the `tracing` crate. Logs always go to stderr:
//! stdout belongs to result views and must stay parseable in json mode.

use crate::error::CliError;
use crate::stream::Stream;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::Subscriber;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit logs at all (off unless enabled here, by --verbose or by CEK_LOG)
    #[serde(default)]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            format: default_format(),
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), CliError> {
        check_format(&self.format)?;
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(()),
            other => Err(CliError::ConfigError(format!(
                "Invalid log level: {} (must be trace, debug, info, warn, error or off)",
                other
            ))),
        }
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. CEK_LOG / CEK_LOG_FORMAT environment variables
/// 2. The given configuration (CLI flags already folded in)
/// 3. Defaults
///
/// Records are written to `writer`, normally the same stderr [`Stream`] the
/// spinner draws on. Does nothing when logging is disabled and CEK_LOG is
/// unset.
pub fn init_logging(config: Option<&LoggingConfig>, writer: Stream) -> Result<(), CliError> {
    let subscriber = match build_subscriber(config, writer)? {
        Some(subscriber) => subscriber,
        None => return Ok(()),
    };
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::ConfigError(format!("Failed to initialize logging: {}", e)))
}

type BoxedSubscriber = Box<dyn Subscriber + Send + Sync>;

fn build_subscriber(
    config: Option<&LoggingConfig>,
    writer: Stream,
) -> Result<Option<BoxedSubscriber>, CliError> {
    let env_filter = EnvFilter::try_from_env("CEK_LOG").ok();
    let enabled = config.map(|c| c.enabled).unwrap_or(false);
    if env_filter.is_none() && !enabled {
        return Ok(None);
    }

    let filter = match env_filter {
        Some(filter) => filter,
        None => build_filter(config)?,
    };
    let format = determine_format(config)?;
    let use_color = config.map(|c| c.color).unwrap_or(true);

    let base_subscriber = Registry::default().with(filter);

    let subscriber: BoxedSubscriber = if format == "json" {
        Box::new(
            base_subscriber.with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            ),
        )
    } else {
        Box::new(
            base_subscriber.with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(writer),
            ),
        )
    };
    Ok(Some(subscriber))
}

/// Build a filter from the configured level plus per-module directives.
fn build_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, CliError> {
    let level = config.map(|c| c.level.as_str()).unwrap_or("info");
    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(level);
    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            let directive = format!("{}={}", module, module_level);
            filter = filter.add_directive(
                directive
                    .parse()
                    .map_err(|e| CliError::ConfigError(format!("Invalid log directive: {}", e)))?,
            );
        }
    }
    Ok(filter)
}

/// Determine output format from config or environment
fn determine_format(config: Option<&LoggingConfig>) -> Result<String, CliError> {
    if let Ok(format) = std::env::var("CEK_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    let format = config.map(|c| c.format.as_str()).unwrap_or("text");
    check_format(format)?;
    Ok(format.to_string())
}

fn check_format(format: &str) -> Result<(), CliError> {
    if format != "json" && format != "text" {
        return Err(CliError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }
    Ok(())
}
