//! Configuration System
//!
//! Layered configuration for the CLI: built-in defaults, the global config
//! file, an explicit `--config` file and `CEK_*` environment variables, in
//! increasing order of precedence. Command-line flags are applied on top by
//! the router.

use crate::error::CliError;
use crate::logging::LoggingConfig;
use crate::view::{ColorChoice, LogLevel, ViewType};
use config::builder::DefaultState;
use config::{ConfigBuilder, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

mod merge;
mod sources;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CekConfig {
    /// Endpoint as `host:port`
    #[serde(default)]
    pub endpoint: String,

    /// Logical context name
    #[serde(default)]
    pub context: String,

    /// Result presentation settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Tracing configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How results are presented.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// human or json
    #[serde(default = "default_format")]
    pub format: String,

    /// Minimum level of diagnostics shown next to results
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Skip the progress spinner (CI, pipes)
    #[serde(default)]
    pub disable_progress: bool,

    /// auto, always or never
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_color() -> String {
    "auto".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            log_level: default_log_level(),
            disable_progress: false,
            color: default_color(),
        }
    }
}

impl CekConfig {
    /// Validate the entire configuration, reporting every problem at once.
    pub fn validate(&self) -> Result<(), CliError> {
        let mut errors = Vec::new();

        if let Err(e) = self.output.format.parse::<ViewType>() {
            errors.push(e.to_string());
        }
        if let Err(e) = self.output.log_level.parse::<LogLevel>() {
            errors.push(e.to_string());
        }
        if let Err(e) = self.output.color.parse::<ColorChoice>() {
            errors.push(e.to_string());
        }
        if let Err(e) = self.logging.validate() {
            errors.push(e.to_string());
        }
        if !self.endpoint.is_empty() && !self.endpoint.contains(':') {
            errors.push(format!(
                "Endpoint '{}' must be in host:port form",
                self.endpoint
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CliError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                errors.join("\n")
            )))
        }
    }
}

/// Loads [`CekConfig`] from its layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, global file, environment.
    pub fn load() -> Result<CekConfig, CliError> {
        let builder = merge::merge_policy::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        Self::finish(sources::environment::add_to_builder(builder)?)
    }

    /// Defaults, the given file (which must exist), environment.
    pub fn load_from_file(path: &Path) -> Result<CekConfig, CliError> {
        if !path.exists() {
            return Err(CliError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let builder = merge::merge_policy::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true));
        Self::finish(sources::environment::add_to_builder(builder)?)
    }

    /// Defaults, the given file, then variables supplied through `lookup`.
    pub fn load_with_env<F>(path: Option<&Path>, lookup: F) -> Result<CekConfig, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = merge::merge_policy::builder_with_defaults()?;
        if let Some(path) = path {
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }
        Self::finish(sources::environment::add_to_builder_with(builder, lookup)?)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<CekConfig, CliError> {
        let config: CekConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
