//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("endpoint", "")?
        .set_default("context", "")?
        .set_default("output.format", "human")?
        .set_default("output.log_level", "warn")?
        .set_default("output.disable_progress", false)?
        .set_default("output.color", "auto")
}
