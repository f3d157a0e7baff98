//! Environment source: CEK_ENDPOINT, CEK_CONTEXT, CEK_OUTPUT, CEK_LOG_LEVEL,
//! CEK_NO_PROGRESS and CEK_COLOR override file settings.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;

const STRING_OVERRIDES: [(&str, &str); 5] = [
    ("CEK_ENDPOINT", "endpoint"),
    ("CEK_CONTEXT", "context"),
    ("CEK_OUTPUT", "output.format"),
    ("CEK_LOG_LEVEL", "output.log_level"),
    ("CEK_COLOR", "output.color"),
];

/// Add overrides read from the process environment.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    add_to_builder_with(builder, |key| std::env::var(key).ok())
}

/// Add overrides read through `lookup`, so callers can supply the variables.
pub fn add_to_builder_with<F>(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> Result<ConfigBuilder<DefaultState>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    for (var, key) in STRING_OVERRIDES {
        builder = builder.set_override_option(key, lookup(var))?;
    }
    if let Some(value) = lookup("CEK_NO_PROGRESS") {
        builder = builder.set_override("output.disable_progress", parse_flag(&value))?;
    }
    Ok(builder)
}

/// Any value other than empty, `0`, `false`, `no` or `off` switches the flag on.
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}
