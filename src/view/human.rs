//! Base for human-readable views.

use crate::error::CliError;
use crate::stream::Stream;
use crate::view::LogLevel;
use owo_colors::OwoColorize;
use std::io::Write;

/// Brand blue used for success markers.
const HIGHLIGHT_RGB: (u8, u8, u8) = (50, 108, 229);

/// Shared state and helpers for human-readable views.
#[derive(Debug, Clone)]
pub struct HumanView {
    stream: Stream,
    log_level: LogLevel,
    color: bool,
}

impl HumanView {
    pub fn new(stream: Stream, log_level: LogLevel, color: bool) -> Self {
        Self {
            stream,
            log_level,
            color,
        }
    }

    pub fn stream(&self) -> &Stream {
        &self.stream
    }

    /// Write one line to the primary stream.
    pub fn println(&self, line: &str) -> Result<(), CliError> {
        self.stream.println(line)?;
        Ok(())
    }

    /// Blue text when color is enabled, plain text otherwise.
    pub fn highlight(&self, text: &str) -> String {
        if self.color {
            let (r, g, b) = HIGHLIGHT_RGB;
            text.truecolor(r, g, b).to_string()
        } else {
            text.to_string()
        }
    }

    /// Emit a diagnostic line if `level` passes the configured minimum.
    pub fn diagnostic(&self, level: LogLevel, message: &str) -> Result<(), CliError> {
        if level < self.log_level {
            return Ok(());
        }
        let prefix = format!("{}:", level.as_str());
        let prefix = if self.color {
            match level {
                LogLevel::Error => prefix.red().bold().to_string(),
                LogLevel::Warn => prefix.yellow().bold().to_string(),
                LogLevel::Info => prefix.cyan().to_string(),
                LogLevel::Debug => prefix.dimmed().to_string(),
            }
        } else {
            prefix
        };
        let mut out = self.stream.lock();
        writeln!(out, "{} {}", prefix, message)?;
        out.flush()?;
        Ok(())
    }

    pub fn warn(&self, message: &str) -> Result<(), CliError> {
        self.diagnostic(LogLevel::Warn, message)
    }

    pub fn info(&self, message: &str) -> Result<(), CliError> {
        self.diagnostic(LogLevel::Info, message)
    }
}
