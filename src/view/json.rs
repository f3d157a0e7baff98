//! Base for machine-readable views.
//!
//! Every render writes exactly one document, on one line, to the primary
//! stream. Diagnostics are `{"@level", "@message"}` lines on the error stream
//! so that stdout always decodes to the payload alone.

use crate::error::CliError;
use crate::stream::Stream;
use crate::view::LogLevel;
use serde::Serialize;
use serde_json::json;
use std::io::Write;

/// Shared state and helpers for JSON views.
#[derive(Debug, Clone)]
pub struct JsonView {
    stream: Stream,
    diagnostics: Stream,
    log_level: LogLevel,
}

impl JsonView {
    pub fn new(stream: Stream, diagnostics: Stream, log_level: LogLevel) -> Self {
        Self {
            stream,
            diagnostics,
            log_level,
        }
    }

    /// Serialize `value` as one line on the primary stream.
    pub fn write_value<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), CliError> {
        let line = serde_json::to_string(value)?;
        self.stream.println(&line)?;
        Ok(())
    }

    /// Emit a `{"@level", "@message"}` line if `level` passes the minimum.
    pub fn diagnostic(&self, level: LogLevel, message: &str) -> Result<(), CliError> {
        if level < self.log_level {
            return Ok(());
        }
        let record = json!({ "@level": level.as_str(), "@message": message });
        let mut out = self.diagnostics.lock();
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
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
