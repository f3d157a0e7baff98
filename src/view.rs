//! Result Views
//!
//! A [`Viewer`] is configured once per process with an output format, a
//! minimum diagnostic level and a handle on the primary [`Stream`]. Commands
//! ask it for a [`View`] bound to one result and render that view once.
//!
//! Dispatch is a single `match` over (format, result kind), so adding a
//! result kind without a view for every format fails to compile.

mod context;
mod human;
mod inspect;
mod json;
mod version;

pub use context::{ContextHumanView, ContextJsonView, ContextSummary};
pub use human::HumanView;
pub use inspect::{InspectHumanView, InspectJsonView};
pub use json::JsonView;
pub use version::{VersionHumanView, VersionInfo, VersionJsonView};

use crate::error::CliError;
use crate::stream::Stream;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A one-shot rendering of a result in a specific output format.
pub trait View {
    fn render(&self) -> Result<(), CliError>;
}

/// Output format, fixed when the viewer is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    /// Colorized text for interactive terminals.
    #[default]
    Human,
    /// Newline-delimited JSON for scripts.
    Json,
}

impl ViewType {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewType::Human => "human",
            ViewType::Json => "json",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewType {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(ViewType::Human),
            "json" => Ok(ViewType::Json),
            other => Err(CliError::InvalidArgument(format!(
                "Invalid output format: {} (must be 'human' or 'json')",
                other
            ))),
        }
    }
}

/// Minimum severity of diagnostics a view may emit alongside its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(CliError::InvalidArgument(format!(
                "Invalid log level: {} (must be 'debug', 'info', 'warn' or 'error')",
                other
            ))),
        }
    }
}

/// When human views may use ANSI colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color only on a terminal, and only when `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Decide whether to color output going to a destination.
    pub fn resolve(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => is_terminal && std::env::var_os("NO_COLOR").is_none(),
        }
    }
}

impl FromStr for ColorChoice {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            other => Err(CliError::InvalidArgument(format!(
                "Invalid color choice: {} (must be 'auto', 'always' or 'never')",
                other
            ))),
        }
    }
}

/// A result handed to the viewer, tagged by kind.
#[derive(Debug, Clone, Copy)]
pub enum ResultKind<'a> {
    /// Side-effecting inspection with no payload.
    Inspect,
    Context(&'a ContextSummary),
    Version(&'a VersionInfo),
}

/// Factory for views in the configured output format.
///
/// Results go to `stream`; structured-format diagnostics go to
/// `error_stream` so the primary stream stays one document per render.
#[derive(Debug, Clone)]
pub struct Viewer {
    view_type: ViewType,
    stream: Stream,
    error_stream: Stream,
    log_level: LogLevel,
    color: bool,
}

impl Viewer {
    /// Build a viewer. Color follows [`ColorChoice::Auto`] for the stream.
    pub fn new(
        view_type: ViewType,
        stream: Stream,
        error_stream: Stream,
        log_level: LogLevel,
    ) -> Self {
        let color = ColorChoice::Auto.resolve(stream.is_terminal());
        Self {
            view_type,
            stream,
            error_stream,
            log_level,
            color,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn view_type(&self) -> ViewType {
        self.view_type
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Mint the view rendering `result` in this viewer's format.
    pub fn view_for<'a>(&self, result: ResultKind<'a>) -> Box<dyn View + 'a> {
        match (self.view_type, result) {
            (ViewType::Human, ResultKind::Inspect) => Box::new(InspectHumanView::new(self.human())),
            (ViewType::Json, ResultKind::Inspect) => Box::new(InspectJsonView),
            (ViewType::Human, ResultKind::Context(summary)) => {
                Box::new(ContextHumanView::new(self.human(), summary))
            }
            (ViewType::Json, ResultKind::Context(summary)) => {
                Box::new(ContextJsonView::new(self.json(), summary))
            }
            (ViewType::Human, ResultKind::Version(info)) => {
                Box::new(VersionHumanView::new(self.human(), info))
            }
            (ViewType::Json, ResultKind::Version(info)) => {
                Box::new(VersionJsonView::new(self.json(), info))
            }
        }
    }

    fn human(&self) -> HumanView {
        HumanView::new(self.stream.clone(), self.log_level, self.color)
    }

    fn json(&self) -> JsonView {
        JsonView::new(self.stream.clone(), self.error_stream.clone(), self.log_level)
    }
}
