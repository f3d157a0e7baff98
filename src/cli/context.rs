//! Execution context shared by every command invocation.

use crate::spinner::{Spinner, DEFAULT_TICK_INTERVAL};
use crate::stream::Stream;
use crate::view::{ColorChoice, ContextSummary, LogLevel, ViewType, Viewer};
use std::io::Write;
use std::time::Duration;

/// Process-lifetime state handed by reference to each command.
///
/// Owns the primary output stream; views reach it only through the viewer.
pub struct ExecutionContext {
    viewer: Viewer,
    stream: Stream,
    error_stream: Stream,
    progress_interval: Duration,
    /// Endpoint commands talk to, as `host:port`.
    pub endpoint: String,
    /// Resolved logical context (flag, environment or config file).
    pub context: String,
    /// Raw `--context` value, empty when the flag was not given.
    pub context_flag: String,
    pub disable_progress: bool,
}

impl ExecutionContext {
    /// Build a context writing results to `writer` and progress to stderr.
    pub fn new<W>(view_type: ViewType, writer: W, log_level: LogLevel) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::with_streams(view_type, Stream::new(writer), Stream::stderr(), log_level)
    }

    /// Build a context from explicit primary and error streams.
    pub fn with_streams(
        view_type: ViewType,
        stream: Stream,
        error_stream: Stream,
        log_level: LogLevel,
    ) -> Self {
        Self {
            viewer: Viewer::new(view_type, stream.clone(), error_stream.clone(), log_level),
            stream,
            error_stream,
            progress_interval: DEFAULT_TICK_INTERVAL,
            endpoint: String::new(),
            context: String::new(),
            context_flag: String::new(),
            disable_progress: false,
        }
    }

    /// Apply a color choice to human views, judged against the primary stream.
    pub fn with_color(mut self, choice: ColorChoice) -> Self {
        let color = choice.resolve(self.stream.is_terminal());
        self.viewer = self.viewer.with_color(color);
        self
    }

    /// Override the spinner tick interval.
    pub fn with_progress_interval(mut self, interval: Duration) -> Self {
        self.progress_interval = interval;
        self
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn stream(&self) -> &Stream {
        &self.stream
    }

    pub fn progress_enabled(&self) -> bool {
        !self.disable_progress
    }

    pub fn summary(&self) -> ContextSummary {
        ContextSummary {
            endpoint: self.endpoint.clone(),
            context: self.context.clone(),
            context_flag: self.context_flag.clone(),
            output: self.viewer.view_type().to_string(),
            progress: self.progress_enabled(),
        }
    }
}

/// Run `operation` while a spinner showing `message` ticks on the error stream.
///
/// The spinner has been stopped and its line erased by the time this returns,
/// whatever the outcome, so the caller can render to the primary stream right
/// away. The operation's result is returned untouched.
pub fn run_with_progress<T, E, F>(
    ctx: &ExecutionContext,
    message: &str,
    operation: F,
) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    if ctx.disable_progress {
        return operation();
    }

    // Dropping the spinner on unwind stops it as well.
    let spinner = Spinner::with_stream(message, ctx.error_stream.clone())
        .with_interval(ctx.progress_interval);
    spinner.start();
    let result = operation();
    spinner.stop();
    result
}
