//! Views for the context command: which endpoint and logical context the
//! current invocation resolved to.

use crate::error::CliError;
use crate::view::{HumanView, JsonView, View};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde::{Deserialize, Serialize};
use std::io::Write;

const UNSET: &str = "(not set)";
const NO_ENDPOINT: &str = "No endpoint configured; pass --endpoint or set CEK_ENDPOINT";

/// Snapshot of the execution context settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSummary {
    pub endpoint: String,
    pub context: String,
    /// Raw `--context` value as typed, empty when the flag was absent.
    pub context_flag: String,
    pub output: String,
    pub progress: bool,
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() {
        UNSET
    } else {
        value
    }
}

pub struct ContextHumanView<'a> {
    view: HumanView,
    summary: &'a ContextSummary,
}

impl<'a> ContextHumanView<'a> {
    pub fn new(view: HumanView, summary: &'a ContextSummary) -> Self {
        Self { view, summary }
    }
}

impl View for ContextHumanView<'_> {
    fn render(&self) -> Result<(), CliError> {
        if self.summary.endpoint.is_empty() {
            self.view.warn(NO_ENDPOINT)?;
        }

        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.add_row(vec!["Endpoint", or_unset(&self.summary.endpoint)]);
        table.add_row(vec!["Context", or_unset(&self.summary.context)]);
        table.add_row(vec!["Context flag", or_unset(&self.summary.context_flag)]);
        table.add_row(vec!["Output", self.summary.output.as_str()]);
        table.add_row(vec![
            "Progress",
            if self.summary.progress {
                "enabled"
            } else {
                "disabled"
            },
        ]);

        let mut out = self.view.stream().lock();
        writeln!(out, "{}", self.view.highlight("Current context"))?;
        writeln!(out, "{}", table)?;
        out.flush()?;
        Ok(())
    }
}

pub struct ContextJsonView<'a> {
    view: JsonView,
    summary: &'a ContextSummary,
}

impl<'a> ContextJsonView<'a> {
    pub fn new(view: JsonView, summary: &'a ContextSummary) -> Self {
        Self { view, summary }
    }
}

impl View for ContextJsonView<'_> {
    fn render(&self) -> Result<(), CliError> {
        if self.summary.endpoint.is_empty() {
            self.view.warn(NO_ENDPOINT)?;
        }
        self.view.write_value(self.summary)
    }
}
