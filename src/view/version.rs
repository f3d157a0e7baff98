//! Views for the version command.

use crate::error::CliError;
use crate::view::{HumanView, JsonView, View};
use serde::{Deserialize, Serialize};

/// Name and version of the running binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub name: String,
    pub version: String,
}

impl VersionInfo {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

pub struct VersionHumanView<'a> {
    view: HumanView,
    info: &'a VersionInfo,
}

impl<'a> VersionHumanView<'a> {
    pub fn new(view: HumanView, info: &'a VersionInfo) -> Self {
        Self { view, info }
    }
}

impl View for VersionHumanView<'_> {
    fn render(&self) -> Result<(), CliError> {
        self.view.println(&format!(
            "{} {}",
            self.info.name,
            self.view.highlight(&self.info.version)
        ))
    }
}

pub struct VersionJsonView<'a> {
    view: JsonView,
    info: &'a VersionInfo,
}

impl<'a> VersionJsonView<'a> {
    pub fn new(view: JsonView, info: &'a VersionInfo) -> Self {
        Self { view, info }
    }
}

impl View for VersionJsonView<'_> {
    fn render(&self) -> Result<(), CliError> {
        self.view.write_value(self.info)
    }
}
