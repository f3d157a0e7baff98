//! Views for the inspect command, which produces no payload.

use crate::error::CliError;
use crate::view::{HumanView, View};

pub struct InspectHumanView {
    view: HumanView,
}

impl InspectHumanView {
    pub fn new(view: HumanView) -> Self {
        Self { view }
    }
}

impl View for InspectHumanView {
    fn render(&self) -> Result<(), CliError> {
        self.view.println(&format!(
            "{} The infrastructure was inspected successfully",
            self.view.highlight("Success!")
        ))
    }
}

/// Scripts read success from the exit status; there is nothing to print.
pub struct InspectJsonView;

impl View for InspectJsonView {
    fn render(&self) -> Result<(), CliError> {
        Ok(())
    }
}
