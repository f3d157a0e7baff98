//! CLI output: error mapping from domain errors to the stable CLI surface.

use crate::error::CliError;

/// Map an error to the line printed on stderr before exiting.
pub fn map_error(e: &CliError) -> String {
    format!("Error: {}", e)
}
