//! CLI domain: execution context, parse, route and output only.
//! Business logic stays behind the closures handed to `run_with_progress`.

mod context;
mod output;
mod parse;
pub mod route;

pub use context::{run_with_progress, ExecutionContext};
pub use output::map_error;
pub use parse::{Cli, Commands};
