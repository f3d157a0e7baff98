//! CLI parse: clap types for cek. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cek - inspect infrastructure from the command line
#[derive(Parser, Debug)]
#[command(name = "cek")]
#[command(about = "Inspect infrastructure from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Endpoint to talk to, as host:port
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Logical context to operate in
    #[arg(long, global = true)]
    pub context: Option<String>,

    /// Output format (human, json)
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Minimum level of diagnostics shown with results (debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Disable the progress spinner
    #[arg(long, global = true)]
    pub no_progress: bool,

    /// When to color human output (auto, always, never)
    #[arg(long, global = true)]
    pub color: Option<String>,

    /// Enable verbose tracing on stderr (default: off)
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect the infrastructure behind the configured endpoint
    Inspect {
        /// Connection timeout in milliseconds
        #[arg(long, default_value = "5000")]
        timeout_ms: u64,
    },
    /// Show the resolved endpoint, context and output settings
    Context,
    /// Show version information
    Version,
}
