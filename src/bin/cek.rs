//! cek CLI Binary
//!
//! Command-line entry point: loads configuration, sets up logging, builds the
//! execution context and dispatches the parsed command.

use cek::cli::{map_error, route, Cli};
use cek::config::{CekConfig, ConfigLoader};
use cek::logging::{init_logging, LoggingConfig};
use cek::stream::Stream;
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    // Logs and the spinner share one stderr handle
    let error_stream = Stream::stderr();

    // Initialize logging early
    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(Some(&logging_config), error_stream.clone()) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("cek CLI starting");

    let context = match route::build_context(&cli, &config, Stream::stdout(), error_stream) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error building execution context: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    if let Err(e) = route::execute(&context, &cli.command) {
        error!("Command failed: {}", e);
        eprintln!("{}", map_error(&e));
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<CekConfig, cek::error::CliError> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Build logging configuration from CLI args and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &CekConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.enabled = true;
        logging.level = "debug".to_string();
    }
    logging
}
