//! CLI route: builds the execution context and dispatches commands to views.

use crate::cli::context::{run_with_progress, ExecutionContext};
use crate::cli::parse::{Cli, Commands};
use crate::config::CekConfig;
use crate::error::CliError;
use crate::stream::Stream;
use crate::view::{ColorChoice, LogLevel, ResultKind, VersionInfo, ViewType};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Stable command name used in logs.
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Inspect { .. } => "inspect",
        Commands::Context => "context",
        Commands::Version => "version",
    }
}

/// Build the execution context. CLI flags override the loaded configuration.
pub fn build_context(
    cli: &Cli,
    config: &CekConfig,
    stream: Stream,
    error_stream: Stream,
) -> Result<ExecutionContext, CliError> {
    let view_type: ViewType = cli
        .output
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse()?;
    let log_level: LogLevel = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.output.log_level)
        .parse()?;
    let color: ColorChoice = cli
        .color
        .as_deref()
        .unwrap_or(&config.output.color)
        .parse()?;

    let mut ctx = ExecutionContext::with_streams(view_type, stream, error_stream, log_level)
        .with_color(color);
    ctx.endpoint = cli.endpoint.clone().unwrap_or_else(|| config.endpoint.clone());
    ctx.context_flag = cli.context.clone().unwrap_or_default();
    ctx.context = cli.context.clone().unwrap_or_else(|| config.context.clone());
    ctx.disable_progress = cli.no_progress || config.output.disable_progress;
    Ok(ctx)
}

/// Execute one command against the context.
pub fn execute(ctx: &ExecutionContext, command: &Commands) -> Result<(), CliError> {
    let started = Instant::now();
    debug!(command = command_name(command), "Dispatching command");

    let result = match command {
        Commands::Inspect { timeout_ms } => {
            let timeout = Duration::from_millis(*timeout_ms);
            run_with_progress(ctx, "Inspecting infrastructure", || {
                probe_endpoint(&ctx.endpoint, timeout)
            })?;
            ctx.viewer().view_for(ResultKind::Inspect).render()
        }
        Commands::Context => {
            let summary = ctx.summary();
            let view = ctx.viewer().view_for(ResultKind::Context(&summary));
            view.render()
        }
        Commands::Version => {
            let info = VersionInfo::current();
            let view = ctx.viewer().view_for(ResultKind::Version(&info));
            view.render()
        }
    };

    info!(
        command = command_name(command),
        ok = result.is_ok(),
        duration_ms = started.elapsed().as_millis() as u64,
        "Command finished"
    );
    result
}

/// Check that `endpoint` accepts TCP connections within `timeout`.
pub fn probe_endpoint(endpoint: &str, timeout: Duration) -> Result<(), CliError> {
    if endpoint.is_empty() {
        return Err(CliError::InvalidArgument(
            "No endpoint configured; pass --endpoint or set CEK_ENDPOINT".to_string(),
        ));
    }

    let addrs = endpoint
        .to_socket_addrs()
        .map_err(|e| CliError::InvalidArgument(format!("Invalid endpoint {}: {}", endpoint, e)))?;

    let mut last_error = None;
    for addr in addrs {
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(_) => {
                debug!(%addr, "Endpoint reachable");
                return Ok(());
            }
            Err(e) => last_error = Some(e),
        }
    }

    Err(CliError::Operation(match last_error {
        Some(e) => format!("Failed to reach {}: {}", endpoint, e),
        None => format!("Endpoint {} resolved to no addresses", endpoint),
    }))
}
