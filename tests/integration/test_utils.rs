//! Shared test utilities for integration tests

use cek::cli::ExecutionContext;
use cek::stream::{MemoryBuffer, Stream};
use cek::view::{LogLevel, ViewType};
use std::time::Duration;

/// Execution context writing to two in-memory buffers.
pub struct Captured {
    pub ctx: ExecutionContext,
    pub out: MemoryBuffer,
    pub err: MemoryBuffer,
}

/// Build a context with captured streams and a short spinner interval.
pub fn captured_context(view_type: ViewType, disable_progress: bool) -> Captured {
    let out = MemoryBuffer::new();
    let err = MemoryBuffer::new();
    let mut ctx = ExecutionContext::with_streams(
        view_type,
        Stream::new(out.clone()),
        Stream::new(err.clone()),
        LogLevel::Warn,
    )
    .with_progress_interval(Duration::from_millis(10));
    ctx.disable_progress = disable_progress;
    Captured { ctx, out, err }
}
