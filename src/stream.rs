//! Output streams
//!
//! A [`Stream`] is the single owner of writes to one process destination.
//! Views never write to stdout directly; they go through the stream held by
//! the execution context so that a multi-part render is emitted under one
//! lock and cannot interleave with other writers.

use parking_lot::{Mutex, MutexGuard};
use std::io::{self, IsTerminal, Write};
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Synchronized handle on an output destination.
///
/// Cloning a `Stream` yields another handle on the same destination; the
/// underlying writer is shared, not duplicated.
#[derive(Clone)]
pub struct Stream {
    writer: SharedWriter,
    terminal: bool,
}

impl Stream {
    /// Wrap an arbitrary writer. Such streams are never treated as terminals.
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
            terminal: false,
        }
    }

    /// Process standard output.
    pub fn stdout() -> Self {
        Self {
            terminal: io::stdout().is_terminal(),
            ..Self::new(io::stdout())
        }
    }

    /// Process standard error.
    pub fn stderr() -> Self {
        Self {
            terminal: io::stderr().is_terminal(),
            ..Self::new(io::stderr())
        }
    }

    /// Whether the destination is an interactive terminal.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Lock the stream for a multi-part write.
    pub fn lock(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.writer.lock()
    }

    /// Write a single line and flush.
    pub fn println(&self, line: &str) -> io::Result<()> {
        let mut out = self.lock();
        writeln!(out, "{}", line)?;
        out.flush()
    }

    /// Write raw text without a trailing newline and flush.
    pub fn print(&self, text: &str) -> io::Result<()> {
        let mut out = self.lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}

/// A [`Stream`] locked for one write, as handed to the log formatter.
pub struct StreamGuard<'a>(MutexGuard<'a, Box<dyn Write + Send>>);

impl Write for StreamGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

/// Each log record is written under the stream lock, so it cannot land in
/// the middle of a spinner frame or a view's multi-part render.
impl<'a> MakeWriter<'a> for Stream {
    type Writer = StreamGuard<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        StreamGuard(self.lock())
    }
}

impl std::fmt::Debug for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stream")
            .field("terminal", &self.terminal)
            .finish_non_exhaustive()
    }
}

/// In-memory writer whose contents stay readable after being handed to a
/// [`Stream`]. Used to capture output in tests and embedding callers.
#[derive(Clone, Default)]
pub struct MemoryBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl MemoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything written so far.
    pub fn contents(&self) -> Vec<u8> {
        self.bytes.lock().clone()
    }

    /// Contents decoded as UTF-8, lossily.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.bytes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }
}

impl Write for MemoryBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
