//! Progress Spinner
//!
//! Terminal spinner drawn on the error stream while a long-running operation
//! executes. A background thread redraws one frame per tick until it is told
//! to stop, then erases its line and acknowledges.
//!
//! The ticker and the caller share two one-shot channels:
//! - stop: caller to ticker, sent at most once under the state guard
//! - done: ticker to caller, sent exactly once after the line is erased
//!
//! [`Spinner::stop`] waits on `done`, so anything the caller writes after it
//! returns lands after the erase sequence.

use crate::stream::Stream;
use parking_lot::Mutex;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Braille glyph cycle drawn one per tick.
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Carriage return followed by erase-to-end-of-line.
pub const ERASE_LINE: &str = "\r\x1b[K";

/// Delay between two frames.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

enum State {
    Idle,
    Running(Ticker),
    Stopped,
}

struct Ticker {
    stop: Sender<()>,
    done: Receiver<()>,
    handle: JoinHandle<()>,
}

/// A start/stop controlled progress indicator.
pub struct Spinner {
    message: Arc<str>,
    interval: Duration,
    stream: Stream,
    state: Mutex<State>,
}

impl Spinner {
    /// Create a spinner drawing on process stderr. Nothing is drawn until
    /// [`Spinner::start`] is called.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_stream(message, Stream::stderr())
    }

    /// Create a spinner drawing on the given stream.
    pub fn with_stream(message: impl Into<String>, stream: Stream) -> Self {
        let message: String = message.into();
        Self {
            message: Arc::from(message),
            interval: DEFAULT_TICK_INTERVAL,
            stream,
            state: Mutex::new(State::Idle),
        }
    }

    /// Override the tick interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_running(&self) -> bool {
        matches!(*self.state.lock(), State::Running(_))
    }

    /// Launch the ticker thread. Does not block.
    ///
    /// Only an idle spinner can be started; calling this on a running or
    /// stopped spinner does nothing.
    pub fn start(&self) {
        let mut state = self.state.lock();
        if !matches!(*state, State::Idle) {
            return;
        }

        let (stop_tx, stop_rx) = mpsc::channel();
        let (done_tx, done_rx) = mpsc::channel();
        let message = Arc::clone(&self.message);
        let stream = self.stream.clone();
        let interval = self.interval;

        let spawned = thread::Builder::new()
            .name("cek-spinner".to_string())
            .spawn(move || {
                tick(&stream, &message, interval, &stop_rx);
                let _ = done_tx.send(());
            });

        match spawned {
            Ok(handle) => {
                debug!(message = %self.message, "Spinner started");
                *state = State::Running(Ticker {
                    stop: stop_tx,
                    done: done_rx,
                    handle,
                });
            }
            Err(e) => {
                // No ticker means nothing will ever be drawn; run without one.
                warn!(error = %e, "Failed to spawn spinner thread");
                *state = State::Stopped;
            }
        }
    }

    /// Stop the ticker and wait until it has erased its line.
    ///
    /// Safe to call any number of times, from any thread, and on a spinner
    /// that was never started (which returns immediately without writing).
    pub fn stop(&self) {
        let mut state = self.state.lock();
        let ticker = match std::mem::replace(&mut *state, State::Stopped) {
            State::Running(ticker) => ticker,
            State::Idle | State::Stopped => return,
        };

        let _ = ticker.stop.send(());
        // A disconnect here means the ticker exited early; either way it is gone.
        let _ = ticker.done.recv();
        if ticker.handle.join().is_err() {
            warn!("Spinner thread panicked");
        }
        debug!(message = %self.message, "Spinner stopped");
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for Spinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spinner")
            .field("message", &self.message)
            .field("interval", &self.interval)
            .field("running", &self.is_running())
            .finish()
    }
}

fn tick(stream: &Stream, message: &str, interval: Duration, stop: &Receiver<()>) {
    let mut frame = 0usize;
    loop {
        match stop.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {
                let glyph = FRAMES[frame % FRAMES.len()];
                draw(stream, &format!("{}{} {}", ERASE_LINE, glyph, message));
                frame = frame.wrapping_add(1);
            }
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                draw(stream, ERASE_LINE);
                return;
            }
        }
    }
}

/// Best-effort write: a broken error stream must not take the program down.
fn draw(stream: &Stream, text: &str) {
    if let Err(e) = stream.print(text) {
        trace!(error = %e, "Spinner write failed");
    }
}
