//! Property-based tests for spinner stop guarantees

use cek::spinner::{Spinner, ERASE_LINE};
use cek::stream::{MemoryBuffer, Stream};
use proptest::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

const INTERVAL: Duration = Duration::from_millis(5);
const MARGIN: Duration = Duration::from_millis(500);

fn runner() -> proptest::test_runner::TestRunner {
    proptest::test_runner::TestRunner::new(ProptestConfig {
        cases: 24,
        ..ProptestConfig::default()
    })
}

/// Any message, any number of sequential stops: each returns within bounds
/// and the stream ends with the erase sequence.
#[test]
fn test_repeated_stop_is_bounded() {
    runner()
        .run(&("\\PC{0,40}", 1usize..6), |(message, stops)| {
            let buffer = MemoryBuffer::new();
            let spinner =
                Spinner::with_stream(message, Stream::new(buffer.clone())).with_interval(INTERVAL);
            spinner.start();
            thread::sleep(Duration::from_millis(12));

            for _ in 0..stops {
                let started = Instant::now();
                spinner.stop();
                prop_assert!(started.elapsed() < INTERVAL + MARGIN);
            }
            prop_assert!(buffer.to_string_lossy().ends_with(ERASE_LINE));
            Ok(())
        })
        .unwrap();
}

/// Concurrent stops from several threads all return.
#[test]
fn test_concurrent_stop_is_bounded() {
    runner()
        .run(&(2usize..8), |threads| {
            let buffer = MemoryBuffer::new();
            let spinner = Arc::new(
                Spinner::with_stream("concurrent", Stream::new(buffer.clone()))
                    .with_interval(INTERVAL),
            );
            spinner.start();

            let started = Instant::now();
            let handles: Vec<_> = (0..threads)
                .map(|_| {
                    let spinner = Arc::clone(&spinner);
                    thread::spawn(move || spinner.stop())
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
            prop_assert!(started.elapsed() < INTERVAL + MARGIN);
            prop_assert!(buffer.to_string_lossy().ends_with(ERASE_LINE));
            Ok(())
        })
        .unwrap();
}

/// Stopping a spinner that never started neither blocks nor writes.
#[test]
fn test_stop_without_start() {
    runner()
        .run(&("\\PC{0,40}", 1usize..6), |(message, stops)| {
            let buffer = MemoryBuffer::new();
            let spinner = Spinner::with_stream(message, Stream::new(buffer.clone()));
            let started = Instant::now();
            for _ in 0..stops {
                spinner.stop();
            }
            prop_assert!(started.elapsed() < MARGIN);
            prop_assert!(buffer.is_empty());
            Ok(())
        })
        .unwrap();
}
