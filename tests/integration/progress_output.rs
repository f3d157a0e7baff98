//! run_with_progress keeps the primary stream untouched by the spinner.

use cek::cli::run_with_progress;
use cek::error::CliError;
use cek::spinner::{ERASE_LINE, FRAMES};
use cek::view::{ContextSummary, ResultKind, ViewType};
use std::thread;
use std::time::Duration;

use crate::integration::test_utils::captured_context;

#[derive(Debug, Default, PartialEq)]
struct Outcome {
    items: u32,
}

fn slow_summary() -> Result<ContextSummary, CliError> {
    thread::sleep(Duration::from_millis(40));
    Ok(ContextSummary {
        endpoint: "localhost:9000".to_string(),
        context: "dev".to_string(),
        context_flag: String::new(),
        output: "json".to_string(),
        progress: true,
    })
}

#[test]
fn end_to_end_spinner_then_render() {
    let captured = captured_context(ViewType::Human, false);

    let result = run_with_progress(&captured.ctx, "working", || {
        thread::sleep(Duration::from_millis(50));
        Ok::<_, CliError>(Outcome::default())
    })
    .unwrap();
    assert_eq!(result, Outcome::default());

    let err = captured.err.to_string_lossy();
    assert!(
        err.contains(&format!("{}{} working", ERASE_LINE, FRAMES[0])),
        "expected at least one frame, got {:?}",
        err
    );
    assert!(err.ends_with(ERASE_LINE));
    assert!(captured.out.is_empty(), "spinner must not touch stdout");

    let err_len = captured.err.len();
    captured
        .ctx
        .viewer()
        .view_for(ResultKind::Inspect)
        .render()
        .unwrap();
    assert_eq!(
        captured.out.to_string_lossy(),
        "Success! The infrastructure was inspected successfully\n"
    );
    assert_eq!(captured.err.len(), err_len);
}

#[test]
fn primary_output_identical_with_and_without_progress() {
    let mut outputs = Vec::new();
    for disable_progress in [false, true] {
        let captured = captured_context(ViewType::Json, disable_progress);
        let summary = run_with_progress(&captured.ctx, "loading", slow_summary).unwrap();
        captured
            .ctx
            .viewer()
            .view_for(ResultKind::Context(&summary))
            .render()
            .unwrap();
        assert_eq!(captured.err.is_empty(), disable_progress);
        outputs.push(captured.out.contents());
    }
    assert_eq!(outputs[0], outputs[1]);
    assert!(!outputs[0].is_empty());
}

#[test]
fn operation_error_is_returned_unchanged() {
    let captured = captured_context(ViewType::Human, false);
    let err = run_with_progress(&captured.ctx, "failing", || {
        Err::<(), _>(CliError::Operation("backend unavailable".to_string()))
    })
    .unwrap_err();
    assert_eq!(err.to_string(), "backend unavailable");
    assert!(captured.err.to_string_lossy().ends_with(ERASE_LINE));
    assert!(captured.out.is_empty());
}
