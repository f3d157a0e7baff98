//! Rendering contracts per output format.

use cek::view::{ContextSummary, ResultKind, VersionInfo, ViewType};

use crate::integration::test_utils::captured_context;

#[test]
fn inspect_json_is_silent_while_human_confirms() {
    let json = captured_context(ViewType::Json, true);
    json.ctx.viewer().view_for(ResultKind::Inspect).render().unwrap();
    assert_eq!(json.out.len(), 0);

    let human = captured_context(ViewType::Human, true);
    human.ctx.viewer().view_for(ResultKind::Inspect).render().unwrap();
    let text = human.out.to_string_lossy();
    assert_eq!(text.lines().count(), 1);
    assert!(text.ends_with('\n'));
    assert!(!text.trim().is_empty());
}

#[test]
fn context_json_round_trips() {
    let summary = ContextSummary {
        endpoint: "db.internal:5432".to_string(),
        context: "production".to_string(),
        context_flag: "production".to_string(),
        output: "json".to_string(),
        progress: false,
    };
    let captured = captured_context(ViewType::Json, true);
    captured
        .ctx
        .viewer()
        .view_for(ResultKind::Context(&summary))
        .render()
        .unwrap();

    let decoded: ContextSummary = serde_json::from_slice(&captured.out.contents()).unwrap();
    assert_eq!(decoded, summary);
}

#[test]
fn version_json_round_trips() {
    let info = VersionInfo::current();
    let captured = captured_context(ViewType::Json, true);
    captured
        .ctx
        .viewer()
        .view_for(ResultKind::Version(&info))
        .render()
        .unwrap();

    let decoded: VersionInfo = serde_json::from_slice(&captured.out.contents()).unwrap();
    assert_eq!(decoded, info);
    assert_eq!(decoded.name, "cek");
}

#[test]
fn formats_carry_different_information() {
    let summary = ContextSummary {
        endpoint: "localhost:1".to_string(),
        context: String::new(),
        context_flag: String::new(),
        output: "human".to_string(),
        progress: true,
    };

    let human = captured_context(ViewType::Human, true);
    human
        .ctx
        .viewer()
        .view_for(ResultKind::Context(&summary))
        .render()
        .unwrap();
    assert!(human.out.to_string_lossy().contains("(not set)"));

    let json = captured_context(ViewType::Json, true);
    json.ctx
        .viewer()
        .view_for(ResultKind::Context(&summary))
        .render()
        .unwrap();
    assert!(!json.out.to_string_lossy().contains("(not set)"));
}
