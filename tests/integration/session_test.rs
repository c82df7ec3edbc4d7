//! Integration tests for capture, import and export through the library API

use pastedbg::session::{
    export_filename, handle_paste, import_payload, Environment, ImportError, RawClipboard,
    Session,
};
use pastedbg::{build_analysis, Analysis};
use tempfile::TempDir;

use crate::helpers::{fixture, load_fixture};

fn test_environment() -> Environment {
    Environment {
        user_agent: "pastedbg/test".to_string(),
        platform: "test-os".to_string(),
        language: "en-US".to_string(),
        screen_width: Some(80),
        screen_height: Some(24),
    }
}

// ============================================================================
// Analysis
// ============================================================================

#[test]
fn reported_length_matches_input_length() {
    for text in ["", "abc", "a\u{200B}b", "• x\n\u{FEFF}o y", "emoji 😀"] {
        let analysis = Analysis::new(text, "", "text/plain");
        assert_eq!(analysis.plain_text_length, text.encode_utf16().count());
        let report = build_analysis(text, "", "text/plain");
        assert!(report.contains(&format!(
            "Plain text length: {}",
            text.encode_utf16().count()
        )));
    }
}

#[test]
fn bullet_example_from_fixture() {
    let report = build_analysis(&load_fixture("bullets.txt"), "", "text/plain");
    assert!(report.contains("   line 0: firstChar=\"•\" U+2022 matched=true"));
    assert!(report.contains("   line 1: firstChar=\"o\" U+006F matched=true"));
    assert!(report.contains("!! line 2: firstChar=\"b\" U+0062 matched=false"));
    assert!(!report.contains("line 3"));
}

#[test]
fn blank_lines_do_not_shift_indices() {
    let analysis = Analysis::new("\n  \n▪ a\n\n§ b", "", "");
    let indices: Vec<usize> = analysis.lines.iter().map(|l| l.index).collect();
    assert_eq!(indices, vec![2, 4]);
    assert!(analysis.lines.iter().all(|l| l.matched));
}

// ============================================================================
// Session round trips
// ============================================================================

#[test]
fn export_and_reimport_preserves_content() {
    let mut session = Session::new();
    session.capture(handle_paste(RawClipboard {
        types: vec!["text/plain".to_string(), "text/html".to_string()],
        plain_text: Some(load_fixture("bullets.txt")),
        html: Some(load_fixture("word.html")),
    }));
    let before = session.current().unwrap().clone();
    assert!(before.is_ms_office);

    let json = session
        .export_bundle_with(test_environment())
        .unwrap()
        .to_json()
        .unwrap();
    let after = import_payload(&json).unwrap();

    assert_eq!(after.plain_text, before.plain_text);
    assert_eq!(after.html, before.html);
    assert_eq!(after.analysis, before.analysis);
    assert_eq!(after.plain_text_length, before.plain_text_length);
    assert!(after.extra().get("environment").is_none());
}

#[test]
fn fixture_import_keeps_unknown_fields_on_reexport() {
    let mut session = Session::new();
    session.import_file(&fixture("export.json")).unwrap();

    let bundle = session.export_bundle_with(test_environment()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&bundle.to_json().unwrap()).unwrap();

    assert_eq!(value["source"], "word-2019");
    assert_eq!(value["timestamp"], "2026-10-18T09:15:02.123Z");
    assert_eq!(value["plainTextLength"], 17);
    assert_eq!(value["environment"]["userAgent"], "pastedbg/test");
}

#[test]
fn empty_fields_fixture_is_rejected() {
    let err = import_payload(&load_fixture("empty_fields.json")).unwrap_err();
    assert!(matches!(err, ImportError::MissingFields));
}

#[test]
fn export_writes_conventional_filename() {
    let dir = TempDir::new().unwrap();
    let mut session = Session::new();
    session.import_file(&fixture("export.json")).unwrap();

    let bundle = session.export_bundle().unwrap();
    let path = pastedbg::session::write_export(&bundle, dir.path()).unwrap();
    let name = path.file_name().unwrap().to_string_lossy().to_string();

    assert!(name.starts_with("paste-debug-"));
    assert!(name.ends_with(".json"));
    assert!(!name.contains(':'));
    assert_eq!(name.len(), export_filename(chrono::Utc::now()).len());
}
