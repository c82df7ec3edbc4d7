//! Integration tests driving the pastedbg binary

use std::fs;
use std::io::Write;
use std::process::{Output, Stdio};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixture, pastedbg};

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn run_with_stdin(home: &TempDir, args: &[&str], input: &str) -> Output {
    let mut child = pastedbg(home)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn export_files(dir: &std::path::Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with("paste-debug-") && name.ends_with(".json"))
        .collect()
}

#[test]
fn version_flag_prints_name() {
    let home = TempDir::new().unwrap();
    Command::from_std(pastedbg(&home))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("pastedbg "));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    Command::from_std(pastedbg(&home))
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn analyze_reports_bullet_lines() {
    let home = TempDir::new().unwrap();
    let output = pastedbg(&home)
        .arg("analyze")
        .arg(fixture("bullets.txt"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Clipboard types: text/plain"));
    assert!(out.contains("Plain text length: 27"));
    assert!(out.contains("   line 0: firstChar=\"•\" U+2022 matched=true"));
    assert!(out.contains("   line 1: firstChar=\"o\" U+006F matched=true"));
    assert!(out.contains("!! line 2: firstChar=\"b\" U+0062 matched=false"));
}

#[test]
fn tree_prints_word_outline() {
    let home = TempDir::new().unwrap();
    let output = pastedbg(&home)
        .arg("tree")
        .arg(fixture("word.html"))
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("├─ p\n│  └─ span\n"));
}

#[test]
fn wrap_reads_stdin() {
    let home = TempDir::new().unwrap();
    let output = run_with_stdin(&home, &["wrap"], "<p>hi</p>");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("<!DOCTYPE html>"));
    assert!(out.contains("<body><p>hi</p></body>"));
}

#[test]
fn capture_from_files_detects_office_html() {
    let home = TempDir::new().unwrap();
    let output = pastedbg(&home)
        .arg("capture")
        .arg("--text-file")
        .arg(fixture("bullets.txt"))
        .arg("--html-file")
        .arg(fixture("word.html"))
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("== Plain text =="));
    assert!(out.contains("== HTML tree =="));
    assert!(out.contains("Clipboard types: text/plain, text/html"));
    assert!(out.contains("MS Office detected: true"));
}

#[test]
fn import_exports_and_renders() {
    let home = TempDir::new().unwrap();
    let out_dir = home.path().join("out");
    fs::create_dir(&out_dir).unwrap();
    let preview = home.path().join("preview.html");

    let output = pastedbg(&home)
        .arg("import")
        .arg(fixture("export.json"))
        .arg("--export")
        .arg("--out-dir")
        .arg(&out_dir)
        .arg("--render")
        .arg(&preview)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Exported "));

    let files = export_files(&out_dir);
    assert_eq!(files.len(), 1);
    let json = fs::read_to_string(out_dir.join(&files[0])).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["source"], "word-2019");
    assert_eq!(value["html"], "<ul><li>first</li><li>second</li></ul>");
    assert!(value["environment"]["userAgent"]
        .as_str()
        .unwrap()
        .starts_with("pastedbg/"));

    let rendered = fs::read_to_string(&preview).unwrap();
    assert!(rendered.contains("<ul><li>first</li>"));
}

#[test]
fn import_rejects_empty_fields() {
    let home = TempDir::new().unwrap();
    let output = pastedbg(&home)
        .arg("import")
        .arg(fixture("empty_fields.json"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output)
        .contains("Invalid JSON or format: Invalid format: missing plainText, html, or analysis"));
}

#[test]
fn import_of_missing_file_fails() {
    let home = TempDir::new().unwrap();
    let output = pastedbg(&home)
        .arg("import")
        .arg(home.path().join("nope.json"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to read"));
}

#[test]
fn session_commands_from_stdin() {
    let home = TempDir::new().unwrap();
    let dir = home.path().display().to_string();
    let script = format!(
        "export {dir}\nimport {fixture}\nexport {dir}\nclear\nexport {dir}\nquit\n",
        dir = dir,
        fixture = fixture("export.json").display()
    );

    let output = run_with_stdin(&home, &["session"], &script);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert_eq!(out.matches("Nothing captured yet.").count(), 2);
    assert!(out.contains("Cleared."));
    assert_eq!(export_files(home.path()).len(), 1);
}

#[test]
fn session_reports_unknown_commands_and_continues() {
    let home = TempDir::new().unwrap();
    let output = run_with_stdin(&home, &["session"], "frobnicate\nshow\n");

    assert!(output.status.success());
    assert!(stderr(&output).contains("Unknown command 'frobnicate'"));
    assert!(stdout(&output).contains("Nothing captured yet."));
}

#[test]
fn config_init_then_path() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("config.toml");

    let first = pastedbg(&home).args(["config", "init"]).output().unwrap();
    assert!(first.status.success());
    assert!(stdout(&first).contains("Created"));
    assert!(config.exists());

    let second = pastedbg(&home).args(["config", "init"]).output().unwrap();
    assert!(stdout(&second).contains("Config already exists"));

    let path = pastedbg(&home).args(["config", "path"]).output().unwrap();
    assert_eq!(stdout(&path).trim(), config.display().to_string());
}
