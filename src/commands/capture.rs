//! Capture subcommand handler

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use tracing::info;

use pastedbg::cli::CaptureArgs;
use pastedbg::clipboard::mime::{TEXT_HTML, TEXT_PLAIN};
use pastedbg::clipboard::Paste;
use pastedbg::session::{handle_paste, RawClipboard, Session};

use super::views::{apply_output, print_payload};
use super::Context;

/// Capture from the clipboard, or from files when `--text-file`/`--html-file` are given.
pub fn handle(args: &CaptureArgs, ctx: &Context) -> Result<()> {
    let raw = if args.text_file.is_some() || args.html_file.is_some() {
        raw_from_files(args)?
    } else {
        let result = Paste::preferring(ctx.preferred_tool).read()?;
        info!(tool = result.tool.name(), "read clipboard");
        result.clipboard
    };

    let mut session = Session::new();
    session.capture(handle_paste(raw));
    if let Some(payload) = session.current() {
        print_payload(payload, ctx);
    }
    apply_output(&session, &args.output, ctx)
}

/// Build clipboard contents from files standing in for the two flavors.
fn raw_from_files(args: &CaptureArgs) -> Result<RawClipboard> {
    let plain_text = args.text_file.as_deref().map(read_file).transpose()?;
    let html = args.html_file.as_deref().map(read_file).transpose()?;

    let types = if args.types.is_empty() {
        let mut types = Vec::new();
        if plain_text.is_some() {
            types.push(TEXT_PLAIN.to_string());
        }
        if html.is_some() {
            types.push(TEXT_HTML.to_string());
        }
        types
    } else {
        args.types.clone()
    };

    Ok(RawClipboard {
        types,
        plain_text,
        html,
    })
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
