//! Printing payload views and running the export/copy/render actions.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use humansize::{format_size, DECIMAL};

use pastedbg::cli::OutputArgs;
use pastedbg::clipboard::Copy;
use pastedbg::session::{write_export, Session};
use pastedbg::theme::Theme;
use pastedbg::PastePayload;

use super::Context;

/// Placeholder for an empty view.
const EMPTY: &str = "(empty)";

/// Print the views enabled in `[capture]`.
pub fn print_payload(payload: &PastePayload, ctx: &Context) {
    let show = &ctx.config.capture;
    let theme = &ctx.theme;

    if show.show_plain {
        print_section(theme, "Plain text", &or_empty(theme, &payload.plain_text));
    }
    if show.show_html {
        print_section(theme, "HTML", &or_empty(theme, &payload.html));
    }
    if show.show_tree {
        print_section(theme, "HTML tree", &payload.html_tree());
    }
    if show.show_analysis {
        let analysis = if payload.analysis.is_empty() {
            theme.secondary_text(EMPTY)
        } else {
            highlight_analysis(&payload.analysis, theme)
        };
        print_section(theme, "Analysis", &analysis);
    }
}

fn print_section(theme: &Theme, title: &str, body: &str) {
    println!("{}", theme.heading_text(&format!("== {} ==", title)));
    println!("{}", body);
    println!();
}

fn or_empty(theme: &Theme, text: &str) -> String {
    if text.is_empty() {
        theme.secondary_text(EMPTY)
    } else {
        text.to_string()
    }
}

/// Color unmatched bullet lines and special-character hits.
pub fn highlight_analysis(report: &str, theme: &Theme) -> String {
    report
        .split('\n')
        .map(|line| {
            if line.starts_with("!!") {
                theme.error_text(line)
            } else if line.starts_with("  pos ") {
                theme.accent_text(line)
            } else if line == "Special/invisible chars:" {
                theme.heading_text(line)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the actions requested on the command line (and by config).
pub fn apply_output(session: &Session, args: &OutputArgs, ctx: &Context) -> Result<()> {
    if args.export {
        let dir = args
            .out_dir
            .clone()
            .unwrap_or_else(|| ctx.config.export.directory.clone());
        export_session(session, &dir, ctx)?;
    }
    if args.copy || ctx.config.export.copy_to_clipboard {
        copy_session(session, ctx)?;
    }
    if let Some(path) = &args.render {
        render_session(session, path, ctx)?;
    }
    Ok(())
}

/// Write the export file. Returns `None` when the session is idle.
pub fn export_session(session: &Session, dir: &Path, ctx: &Context) -> Result<Option<PathBuf>> {
    let Some(bundle) = session.export_bundle() else {
        println!("{}", ctx.theme.secondary_text("Nothing captured yet."));
        return Ok(None);
    };
    let path = write_export(&bundle, dir)?;
    let size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
    println!(
        "{}",
        ctx.theme.success_text(&format!(
            "Exported {} ({})",
            path.display(),
            format_size(size, DECIMAL)
        ))
    );
    Ok(Some(path))
}

/// Copy the export JSON to the clipboard. Returns `false` when the session is idle.
pub fn copy_session(session: &Session, ctx: &Context) -> Result<bool> {
    let Some(bundle) = session.export_bundle() else {
        println!("{}", ctx.theme.secondary_text("Nothing captured yet."));
        return Ok(false);
    };
    let json = bundle.to_json()?;
    let result = Copy::preferring(ctx.preferred_tool).text(&json)?;
    println!("{}", ctx.theme.success_text(&result.message()));
    Ok(true)
}

/// Write the preview document. Returns `false` when the session is idle.
pub fn render_session(session: &Session, path: &Path, ctx: &Context) -> Result<bool> {
    let Some(payload) = session.current() else {
        println!("{}", ctx.theme.secondary_text("Nothing captured yet."));
        return Ok(false);
    };
    fs::write(path, payload.preview())
        .with_context(|| format!("Failed to write preview {}", path.display()))?;
    println!(
        "{}",
        ctx.theme
            .success_text(&format!("Rendered preview to {}", path.display()))
    );
    Ok(true)
}
