//! Standalone document wrapper for rendering pasted HTML in isolation.

use crate::analysis::chars::is_trim_whitespace;

/// Keeps rendered content inside the frame width.
pub const CONSTRAIN_STYLE: &str =
    "<style>body{max-width:100%;overflow-x:auto;box-sizing:border-box}*{box-sizing:inherit}</style>";

/// Preview document shown when there is no HTML to render.
pub const EMPTY_PREVIEW: &str = r#"<p style="color:#999">(empty)</p>"#;

/// Wrap an HTML fragment (or full document) into a renderable document.
///
/// Full documents are returned with the constraining style injected before
/// `</head>`, or prepended when there is no head close tag. Fragments get a
/// minimal UTF-8 document shell.
pub fn wrap_html(html: &str) -> String {
    let trimmed = html.trim_matches(is_trim_whitespace);
    if is_full_document(trimmed) {
        if trimmed.contains("</head>") {
            html.replacen("</head>", &format!("{}</head>", CONSTRAIN_STYLE), 1)
        } else {
            format!("{}{}", CONSTRAIN_STYLE, html)
        }
    } else {
        format!(
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\">{}</head><body>{}</body></html>",
            CONSTRAIN_STYLE, html
        )
    }
}

/// Document to hand to a preview surface: the wrapped HTML, or a
/// placeholder when `html` is empty.
pub fn preview_document(html: &str) -> String {
    if html.is_empty() {
        EMPTY_PREVIEW.to_string()
    } else {
        wrap_html(html)
    }
}

fn is_full_document(trimmed: &str) -> bool {
    starts_with_ignore_ascii_case(trimmed, "<!doctype") || starts_with_ignore_ascii_case(trimmed, "<html")
}

fn starts_with_ignore_ascii_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}
