//! Normalization of clipboard type names.
//!
//! X11 targets and macOS pasteboard classes are mapped onto the MIME types a
//! browser paste event would report, so captures look the same regardless
//! of which tool read them.

pub const TEXT_PLAIN: &str = "text/plain";
pub const TEXT_HTML: &str = "text/html";

/// X11 selection targets that describe the selection rather than its content.
const META_TARGETS: &[&str] = &["TARGETS", "TIMESTAMP", "MULTIPLE", "SAVE_TARGETS", "DELETE"];

/// Map one tool-specific type name onto a MIME type.
///
/// Returns `None` for meta targets that carry no content.
pub fn normalize_type(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || META_TARGETS.contains(&raw) {
        return None;
    }

    let base = raw.split(';').next().unwrap_or(raw).trim();
    let mime = match base {
        "UTF8_STRING" | "STRING" | "TEXT" | "COMPOUND_TEXT" | "text/plain" => TEXT_PLAIN,
        "public.utf8-plain-text" | "«class utf8»" | "«class ut16»" | "string" | "Unicode text" => {
            TEXT_PLAIN
        }
        "text/html" | "public.html" | "«class HTML»" => TEXT_HTML,
        _ => base,
    };
    Some(mime.to_string())
}

/// Normalize a list of type names, dropping duplicates but keeping order.
pub fn normalize_types<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut types: Vec<String> = Vec::with_capacity(raw.len());
    for name in raw {
        if let Some(mime) = normalize_type(name.as_ref()) {
            if !types.contains(&mime) {
                types.push(mime);
            }
        }
    }
    types
}

/// Whether a normalized list offers `mime`.
pub fn offers(types: &[String], mime: &str) -> bool {
    types.iter().any(|t| t == mime)
}
