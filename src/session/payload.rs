//! Captured paste payloads.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::analysis::{build_analysis, is_ms_office, utf16_len};
use crate::html::{preview_document, render_tree};

/// Label used when the clipboard offered no MIME types.
pub const NO_TYPES: &str = "(none)";

/// Raw clipboard contents as delivered by a paste.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawClipboard {
    /// MIME types offered by the clipboard, in offer order
    pub types: Vec<String>,
    /// `text/plain` representation
    pub plain_text: Option<String>,
    /// `text/html` representation
    pub html: Option<String>,
}

impl RawClipboard {
    /// Offered types joined with `", "`, or `(none)`.
    pub fn types_label(&self) -> String {
        if self.types.is_empty() {
            NO_TYPES.to_string()
        } else {
            self.types.join(", ")
        }
    }
}

/// One captured (or imported) paste with its precomputed analysis.
///
/// Serialized with camelCase keys; lengths are UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PastePayload {
    pub timestamp: String,
    pub clipboard_types: String,
    pub plain_text: String,
    pub plain_text_length: usize,
    pub html: String,
    pub html_length: usize,
    pub is_ms_office: bool,
    pub analysis: String,
    /// Fields carried over from an imported file that we don't interpret
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}

impl PastePayload {
    pub(crate) fn assemble(
        timestamp: String,
        clipboard_types: String,
        plain_text: String,
        html: String,
        analysis: String,
        extra: Map<String, Value>,
    ) -> Self {
        Self {
            timestamp,
            clipboard_types,
            plain_text_length: utf16_len(&plain_text),
            html_length: utf16_len(&html),
            is_ms_office: is_ms_office(&html),
            plain_text,
            html,
            analysis,
            extra,
        }
    }

    /// Unrecognized fields preserved from an import.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Element outline of the HTML representation.
    pub fn html_tree(&self) -> String {
        render_tree(&self.html)
    }

    /// Standalone document for previewing the HTML representation.
    pub fn preview(&self) -> String {
        preview_document(&self.html)
    }
}

/// Build a payload from a paste, stamped with the current time.
pub fn handle_paste(raw: RawClipboard) -> PastePayload {
    handle_paste_at(raw, Utc::now())
}

/// Build a payload from a paste captured at `at`.
pub fn handle_paste_at(raw: RawClipboard, at: DateTime<Utc>) -> PastePayload {
    let clipboard_types = raw.types_label();
    let plain_text = raw.plain_text.unwrap_or_default();
    let html = raw.html.unwrap_or_default();
    let analysis = build_analysis(&plain_text, &html, &clipboard_types);

    PastePayload::assemble(
        at.to_rfc3339_opts(SecondsFormat::Millis, true),
        clipboard_types,
        plain_text,
        html,
        analysis,
        Map::new(),
    )
}
