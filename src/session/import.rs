//! JSON import of previously exported sessions.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::payload::PastePayload;

/// Errors that can occur while importing.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid format: missing plainText, html, or analysis")]
    MissingFields,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// On-disk shape of an import. Lengths and the Office flag are derived
/// again from the content, and `environment` is dropped.
///
/// The header fields accept any JSON value; only the content fields must
/// be strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportedPayload {
    timestamp: Option<Value>,
    clipboard_types: Option<Value>,
    plain_text: Option<String>,
    html: Option<String>,
    analysis: Option<String>,
    #[allow(dead_code)]
    plain_text_length: Option<IgnoredAny>,
    #[allow(dead_code)]
    html_length: Option<IgnoredAny>,
    #[allow(dead_code)]
    is_ms_office: Option<IgnoredAny>,
    #[allow(dead_code)]
    environment: Option<IgnoredAny>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl ImportedPayload {
    fn has_content(&self) -> bool {
        [&self.plain_text, &self.html, &self.analysis]
            .iter()
            .any(|field| field.as_deref().is_some_and(|s| !s.is_empty()))
    }
}

/// Parse an exported session.
///
/// Fails unless at least one of `plainText`, `html` or `analysis` is a
/// non-empty string. Missing fields default to empty strings.
pub fn import_payload(text: &str) -> Result<PastePayload, ImportError> {
    let imported: ImportedPayload = serde_json::from_str(text)?;
    if !imported.has_content() {
        return Err(ImportError::MissingFields);
    }
    debug!(extra_fields = imported.extra.len(), "parsed imported payload");

    Ok(PastePayload::assemble(
        header_text(imported.timestamp),
        header_text(imported.clipboard_types),
        imported.plain_text.unwrap_or_default(),
        imported.html.unwrap_or_default(),
        imported.analysis.unwrap_or_default(),
        imported.extra,
    ))
}

/// Text form of a header field. Arrays are joined the way clipboard types
/// are listed; other non-strings keep their JSON form.
fn header_text(value: Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}

/// Read and parse an exported session file.
pub fn import_file(path: &Path) -> Result<PastePayload, ImportError> {
    let text = fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    import_payload(&text)
}
