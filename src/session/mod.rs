//! Single-slot paste session with JSON import/export.
//!
//! A [`Session`] holds at most one [`PastePayload`]. Every paste or
//! successful import replaces it wholesale; a failed import leaves it
//! untouched.
//!
//! - [`payload`] - Payload model and construction from raw clipboard data
//! - [`environment`] - Runtime metadata sampled at export time
//! - [`export`] - Export bundles, filenames, and file output
//! - [`import`] - Validation and parsing of exported files

mod environment;
mod export;
mod import;
mod payload;

use std::path::Path;

use tracing::info;

pub use environment::{language_tag, Environment, UNDETERMINED_LANGUAGE};
pub use export::{export_filename, write_export, write_export_at, ExportBundle, ExportError};
pub use import::{import_file, import_payload, ImportError};
pub use payload::{handle_paste, handle_paste_at, PastePayload, RawClipboard, NO_TYPES};

/// Holds the live paste payload, if any.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<PastePayload>,
}

impl Session {
    /// Create an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the live payload.
    pub fn capture(&mut self, payload: PastePayload) {
        self.store(payload);
    }

    fn store(&mut self, payload: PastePayload) -> &PastePayload {
        info!(
            types = %payload.clipboard_types,
            plain_len = payload.plain_text_length,
            html_len = payload.html_length,
            "captured paste payload"
        );
        self.current.insert(payload)
    }

    /// Drop the live payload.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The live payload, if any.
    pub fn current(&self) -> Option<&PastePayload> {
        self.current.as_ref()
    }

    /// Whether a payload is live.
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Export bundle with a freshly sampled environment; `None` when idle.
    pub fn export_bundle(&self) -> Option<ExportBundle> {
        self.current
            .as_ref()
            .map(|payload| ExportBundle::new(payload.clone(), Environment::sample()))
    }

    /// Export bundle with a given environment; `None` when idle.
    pub fn export_bundle_with(&self, environment: Environment) -> Option<ExportBundle> {
        self.current
            .as_ref()
            .map(|payload| ExportBundle::new(payload.clone(), environment))
    }

    /// Parse `text` and capture it. The session is unchanged on error.
    pub fn import_json(&mut self, text: &str) -> Result<&PastePayload, ImportError> {
        let payload = import_payload(text)?;
        Ok(self.store(payload))
    }

    /// Read, parse and capture an exported file. The session is unchanged on error.
    pub fn import_file(&mut self, path: &Path) -> Result<&PastePayload, ImportError> {
        let payload = import_file(path)?;
        Ok(self.store(payload))
    }
}
