//! JSON export of a captured session.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::environment::Environment;
use super::payload::PastePayload;

/// Errors that can occur while exporting.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to serialize export: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A payload plus the environment it was exported from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportBundle {
    #[serde(flatten)]
    pub payload: PastePayload,
    pub environment: Environment,
}

impl ExportBundle {
    pub fn new(payload: PastePayload, environment: Environment) -> Self {
        Self {
            payload,
            environment,
        }
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `paste-debug-<UTC time to the second, colons as hyphens>.json`
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("paste-debug-{}.json", now.format("%Y-%m-%dT%H-%M-%S"))
}

/// Write `bundle` into `dir` under the conventional export filename.
pub fn write_export(bundle: &ExportBundle, dir: &Path) -> Result<PathBuf, ExportError> {
    write_export_at(bundle, dir, Utc::now())
}

/// Like [`write_export`] with an explicit export time.
pub fn write_export_at(
    bundle: &ExportBundle,
    dir: &Path,
    now: DateTime<Utc>,
) -> Result<PathBuf, ExportError> {
    let json = bundle.to_json()?;
    let path = dir.join(export_filename(now));

    fs::write(&path, json).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "exported paste session");

    Ok(path)
}
