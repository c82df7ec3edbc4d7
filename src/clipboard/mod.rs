//! System clipboard access through external tools.
//!
//! Reads capture the offered types plus the `text/plain` and `text/html`
//! flavors; writes put exported JSON back on the clipboard.

mod copy;
mod error;
pub mod mime;
mod paste;
mod result;
#[cfg(test)]
mod testing;
mod tool;
pub mod tools;

pub use copy::Copy;
pub use error::ClipboardError;
pub use paste::Paste;
pub use result::{ClipboardMethod, CopyResult, PasteResult};
pub use tool::{ClipboardTool, ToolError};

/// Resolve a configured tool preference (`auto` or a tool name).
pub fn parse_preference(name: &str) -> Result<Option<ClipboardMethod>, ClipboardError> {
    if name.is_empty() || name == "auto" {
        return Ok(None);
    }
    ClipboardMethod::from_name(name)
        .map(Some)
        .ok_or_else(|| ClipboardError::UnknownTool(name.to_string()))
}
