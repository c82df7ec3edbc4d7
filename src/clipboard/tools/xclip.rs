//! Linux xclip clipboard tool.

use super::process::{run, run_stdout, run_with_input, tool_exists};
use crate::clipboard::mime::{TEXT_HTML, TEXT_PLAIN};
use crate::clipboard::result::ClipboardMethod;
use crate::clipboard::tool::{ClipboardTool, ToolError};

/// Linux X11 clipboard tool using xclip.
///
/// Reads any target the selection owner offers, so both the plain-text and
/// HTML flavors are available.
pub struct Xclip;

impl Xclip {
    /// Create a new Xclip tool.
    pub fn new() -> Self {
        Self
    }

    /// X11 target to request for a MIME type.
    fn target(mime: &str) -> &str {
        if mime == TEXT_PLAIN {
            "UTF8_STRING"
        } else {
            mime
        }
    }
}

impl ClipboardTool for Xclip {
    fn method(&self) -> ClipboardMethod {
        ClipboardMethod::Xclip
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && tool_exists("xclip")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), ToolError> {
        run_with_input("xclip", &["-selection", "clipboard"], text)
    }

    fn try_read_types(&self) -> Result<Vec<String>, ToolError> {
        let output = run("xclip", &["-selection", "clipboard", "-o", "-t", "TARGETS"])?;
        // xclip exits non-zero when nothing owns the clipboard
        if !output.status.success() {
            return Ok(Vec::new());
        }
        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect())
    }

    fn try_read(&self, mime: &str) -> Result<Option<String>, ToolError> {
        if mime != TEXT_PLAIN && mime != TEXT_HTML {
            return Err(ToolError::NotSupported);
        }
        let target = Self::target(mime);
        run_stdout("xclip", &["-selection", "clipboard", "-o", "-t", target]).map(Some)
    }
}

impl Default for Xclip {
    fn default() -> Self {
        Self::new()
    }
}
