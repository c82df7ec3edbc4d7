//! Linux xsel clipboard tool.

use super::process::{run, run_with_input, tool_exists};
use crate::clipboard::mime::TEXT_PLAIN;
use crate::clipboard::result::ClipboardMethod;
use crate::clipboard::tool::{ClipboardTool, ToolError};

/// Linux X11 clipboard tool using xsel.
///
/// xsel only speaks plain text; HTML reads are not supported.
pub struct Xsel;

impl Xsel {
    /// Create a new Xsel tool.
    pub fn new() -> Self {
        Self
    }

    fn read_text(&self) -> Result<String, ToolError> {
        let output = run("xsel", &["--clipboard", "--output"])?;
        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(ToolError::Failed("xsel failed".to_string()))
        }
    }
}

impl ClipboardTool for Xsel {
    fn method(&self) -> ClipboardMethod {
        ClipboardMethod::Xsel
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && tool_exists("xsel")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), ToolError> {
        run_with_input("xsel", &["--clipboard", "--input"], text)
    }

    fn try_read_types(&self) -> Result<Vec<String>, ToolError> {
        if self.read_text()?.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(vec![TEXT_PLAIN.to_string()])
        }
    }

    fn try_read(&self, mime: &str) -> Result<Option<String>, ToolError> {
        if mime != TEXT_PLAIN {
            return Err(ToolError::NotSupported);
        }
        self.read_text().map(Some)
    }
}

impl Default for Xsel {
    fn default() -> Self {
        Self::new()
    }
}
