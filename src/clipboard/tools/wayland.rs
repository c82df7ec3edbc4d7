//! Linux Wayland wl-clipboard tool.

use super::process::{run, run_with_input, tool_exists};
use crate::clipboard::result::ClipboardMethod;
use crate::clipboard::tool::{ClipboardTool, ToolError};

/// Linux Wayland clipboard tool using wl-copy and wl-paste.
pub struct WlClipboard;

impl WlClipboard {
    /// Create a new WlClipboard tool.
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for WlClipboard {
    fn method(&self) -> ClipboardMethod {
        ClipboardMethod::WlClipboard
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux")
            && std::env::var_os("WAYLAND_DISPLAY").is_some()
            && tool_exists("wl-paste")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), ToolError> {
        run_with_input("wl-copy", &[], text)
    }

    fn try_read_types(&self) -> Result<Vec<String>, ToolError> {
        let output = run("wl-paste", &["--list-types"])?;
        // "Nothing is copied" is reported with a non-zero exit
        if !output.status.success() {
            return Ok(Vec::new());
        }
        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect())
    }

    fn try_read(&self, mime: &str) -> Result<Option<String>, ToolError> {
        let output = run("wl-paste", &["--no-newline", "--type", mime])?;
        if output.status.success() {
            Ok(Some(String::from_utf8_lossy(&output.stdout).into_owned()))
        } else {
            Ok(None)
        }
    }
}

impl Default for WlClipboard {
    fn default() -> Self {
        Self::new()
    }
}
