//! macOS pasteboard tool.

use super::process::{run_stdout, run_with_input};
use crate::clipboard::mime::{TEXT_HTML, TEXT_PLAIN};
use crate::clipboard::result::ClipboardMethod;
use crate::clipboard::tool::{ClipboardTool, ToolError};

/// macOS pasteboard access.
///
/// Uses `pbcopy`/`pbpaste` for text and `osascript` for the HTML flavor and
/// the list of offered classes, which pbpaste cannot report.
pub struct Pasteboard;

impl Pasteboard {
    /// Create a new Pasteboard tool.
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for Pasteboard {
    fn method(&self) -> ClipboardMethod {
        ClipboardMethod::Pasteboard
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), ToolError> {
        run_with_input("pbcopy", &[], text)
    }

    fn try_read_types(&self) -> Result<Vec<String>, ToolError> {
        let info = run_stdout("osascript", &["-e", "clipboard info"])?;
        Ok(parse_clipboard_info(&info))
    }

    fn try_read(&self, mime: &str) -> Result<Option<String>, ToolError> {
        match mime {
            TEXT_PLAIN => run_stdout("pbpaste", &["-Prefer", "txt"]).map(Some),
            TEXT_HTML => {
                let data = run_stdout("osascript", &["-e", "the clipboard as «class HTML»"])?;
                Ok(decode_applescript_data(&data))
            }
            _ => Err(ToolError::NotSupported),
        }
    }
}

impl Default for Pasteboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Class names from `clipboard info` output (`«class HTML», 120, string, 12`).
fn parse_clipboard_info(info: &str) -> Vec<String> {
    info.trim()
        .split(", ")
        .step_by(2)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decode an AppleScript data literal (`«data HTML3C623E»`) into text.
fn decode_applescript_data(output: &str) -> Option<String> {
    let hex = output
        .trim()
        .strip_prefix("«data ")?
        .strip_suffix('»')?
        .get(4..)?;
    if hex.len() % 2 != 0 {
        return None;
    }
    let bytes = (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok())
        .collect::<Option<Vec<u8>>>()?;
    Some(String::from_utf8_lossy(&bytes).into_owned())
}
