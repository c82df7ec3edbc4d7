//! Paste orchestrator for clipboard reads.

use super::error::ClipboardError;
use super::mime::{normalize_types, offers, TEXT_HTML, TEXT_PLAIN};
use super::result::{ClipboardMethod, PasteResult};
use super::tool::{ClipboardTool, ToolError};
use super::tools::tools_preferring;
use crate::session::RawClipboard;
use tracing::{debug, warn};

/// Orchestrates clipboard reads using available tools.
///
/// The first available tool that reads successfully wins; failures fall
/// through to the next tool.
pub struct Paste {
    tools: Vec<Box<dyn ClipboardTool>>,
}

impl Paste {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self::preferring(None)
    }

    /// Create with platform tools, trying `preferred` first.
    pub fn preferring(preferred: Option<ClipboardMethod>) -> Self {
        Self {
            tools: tools_preferring(preferred),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn ClipboardTool>>) -> Self {
        Self { tools }
    }

    /// Read the clipboard's offered types plus its text and HTML flavors.
    pub fn read(&self) -> Result<PasteResult, ClipboardError> {
        let mut last_failure = None;

        for tool in &self.tools {
            if !tool.is_available() {
                debug!(tool = tool.name(), "clipboard tool unavailable");
                continue;
            }
            match read_with(tool.as_ref()) {
                Ok(clipboard) => {
                    return Ok(PasteResult {
                        tool: tool.method(),
                        clipboard,
                    });
                }
                Err(ToolError::NotSupported) | Err(ToolError::NotFound) => continue,
                Err(ToolError::Failed(message)) => {
                    warn!(tool = tool.name(), %message, "clipboard read failed");
                    last_failure = Some(ClipboardError::ToolFailed {
                        tool: tool.name(),
                        message,
                    });
                }
            }
        }

        Err(last_failure.unwrap_or(ClipboardError::NoToolAvailable))
    }
}

impl Default for Paste {
    fn default() -> Self {
        Self::new()
    }
}

fn read_with(tool: &dyn ClipboardTool) -> Result<RawClipboard, ToolError> {
    let types = normalize_types(&tool.try_read_types()?);
    debug!(tool = tool.name(), ?types, "clipboard offers");

    let plain_text = if offers(&types, TEXT_PLAIN) {
        tool.try_read(TEXT_PLAIN)?
    } else {
        None
    };
    let html = if offers(&types, TEXT_HTML) {
        match tool.try_read(TEXT_HTML) {
            Ok(html) => html,
            Err(ToolError::NotSupported) => None,
            Err(e) => return Err(e),
        }
    } else {
        None
    };

    Ok(RawClipboard {
        types,
        plain_text,
        html,
    })
}
