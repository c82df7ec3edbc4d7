//! Copy orchestrator for clipboard writes.

use super::error::ClipboardError;
use super::result::{ClipboardMethod, CopyResult};
use super::tool::{ClipboardTool, ToolError};
use super::tools::tools_preferring;
use tracing::warn;

/// Orchestrates clipboard copy operations using available tools.
///
/// Tries tools in priority order until one accepts the text.
pub struct Copy {
    tools: Vec<Box<dyn ClipboardTool>>,
}

impl Copy {
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

    /// Copy text to the clipboard.
    pub fn text(&self, text: &str) -> Result<CopyResult, ClipboardError> {
        let mut last_failure = None;

        for tool in &self.tools {
            if !tool.is_available() {
                continue;
            }
            match tool.try_copy_text(text) {
                Ok(()) => {
                    return Ok(CopyResult {
                        tool: tool.method(),
                        size_bytes: text.len(),
                    });
                }
                Err(ToolError::NotSupported) | Err(ToolError::NotFound) => continue,
                Err(ToolError::Failed(message)) => {
                    warn!(tool = tool.name(), %message, "clipboard copy failed");
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

impl Default for Copy {
    fn default() -> Self {
        Self::new()
    }
}
