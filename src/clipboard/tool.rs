//! ClipboardTool trait and related error types.

use super::result::ClipboardMethod;

/// A tool that can read from and/or write to the system clipboard.
///
/// Each implementation wraps a specific OS tool (xclip, wl-paste, ...)
/// and knows how to invoke it correctly.
pub trait ClipboardTool: Send + Sync {
    /// The method identifier for this tool.
    fn method(&self) -> ClipboardMethod;

    /// Human-readable name for error messages.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Check if this tool is available on the system.
    ///
    /// Should be fast - typically checks if the binary exists.
    fn is_available(&self) -> bool;

    /// Try to copy text content to the clipboard.
    fn try_copy_text(&self, text: &str) -> Result<(), ToolError>;

    /// List the types the clipboard currently offers, as the tool names them.
    ///
    /// An empty clipboard yields an empty list, not an error.
    fn try_read_types(&self) -> Result<Vec<String>, ToolError>;

    /// Read one representation (`text/plain` or `text/html`).
    ///
    /// `Ok(None)` when the clipboard does not hold that representation.
    fn try_read(&self, mime: &str) -> Result<Option<String>, ToolError>;
}

/// Error from a specific tool operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// Tool doesn't support this operation
    NotSupported,
    /// Tool execution failed
    Failed(String),
    /// Tool not found on system
    NotFound,
}
