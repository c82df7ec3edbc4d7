//! Clipboard operation results and tool identifiers.

use crate::session::RawClipboard;

/// Which tool handled a clipboard operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardMethod {
    /// macOS pbcopy/pbpaste plus osascript for HTML
    Pasteboard,
    /// Linux Wayland wl-copy/wl-paste
    WlClipboard,
    /// Linux X11
    Xclip,
    /// Linux X11 alternative (text only)
    Xsel,
}

impl ClipboardMethod {
    /// All methods, in default priority order.
    pub const ALL: [ClipboardMethod; 4] = [
        Self::WlClipboard,
        Self::Xclip,
        Self::Xsel,
        Self::Pasteboard,
    ];

    /// Tool name for display/logging and configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pasteboard => "pasteboard",
            Self::WlClipboard => "wl-clipboard",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
        }
    }

    /// Look up a method by its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.name() == name)
    }
}

/// The result of a clipboard copy operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyResult {
    pub tool: ClipboardMethod,
    pub size_bytes: usize,
}

impl CopyResult {
    /// User-friendly message describing what happened.
    pub fn message(&self) -> String {
        format!(
            "Copied export JSON to clipboard via {} ({} bytes)",
            self.tool.name(),
            self.size_bytes
        )
    }
}

/// Clipboard contents read by a paste, and the tool that read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteResult {
    pub tool: ClipboardMethod,
    pub clipboard: RawClipboard,
}
