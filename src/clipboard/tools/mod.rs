//! Platform-specific clipboard tools.

mod macos;
mod process;
mod wayland;
mod xclip;
mod xsel;

pub use macos::Pasteboard;
pub use wayland::WlClipboard;
pub use xclip::Xclip;
pub use xsel::Xsel;

use super::result::ClipboardMethod;
use super::tool::ClipboardTool;

/// Get the platform-appropriate tools in priority order.
pub fn platform_tools() -> Vec<Box<dyn ClipboardTool>> {
    #[cfg(target_os = "macos")]
    {
        vec![Box::new(Pasteboard::new())]
    }

    #[cfg(target_os = "linux")]
    {
        vec![
            Box::new(WlClipboard::new()),
            Box::new(Xclip::new()),
            Box::new(Xsel::new()),
        ]
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        vec![]
    }
}

/// Platform tools with `preferred` (if any) moved to the front.
pub fn tools_preferring(preferred: Option<ClipboardMethod>) -> Vec<Box<dyn ClipboardTool>> {
    let mut tools = platform_tools();
    if let Some(method) = preferred {
        if let Some(pos) = tools.iter().position(|tool| tool.method() == method) {
            let tool = tools.remove(pos);
            tools.insert(0, tool);
        }
    }
    tools
}
