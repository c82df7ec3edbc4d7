//! Paste Debugger library.
//!
//! Inspects clipboard paste payloads: the plain-text analysis report, the
//! HTML element outline, sandbox wrapping for previews, and a single-slot
//! session with JSON import/export.

pub mod analysis;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod html;
pub mod session;
pub mod theme;

pub use analysis::{build_analysis, Analysis};
pub use clipboard::{ClipboardError, Copy, Paste};
pub use config::Config;
pub use html::{render_tree, wrap_html};
pub use session::{
    handle_paste, import_payload, ExportBundle, ImportError, PastePayload, RawClipboard, Session,
};
