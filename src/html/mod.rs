//! HTML payload helpers: element outline and sandbox wrapping.

mod tree;
mod wrap;

pub use tree::{render_tree, EMPTY_TREE, MAX_DEPTH, MAX_LINES, PARSE_ERROR};
pub use wrap::{preview_document, wrap_html, CONSTRAIN_STYLE, EMPTY_PREVIEW};
