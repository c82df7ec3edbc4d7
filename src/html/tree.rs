//! Indented outline of an HTML document's element tree.

use std::panic::{self, AssertUnwindSafe};

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use tracing::{debug, warn};

use crate::analysis::chars::is_trim_whitespace;

/// Deepest level that is still emitted (roots are depth 0).
pub const MAX_DEPTH: usize = 20;

/// Global cap on emitted lines.
pub const MAX_LINES: usize = 500;

/// Rendered for blank input or a body without elements.
pub const EMPTY_TREE: &str = "(empty)";

/// Rendered when the parser fails.
pub const PARSE_ERROR: &str = "(parse error)";

/// Render the element outline of `html`.
///
/// Roots are the element children of `<body>`. Text and comment nodes are
/// skipped, tag names are lowercased.
///
/// The depth and line caps bound the outline, not the parse. The whole
/// document is still parsed, and html5ever's cost grows faster than linear
/// with nesting depth, so tens of thousands of nested elements take seconds.
///
/// ```
/// use pastedbg::html::render_tree;
///
/// assert_eq!(render_tree("<div><span></span></div>"), "└─ div\n   └─ span");
/// ```
pub fn render_tree(html: &str) -> String {
    if html.trim_matches(is_trim_whitespace).is_empty() {
        return EMPTY_TREE.to_string();
    }

    let parsed = panic::catch_unwind(AssertUnwindSafe(|| {
        parse_document(RcDom::default(), ParseOpts::default()).one(html)
    }));
    outline(parsed)
}

fn outline(parsed: std::thread::Result<RcDom>) -> String {
    let dom = match parsed {
        Ok(dom) => dom,
        Err(_) => {
            warn!("HTML parser panicked while building tree outline");
            return PARSE_ERROR.to_string();
        }
    };

    let roots = match find_body(&dom.document) {
        Some(body) => element_children(&body),
        None => Vec::new(),
    };
    if roots.is_empty() {
        return EMPTY_TREE.to_string();
    }

    let mut builder = OutlineBuilder::default();
    let count = roots.len();
    for (i, root) in roots.iter().enumerate() {
        if builder.is_full() {
            break;
        }
        builder.visit(root, "", i + 1 == count, 0);
    }
    debug!(lines = builder.lines.len(), "rendered HTML outline");

    if builder.lines.is_empty() {
        EMPTY_TREE.to_string()
    } else {
        builder.lines.join("\n")
    }
}

#[derive(Default)]
struct OutlineBuilder {
    lines: Vec<String>,
}

impl OutlineBuilder {
    fn is_full(&self) -> bool {
        self.lines.len() >= MAX_LINES
    }

    fn visit(&mut self, node: &Handle, prefix: &str, is_last: bool, depth: usize) {
        if depth > MAX_DEPTH {
            return;
        }
        let Some(tag) = tag_name(node) else {
            return;
        };

        let connector = if is_last { "└─ " } else { "├─ " };
        self.lines.push(format!("{}{}{}", prefix, connector, tag));

        let child_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
        let children = element_children(node);
        let count = children.len();
        for (i, child) in children.iter().enumerate() {
            if self.is_full() {
                break;
            }
            self.visit(child, &child_prefix, i + 1 == count, depth + 1);
        }
    }
}

/// Lowercased tag name, or `None` for non-element nodes.
fn tag_name(node: &Handle) -> Option<String> {
    match node.data {
        NodeData::Element { ref name, .. } => Some(name.local.to_lowercase()),
        _ => None,
    }
}

fn element_children(node: &Handle) -> Vec<Handle> {
    node.children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
        .collect()
}

fn has_tag(node: &Handle, tag: &str) -> bool {
    matches!(node.data, NodeData::Element { ref name, .. } if &*name.local == tag)
}

/// The document's `<body>` (or `<frameset>`), like `document.body`.
fn find_body(document: &Handle) -> Option<Handle> {
    let html = element_children(document)
        .into_iter()
        .find(|node| has_tag(node, "html"))?;
    element_children(&html)
        .into_iter()
        .find(|node| has_tag(node, "body") || has_tag(node, "frameset"))
}
