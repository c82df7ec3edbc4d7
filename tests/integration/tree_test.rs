//! Integration tests for the HTML outline and wrapper

use pastedbg::html::{render_tree, wrap_html, CONSTRAIN_STYLE, EMPTY_TREE, MAX_LINES};

use crate::helpers::load_fixture;

#[test]
fn word_fragment_outline() {
    let tree = render_tree(&load_fixture("word.html"));
    insta::assert_snapshot!(tree, @r###"
    ├─ p
    │  └─ span
    │     └─ span
    └─ p
       └─ span
          └─ span
    "###);
}

#[test]
fn span_inside_div() {
    assert_eq!(render_tree("<div><span></span></div>"), "└─ div\n   └─ span");
}

#[test]
fn whitespace_only_html_is_empty() {
    assert_eq!(render_tree(" \n "), EMPTY_TREE);
}

#[test]
fn line_budget_spans_sibling_subtrees() {
    // 300 roots with one child each would be 600 lines uncapped.
    let html = "<div><p></p></div>".repeat(300);
    let tree = render_tree(&html);
    assert_eq!(tree.lines().count(), MAX_LINES);
    assert!(tree.lines().last().unwrap().ends_with("└─ p"));
}

#[test]
fn word_document_keeps_its_head_and_gains_style() {
    let html = load_fixture("word.html");
    let wrapped = wrap_html(&html);
    assert!(wrapped.contains(&format!("{}</head>", CONSTRAIN_STYLE)));
    assert_eq!(wrapped.len(), html.len() + CONSTRAIN_STYLE.len());
}
