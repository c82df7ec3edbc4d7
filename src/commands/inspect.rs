//! Standalone analyze/tree/wrap handlers over files or stdin

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context as _, Result};

use pastedbg::analysis::build_analysis;
use pastedbg::html::{render_tree, wrap_html};
use pastedbg::theme::Theme;

use super::views::highlight_analysis;

/// Print the analysis report of a text.
pub fn handle_analyze(file: Option<&Path>, types: &str, theme: &Theme) -> Result<()> {
    let text = read_input(file)?;
    println!("{}", highlight_analysis(&build_analysis(&text, "", types), theme));
    Ok(())
}

/// Print the element outline of an HTML document.
pub fn handle_tree(file: Option<&Path>) -> Result<()> {
    let html = read_input(file)?;
    println!("{}", render_tree(&html));
    Ok(())
}

/// Print the sandbox-wrapped document.
pub fn handle_wrap(file: Option<&Path>) -> Result<()> {
    let html = read_input(file)?;
    println!("{}", wrap_html(&html));
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}
