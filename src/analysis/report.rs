//! Paste analysis report.
//!
//! The report is a plain multi-line string so it can be stored verbatim in
//! exported sessions. [`Analysis`] keeps the structured form it is rendered
//! from.

use std::fmt;

use super::chars::{code_point_label, is_bullet, is_trim_whitespace, special_char_name};

/// Namespace that Microsoft Office writes into its HTML clipboard flavor.
pub const MS_OFFICE_MARKER: &str = "urn:schemas-microsoft-com:office";

/// Whether `html` was produced by Microsoft Office.
pub fn is_ms_office(html: &str) -> bool {
    html.contains(MS_OFFICE_MARKER)
}

/// Length in UTF-16 code units, the unit browsers report for strings.
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// A special/invisible character found in the plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialCharHit {
    /// Zero-based index in code points
    pub position: usize,
    pub ch: char,
    pub name: &'static str,
}

/// Bullet detection result for one non-blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletLine {
    /// Index in the original `\n` split, blank lines included
    pub index: usize,
    pub first_char: Option<char>,
    pub matched: bool,
}

impl BulletLine {
    fn render(&self) -> String {
        let prefix = if self.matched { "  " } else { "!!" };
        let (first, hex) = match self.first_char {
            Some(c) => (c.to_string(), code_point_label(c)),
            None => (String::new(), "?".to_string()),
        };
        format!(
            "{} line {}: firstChar=\"{}\" {} matched={}",
            prefix, self.index, first, hex, self.matched
        )
    }
}

/// Structured analysis of one paste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub clipboard_types: String,
    pub plain_text_length: usize,
    pub html_length: usize,
    pub is_ms_office: bool,
    pub special_chars: Vec<SpecialCharHit>,
    pub lines: Vec<BulletLine>,
}

impl Analysis {
    /// Analyze a paste's plain text and HTML.
    pub fn new(text: &str, html: &str, clipboard_types: &str) -> Self {
        Self {
            clipboard_types: clipboard_types.to_string(),
            plain_text_length: utf16_len(text),
            html_length: utf16_len(html),
            is_ms_office: is_ms_office(html),
            special_chars: scan_special_chars(text),
            lines: scan_bullet_lines(text),
        }
    }

    /// Lines that start with something other than a known bullet.
    pub fn unmatched_lines(&self) -> impl Iterator<Item = &BulletLine> {
        self.lines.iter().filter(|line| !line.matched)
    }

    fn report_lines(&self) -> Vec<String> {
        let mut out = vec![
            format!("Clipboard types: {}", self.clipboard_types),
            format!("Plain text length: {}", self.plain_text_length),
            format!("HTML length: {}", self.html_length),
            format!("MS Office detected: {}", self.is_ms_office),
            String::new(),
        ];

        if !self.special_chars.is_empty() {
            out.push("Special/invisible chars:".to_string());
            for hit in &self.special_chars {
                out.push(format!(
                    "  pos {}: {} {}",
                    hit.position,
                    hit.name,
                    code_point_label(hit.ch)
                ));
            }
            out.push(String::new());
        }

        out.extend(self.lines.iter().map(BulletLine::render));
        out
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report_lines().join("\n"))
    }
}

/// Build the report string for a paste.
pub fn build_analysis(text: &str, html: &str, clipboard_types: &str) -> String {
    Analysis::new(text, html, clipboard_types).to_string()
}

fn scan_special_chars(text: &str) -> Vec<SpecialCharHit> {
    text.chars()
        .enumerate()
        .filter_map(|(position, ch)| {
            special_char_name(ch).map(|name| SpecialCharHit { position, ch, name })
        })
        .collect()
}

fn scan_bullet_lines(text: &str) -> Vec<BulletLine> {
    text.split('\n')
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim_matches(is_trim_whitespace);
            if trimmed.is_empty() {
                return None;
            }
            let first_char = trimmed.chars().next();
            // `o` sits in the bullet table, so "o item" and "only" both match.
            let matched = first_char.is_some_and(is_bullet);
            Some(BulletLine {
                index,
                first_char,
                matched,
            })
        })
        .collect()
}
