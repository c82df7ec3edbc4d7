//! Output colors for the CLI.
//!
//! Colors are ratatui [`Color`]s rendered as ANSI escape codes. A disabled
//! theme passes text through untouched (`--no-color`, `NO_COLOR`, or
//! non-terminal stdout).

use ratatui::style::Color;

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Color scheme for CLI output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Section headings
    pub heading: Color,
    /// Dimmed text (placeholders, hints)
    pub text_secondary: Color,
    /// Highlights such as matched bullets and special characters
    pub accent: Color,
    /// Errors and unmatched lines
    pub error: Color,
    /// Confirmations
    pub success: Color,
    /// Whether escape codes are emitted at all
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            heading: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            enabled: true,
        }
    }
}

impl Theme {
    /// Theme without colors.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Theme for stdout, honoring `--no-color`, `NO_COLOR` and TTY detection.
    pub fn for_stdout(no_color: bool) -> Self {
        let enabled =
            !no_color && std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout);
        if enabled {
            Self::default()
        } else {
            Self::plain()
        }
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
        } else {
            text.to_string()
        }
    }

    pub fn heading_text(&self, text: &str) -> String {
        self.paint(self.heading, text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}
