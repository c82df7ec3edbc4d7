//! Subcommand handlers.

pub mod capture;
pub mod config;
pub mod import;
pub mod inspect;
pub mod session;
mod views;

use anyhow::{Context as _, Result};

use pastedbg::clipboard::{self, ClipboardMethod};
use pastedbg::theme::Theme;
use pastedbg::Config;

/// Configuration and output settings shared by the handlers.
pub struct Context {
    pub config: Config,
    pub theme: Theme,
    pub preferred_tool: Option<ClipboardMethod>,
}

impl Context {
    /// Load the user config and resolve the clipboard tool preference.
    pub fn load(theme: Theme) -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        let preferred_tool = clipboard::parse_preference(&config.clipboard.prefer)?;
        Ok(Self {
            config,
            theme,
            preferred_tool,
        })
    }
}
