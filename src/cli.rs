//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can generate the man page from it.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("PASTEDBG_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("PASTEDBG_BUILD_DATE"),
    ")"
);

/// Paste Debugger - inspect what the clipboard really hands to a paste
#[derive(Debug, Parser)]
#[command(name = "pastedbg", version, long_version = LONG_VERSION)]
#[command(about = "Inspect clipboard paste payloads: plain text, HTML, invisible characters")]
#[command(
    long_about = "Inspect clipboard paste payloads.\n\n\
Captures the plain-text and HTML flavors of the clipboard, outlines the HTML \
element tree, flags invisible/direction-control characters and checks which \
lines start with a recognized bullet glyph. Sessions can be exported to and \
imported from JSON."
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Capture the current clipboard contents (or files standing in for them)
    Capture(CaptureArgs),

    /// Load a previously exported session JSON file
    Import(ImportArgs),

    /// Print the special-character and bullet analysis of a text
    Analyze {
        /// Text file to analyze (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Clipboard types to report in the header
        #[arg(long, default_value = "text/plain")]
        types: String,
    },

    /// Print the element outline of an HTML document
    Tree {
        /// HTML file (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Print an HTML document wrapped for isolated rendering
    Wrap {
        /// HTML file (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Interactive session: paste, import, export, and clear from a prompt
    Session,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Args)]
pub struct CaptureArgs {
    /// Use this file as the text/plain flavor instead of the clipboard
    #[arg(long, value_name = "FILE")]
    pub text_file: Option<PathBuf>,

    /// Use this file as the text/html flavor instead of the clipboard
    #[arg(long, value_name = "FILE")]
    pub html_file: Option<PathBuf>,

    /// Offered clipboard types when capturing from files (comma separated)
    #[arg(long, value_delimiter = ',', value_name = "TYPES")]
    pub types: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Exported session file
    pub file: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// What to do with a payload once it is loaded.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Write the session as paste-debug-<time>.json
    #[arg(long)]
    pub export: bool,

    /// Copy the session JSON to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Write the HTML flavor as a standalone preview document
    #[arg(long, value_name = "PATH")]
    pub render: Option<PathBuf>,

    /// Directory for --export (overrides config)
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file if none exists
    Init,
}
