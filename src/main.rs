//! pastedbg binary entry point.

mod commands;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, EnvFilter};

use pastedbg::cli::{Cli, Commands, ConfigCommands};
use pastedbg::theme::Theme;

use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    let theme = Theme::for_stdout(cli.no_color);

    match cli.command {
        Commands::Capture(args) => commands::capture::handle(&args, &Context::load(theme)?),
        Commands::Import(args) => commands::import::handle(&args, &Context::load(theme)?),
        Commands::Analyze { file, types } => {
            commands::inspect::handle_analyze(file.as_deref(), &types, &theme)
        }
        Commands::Tree { file } => commands::inspect::handle_tree(file.as_deref()),
        Commands::Wrap { file } => commands::inspect::handle_wrap(file.as_deref()),
        Commands::Session => commands::session::handle(&Context::load(theme)?),
        Commands::Config(command) => match command {
            ConfigCommands::Show => commands::config::handle_show(&theme),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init => commands::config::handle_init(&theme),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "pastedbg", &mut io::stdout());
            Ok(())
        }
    }
}

/// Install the tracing subscriber on stderr.
///
/// `RUST_LOG` wins over the `-v` count.
fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose > 1)
        .init();
}
