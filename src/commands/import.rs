//! Import subcommand handler

use anyhow::{anyhow, Result};

use pastedbg::cli::ImportArgs;
use pastedbg::session::{ImportError, Session};

use super::views::{apply_output, print_payload};
use super::Context;

/// Load an exported session file and show it.
pub fn handle(args: &ImportArgs, ctx: &Context) -> Result<()> {
    let mut session = Session::new();
    let payload = session.import_file(&args.file).map_err(describe)?;
    print_payload(payload, ctx);
    apply_output(&session, &args.output, ctx)
}

/// User-facing wording for import failures.
pub fn describe(err: ImportError) -> anyhow::Error {
    match err {
        ImportError::Read { .. } => anyhow!(err),
        other => anyhow!("Invalid JSON or format: {}", other),
    }
}
