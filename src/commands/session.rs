//! Interactive session handler
//!
//! Reads one command per line from stdin and applies it to a single
//! [`Session`], mirroring the paste/import/export/clear buttons of a
//! paste-inspection page.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Result};

use pastedbg::clipboard::Paste;
use pastedbg::session::{handle_paste, Session};

use super::import::describe;
use super::views::{copy_session, export_session, print_payload, render_session};
use super::Context;

const HELP: &str = "\
Commands:
  paste            capture the current clipboard
  import <file>    load an exported session
  export [dir]     write paste-debug-<time>.json
  copy             copy the session JSON to the clipboard
  render <file>    write the HTML preview document
  show             print the current capture again
  clear            drop the current capture
  help             show this help
  quit             leave the session";

enum Flow {
    Continue,
    Quit,
}

/// Run the read-eval loop until `quit` or end of input.
#[cfg(not(tarpaulin_include))]
pub fn handle(ctx: &Context) -> Result<()> {
    let interactive = atty::is(atty::Stream::Stdin);
    let mut session = Session::new();

    if interactive {
        println!("{}", ctx.theme.secondary_text(HELP));
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("pastedbg> ");
            io::stdout().flush()?;
        }
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match execute(&mut session, line, ctx) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => eprintln!("{}", ctx.theme.error_text(&format!("{:#}", e))),
        }
    }
    Ok(())
}

fn execute(session: &mut Session, line: &str, ctx: &Context) -> Result<Flow> {
    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, Some(arg.trim()).filter(|a| !a.is_empty())),
        None => (line, None),
    };

    match (command, arg) {
        ("paste", None) => {
            let result = Paste::preferring(ctx.preferred_tool).read()?;
            session.capture(handle_paste(result.clipboard));
            show(session, ctx);
        }
        ("import", Some(path)) => {
            session.import_file(Path::new(path)).map_err(describe)?;
            show(session, ctx);
        }
        ("export", dir) => {
            let dir = dir
                .map(Path::new)
                .unwrap_or(ctx.config.export.directory.as_path());
            export_session(session, dir, ctx)?;
        }
        ("copy", None) => {
            copy_session(session, ctx)?;
        }
        ("render", Some(path)) => {
            render_session(session, Path::new(path), ctx)?;
        }
        ("show", None) => show(session, ctx),
        ("clear", None) => {
            session.clear();
            println!("{}", ctx.theme.secondary_text("Cleared."));
        }
        ("help", None) => println!("{}", HELP),
        ("quit", None) | ("exit", None) => return Ok(Flow::Quit),
        _ => bail!("Unknown command '{}'. Type 'help' for a list.", line),
    }
    Ok(Flow::Continue)
}

fn show(session: &Session, ctx: &Context) {
    match session.current() {
        Some(payload) => print_payload(payload, ctx),
        None => println!("{}", ctx.theme.secondary_text("Nothing captured yet.")),
    }
}
