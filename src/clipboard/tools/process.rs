//! Process helpers shared by the clipboard tools.

use crate::clipboard::tool::ToolError;
use std::io::{ErrorKind, Write};
use std::process::{Command, Output, Stdio};
use tracing::debug;

/// Check if `binary` is on the PATH.
pub(super) fn tool_exists(binary: &str) -> bool {
    Command::new("which")
        .arg(binary)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Run `program` and collect its output without checking the exit status.
pub(super) fn run(program: &str, args: &[&str]) -> Result<Output, ToolError> {
    debug!(program, ?args, "running clipboard tool");
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| spawn_error(&e))
}

/// Run `program` and return stdout, failing on a non-zero exit.
pub(super) fn run_stdout(program: &str, args: &[&str]) -> Result<String, ToolError> {
    let output = run(program, args)?;
    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Err(ToolError::Failed(format!(
            "{} failed: {}",
            program,
            String::from_utf8_lossy(&output.stderr).trim()
        )))
    }
}

/// Run `program` with `input` on stdin.
pub(super) fn run_with_input(program: &str, args: &[&str], input: &str) -> Result<(), ToolError> {
    debug!(program, ?args, bytes = input.len(), "writing to clipboard tool");
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| spawn_error(&e))?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin
            .write_all(input.as_bytes())
            .map_err(|e| ToolError::Failed(e.to_string()))?;
    }

    let status = child
        .wait()
        .map_err(|e| ToolError::Failed(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(ToolError::Failed(format!("{} failed", program)))
    }
}

fn spawn_error(e: &std::io::Error) -> ToolError {
    if e.kind() == ErrorKind::NotFound {
        ToolError::NotFound
    } else {
        ToolError::Failed(e.to_string())
    }
}
