// crates/daylog-cli/src/services/runner.rs - External program dispatch
//
// The single place a child process is spawned. The child inherits the
// controlling terminal's stdio, runs synchronously with no timeout (a hung
// editor hangs the tool; that is the contract), and its exit status is
// returned to the handler for propagation.

use anyhow::Result;
use std::path::Path;
use std::process::{Command, ExitStatus};

use tracing::debug;

/// Run an argument vector as a child process and wait for it.
///
/// `cwd` sets the child's working directory when the invocation is
/// relative to the log directory (the no-placeholder search form).
pub fn run(argv: &[String], cwd: Option<&Path>) -> Result<ExitStatus> {
    let Some((program, args)) = argv.split_first() else {
        anyhow::bail!("Refusing to run an empty command");
    };

    let mut command = Command::new(program);
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    debug!(?argv, cwd = ?cwd.map(Path::display), "running external command");

    let status = command.status().map_err(|e| {
        anyhow::anyhow!(
            "Failed to launch '{}': {}\n\nTips:\n- Check that '{}' is installed and in PATH\n- Set DAYLOG_EDIT_CMD / DAYLOG_READ_CMD / DAYLOG_GREP_CMD to a different program",
            program, e, program
        )
    })?;

    Ok(status)
}

/// Exit with the child's status when it failed.
///
/// Operations that delegate to an external program adopt that program's
/// exit status as their own; a child killed by a signal maps to 1.
pub fn propagate_failure(status: ExitStatus) {
    if !status.success() {
        std::process::exit(status.code().unwrap_or(1));
    }
}
