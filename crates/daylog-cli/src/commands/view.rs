// crates/daylog-cli/src/commands/view.rs - Page through an entry

use anyhow::Result;

use crate::context::Context;
use crate::services::runner;

/// Open an entry in the configured pager
///
/// Read-only: unlike edit, no directory is created. A missing entry is the
/// pager's problem to report, and its exit status propagates.
pub fn handle(ctx: &Context, entry: Option<String>, utc: bool) -> Result<()> {
    let name = ctx.entry_name(entry.as_deref(), utc);
    let path = ctx.journal.entry_path(&name);

    let argv = ctx.config().read_cmd.to_argv(&path.display().to_string());
    let status = runner::run(&argv, None)?;
    runner::propagate_failure(status);

    Ok(())
}
