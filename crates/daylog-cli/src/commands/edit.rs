// crates/daylog-cli/src/commands/edit.rs - Open an entry in the editor

use anyhow::Result;

use crate::context::Context;
use crate::services::runner;

/// Open an entry in the configured editor
///
/// The target is a caller-supplied literal entry name or today's formatted
/// name. The directory is created first so the editor can save into it;
/// the editor's exit status becomes the tool's exit status.
pub fn handle(ctx: &Context, entry: Option<String>, utc: bool) -> Result<()> {
    ctx.journal.ensure_dir()?;

    let name = ctx.entry_name(entry.as_deref(), utc);
    let path = ctx.journal.entry_path(&name);

    let argv = ctx.config().edit_cmd.to_argv(&path.display().to_string());
    let status = runner::run(&argv, None)?;
    runner::propagate_failure(status);

    Ok(())
}
