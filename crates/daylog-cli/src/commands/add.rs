// crates/daylog-cli/src/commands/add.rs - Append a message to today's entry

use anyhow::Result;

use crate::context::Context;

/// Append a message to today's entry
///
/// Always targets today's formatted name. The message words are joined
/// with single spaces and written with one trailing newline; the written
/// file's base name is reported on stdout so shells can capture it.
pub fn handle(ctx: &Context, message: Vec<String>, utc: bool) -> Result<()> {
    ctx.journal.ensure_dir()?;

    let name = ctx.entry_name(None, utc);
    ctx.journal.append(&name, &message.join(" "))?;
    println!("{name}");

    Ok(())
}
