// crates/daylog-cli/src/commands/grep.rs - Search entries

use anyhow::Result;

use crate::context::Context;
use crate::services::runner;

/// Search entries with the configured search command
///
/// Two dispatch forms, decided by the template:
/// - With a `{}` placeholder: the resolved directory is substituted into
///   the template and the pattern appended ("rg --no-heading {}" becomes
///   `rg --no-heading <dir> <pattern>` reordered per the template).
/// - Without a placeholder: the command runs with the pattern followed by
///   the matching entry filenames, with its working directory set to the
///   log directory - the structured equivalent of `cd <dir> && grep -n
///   <pattern> *.md`, without a shell expanding the glob.
///
/// The pattern is passed through verbatim; whether it is literal text or a
/// regex is the configured tool's business. The child's exit status
/// becomes the tool's exit status (grep's "no matches" included).
pub fn handle(ctx: &Context, pattern: String) -> Result<()> {
    let template = &ctx.config().grep_cmd;
    let log_dir = ctx.journal.log_dir();

    let status = if template.has_placeholder() {
        let mut argv = template.to_argv(&log_dir.display().to_string());
        argv.push(pattern);
        runner::run(&argv, None)?
    } else {
        let files = ctx.journal.entries(ctx.extension())?;
        if files.is_empty() {
            anyhow::bail!(
                "No '{}' entries to search in {}",
                ctx.extension(),
                log_dir.display()
            );
        }

        let mut argv = template.argv().to_vec();
        argv.push(pattern);
        for file in files {
            if let Some(name) = file.file_name().and_then(|n| n.to_str()) {
                argv.push(name.to_string());
            }
        }
        runner::run(&argv, Some(log_dir))?
    };

    runner::propagate_failure(status);
    Ok(())
}
