// crates/daylog-cli/src/commands/ls.rs - List entries with excerpts

use anyhow::Result;
use serde::Serialize;

use daylog_core::entry;

use crate::context::Context;

/// Information about one entry for listing
#[derive(Debug, Clone, Serialize)]
struct EntryInfo {
    name: String,
    excerpt: String,
    path: String,
}

/// List entries in the resolved log directory
///
/// Entries are files whose name carries the pattern's derived extension,
/// emitted in directory-iteration order (no sort). Human output shows the
/// base name with the extension stripped plus a short excerpt; --json
/// emits the same records for machine processing.
pub fn handle(ctx: &Context, json: bool) -> Result<()> {
    let extension = ctx.extension();
    let files = ctx.journal.entries(extension)?;

    let mut entries = Vec::new();
    for file in files {
        let Some(filename) = file.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let name = filename.strip_suffix(extension).unwrap_or(filename);
        let content = ctx.journal.read(&file)?;

        entries.push(EntryInfo {
            name: name.to_string(),
            excerpt: entry::excerpt(&content),
            path: file.display().to_string(),
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for info in entries {
            if info.excerpt.is_empty() {
                println!("{}", info.name);
            } else {
                println!("{}: {}", info.name, info.excerpt);
            }
        }
    }

    Ok(())
}
