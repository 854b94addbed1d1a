// crates/daylog-cli/src/commands/init.rs - Anchor a log directory
//
// init is special: it runs before the normal Context is built, because its
// whole point is to create the marker directory that resolution would
// otherwise walk past.

use anyhow::{Context as AnyhowContext, Result};
use std::env;
use std::path::PathBuf;

use daylog_core::{resolve, Config};

/// Create the marker directory under the given path
///
/// Idempotent: re-running init on an anchored directory succeeds quietly.
pub fn handle(path: Option<PathBuf>) -> Result<()> {
    let config = Config::from_env()?;

    let base = match path {
        Some(p) => p,
        None => env::current_dir().context("Failed to determine current directory")?,
    };
    let marker = base.join(&config.marker_name);

    resolve::ensure_dir(&marker)
        .with_context(|| format!("Failed to create marker directory: {}", marker.display()))?;

    println!("✅ Anchored log directory at: {}", marker.display());
    println!();
    println!("💡 Next steps:");
    println!("   daylog add \"first entry\"");
    println!("   daylog ls");

    Ok(())
}
