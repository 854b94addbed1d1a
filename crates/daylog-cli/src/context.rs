use anyhow::{Context as AnyhowContext, Result};
use std::env;
use std::path::PathBuf;

use daylog_core::{entry, resolve, Clock, Config};

use crate::services::JournalService;

/// Application context that gets passed to command handlers
///
/// Resolves configuration and the log directory once per invocation and
/// hands the result to command handlers. Nothing here is cached across
/// runs; resolution is recomputed every time the tool starts.
pub struct Context {
    pub journal: JournalService,
    config: Config,
}

impl Context {
    /// Create new context with an optional directory override
    pub fn new(dir_override: Option<PathBuf>) -> Result<Self> {
        let config = Config::from_env()?;

        let start_dir =
            env::current_dir().context("Failed to determine current directory")?;
        let log_dir = resolve::resolve(&config, &start_dir, dir_override.as_deref());

        Ok(Self {
            journal: JournalService::new(log_dir),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Target entry filename: a caller-supplied literal, or today's
    /// formatted name in the requested clock mode.
    pub fn entry_name(&self, explicit: Option<&str>, utc: bool) -> String {
        match explicit {
            Some(name) => name.to_string(),
            None => {
                let clock = if utc { Clock::Utc } else { Clock::Local };
                entry::format_name(&self.config.file_pattern, clock.now())
            }
        }
    }

    /// Extension entries are expected to carry, derived from the pattern.
    pub fn extension(&self) -> &str {
        entry::extension_of(&self.config.file_pattern)
    }
}
