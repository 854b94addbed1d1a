// crates/daylog-cli/src/services/journal.rs - Log-directory file operations
//
// The data-access layer: it knows HOW to touch files in the resolved log
// directory, never WHY (that is the command handlers' concern). All paths
// are built from the one resolved directory, so handlers cannot disagree
// about where entries live.

use anyhow::{Context as AnyhowContext, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use daylog_core::resolve;

/// Handles all file operations within the resolved log directory
pub struct JournalService {
    log_dir: PathBuf,
}

impl JournalService {
    /// Create a service for the given resolved directory.
    ///
    /// The constructor does not touch the filesystem; creation is a
    /// separate, explicit step so read-only operations never create
    /// directories as a side effect.
    pub fn new(log_dir: PathBuf) -> Self {
        Self { log_dir }
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Create the log directory if needed. Idempotent; only failures other
    /// than "already exists" surface, and those are fatal.
    pub fn ensure_dir(&self) -> Result<()> {
        resolve::ensure_dir(&self.log_dir).with_context(|| {
            format!("Failed to create log directory: {}", self.log_dir.display())
        })
    }

    /// Full path of an entry file inside the log directory.
    pub fn entry_path(&self, name: &str) -> PathBuf {
        self.log_dir.join(name)
    }

    /// Append a message line to an entry, creating the file if absent.
    ///
    /// The message is written followed by a single newline; the file is
    /// otherwise treated as an opaque blob.
    pub fn append(&self, name: &str, message: &str) -> Result<PathBuf> {
        let path = self.entry_path(name);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open entry for append: {}", path.display()))?;
        writeln!(file, "{message}")
            .with_context(|| format!("Failed to write entry: {}", path.display()))?;
        Ok(path)
    }

    /// All entry files whose name ends with the given extension, in
    /// directory-iteration order (no sort - the listing is the index).
    ///
    /// Read errors are not swallowed; a missing or unreadable directory
    /// terminates the operation.
    pub fn entries(&self, extension: &str) -> Result<Vec<PathBuf>> {
        let dir = fs::read_dir(&self.log_dir).with_context(|| {
            format!("Failed to read log directory: {}", self.log_dir.display())
        })?;

        let mut files = Vec::new();
        for entry in dir {
            let entry = entry.with_context(|| {
                format!("Failed to read log directory: {}", self.log_dir.display())
            })?;
            let path = entry.path();
            let matches = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(extension));
            if matches && path.is_file() {
                files.push(path);
            }
        }
        Ok(files)
    }

    /// Read an entry's content as UTF-8 text.
    pub fn read(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read entry: {}", path.display()))
    }
}
