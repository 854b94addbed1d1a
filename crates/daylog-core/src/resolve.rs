// crates/daylog-core/src/resolve.rs - Log-directory resolution
//
// The resolver answers "where do entries live for this invocation?". It is
// computed fresh every run and never cached.
//
// PRECEDENCE:
// 1. An explicit override (CLI flag / DAYLOG_DIR) is returned unchanged,
//    with no existence check - creation is the caller's concern.
// 2. Otherwise the nearest ancestor-or-self directory containing a
//    subdirectory named `marker_name`; the resolved location is that marker
//    subdirectory itself.
// 3. Otherwise `config.default_dir`. The resolver does not create it.
//
// The walk probes every directory that still has a parent; the filesystem
// root terminates the walk and is not probed, so a walk starting at the
// root falls back immediately. A probe error (permission denied etc.) is
// treated the same as "marker not found" and the walk continues upward.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;

/// Resolve the log directory for one invocation.
pub fn resolve(config: &Config, start_dir: &Path, explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        debug!(dir = %dir.display(), "using explicit log directory");
        return dir.to_path_buf();
    }

    let mut current = start_dir;
    while let Some(parent) = current.parent() {
        let marker = current.join(&config.marker_name);
        // is_dir is false on any probe error; that counts as "not found".
        if marker.is_dir() {
            debug!(dir = %marker.display(), "found marker directory");
            return marker;
        }
        current = parent;
    }

    debug!(dir = %config.default_dir.display(), "no marker found, using default");
    config.default_dir.clone()
}

/// Create a log directory if it does not already exist.
///
/// Idempotent: an existing directory is success. Any other failure is
/// fatal to the operation and surfaces to the caller.
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    std::fs::create_dir_all(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandTemplate;
    use tempfile::TempDir;

    // A marker name unlikely to exist in any ancestor of the temp root.
    const MARKER: &str = ".daylog-resolve-test";

    fn test_config(default_dir: &Path) -> Config {
        Config {
            marker_name: MARKER.to_string(),
            default_dir: default_dir.to_path_buf(),
            file_pattern: "%Y-%m-%d.md".to_string(),
            edit_cmd: CommandTemplate::parse("vi"),
            read_cmd: CommandTemplate::parse("less"),
            grep_cmd: CommandTemplate::parse("grep -n"),
        }
    }

    #[test]
    fn test_explicit_override_wins_without_existence_check() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());
        let override_dir = temp.path().join("does-not-exist");

        let got = resolve(&config, temp.path(), Some(&override_dir));
        assert_eq!(got, override_dir);
    }

    #[test]
    fn test_marker_at_start_dir_itself() {
        let temp = TempDir::new().unwrap();
        let marker = temp.path().join(MARKER);
        std::fs::create_dir(&marker).unwrap();
        let config = test_config(&temp.path().join("fallback"));

        assert_eq!(resolve(&config, temp.path(), None), marker);
    }

    #[test]
    fn test_marker_at_strict_ancestor() {
        let temp = TempDir::new().unwrap();
        let marker = temp.path().join(MARKER);
        std::fs::create_dir(&marker).unwrap();
        let nested = temp.path().join("a/b/c");
        std::fs::create_dir_all(&nested).unwrap();
        let config = test_config(&temp.path().join("fallback"));

        assert_eq!(resolve(&config, &nested, None), marker);
    }

    #[test]
    fn test_nearest_marker_shadows_ancestor_marker() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(MARKER)).unwrap();
        let nested = temp.path().join("project");
        std::fs::create_dir(&nested).unwrap();
        let near = nested.join(MARKER);
        std::fs::create_dir(&near).unwrap();
        let config = test_config(&temp.path().join("fallback"));

        assert_eq!(resolve(&config, &nested, None), near);
    }

    #[test]
    fn test_marker_must_be_a_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(MARKER), "plain file").unwrap();
        let fallback = temp.path().join("fallback");
        let config = test_config(&fallback);

        assert_eq!(resolve(&config, temp.path(), None), fallback);
    }

    #[test]
    fn test_no_marker_anywhere_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        let fallback = temp.path().join("fallback");
        let config = test_config(&fallback);

        assert_eq!(resolve(&config, temp.path(), None), fallback);
        // The fallback is returned, not created.
        assert!(!fallback.exists());
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("logs/deep");

        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
        ensure_dir(&dir).unwrap();
    }
}
