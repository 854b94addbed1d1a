// crates/daylog-core/src/config.rs - Configuration resolution
//
// All configurable behavior is resolved exactly once, at process start, into
// an immutable Config value that is passed explicitly to every component.
// Core logic never reads the environment on its own.
//
// CONFIGURATION HIERARCHY (highest to lowest priority):
// 1. Command-line arguments (--dir; handled by clap in the CLI crate)
// 2. DAYLOG_* environment variables
// 3. Conventional editor/pager variables (VISUAL, EDITOR, PAGER)
// 4. Built-in defaults, including a PATH probe for an installed pager

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::command::CommandTemplate;

/// Marker-directory name searched for during resolution.
pub const ENV_DIR_NAME: &str = "DAYLOG_DIR_NAME";
/// Absolute fallback directory used when no marker is found.
pub const ENV_DEFAULT_DIR: &str = "DAYLOG_DEFAULT_DIR";
/// Filename pattern with date tokens and a literal extension.
pub const ENV_FILE_PATTERN: &str = "DAYLOG_FILE_PATTERN";
/// Editor command template.
pub const ENV_EDIT_CMD: &str = "DAYLOG_EDIT_CMD";
/// Pager command template.
pub const ENV_READ_CMD: &str = "DAYLOG_READ_CMD";
/// Search command template.
pub const ENV_GREP_CMD: &str = "DAYLOG_GREP_CMD";

const DEFAULT_DIR_NAME: &str = ".daylog";
const DEFAULT_FILE_PATTERN: &str = "%Y-%m-%d.md";
const DEFAULT_EDITOR: &str = "vi";
const DEFAULT_GREP_CMD: &str = "grep -n";

/// Pagers probed on PATH, in preference order, when PAGER is unset.
const PAGER_CANDIDATES: &[&str] = &["less", "more", "cat"];

/// Errors that can occur while resolving or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("log file pattern must not be empty (check {ENV_FILE_PATTERN})")]
    EmptyPattern,

    #[error("log file pattern '{0}' has no extension; it must end in a literal suffix like '.md'")]
    PatternWithoutExtension(String),

    #[error("command template is empty (check {0})")]
    EmptyCommand(String),

    #[error("cannot determine a home directory for the default log dir; set {ENV_DEFAULT_DIR}")]
    NoHomeDir,
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Immutable process-wide configuration.
///
/// Resolved once at startup; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the marker directory the resolver walks upward looking for.
    pub marker_name: String,

    /// Absolute fallback log directory used when no marker is found.
    /// The resolver never creates it; write operations do.
    pub default_dir: PathBuf,

    /// Entry filename pattern: literals plus %Y %m %d %U, ending in an
    /// extension.
    pub file_pattern: String,

    /// Editor invocation template (edit operation).
    pub edit_cmd: CommandTemplate,

    /// Pager invocation template (view operation).
    pub read_cmd: CommandTemplate,

    /// Search invocation template (grep operation).
    pub grep_cmd: CommandTemplate,
}

impl Config {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary variable lookup.
    ///
    /// `from_env` is the production wrapper; tests supply a closure instead
    /// of mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let marker_name =
            lookup(ENV_DIR_NAME).unwrap_or_else(|| DEFAULT_DIR_NAME.to_string());

        let default_dir = match lookup(ENV_DEFAULT_DIR) {
            Some(dir) => PathBuf::from(dir),
            None => default_log_dir().ok_or(ConfigError::NoHomeDir)?,
        };

        let file_pattern =
            lookup(ENV_FILE_PATTERN).unwrap_or_else(|| DEFAULT_FILE_PATTERN.to_string());

        let edit_cmd = lookup(ENV_EDIT_CMD)
            .or_else(|| lookup("VISUAL"))
            .or_else(|| lookup("EDITOR"))
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string());

        let read_cmd = lookup(ENV_READ_CMD)
            .or_else(|| lookup("PAGER"))
            .unwrap_or_else(|| default_pager(&lookup));

        let grep_cmd =
            lookup(ENV_GREP_CMD).unwrap_or_else(|| DEFAULT_GREP_CMD.to_string());

        let config = Self {
            marker_name,
            default_dir,
            file_pattern,
            edit_cmd: CommandTemplate::parse(&edit_cmd),
            read_cmd: CommandTemplate::parse(&read_cmd),
            grep_cmd: CommandTemplate::parse(&grep_cmd),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the resolved configuration.
    ///
    /// Catches values that would fail at an awkward point later (an entry
    /// name with no extension, a command with no program word) and reports
    /// them before any operation runs.
    fn validate(&self) -> ConfigResult<()> {
        if self.file_pattern.is_empty() {
            return Err(ConfigError::EmptyPattern);
        }
        if !self.file_pattern.contains('.') {
            return Err(ConfigError::PatternWithoutExtension(
                self.file_pattern.clone(),
            ));
        }

        for (var, cmd) in [
            (ENV_EDIT_CMD, &self.edit_cmd),
            (ENV_READ_CMD, &self.read_cmd),
            (ENV_GREP_CMD, &self.grep_cmd),
        ] {
            if cmd.is_empty() {
                return Err(ConfigError::EmptyCommand(var.to_string()));
            }
        }

        Ok(())
    }
}

/// Default fallback directory: `<home>/daylog`.
fn default_log_dir() -> Option<PathBuf> {
    directories::UserDirs::new().map(|dirs| dirs.home_dir().join("daylog"))
}

/// Pick a default pager by probing PATH for installed candidates.
fn default_pager<F>(lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let found = lookup("PATH").and_then(|path| {
        PAGER_CANDIDATES.iter().find_map(|candidate| {
            std::env::split_paths(&path)
                .any(|dir| dir.join(candidate).is_file())
                .then(|| candidate.to_string())
        })
    });

    match found {
        Some(pager) => {
            debug!(%pager, "discovered default pager on PATH");
            pager
        }
        // Last resort; also covers an unset PATH.
        None => "cat".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_resolve_and_validate() {
        let config =
            Config::from_lookup(lookup_from(&[(ENV_DEFAULT_DIR, "/tmp/logs")])).unwrap();
        assert_eq!(config.marker_name, ".daylog");
        assert_eq!(config.default_dir, PathBuf::from("/tmp/logs"));
        assert_eq!(config.file_pattern, "%Y-%m-%d.md");
        assert_eq!(config.edit_cmd.argv(), ["vi"]);
        assert_eq!(config.grep_cmd.argv(), ["grep", "-n"]);
    }

    #[test]
    fn test_env_overrides_take_priority() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_DEFAULT_DIR, "/srv/journal"),
            (ENV_DIR_NAME, ".journal"),
            (ENV_FILE_PATTERN, "%Y-w%U.txt"),
            (ENV_GREP_CMD, "rg --no-heading {}"),
        ]))
        .unwrap();
        assert_eq!(config.marker_name, ".journal");
        assert_eq!(config.file_pattern, "%Y-w%U.txt");
        assert!(config.grep_cmd.has_placeholder());
    }

    #[test]
    fn test_editor_discovery_hierarchy() {
        let visual_wins = Config::from_lookup(lookup_from(&[
            (ENV_DEFAULT_DIR, "/tmp/logs"),
            ("VISUAL", "hx"),
            ("EDITOR", "nano"),
        ]))
        .unwrap();
        assert_eq!(visual_wins.edit_cmd.argv(), ["hx"]);

        let explicit_wins = Config::from_lookup(lookup_from(&[
            (ENV_DEFAULT_DIR, "/tmp/logs"),
            (ENV_EDIT_CMD, "code --wait {}"),
            ("VISUAL", "hx"),
        ]))
        .unwrap();
        assert_eq!(explicit_wins.edit_cmd.argv()[0], "code");
    }

    #[test]
    fn test_pager_falls_back_to_env_then_probe() {
        let from_env = Config::from_lookup(lookup_from(&[
            (ENV_DEFAULT_DIR, "/tmp/logs"),
            ("PAGER", "bat"),
        ]))
        .unwrap();
        assert_eq!(from_env.read_cmd.argv(), ["bat"]);

        // No PAGER and no PATH: the probe finds nothing and settles on cat.
        let bare = Config::from_lookup(lookup_from(&[(ENV_DEFAULT_DIR, "/tmp/logs")]))
            .unwrap();
        assert_eq!(bare.read_cmd.argv(), ["cat"]);
    }

    #[test]
    fn test_rejects_pattern_without_extension() {
        let err = Config::from_lookup(lookup_from(&[
            (ENV_DEFAULT_DIR, "/tmp/logs"),
            (ENV_FILE_PATTERN, "%Y-%m-%d"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::PatternWithoutExtension(_)));
    }

    #[test]
    fn test_rejects_empty_command_template() {
        let err = Config::from_lookup(lookup_from(&[
            (ENV_DEFAULT_DIR, "/tmp/logs"),
            (ENV_GREP_CMD, "   "),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyCommand(_)));
    }
}
