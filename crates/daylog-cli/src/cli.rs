use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "daylog")]
#[command(about = "A CLI for dated personal journals")]
#[command(version = "0.2.0")]
pub struct Cli {
    /// Log directory (skips marker discovery; also DAYLOG_DIR)
    #[arg(short = 'C', long = "dir", global = true, env = "DAYLOG_DIR")]
    pub dir: Option<PathBuf>,

    /// Verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand)]
pub enum Commands {
    /// Create a marker directory so resolution anchors here
    Init {
        /// Directory to anchor (defaults to current directory)
        path: Option<PathBuf>,
    },

    /// Open an entry in the configured editor (today's by default)
    Edit {
        /// Entry filename to open instead of today's
        entry: Option<String>,

        /// Compute today's date in UTC instead of local time
        #[arg(long)]
        utc: bool,
    },

    /// Append a message to today's entry
    Add {
        /// Message words, joined with single spaces
        #[arg(required = true)]
        message: Vec<String>,

        /// Compute today's date in UTC instead of local time
        #[arg(long)]
        utc: bool,
    },

    /// List entries with a short excerpt
    Ls {
        /// Output as JSON for machine processing
        #[arg(long)]
        json: bool,
    },

    /// Search entries with the configured search command
    Grep {
        /// Search pattern, passed through to the search tool verbatim
        pattern: String,
    },

    /// Page through an entry (today's by default)
    View {
        /// Entry filename to view instead of today's
        entry: Option<String>,

        /// Compute today's date in UTC instead of local time
        #[arg(long)]
        utc: bool,
    },
}
