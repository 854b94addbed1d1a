// crates/daylog-cli/src/main.rs - CLI Application Entry Point
//
// daylog is a personal journaling tool: one dated file per period, located
// by walking up from the current directory to the nearest marker directory
// and addressed by a date-token filename pattern. Everything heavier than
// appending a line is delegated to external programs (editor, pager,
// search tool).
//
// ARCHITECTURE OVERVIEW:
// ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
// │   User Input    │───▶│   CLI Parser     │───▶│  Command Handlers   │
// │ (clap commands) │    │ (main function)  │    │ (commands/*.rs)     │
// └─────────────────┘    └──────────────────┘    └─────────────────────┘
//                                 │                        │
//                                 ▼                        ▼
//                        ┌──────────────────┐    ┌─────────────────────┐
//                        │     Context      │    │     Services        │
//                        │ (config + dir)   │    │ (file I/O, spawn)   │
//                        └──────────────────┘    └─────────────────────┘
//
// DESIGN PRINCIPLES:
// - Configuration is resolved once and passed explicitly (no global state)
// - One operation per invocation; the process exits when it is done
// - External programs inherit the terminal and their exit status propagates
// - Error handling follows Rust patterns (Result<T, E>)

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

// Module declarations - each module handles a specific concern
mod cli; // Command-line interface definitions (pure data structures)
mod commands; // Command implementations (business logic)
mod context; // Application context and dependency injection
mod services; // Infrastructure services (file I/O, process dispatch)

use cli::Cli;
use context::Context;

/// Main entry point - minimal and focused on orchestration
///
/// 1. Parse command-line arguments using clap
/// 2. Initialize diagnostics (stderr only; stdout stays machine-clean)
/// 3. Handle init, which runs before a context exists
/// 4. Set up the per-invocation context (config + resolved directory)
/// 5. Dispatch to the command handler
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Special case: init creates the marker directory that resolution
    // would otherwise walk past, so it cannot use the normal context.
    if let cli::Commands::Init { path } = &cli.command {
        return commands::init::handle(path.clone());
    }

    let ctx = Context::new(cli.dir.clone())?;

    match cli.command {
        cli::Commands::Edit { entry, utc } => commands::edit::handle(&ctx, entry, utc),
        cli::Commands::Add { message, utc } => commands::add::handle(&ctx, message, utc),
        cli::Commands::Ls { json } => commands::ls::handle(&ctx, json),
        cli::Commands::Grep { pattern } => commands::grep::handle(&ctx, pattern),
        cli::Commands::View { entry, utc } => commands::view::handle(&ctx, entry, utc),
        cli::Commands::Init { .. } => unreachable!(), // Already handled above
    }
}

/// Set up tracing to stderr.
///
/// DAYLOG_LOG takes an EnvFilter directive; --verbose bumps the default
/// from warn to debug. try_init so a second call (tests) is a no-op.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("DAYLOG_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
