// crates/daylog-core/src/lib.rs - Core library for dated personal journals
//
// daylog-core knows how to answer two questions:
// 1. WHERE do the log files live? (resolve: marker-directory walk + fallback)
// 2. WHAT is today's file called? (entry: date-token patterns + extensions)
//
// It also owns the immutable process configuration (config) and the
// structured external-command contract (command). It performs no process
// spawning and prints nothing - those concerns belong to the CLI crate.

pub mod command;
pub mod config;
pub mod entry;
pub mod resolve;

pub use command::CommandTemplate;
pub use config::{Config, ConfigError, ConfigResult};
pub use entry::Clock;
