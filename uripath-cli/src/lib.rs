//! Library exports for uripath-cli.
//!
//! The binary in `main.rs` is a thin wrapper around these modules, which
//! keeps the commands testable without spawning a process.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::{Cli, Command};
pub use error::CliError;
pub use utils::{GlobalOptions, OutputFormat};

/// Run a parsed command with the given global options.
pub fn run(command: Command, global: &GlobalOptions) -> Result<(), CliError> {
    match command {
        Command::Normalize(cmd) => cmd.execute(global),
        Command::Resolve(cmd) => cmd.execute(global),
        Command::Relativize(cmd) => cmd.execute(global),
        Command::Segments(cmd) => cmd.execute(global),
        Command::Inspect(cmd) => cmd.execute(global),
        Command::Append(cmd) => cmd.execute(global),
    }
}
