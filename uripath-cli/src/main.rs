//! Main entry point for the uripath CLI.
//!
//! This is the command-line interface to the uripath library. It provides
//! commands over URI paths:
//! - `normalize`: Remove dot segments
//! - `resolve`: Resolve a reference against a base
//! - `relativize`: Find the relative path between two paths
//! - `segments`, `inspect`: Look at a path's structure
//! - `append`: Build a path by appending segments

use clap::Parser;
use uripath_cli::{Cli, GlobalOptions};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity; the logger also reports errors
    let logger = uripath::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions { format: cli.format };

    // Handle errors and set exit code
    match uripath_cli::run(cli.command, &global) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            logger.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}
