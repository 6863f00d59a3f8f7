//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AppendCommand, InspectCommand, NormalizeCommand, RelativizeCommand, ResolveCommand,
    SegmentsCommand,
};
use crate::utils::OutputFormat;
use clap::{Parser, Subcommand};

/// Command-line tool for the RFC 3986 path algebra.
#[derive(Parser)]
#[command(name = "uripath")]
#[command(version, about = "Normalize, resolve and relativize URI paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(
        long,
        value_enum,
        global = true,
        default_value = "text",
        env = "URIPATH_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Remove dot segments from a path
    Normalize(NormalizeCommand),

    /// Resolve a reference path against a base path
    Resolve(ResolveCommand),

    /// Compute the relative path from a base to a target
    Relativize(RelativizeCommand),

    /// List the segments of a path
    Segments(SegmentsCommand),

    /// Show the structure and classification of a path
    Inspect(InspectCommand),

    /// Append segments or a trailing slash to a path
    Append(AppendCommand),
}
