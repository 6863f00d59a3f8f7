//! Command to list the segments of a path.

use crate::error::CliError;
use crate::utils::{emit, GlobalOptions};
use clap::Args;
use serde::Serialize;
use std::fmt;
use uripath::Path;

/// List the segments of a path, one per line.
#[derive(Args)]
pub struct SegmentsCommand {
    /// Path to split
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: Path,
}

#[derive(Serialize)]
struct SegmentsReport<'a> {
    path: &'a Path,
    segments: Vec<&'a str>,
}

impl fmt::Display for SegmentsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("\n"))
    }
}

impl SegmentsCommand {
    /// Execute the segments command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let report = SegmentsReport {
            path: &self.path,
            segments: self.path.segments().collect(),
        };
        emit(global.format, &report)
    }
}
