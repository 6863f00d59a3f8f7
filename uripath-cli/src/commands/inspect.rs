//! Command to show the structure and classification of a path.

use crate::error::CliError;
use crate::utils::{emit, GlobalOptions};
use clap::Args;
use serde::Serialize;
use std::fmt;
use uripath::Path;

/// Show how a path is classified and what it is made of.
#[derive(Args)]
pub struct InspectCommand {
    /// Path to inspect
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: Path,
}

#[derive(Serialize)]
struct InspectReport {
    path: Path,
    empty: bool,
    absolute: bool,
    relative: bool,
    starts_with_segment: bool,
    ends_with_slash: bool,
    length: usize,
    segments: Vec<String>,
    last_segment: Option<String>,
    directory: Path,
    normalized: Path,
}

impl InspectReport {
    fn of(path: Path) -> Self {
        Self {
            empty: path.is_empty(),
            absolute: path.is_absolute(),
            relative: path.is_relative(),
            starts_with_segment: path.starts_with_segment(),
            ends_with_slash: path.ends_with_slash(),
            length: path.length(),
            segments: path.segments().map(str::to_owned).collect(),
            last_segment: path.last_segment().map(str::to_owned),
            directory: path.directory(),
            normalized: path.normalize(),
            path,
        }
    }
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "path:            {:?}", self.path.to_string())?;
        writeln!(f, "absolute:        {}", self.absolute)?;
        writeln!(f, "empty:           {}", self.empty)?;
        writeln!(f, "ends with slash: {}", self.ends_with_slash)?;
        writeln!(f, "length:          {}", self.length)?;
        writeln!(f, "segments:        {}", self.segments.join(", "))?;
        writeln!(f, "directory:       {:?}", self.directory.to_string())?;
        write!(f, "normalized:      {:?}", self.normalized.to_string())
    }
}

impl InspectCommand {
    /// Execute the inspect command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit(global.format, &InspectReport::of(self.path))
    }
}
