//! Command to build a path by appending segments.

use crate::error::CliError;
use crate::utils::{emit, GlobalOptions};
use clap::Args;
use serde::Serialize;
use std::fmt;
use uripath::Path;

/// Append segments, then optionally a trailing slash, to a path.
#[derive(Args)]
pub struct AppendCommand {
    /// Path to extend
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: Path,

    /// Segment to append (repeatable, applied in order)
    #[arg(long = "segment", short = 's', value_name = "SEGMENT")]
    pub segments: Vec<String>,

    /// Append a trailing slash after the segments
    #[arg(long)]
    pub slash: bool,
}

#[derive(Serialize)]
struct AppendReport {
    input: Path,
    result: Path,
}

impl fmt::Display for AppendReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.result)
    }
}

impl AppendCommand {
    /// Execute the append command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let result = self.apply()?;
        emit(
            global.format,
            &AppendReport {
                input: self.path,
                result,
            },
        )
    }

    fn apply(&self) -> Result<Path, CliError> {
        let mut result = self
            .segments
            .iter()
            .try_fold(self.path.clone(), |path, segment| {
                path.append_segment(segment)
            })?;
        if self.slash {
            result = result.append_slash();
        }
        Ok(result)
    }
}
