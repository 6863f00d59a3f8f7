//! Command to remove dot segments from a path.

use crate::error::CliError;
use crate::utils::{emit, GlobalOptions};
use clap::Args;
use serde::Serialize;
use std::fmt;
use uripath::Path;

/// Remove `.` and `..` segments from a path.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: Path,
}

#[derive(Serialize)]
struct NormalizeReport {
    input: Path,
    normalized: Path,
}

impl fmt::Display for NormalizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

impl NormalizeCommand {
    /// Execute the normalize command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let normalized = self.path.normalize();
        emit(
            global.format,
            &NormalizeReport {
                input: self.path,
                normalized,
            },
        )
    }
}
