//! Command to compute the relative path from a base to a target.

use crate::error::CliError;
use crate::utils::{emit, GlobalOptions};
use clap::Args;
use serde::Serialize;
use std::fmt;
use uripath::Path;

/// Compute the relative path that resolves against BASE to TARGET.
///
/// Exits with status 1 when no such path exists, for example when one path
/// is absolute and the other is not.
#[derive(Args)]
pub struct RelativizeCommand {
    /// Base path
    #[arg(value_name = "BASE", allow_hyphen_values = true)]
    pub base: Path,

    /// Target path
    #[arg(value_name = "TARGET", allow_hyphen_values = true)]
    pub target: Path,
}

#[derive(Serialize)]
struct RelativizeReport {
    base: Path,
    target: Path,
    relative: Path,
}

impl fmt::Display for RelativizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.relative)
    }
}

impl RelativizeCommand {
    /// Execute the relativize command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let relative = self.base.relativize(&self.target)?;
        emit(
            global.format,
            &RelativizeReport {
                base: self.base,
                target: self.target,
                relative,
            },
        )
    }
}
