//! Command to resolve a reference path against a base path.

use crate::error::CliError;
use crate::utils::{emit, GlobalOptions};
use clap::Args;
use serde::Serialize;
use std::fmt;
use uripath::Path;

/// Resolve a reference path against a base path.
#[derive(Args)]
pub struct ResolveCommand {
    /// Base path
    #[arg(value_name = "BASE", allow_hyphen_values = true)]
    pub base: Path,

    /// Reference path to resolve
    #[arg(value_name = "REFERENCE", allow_hyphen_values = true)]
    pub reference: Path,

    /// Treat the base as belonging to a URI with an authority
    ///
    /// An empty base then behaves like "/".
    #[arg(long)]
    pub authority: bool,
}

#[derive(Serialize)]
struct ResolveReport {
    base: Path,
    reference: Path,
    resolved: Path,
}

impl fmt::Display for ResolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resolved)
    }
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolved = resolve(&self.base, &self.reference, self.authority);
        emit(
            global.format,
            &ResolveReport {
                base: self.base,
                reference: self.reference,
                resolved,
            },
        )
    }
}

fn resolve(base: &Path, reference: &Path, authority: bool) -> Path {
    if !authority || reference.is_absolute() || reference.is_empty() {
        return base.resolve(reference);
    }
    base.merge(reference, true).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_without_authority() {
        let resolved = resolve(&Path::EMPTY, &Path::parse("g"), false);
        assert_eq!(resolved.to_string(), "g");
    }

    #[test]
    fn test_resolve_with_authority() {
        let resolved = resolve(&Path::EMPTY, &Path::parse("./g"), true);
        assert_eq!(resolved.to_string(), "/g");

        let resolved = resolve(&Path::parse("/a/b"), &Path::parse("../g"), true);
        assert_eq!(resolved.to_string(), "/g");

        assert!(resolve(&Path::EMPTY, &Path::EMPTY, true).is_empty());
    }
}
