//! CLI-specific error types with exit codes.
//!
//! This module wraps library errors and maps every failure to the exit code
//! the `uripath` binary reports.

use std::fmt;
use uripath::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// I/O error.
    Io(std::io::Error),

    /// A report could not be rendered in the requested format.
    Output(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (the target is not relativizable)
    /// - 2: Invalid arguments (reported by clap before any command runs)
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Output rendering error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) if lib_err.is_not_relativizable() => 1,
            CliError::Library(_) => 6,
            CliError::Io(_) => 5,
            CliError::Output(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Output(msg) => write!(f, "Output error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e.to_string())
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(e: serde_yaml::Error) -> Self {
        CliError::Output(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uripath::Path;

    #[test]
    fn test_exit_codes() {
        let not_relativizable = Path::parse("/a")
            .relativize(&Path::parse("a"))
            .unwrap_err();
        assert_eq!(CliError::from(not_relativizable).exit_code(), 1);

        let invalid_segment = Path::EMPTY.append_segment("").unwrap_err();
        assert_eq!(CliError::from(invalid_segment).exit_code(), 6);

        assert_eq!(
            CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, "x")).exit_code(),
            5
        );
        assert_eq!(CliError::Output("x".into()).exit_code(), 7);
    }

    #[test]
    fn test_display() {
        let not_relativizable = Path::parse("/a")
            .relativize(&Path::parse("a"))
            .unwrap_err();
        assert_eq!(
            CliError::from(not_relativizable).to_string(),
            "cannot relativize 'a' against '/a': base is absolute but target is relative"
        );
        assert_eq!(CliError::Output("bad".into()).to_string(), "Output error: bad");
    }
}
