//! Utility functions for CLI operations.
//!
//! This module holds the options shared by every command and the output
//! helpers that render a command's report in the selected format.

use crate::error::CliError;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::io::Write;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Format used for every report written to stdout.
    pub format: OutputFormat,
}

/// Output format for command reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text (human-readable)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Write `report` to stdout in the requested format.
///
/// Text output uses the report's `Display` form; JSON and YAML serialize the
/// report itself.
pub fn emit<R>(format: OutputFormat, report: &R) -> Result<(), CliError>
where
    R: Serialize + fmt::Display,
{
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, format, report)
}

/// Write `report` to any writer in the requested format.
pub fn write_report<W, R>(out: &mut W, format: OutputFormat, report: &R) -> Result<(), CliError>
where
    W: Write,
    R: Serialize + fmt::Display,
{
    match format {
        OutputFormat::Text => writeln!(out, "{report}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, report)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        path: String,
        length: usize,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.path)
        }
    }

    fn render(format: OutputFormat) -> String {
        let sample = Sample {
            path: "/a/b".to_string(),
            length: 2,
        };
        let mut buffer = Vec::new();
        write_report(&mut buffer, format, &sample).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_text_uses_display() {
        assert_eq!(render(OutputFormat::Text), "/a/b\n");
    }

    #[test]
    fn test_json_serializes_report() {
        let value: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(value["path"], "/a/b");
        assert_eq!(value["length"], 2);
    }

    #[test]
    fn test_yaml_serializes_report() {
        let yaml = render(OutputFormat::Yaml);
        assert!(yaml.contains("path: /a/b"));
        assert!(yaml.contains("length: 2"));
    }
}
