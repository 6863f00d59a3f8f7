//! Logging infrastructure for the uripath library.
//!
//! The path algorithms report through the [`log`] facade. This module
//! provides a stderr [`Logger`] that can be installed as the facade's backend
//! and is also usable directly, with three verbosity levels.

use std::env;
use std::fmt;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "URIPATH_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use uripath::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything, including the algorithms' debug and trace records.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The most verbose `log` level let through at this setting.
    #[must_use]
    pub const fn level_filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Trace,
        }
    }
}

/// A stderr logger.
///
/// Records from the `log` facade reach it once it is installed; fatal
/// errors can also be reported through [`Logger::error`] directly.
///
/// # Examples
///
/// ```
/// use uripath::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.error("cannot relativize 'a' against '/a'");
///
/// // Quiet suppresses even errors.
/// Logger::new(LogLevel::Quiet).error("not printed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs an error message, unless the level is Quiet.
    pub fn error(&self, message: &str) {
        if log::Level::Error <= self.level.level_filter() {
            eprintln!("{}: {message}", log::Level::Error);
        }
    }

    /// Installs this logger as the backend of the `log` facade.
    ///
    /// # Errors
    ///
    /// Returns an error if a backend was already installed; the maximum
    /// level is updated either way.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        log::set_max_level(self.level.level_filter());
        log::set_boxed_logger(Box::new(self))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level.level_filter()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Chooses a log level from CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (verbose wins over quiet)
/// 2. The `URIPATH_LOG_MODE` environment variable
/// 3. Default (Normal)
#[must_use]
pub fn select_level(verbose: bool, quiet: bool) -> LogLevel {
    if verbose {
        return LogLevel::Verbose;
    }
    if quiet {
        return LogLevel::Quiet;
    }

    env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|value| LogLevel::parse(&value).ok())
        .unwrap_or(LogLevel::Normal)
}

/// Builds a logger for the selected level and installs it for the `log`
/// facade.
///
/// Installing only succeeds once per process; later calls still adjust the
/// maximum level and return a logger for direct use.
///
/// # Examples
///
/// ```
/// use uripath::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let logger = Logger::new(select_level(verbose, quiet));
    if logger.install().is_err() {
        log::set_max_level(logger.level().level_filter());
    }
    logger
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Quiet < LogLevel::Normal);
        assert!(LogLevel::Normal < LogLevel::Verbose);
    }

    #[test]
    fn test_log_level_display_parse() {
        for level in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Verbose] {
            assert_eq!(LogLevel::parse(&level.to_string()).unwrap(), level);
        }
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(LogLevel::Quiet.level_filter(), log::LevelFilter::Off);
        assert_eq!(LogLevel::Normal.level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Verbose.level_filter(), log::LevelFilter::Trace);
    }

    #[test]
    fn test_logger_enabled() {
        let normal = Logger::new(LogLevel::Normal);
        let warn = log::Metadata::builder().level(log::Level::Warn).build();
        let debug = log::Metadata::builder().level(log::Level::Debug).build();
        assert!(normal.enabled(&warn));
        assert!(!normal.enabled(&debug));

        let quiet = Logger::new(LogLevel::Quiet);
        assert!(!quiet.enabled(&warn));

        let verbose = Logger::new(LogLevel::Verbose);
        assert!(verbose.enabled(&debug));
    }

    #[test]
    fn test_logger_default() {
        assert_eq!(Logger::default().level(), LogLevel::Normal);
    }

    #[test]
    fn test_select_level_flags() {
        assert_eq!(select_level(true, false), LogLevel::Verbose);
        assert_eq!(select_level(false, true), LogLevel::Quiet);
        assert_eq!(select_level(true, true), LogLevel::Verbose);
    }

    #[test]
    fn test_select_level_from_env() {
        let saved_env = env::var(LOG_MODE_ENV).ok();

        env::set_var(LOG_MODE_ENV, "verbose");
        assert_eq!(select_level(false, false), LogLevel::Verbose);

        env::set_var(LOG_MODE_ENV, "invalid");
        assert_eq!(select_level(false, false), LogLevel::Normal);

        env::set_var(LOG_MODE_ENV, "normal");
        // CLI flag should override env
        assert_eq!(select_level(false, true), LogLevel::Quiet);

        match saved_env {
            Some(val) => env::set_var(LOG_MODE_ENV, val),
            None => env::remove_var(LOG_MODE_ENV),
        }
    }
}
