//! Logging infrastructure for the shellpath library.
//!
//! Filesystem operations never print on their own; they report warnings and
//! per-entry failures to a [`LogSink`] supplied by the caller. [`Logger`] is
//! the stock stderr sink with configurable log levels, and [`MemoryLog`]
//! captures records for inspection.

use std::env;
use std::fmt;
use std::sync::Mutex;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "SHELLPATH_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use shellpath::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Normal output level (errors and warnings).
    Normal,
    /// Verbose output (errors, warnings, info, and debug messages).
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
    /// use shellpath::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// Severity of a single reported message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A failure the operation recovered from.
    Error,
    /// Something the caller should know about (e.g. a replaced link).
    Warn,
    /// Progress information.
    Info,
    /// Detailed tracing.
    Debug,
}

/// Receiver for messages produced by filesystem operations.
///
/// This is the logging collaborator: operations call into it and never
/// configure it. Implementations must be thread-safe so a single sink can be
/// shared by an embedding application.
pub trait LogSink: Send + Sync {
    /// Record a message at the given severity.
    fn log(&self, severity: Severity, message: &str);

    /// Logs an error message.
    fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    /// Logs a warning message.
    fn warn(&self, message: &str) {
        self.log(Severity::Warn, message);
    }

    /// Logs an informational message.
    fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    /// Logs a debug message.
    fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }
}

/// A simple stderr-based logger.
///
/// The logger respects the configured log level and only outputs messages
/// at or above that level.
///
/// # Examples
///
/// ```
/// use shellpath::{LogLevel, LogSink, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("copying tree: destination is not a link: /out/lib");
/// logger.info("This will not be printed (requires Verbose)");
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

    fn enabled(&self, severity: Severity) -> bool {
        match severity {
            Severity::Error | Severity::Warn => self.level >= LogLevel::Normal,
            Severity::Info | Severity::Debug => self.level >= LogLevel::Verbose,
        }
    }
}

impl LogSink for Logger {
    fn log(&self, severity: Severity, message: &str) {
        if !self.enabled(severity) {
            return;
        }
        match severity {
            Severity::Error => eprintln!("ERROR: {message}"),
            Severity::Warn => eprintln!("WARN: {message}"),
            Severity::Info => eprintln!("INFO: {message}"),
            Severity::Debug => eprintln!("DEBUG: {message}"),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// A sink that keeps every record in memory.
///
/// # Examples
///
/// ```
/// use shellpath::{LogSink, MemoryLog, Severity};
///
/// let log = MemoryLog::new();
/// log.warn("link replaced");
/// assert_eq!(log.messages(Severity::Warn), vec!["link replaced".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: Mutex<Vec<(Severity, String)>>,
}

impl MemoryLog {
    /// Creates an empty in-memory log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All records captured so far, oldest first.
    #[must_use]
    pub fn records(&self) -> Vec<(Severity, String)> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Messages captured at one severity, oldest first.
    #[must_use]
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m)
            .collect()
    }
}

impl LogSink for MemoryLog {
    fn log(&self, severity: Severity, message: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.push((severity, message.to_string()));
        }
    }
}

/// Initializes a logger based on environment variables and CLI flags.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `SHELLPATH_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// # Examples
///
/// ```
/// use shellpath::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var(LOG_MODE_ENV) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}
