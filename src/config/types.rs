//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{EXIT_EMPTY_INPUT, EXIT_POLICY_VIOLATION};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How decoded outcomes are written to the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per payload
    Text,
    /// One JSON document per line, in the upstream wire shape
    Json,
}

/// When a decode run should end with a non-zero exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 once the input was read
    Never,
    /// Fail if any payload was not a success record
    AnyFailure,
    /// Fail only if a payload was malformed or not JSON
    MalformedOnly,
}

impl FailOn {
    /// Maps a finished run to a process exit code.
    ///
    /// Returns 0 when the policy holds, `EXIT_POLICY_VIOLATION` when it does
    /// not, and `EXIT_EMPTY_INPUT` when nothing was decoded under any policy
    /// other than `Never`.
    pub fn exit_code(&self, report: &crate::DecodeReport) -> i32 {
        if *self == FailOn::Never {
            return 0;
        }
        if report.total == 0 {
            return EXIT_EMPTY_INPUT;
        }
        let violated = match self {
            FailOn::Never => false,
            FailOn::AnyFailure => report.successful < report.total,
            FailOn::MalformedOnly => report.rejected > 0,
        };
        if violated {
            EXIT_POLICY_VIOLATION
        } else {
            0
        }
    }
}

/// Library configuration for a batch decode run (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use ip_lookup::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("responses.jsonl"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read payloads from (`-` for stdin)
    pub file: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Output format for decoded outcomes
    pub output_format: OutputFormat,

    /// Exit code policy
    pub fail_on: FailOn,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("-"),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output_format: OutputFormat::Text,
            fail_on: FailOn::Never,
        }
    }
}
