//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No expression, file or stdin input was given
    NoInput,
    /// Invalid file pattern
    InvalidPattern(String),
    /// No file matched the given patterns
    NoFilesFound(Vec<String>),
    /// Configuration error
    ConfigError(String),
    /// One or more inputs failed to calculate
    CalculationFailed(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInput => write!(
                f,
                "No input given: pass expressions, --input patterns or --stdin"
            ),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::NoFilesFound(patterns) => {
                write!(f, "No files found matching: {}", patterns.join(", "))
            }
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::CalculationFailed(count) => write!(f, "{count} input(s) failed"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
