//! Error types for calculation

use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors surfaced by a single `add` call
#[derive(Debug, Error)]
pub enum CalcError {
    /// One or more negative numbers were present in the input, in decimal form
    #[error("negative numbers not allowed: {}", join_values(.0))]
    NegativeNumbers(Vec<String>),

    /// A non-empty token could not be parsed as a signed integer
    #[error("invalid number: '{token}'")]
    Format {
        /// The offending token, as it appeared in the input
        token: String,
    },

    /// A token or the running sum does not fit a signed 64-bit integer
    #[error("integer overflow")]
    Overflow,

    /// The delimiter declaration yields an empty delimiter
    #[error("invalid delimiter declaration: '{0}'")]
    InvalidDelimiter(String),

    /// Input exceeds the configured size limit
    #[error("input too large: {size} bytes exceeds limit of {limit} bytes")]
    InputTooLarge {
        /// Size of the input in bytes (at least `limit + 1` for streamed input)
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// I/O error while reading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes are not valid UTF-8
    #[error("invalid UTF-8 input: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

fn join_values(values: &[String]) -> String {
    values.join(", ")
}

/// Result type for calculation
pub type Result<T> = std::result::Result<T, CalcError>;
