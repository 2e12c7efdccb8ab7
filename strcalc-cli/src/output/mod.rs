//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use strcalc_core::{CalcError, Calculation};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Record a successful calculation
    fn format_result(&mut self, source: &str, calculation: &Calculation) -> Result<()>;

    /// Record a failed calculation
    fn format_error(&mut self, source: &str, error: &CalcError) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one sum per line
    Text,
    /// JSON array with sums, terms and delimiters
    Json,
}

impl OutputFormat {
    /// All formats with their descriptions
    pub fn all() -> [(OutputFormat, &'static str); 2] {
        [
            (OutputFormat::Text, "one sum per line"),
            (OutputFormat::Json, "array of results with terms and delimiters"),
        ]
    }

    /// Name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
