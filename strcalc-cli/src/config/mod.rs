//! Configuration module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Calculation configuration
    #[serde(default)]
    pub calculation: CalculationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Calculation-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CalculationConfig {
    /// Largest accepted input in bytes
    pub max_input_bytes: usize,

    /// Treat `\r\n` ending a declaration line as `\n`
    pub trim_carriage_returns: bool,

    /// Expand backslash escapes in command-line expressions
    pub interpret_escapes: bool,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: strcalc_core::api::defaults::MAX_INPUT_BYTES,
            trim_carriage_returns: strcalc_core::api::defaults::TRIM_CARRIAGE_RETURNS,
            interpret_escapes: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("Failed to read {}: {e}", path.display()))
        })?;

        let config = toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;

        Ok(config)
    }

    /// Build the calculator configuration
    pub fn calculator_config(&self) -> Result<strcalc_core::Config> {
        let config = strcalc_core::Config::builder()
            .max_input_bytes(self.calculation.max_input_bytes)
            .trim_carriage_returns(self.calculation.trim_carriage_returns)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(config)
    }
}
