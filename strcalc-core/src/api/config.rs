//! Configuration API for the calculator

use crate::error::{CalcError, Result};

/// Default configuration constants
pub mod defaults {
    /// Default maximum input size in bytes (16MB)
    pub const MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;

    /// Whether a `\r` before the declaration newline is dropped by default
    pub const TRIM_CARRIAGE_RETURNS: bool = false;
}

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) max_input_bytes: usize,
    pub(crate) trim_carriage_returns: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_input_bytes: defaults::MAX_INPUT_BYTES,
            trim_carriage_returns: defaults::TRIM_CARRIAGE_RETURNS,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Maximum accepted input size in bytes
    pub fn max_input_bytes(&self) -> usize {
        self.max_input_bytes
    }

    /// Whether `\r\n` ending a declaration line is treated as `\n`
    pub fn trim_carriage_returns(&self) -> bool {
        self.trim_carriage_returns
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.max_input_bytes == 0 {
            return Err(CalcError::Configuration(
                "max_input_bytes must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    max_input_bytes: Option<usize>,
    trim_carriage_returns: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum input size in bytes
    pub fn max_input_bytes(mut self, bytes: usize) -> Self {
        self.max_input_bytes = Some(bytes);
        self
    }

    /// Drop a `\r` that ends the delimiter declaration line
    pub fn trim_carriage_returns(mut self, enabled: bool) -> Self {
        self.trim_carriage_returns = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(bytes) = self.max_input_bytes {
            config.max_input_bytes = bytes;
        }

        if let Some(enabled) = self.trim_carriage_returns {
            config.trim_carriage_returns = enabled;
        }

        config.validate()?;
        Ok(config)
    }
}
