//! Calculator entry point

use crate::api::{Config, Input};
use crate::domain::{self, Calculation};
use crate::error::{CalcError, Result};

/// String calculator with validated configuration.
///
/// Holds no per-call state; a shared reference can serve any number of callers.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: Config,
}

impl Calculator {
    /// Create a calculator with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Sum the integers encoded in `input`
    pub fn add(&self, input: &str) -> Result<i64> {
        self.calculate(input).map(|calculation| calculation.sum)
    }

    /// Evaluate `input`, returning the sum together with its terms and delimiters
    pub fn calculate(&self, input: &str) -> Result<Calculation> {
        let limit = self.config.max_input_bytes;
        if input.len() > limit {
            return Err(CalcError::InputTooLarge {
                size: input.len(),
                limit,
            });
        }

        domain::evaluate(input, self.config.trim_carriage_returns)
    }

    /// Read `input` to text and evaluate it
    pub fn process(&self, input: Input) -> Result<Calculation> {
        log::debug!("processing {:?}", input);
        let text = input.into_text(self.config.max_input_bytes)?;
        self.calculate(&text)
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
