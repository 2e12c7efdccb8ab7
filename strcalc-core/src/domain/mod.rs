//! Domain layer for the string calculator
//!
//! Evaluation of one input runs as a fixed pipeline:
//! delimiter resolution, splitting, integer reading, negative-number
//! validation, narrowing to `i64` and summation. Nothing is carried over between calls.

pub mod delimiter;
pub mod splitter;
pub mod validation;

pub use delimiter::{Delimiters, Resolved};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Result of a successful evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    /// Sum of all terms
    pub sum: i64,
    /// Integers that were summed, in input order
    pub terms: Vec<i64>,
    /// Delimiters that were in effect
    pub delimiters: Delimiters,
}

/// Evaluate a single input string.
pub fn evaluate(input: &str, trim_carriage_return: bool) -> Result<Calculation> {
    let Resolved { delimiters, body } = delimiter::resolve_with(input, trim_carriage_return)?;
    log::trace!("resolved delimiters {:?}, body of {} bytes", delimiters, body.len());

    let tokens = splitter::split(body, &delimiters)?;
    let parsed = splitter::parse_terms(&tokens)?;
    log::trace!("parsed {} terms", parsed.len());

    validation::reject_negatives(&parsed)?;
    let terms = splitter::narrow(&parsed)?;
    let sum = validation::checked_sum(&terms)?;

    Ok(Calculation {
        sum,
        terms,
        delimiters,
    })
}
