//! String calculator: sums the integers encoded in a delimited string
//!
//! An input is a list of integers separated by commas or newlines. It may
//! open with a declaration line that sets custom delimiters:
//!
//! - `//;\n1;2` uses `;`
//! - `//[***]\n1***2***3` uses the multi-character delimiter `***`
//! - `//[***][###]\n1***2###3` uses both `***` and `###`
//!
//! Negative numbers are rejected, and the error lists every one of them.
//!
//! # Architecture
//!
//! - **Domain layer**: delimiter resolution, splitting, validation, summation
//! - **API layer**: configuration, input sources and the `Calculator` entry point
//!
//! # Example
//!
//! ```rust
//! use strcalc_core::{add, CalcError};
//!
//! assert_eq!(add("").unwrap(), 0);
//! assert_eq!(add("1\n2,3").unwrap(), 6);
//! assert_eq!(add("//[***][###]\n1***2###3").unwrap(), 6);
//!
//! let err = add("//;\n1;-2;-3").unwrap_err();
//! assert!(matches!(err, CalcError::NegativeNumbers(_)));
//! assert_eq!(err.to_string(), "negative numbers not allowed: -2, -3");
//! ```

pub mod api;
pub mod domain;
pub mod error;

pub use api::{Calculator, Config, ConfigBuilder, Input};
pub use domain::{Calculation, Delimiters};
pub use error::{CalcError, Result};

/// Sum the integers encoded in `input` using the default configuration.
pub fn add(input: &str) -> Result<i64> {
    Calculator::new().add(input)
}
