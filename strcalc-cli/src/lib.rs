//! strcalc CLI library
//!
//! This library provides the command-line interface for the strcalc
//! string calculator.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
