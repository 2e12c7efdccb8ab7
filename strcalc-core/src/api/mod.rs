//! Public API for the string calculator
//!
//! Wraps the domain pipeline with configuration, input handling and a
//! reusable `Calculator` entry point.

mod calculator;
mod config;
mod input;


pub use calculator::Calculator;
pub use config::{defaults, Config, ConfigBuilder};
pub use input::Input;
