//! Input handling module

pub mod escapes;
pub mod glob_resolver;

pub use escapes::unescape;
pub use glob_resolver::resolve_patterns;

use std::path::PathBuf;
use strcalc_core::Input;

/// A labelled input waiting to be calculated
#[derive(Debug)]
pub struct Source {
    /// Label used in output and error reports
    pub label: String,
    /// The input itself
    pub input: Input,
}

impl Source {
    /// Source from a command-line expression
    pub fn expression(raw: &str, interpret_escapes: bool) -> Self {
        let text = if interpret_escapes {
            unescape(raw)
        } else {
            raw.to_string()
        };

        Self {
            label: text.clone(),
            input: Input::from_text(text),
        }
    }

    /// Source from a file; the whole file is one input
    pub fn file(path: PathBuf) -> Self {
        Self {
            label: path.display().to_string(),
            input: Input::from_file(path),
        }
    }

    /// Source from standard input
    pub fn stdin() -> Self {
        Self {
            label: "<stdin>".to_string(),
            input: Input::from_reader(std::io::stdin()),
        }
    }
}
