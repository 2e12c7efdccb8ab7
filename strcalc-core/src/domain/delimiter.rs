//! Delimiter declaration resolution.
//!
//! An input may open with a declaration line such as `//;`, `//[***]` or
//! `//[***][###]`. Resolution strips that line and yields the delimiters in
//! effect together with the remaining numeric body. No numbers are parsed here.

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};

/// Marker that opens a delimiter declaration line.
pub const DECLARATION_PREFIX: &str = "//";

/// Delimiter mode selected for a single call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "delimiters", rename_all = "snake_case")]
pub enum Delimiters {
    /// Comma and newline; numbers are found by scanning for signed-digit runs.
    #[default]
    Default,
    /// Literal delimiters from a declaration line. Never empty.
    Custom(Vec<String>),
}

impl Delimiters {
    /// Whether this is the default signed-integer scan mode.
    pub fn is_default(&self) -> bool {
        matches!(self, Delimiters::Default)
    }
}

/// Outcome of delimiter resolution: the delimiters and the body they apply to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub delimiters: Delimiters,
    pub body: &'a str,
}

/// Resolve delimiters for `input`.
pub fn resolve(input: &str) -> Result<Resolved<'_>> {
    resolve_with(input, false)
}

/// Resolve delimiters, optionally dropping a `\r` that ends the declaration line.
pub fn resolve_with(input: &str, trim_carriage_return: bool) -> Result<Resolved<'_>> {
    let Some(declaration) = input.strip_prefix(DECLARATION_PREFIX) else {
        return Ok(Resolved {
            delimiters: Delimiters::Default,
            body: input,
        });
    };

    let (mut spec, body) = declaration.split_once('\n').unwrap_or((declaration, ""));
    if trim_carriage_return {
        spec = spec.strip_suffix('\r').unwrap_or(spec);
    }

    let literals = parse_spec(spec);
    if literals.iter().any(String::is_empty) {
        return Err(CalcError::InvalidDelimiter(spec.to_string()));
    }

    Ok(Resolved {
        delimiters: Delimiters::Custom(literals),
        body,
    })
}

/// Turn a declaration spec (the text after `//`) into literal delimiters.
fn parse_spec(spec: &str) -> Vec<String> {
    if let Some(groups) = bracket_groups(spec) {
        return groups;
    }

    // Bracket-wrapped but not a clean group sequence, e.g. `[]]`
    if let Some(inner) = spec.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        return vec![inner.to_string()];
    }

    vec![spec.to_string()]
}

/// Split `[a][b]...` into its group contents. `None` unless the whole spec is groups.
fn bracket_groups(spec: &str) -> Option<Vec<String>> {
    let mut groups = Vec::new();
    let mut rest = spec;

    while !rest.is_empty() {
        let open = rest.strip_prefix('[')?;
        let close = open.find(']')?;
        groups.push(open[..close].to_string());
        rest = &open[close + 1..];
    }

    if groups.is_empty() {
        None
    } else {
        Some(groups)
    }
}
