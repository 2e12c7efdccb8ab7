//! Number splitting and integer conversion

use regex::{Regex, RegexBuilder};
use std::fmt;
use std::sync::OnceLock;

use crate::domain::delimiter::Delimiters;
use crate::error::{CalcError, Result};

static SIGNED_INTEGER: OnceLock<Regex> = OnceLock::new();

/// Pattern matching a maximal run of ASCII digits with an optional leading minus.
fn signed_integer() -> &'static Regex {
    SIGNED_INTEGER
        .get_or_init(|| Regex::new(r"-?[0-9]+").expect("signed integer pattern is valid"))
}

/// Compiled-size allowance per byte of delimiter text. A single literal
/// byte costs well under this in both the forward and reverse automata.
const COMPILED_BYTES_PER_LITERAL_BYTE: usize = 256;

/// Floor for the compiled-size limit, matching the regex crate default.
const MIN_COMPILED_SIZE: usize = 10 * (1 << 20);

/// Build a pattern matching any of the literal delimiters.
///
/// Longer delimiters are tried first so `**` wins over `*` at the same position.
/// The compiled-size limit grows with the delimiter text, whose length is
/// already bounded by the input size limit.
fn delimiter_pattern(literals: &[String]) -> Result<Regex> {
    let mut ordered: Vec<&str> = literals.iter().map(String::as_str).collect();
    ordered.sort_by(|a, b| b.len().cmp(&a.len()));

    let literal_bytes: usize = ordered.iter().map(|literal| literal.len()).sum();
    let size_limit = literal_bytes
        .saturating_mul(COMPILED_BYTES_PER_LITERAL_BYTE)
        .max(MIN_COMPILED_SIZE);

    let alternation = ordered
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");

    RegexBuilder::new(&alternation)
        .size_limit(size_limit)
        .build()
        .map_err(|e| CalcError::InvalidDelimiter(format!("{}: {e}", literals.join(""))))
}

/// Split `body` into non-empty tokens under the given delimiters.
///
/// Default mode scans for signed-digit runs and ignores everything else.
/// Custom mode splits on every delimiter occurrence and drops empty tokens.
pub fn split<'a>(body: &'a str, delimiters: &Delimiters) -> Result<Vec<&'a str>> {
    match delimiters {
        Delimiters::Default => Ok(signed_integer()
            .find_iter(body)
            .map(|m| m.as_str())
            .collect()),
        Delimiters::Custom(literals) => {
            let pattern = delimiter_pattern(literals)?;
            Ok(pattern
                .split(body)
                .filter(|token| !token.is_empty())
                .collect())
        }
    }
}

/// A token that reads as a signed decimal integer of any magnitude.
///
/// The sign is known before the value is narrowed to `i64`, so negatives can be
/// reported even when they do not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term<'a> {
    negative: bool,
    digits: &'a str,
}

impl Term<'_> {
    /// True for values below zero. `-0` is zero.
    pub fn is_negative(&self) -> bool {
        self.negative && !self.magnitude().is_empty()
    }

    /// Narrow to `i64`, failing with `Overflow` when out of range.
    pub fn to_i64(&self) -> Result<i64> {
        let magnitude = self.magnitude();
        if magnitude.is_empty() {
            return Ok(0);
        }
        let text = if self.negative {
            format!("-{magnitude}")
        } else {
            magnitude.to_string()
        };
        // digits are already validated, so parsing can only overflow
        text.parse::<i64>().map_err(|_| CalcError::Overflow)
    }

    fn magnitude(&self) -> &str {
        self.digits.trim_start_matches('0')
    }
}

impl fmt::Display for Term<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.magnitude() {
            "" => write!(f, "0"),
            magnitude if self.negative => write!(f, "-{magnitude}"),
            magnitude => write!(f, "{magnitude}"),
        }
    }
}

/// Read every token as an integer, failing on the first token that is not one.
pub fn parse_terms<'a>(tokens: &[&'a str]) -> Result<Vec<Term<'a>>> {
    tokens.iter().copied().map(parse_term).collect()
}

/// Narrow validated terms to `i64`.
pub fn narrow(terms: &[Term<'_>]) -> Result<Vec<i64>> {
    terms.iter().map(Term::to_i64).collect()
}

fn parse_term<'a>(token: &'a str) -> Result<Term<'a>> {
    let trimmed = token.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalcError::Format {
            token: token.to_string(),
        });
    }

    Ok(Term { negative, digits })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(literals: &[&str]) -> Delimiters {
        Delimiters::Custom(literals.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_default_scans_signed_runs() {
        let tokens = split("1\n2,3", &Delimiters::Default).unwrap();
        assert_eq!(tokens, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_default_ignores_repeated_and_stray_separators() {
        let tokens = split(",,1,\n\n,2,", &Delimiters::Default).unwrap();
        assert_eq!(tokens, vec!["1", "2"]);
    }

    #[test]
    fn test_default_keeps_minus_sign() {
        let tokens = split("1,-2\n-30", &Delimiters::Default).unwrap();
        assert_eq!(tokens, vec!["1", "-2", "-30"]);
    }

    #[test]
    fn test_default_ignores_non_numeric_text() {
        let tokens = split("a1b22;c", &Delimiters::Default).unwrap();
        assert_eq!(tokens, vec!["1", "22"]);
    }

    #[test]
    fn test_default_empty_body() {
        assert!(split("", &Delimiters::Default).unwrap().is_empty());
    }

    #[test]
    fn test_custom_discards_empty_tokens() {
        let delimiters = custom(&[";"]);
        assert_eq!(split(";1;;2;", &delimiters).unwrap(), vec!["1", "2"]);
        assert!(split(";;", &delimiters).unwrap().is_empty());
        assert!(split("", &delimiters).unwrap().is_empty());
    }

    #[test]
    fn test_custom_multiple_delimiters() {
        let delimiters = custom(&["***", "###"]);
        assert_eq!(
            split("1***2###3", &delimiters).unwrap(),
            vec!["1", "2", "3"]
        );
    }

    #[test]
    fn test_custom_delimiters_are_literal() {
        let delimiters = custom(&[".", "|"]);
        assert_eq!(split("1.2|3", &delimiters).unwrap(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_custom_longest_delimiter_wins() {
        let delimiters = custom(&["*", "**"]);
        assert_eq!(split("1**2*3", &delimiters).unwrap(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_custom_newline_is_not_a_separator() {
        let delimiters = custom(&[";"]);
        assert_eq!(split("1;2\n3", &delimiters).unwrap(), vec!["1", "2\n3"]);
    }

    fn values(tokens: &[&str]) -> Result<Vec<i64>> {
        narrow(&parse_terms(tokens)?)
    }

    #[test]
    fn test_parse_terms() {
        assert_eq!(values(&["1", "-2", "30", "+4"]).unwrap(), vec![1, -2, 30, 4]);
        assert!(values(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_parse_terms_tolerates_surrounding_whitespace() {
        assert_eq!(values(&[" 4 ", "5\n"]).unwrap(), vec![4, 5]);
    }

    #[test]
    fn test_parse_terms_format_error_names_token() {
        for bad in ["x2", "-", "+", " ", "1-2", "--1"] {
            match parse_terms(&["1", bad]) {
                Err(CalcError::Format { token }) => assert_eq!(token, bad),
                other => panic!("Expected Format error for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_term_sign_is_known_without_narrowing() {
        let terms = parse_terms(&["-99999999999999999999", "99999999999999999999", "-0"]).unwrap();
        assert!(terms[0].is_negative());
        assert!(!terms[1].is_negative());
        assert!(!terms[2].is_negative());
        assert_eq!(terms[0].to_string(), "-99999999999999999999");
    }

    #[test]
    fn test_term_display_drops_leading_zeros() {
        let terms = parse_terms(&["-007", "000", "-000", "042"]).unwrap();
        let shown: Vec<String> = terms.iter().map(ToString::to_string).collect();
        assert_eq!(shown, vec!["-7", "0", "0", "42"]);
    }

    #[test]
    fn test_narrow_bounds() {
        assert_eq!(
            values(&["9223372036854775807", "-9223372036854775808"]).unwrap(),
            vec![i64::MAX, i64::MIN]
        );
        assert!(matches!(
            values(&["9223372036854775808"]),
            Err(CalcError::Overflow)
        ));
        assert!(matches!(
            values(&["-99999999999999999999"]),
            Err(CalcError::Overflow)
        ));
    }

    #[test]
    fn test_custom_long_delimiter_compiles() {
        let long = "ab".repeat(300_000);
        let delimiters = custom(&[long.as_str(), ";"]);
        let body = format!("1{long}2;3");
        assert_eq!(split(&body, &delimiters).unwrap(), vec!["1", "2", "3"]);
    }
}
