//! Negative-number validation and checked summation

use crate::domain::splitter::Term;
use crate::error::{CalcError, Result};

/// Fail if any term is negative, listing every negative in encounter order.
///
/// Runs on unnarrowed terms so negatives outside `i64` are still listed.
pub fn reject_negatives(terms: &[Term<'_>]) -> Result<()> {
    let negatives: Vec<String> = terms
        .iter()
        .filter(|term| term.is_negative())
        .map(ToString::to_string)
        .collect();
    if negatives.is_empty() {
        Ok(())
    } else {
        Err(CalcError::NegativeNumbers(negatives))
    }
}

/// Sum the terms, failing instead of wrapping on overflow.
pub fn checked_sum(terms: &[i64]) -> Result<i64> {
    terms
        .iter()
        .try_fold(0i64, |acc, n| acc.checked_add(*n))
        .ok_or(CalcError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::splitter::parse_terms;

    #[test]
    fn test_no_negatives() {
        assert!(reject_negatives(&parse_terms(&["0", "1", "-0"]).unwrap()).is_ok());
        assert!(reject_negatives(&[]).is_ok());
    }

    #[test]
    fn test_collects_all_negatives_in_order() {
        let terms = parse_terms(&["1", "-3", "4", "-2", "-3"]).unwrap();
        match reject_negatives(&terms) {
            Err(CalcError::NegativeNumbers(found)) => assert_eq!(found, vec!["-3", "-2", "-3"]),
            other => panic!("Expected NegativeNumbers, got {other:?}"),
        }
    }

    #[test]
    fn test_negatives_beyond_i64_are_listed() {
        let terms = parse_terms(&["1", "-99999999999999999999", "99999999999999999999"]).unwrap();
        match reject_negatives(&terms) {
            Err(CalcError::NegativeNumbers(found)) => {
                assert_eq!(found, vec!["-99999999999999999999"])
            }
            other => panic!("Expected NegativeNumbers, got {other:?}"),
        }
    }

    #[test]
    fn test_sum() {
        assert_eq!(checked_sum(&[]).unwrap(), 0);
        assert_eq!(checked_sum(&[1, 2, 3]).unwrap(), 6);
    }

    #[test]
    fn test_sum_overflow() {
        assert!(matches!(
            checked_sum(&[i64::MAX, 1]),
            Err(CalcError::Overflow)
        ));
    }
}
