//! Wondrous (Collatz) sequence
//!
//! Starting from a positive term, an even term is halved and an odd term
//! becomes `3 * term + 1`. The sequence ends when the term reaches 1.
//! Nobody has proven that every start gets there, so the counter carries an
//! optional step guard.

use std::io::Write;
use std::num::IntErrorKind;

use serde::Serialize;

use crate::common::{Error, Result};

/// Apply one transformation to `term`
pub fn step(term: u64) -> Result<u64> {
    if term % 2 == 0 {
        Ok(term / 2)
    } else {
        term.checked_mul(3)
            .and_then(|t| t.checked_add(1))
            .ok_or(Error::TermOverflow { term })
    }
}

/// Parse a start term typed by the user
///
/// Surrounding whitespace (including the newline from stdin) is ignored.
/// Zero, negative, and non-integer input is rejected.
pub fn parse_start(input: &str) -> Result<u64> {
    let text = input.trim();
    if text.is_empty() {
        return Err(Error::invalid_start(text, "no number given"));
    }

    match text.parse::<u64>() {
        Ok(0) => Err(Error::invalid_start(text, "start term must be at least 1")),
        Ok(start) => Ok(start),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(Error::invalid_start(
            text,
            &format!("start term is too large (maximum {})", u64::MAX),
        )),
        Err(_) if is_negative_integer(text) => {
            Err(Error::invalid_start(text, "start term must be a positive integer"))
        }
        Err(_) => Err(Error::invalid_start(text, "not an integer")),
    }
}

fn is_negative_integer(text: &str) -> bool {
    text.strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Lazy iterator over the terms of one sequence, `start` and the final 1 included
#[derive(Debug)]
pub struct Terms {
    next: Option<Result<u64>>,
}

impl Iterator for Terms {
    type Item = Result<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.next.take()?;
        if let Ok(term) = item {
            if term > 1 {
                self.next = Some(step(term));
            }
        }
        Some(item)
    }
}

/// Iterate the sequence from `start`
///
/// `terms(0)` is empty; validate user input with [`parse_start`].
pub fn terms(start: u64) -> Terms {
    Terms {
        next: (start > 0).then_some(Ok(start)),
    }
}

/// Counts (and optionally prints) the terms of a sequence
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceCounter {
    /// Maximum number of transformations before giving up; `None` never gives up
    pub max_steps: Option<u64>,
}

impl SequenceCounter {
    pub fn new(max_steps: Option<u64>) -> Self {
        Self { max_steps }
    }

    /// Counter with no step guard
    pub fn unbounded() -> Self {
        Self { max_steps: None }
    }

    /// Visit every term in order and return the term count
    fn walk(&self, start: u64, mut visit: impl FnMut(u64) -> Result<()>) -> Result<u64> {
        if start == 0 {
            return Err(Error::invalid_start("0", "start term must be at least 1"));
        }

        let _span = tracing::debug_span!("sequence", start).entered();
        let mut count: u64 = 0;

        for term in terms(start) {
            let term = term?;
            // `count` transformations have produced this term
            if let Some(limit) = self.max_steps {
                if count > limit {
                    tracing::warn!(start, limit, "step guard tripped");
                    return Err(Error::NonTerminatingSequence {
                        start,
                        steps: limit,
                    });
                }
            }
            visit(term)?;
            count += 1;
        }

        tracing::debug!(count, "sequence reached 1");
        Ok(count)
    }

    /// Number of terms from `start` down to 1, both inclusive
    pub fn count(&self, start: u64) -> Result<u64> {
        self.walk(start, |_| Ok(()))
    }

    /// All terms from `start` down to 1
    pub fn collect(&self, start: u64) -> Result<Vec<u64>> {
        let mut all = Vec::new();
        self.walk(start, |term| {
            all.push(term);
            Ok(())
        })?;
        Ok(all)
    }

    /// Write one term per line followed by a blank line; returns the term count
    pub fn print<W: Write>(&self, start: u64, out: &mut W) -> Result<u64> {
        let count = self.walk(start, |term| {
            writeln!(out, "{term}")?;
            Ok(())
        })?;
        writeln!(out)?;
        Ok(count)
    }

    /// Build a serializable report of the whole sequence
    pub fn report(&self, start: u64) -> Result<SequenceReport> {
        let terms = self.collect(start)?;
        Ok(SequenceReport {
            start,
            count: terms.len() as u64,
            terms,
        })
    }
}

/// One computed sequence, as emitted by `--json`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SequenceReport {
    pub start: u64,
    pub terms: Vec<u64>,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed(start: u64) -> (String, u64) {
        let mut out = Vec::new();
        let count = SequenceCounter::unbounded().print(start, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), count)
    }

    #[test]
    fn test_step_rules() {
        assert_eq!(step(6).unwrap(), 3);
        assert_eq!(step(3).unwrap(), 10);
        assert_eq!(step(1).unwrap(), 4);
    }

    #[test]
    fn test_step_overflow() {
        let err = step(u64::MAX).unwrap_err();
        assert!(matches!(err, Error::TermOverflow { term } if term == u64::MAX));
    }

    #[test]
    fn test_start_of_one() {
        let (output, count) = printed(1);
        assert_eq!(count, 1);
        assert_eq!(output, "1\n\n");
    }

    #[test]
    fn test_start_of_six() {
        let (output, count) = printed(6);
        assert_eq!(count, 9);
        assert_eq!(output, "6\n3\n10\n5\n16\n8\n4\n2\n1\n\n");
    }

    #[test]
    fn test_start_of_seven() {
        assert_eq!(SequenceCounter::unbounded().count(7).unwrap(), 17);
    }

    #[test]
    fn test_known_long_sequence() {
        // 27 climbs to 9232 before coming down
        let all = SequenceCounter::unbounded().collect(27).unwrap();
        assert_eq!(all.len(), 112);
        assert_eq!(all.iter().max(), Some(&9232));
    }

    #[test]
    fn test_only_last_term_is_one() {
        for start in 1..=500 {
            let all = SequenceCounter::unbounded().collect(start).unwrap();
            let (last, rest) = all.split_last().unwrap();
            assert_eq!(*last, 1);
            assert!(rest.iter().all(|&t| t > 1), "start {start}");
        }
    }

    #[test]
    fn test_repeat_calls_agree() {
        assert_eq!(printed(97), printed(97));
    }

    #[test]
    fn test_terms_is_lazy() {
        let first: Vec<u64> = terms(7).take(3).map(|t| t.unwrap()).collect();
        assert_eq!(first, vec![7, 22, 11]);
        assert_eq!(terms(0).count(), 0);
    }

    #[test]
    fn test_terms_stops_after_overflow() {
        let mut it = terms(u64::MAX);
        assert_eq!(it.next().unwrap().unwrap(), u64::MAX);
        assert!(matches!(it.next(), Some(Err(Error::TermOverflow { .. }))));
        assert!(it.next().is_none());
    }

    #[test]
    fn test_print_keeps_terms_before_overflow() {
        let mut out = Vec::new();
        let err = SequenceCounter::unbounded()
            .print(12297829382473034411, &mut out)
            .unwrap_err();
        assert!(matches!(err, Error::TermOverflow { term: 12297829382473034411 }));
        assert_eq!(String::from_utf8(out).unwrap(), "12297829382473034411\n");
    }

    #[test]
    fn test_step_guard() {
        // 6 needs exactly 8 transformations
        assert_eq!(SequenceCounter::new(Some(8)).count(6).unwrap(), 9);

        let err = SequenceCounter::new(Some(7)).count(6).unwrap_err();
        assert!(matches!(
            err,
            Error::NonTerminatingSequence { start: 6, steps: 7 }
        ));

        assert_eq!(SequenceCounter::new(Some(0)).count(1).unwrap(), 1);
    }

    #[test]
    fn test_counter_rejects_zero() {
        let err = SequenceCounter::unbounded().count(0).unwrap_err();
        assert!(matches!(err, Error::InvalidStart { .. }));
    }

    #[test]
    fn test_parse_start() {
        assert_eq!(parse_start("6\n").unwrap(), 6);
        assert_eq!(parse_start("  27 ").unwrap(), 27);
        assert!(matches!(parse_start("0"), Err(Error::InvalidStart { .. })));
        assert!(matches!(parse_start("-5"), Err(Error::InvalidStart { .. })));
        assert!(matches!(parse_start("2.5"), Err(Error::InvalidStart { .. })));
        assert!(matches!(parse_start("six"), Err(Error::InvalidStart { .. })));
        assert!(matches!(parse_start(""), Err(Error::InvalidStart { .. })));
    }

    #[test]
    fn test_parse_start_reasons() {
        let negative = parse_start("-5").unwrap_err().to_string();
        assert!(negative.contains("positive"));
        let text = parse_start("six").unwrap_err().to_string();
        assert!(text.contains("not an integer"));

        let just_over = parse_start("18446744073709551616").unwrap_err().to_string();
        assert!(just_over.contains("too large (maximum 18446744073709551615)"));
        let huge = parse_start(&format!("1{}", "0".repeat(42))).unwrap_err().to_string();
        assert!(huge.contains("too large"));
        let huge_negative = parse_start(&format!("-1{}", "0".repeat(42)))
            .unwrap_err()
            .to_string();
        assert!(huge_negative.contains("positive"));
        assert!(parse_start("-").unwrap_err().to_string().contains("not an integer"));
    }

    #[test]
    fn test_report() {
        let report = SequenceCounter::unbounded().report(6).unwrap();
        assert_eq!(report.count, 9);
        assert_eq!(report.terms.first(), Some(&6));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["count"], 9);
        assert_eq!(json["start"], 6);
    }
}
