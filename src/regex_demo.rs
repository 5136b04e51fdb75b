//! Regular expression matching and substitution demo

use std::io::Write;

use regex::Regex;

use crate::common::{Error, Result};

/// Integer and fraction parts of a decimal number
pub const DECIMAL_PATTERN: &str = r"(\d+)\.(\d+)";

pub const DEFAULT_NUMBER: &str = "18.1632";
pub const DEFAULT_LINE: &str = "The cat sat on a hat";

/// Substitutions applied to [`DEFAULT_LINE`] when none are given
pub fn default_substitutions() -> Vec<Substitution> {
    vec![
        Substitution::new("cat", "dog"),
        Substitution::new("hat", "watermelon"),
    ]
}

/// One `pattern -> replacement` rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub pattern: String,
    pub replacement: String,
}

impl Substitution {
    pub fn new(pattern: &str, replacement: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
        }
    }

    /// Parse `PATTERN=REPLACEMENT`, splitting at the first `=`
    pub fn parse(s: &str) -> Result<Self> {
        match s.split_once('=') {
            Some((pattern, replacement)) if !pattern.is_empty() => {
                Ok(Self::new(pattern, replacement))
            }
            _ => Err(Error::InvalidSubstitution(s.to_string())),
        }
    }
}

/// Split a decimal number into its integer and fraction digits
///
/// The match must start at the beginning of `text`; trailing text is ignored.
pub fn split_decimal(text: &str) -> Result<(String, String)> {
    let re = Regex::new(&format!("^(?:{DECIMAL_PATTERN})"))?;
    let caps = re
        .captures(text)
        .ok_or_else(|| Error::no_match(DECIMAL_PATTERN, text))?;

    Ok((caps[1].to_string(), caps[2].to_string()))
}

/// Apply each substitution in order, replacing every occurrence
pub fn substitute(line: &str, subs: &[Substitution]) -> Result<String> {
    let mut result = line.to_string();
    for sub in subs {
        let re = Regex::new(&sub.pattern)?;
        result = re.replace_all(&result, sub.replacement.as_str()).into_owned();
        tracing::trace!(pattern = %sub.pattern, %result, "applied substitution");
    }
    Ok(result)
}

/// Print the match and substitution results
pub fn run<W: Write>(number: &str, line: &str, subs: &[Substitution], out: &mut W) -> Result<()> {
    let (integer, fraction) = split_decimal(number)?;
    writeln!(out, "Int:{integer} Frac:{fraction}")?;
    writeln!(out, "{}", substitute(line, subs)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_decimal() {
        assert_eq!(
            split_decimal("18.1632").unwrap(),
            ("18".to_string(), "1632".to_string())
        );
        assert_eq!(
            split_decimal("3.14 is pi").unwrap(),
            ("3".to_string(), "14".to_string())
        );
    }

    #[test]
    fn test_split_decimal_is_anchored() {
        let err = split_decimal("pi is 3.14").unwrap_err();
        assert!(matches!(err, Error::NoMatch { .. }));
        assert!(split_decimal("42").is_err());
    }

    #[test]
    fn test_default_substitutions() {
        let line = substitute(DEFAULT_LINE, &default_substitutions()).unwrap();
        assert_eq!(line, "The dog sat on a watermelon");
    }

    #[test]
    fn test_substitutions_apply_in_order() {
        let subs = [Substitution::new("a", "b"), Substitution::new("b", "c")];
        assert_eq!(substitute("ab", &subs).unwrap(), "cc");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = substitute("x", &[Substitution::new("(", "y")]).unwrap_err();
        assert!(matches!(err, Error::Regex(_)));
    }

    #[test]
    fn test_parse_substitution() {
        assert_eq!(
            Substitution::parse("cat=dog").unwrap(),
            Substitution::new("cat", "dog")
        );
        assert_eq!(
            Substitution::parse("a=b=c").unwrap(),
            Substitution::new("a", "b=c")
        );
        assert_eq!(
            Substitution::parse("gone=").unwrap(),
            Substitution::new("gone", "")
        );
        assert!(Substitution::parse("nodelimiter").is_err());
        assert!(Substitution::parse("=x").is_err());
    }

    #[test]
    fn test_run_default_demo() {
        let mut out = Vec::new();
        run(DEFAULT_NUMBER, DEFAULT_LINE, &default_substitutions(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Int:18 Frac:1632\nThe dog sat on a watermelon\n"
        );
    }
}
