//! Fibonacci series printer

use std::io::Write;

use crate::common::Result;

/// Line printed after the series
pub const SIGN_OFF: &str = "^_^";

/// Iterator over the Fibonacci terms `1, 1, 2, 3, 5, ...` below a limit
#[derive(Debug, Clone)]
pub struct Fibonacci {
    a: u64,
    b: Option<u64>,
    limit: u64,
}

impl Fibonacci {
    /// Terms strictly below `limit`
    pub fn below(limit: u64) -> Self {
        Self {
            a: 0,
            b: Some(1),
            limit,
        }
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let b = self.b.filter(|&b| b < self.limit)?;
        // overflow ends the series; the next term would be past any limit
        self.b = self.a.checked_add(b);
        self.a = b;
        Some(b)
    }
}

/// Write the series on one line, then the sign-off; returns the term count
pub fn print_series<W: Write>(limit: u64, out: &mut W) -> Result<usize> {
    let mut count = 0;
    for term in Fibonacci::below(limit) {
        if count > 0 {
            write!(out, " ")?;
        }
        write!(out, "{term}")?;
        count += 1;
    }
    writeln!(out)?;
    writeln!(out, "{SIGN_OFF}")?;

    tracing::debug!(limit, count, "printed fibonacci series");
    Ok(count)
}
