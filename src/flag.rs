//! ASCII flag renderer
//!
//! Draws a rectangular field crossed by one horizontal and one vertical bar
//! of blank pixels. The defaults give the Danish flag.

use std::io::Write;

use crate::common::config::FlagConfig;
use crate::common::{Error, Result};

/// Dimensions and characters of a cross flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSpec {
    pub width: usize,
    pub height: usize,
    pub cross_row: usize,
    pub cross_col: usize,
    pub fill: char,
    pub gap: char,
}

impl Default for FlagSpec {
    fn default() -> Self {
        FlagConfig::default().into()
    }
}

impl From<FlagConfig> for FlagSpec {
    fn from(config: FlagConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            cross_row: config.cross_row,
            cross_col: config.cross_col,
            fill: config.fill,
            gap: config.gap,
        }
    }
}

impl FlagSpec {
    /// Replace any dimension that was given explicitly
    pub fn with_overrides(
        mut self,
        width: Option<usize>,
        height: Option<usize>,
        cross_row: Option<usize>,
        cross_col: Option<usize>,
    ) -> Self {
        self.width = width.unwrap_or(self.width);
        self.height = height.unwrap_or(self.height);
        self.cross_row = cross_row.unwrap_or(self.cross_row);
        self.cross_col = cross_col.unwrap_or(self.cross_col);
        self
    }

    /// Reject flags with nothing to draw
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!(
                "flag must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Character at the given position
    pub fn pixel(&self, col: usize, row: usize) -> char {
        if row != self.cross_row && col != self.cross_col {
            self.fill
        } else {
            self.gap
        }
    }

    /// The whole flag, one newline-terminated line per row
    pub fn render(&self) -> Result<String> {
        self.validate()?;

        let mut text = String::with_capacity((self.width + 1) * self.height);
        for row in 0..self.height {
            for col in 0..self.width {
                text.push(self.pixel(col, row));
            }
            text.push('\n');
        }
        Ok(text)
    }

    /// Render to a writer
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(self.render()?.as_bytes())?;
        Ok(())
    }

    /// Short description for logs, e.g. `12x5 cross@(2,2)`
    pub fn describe(&self) -> String {
        format!(
            "{}x{} cross@({},{})",
            self.width, self.height, self.cross_col, self.cross_row
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_danish_flag() {
        let expected = [
            "** *********",
            "** *********",
            "            ",
            "** *********",
            "** *********",
        ]
        .map(|line| format!("{line}\n"))
        .concat();
        assert_eq!(FlagSpec::default().render().unwrap(), expected);
    }

    #[test]
    fn test_pixel() {
        let flag = FlagSpec::default();
        assert_eq!(flag.pixel(0, 0), '*');
        assert_eq!(flag.pixel(2, 0), ' ');
        assert_eq!(flag.pixel(5, 2), ' ');
        assert_eq!(flag.pixel(11, 4), '*');
    }

    #[test]
    fn test_cross_outside_flag() {
        let flag = FlagSpec {
            width: 3,
            height: 2,
            cross_row: 10,
            cross_col: 10,
            fill: '#',
            gap: '.',
        };
        assert_eq!(flag.render().unwrap(), "###\n###\n");
    }

    #[test]
    fn test_zero_size_rejected() {
        let flag = FlagSpec {
            width: 0,
            ..FlagSpec::default()
        };
        assert!(matches!(flag.render(), Err(Error::Config(_))));
    }

    #[test]
    fn test_overrides_keep_unset_fields() {
        let flag = FlagSpec::default().with_overrides(Some(4), None, None, Some(0));
        assert_eq!(flag.width, 4);
        assert_eq!(flag.height, 5);
        assert_eq!(flag.cross_col, 0);
        assert_eq!(flag.render().unwrap().lines().next(), Some(" ***"));
    }

    #[test]
    fn test_describe() {
        assert_eq!(FlagSpec::default().describe(), "12x5 cross@(2,2)");
    }
}
