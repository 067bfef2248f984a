//! FILENAME: parser/src/address.rs
//! PURPOSE: The normalized rectangular range address produced by the parser.
//! CONTEXT: A RangeAddress describes a rectangle within a worksheet. Any of
//! its four bounds may be open (None); open bounds are resolved against the
//! worksheet's extent when the range is read, not at parse time.

use crate::coord::index_to_col;

/// A parsed range address. All coordinates are 0-based; rows appear 1-based
/// only in address text. Each bound is independently optional:
/// "B:D" has rows open in both directions, "B3:D" has only the end row open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeAddress {
    /// Worksheet qualifier ("Sheet1!B2:D4"). None targets the main worksheet.
    pub sheet: Option<String>,
    pub start_col: Option<u32>,
    pub start_row: Option<u32>,
    pub end_col: Option<u32>,
    pub end_row: Option<u32>,
}

impl RangeAddress {
    /// A single-cell address: all four bounds fixed to (x, y).
    pub fn cell(x: u32, y: u32) -> Self {
        RangeAddress {
            sheet: None,
            start_col: Some(x),
            start_row: Some(y),
            end_col: Some(x),
            end_row: Some(y),
        }
    }

    /// A fully bounded rectangle from (x1, y1) to (x2, y2) inclusive.
    pub fn rect(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        RangeAddress {
            sheet: None,
            start_col: Some(x1.min(x2)),
            start_row: Some(y1.min(y2)),
            end_col: Some(x1.max(x2)),
            end_row: Some(y1.max(y2)),
        }
    }

    /// Attaches a sheet qualifier.
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    /// True if all four bounds are fixed and describe exactly one cell.
    pub fn is_single_cell(&self) -> bool {
        self.start_col.is_some()
            && self.start_col == self.end_col
            && self.start_row.is_some()
            && self.start_row == self.end_row
    }

    /// True if all four bounds are fixed.
    pub fn is_bounded(&self) -> bool {
        self.start_col.is_some()
            && self.start_row.is_some()
            && self.end_col.is_some()
            && self.end_row.is_some()
    }

    /// Formats one corner of the address ("B3", "B", or "3").
    fn fmt_corner(col: Option<u32>, row: Option<u32>, out: &mut String) {
        if let Some(c) = col {
            out.push_str(&index_to_col(c));
        }
        if let Some(r) = row {
            out.push_str(&(r + 1).to_string());
        }
    }
}

impl std::fmt::Display for RangeAddress {
    /// Reproduces the canonical address text. Parsing the output resolves
    /// to the same rectangle as the original input.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut text = String::new();

        if let Some(ref sheet) = self.sheet {
            if needs_quoting(sheet) {
                text.push('\'');
                text.push_str(&sheet.replace('\'', "''"));
                text.push('\'');
            } else {
                text.push_str(sheet);
            }
            text.push('!');
        }

        if self.is_single_cell() {
            Self::fmt_corner(self.start_col, self.start_row, &mut text);
        } else {
            Self::fmt_corner(self.start_col, self.start_row, &mut text);
            text.push(':');
            Self::fmt_corner(self.end_col, self.end_row, &mut text);
        }

        f.write_str(&text)
    }
}

/// Returns true if a sheet name cannot appear unquoted in address text.
fn needs_quoting(name: &str) -> bool {
    name.is_empty()
        || name.chars().next().is_some_and(|c| c.is_ascii_digit())
        || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cell_display() {
        assert_eq!(RangeAddress::cell(0, 0).to_string(), "A1");
        assert_eq!(RangeAddress::cell(1, 2).to_string(), "B3");
    }

    #[test]
    fn test_rect_display() {
        assert_eq!(RangeAddress::rect(0, 0, 2, 9).to_string(), "A1:C10");
    }

    #[test]
    fn test_rect_normalizes_corners() {
        assert_eq!(RangeAddress::rect(2, 9, 0, 0), RangeAddress::rect(0, 0, 2, 9));
    }

    #[test]
    fn test_sheet_quoting() {
        let plain = RangeAddress::cell(0, 0).with_sheet("Sheet1");
        assert_eq!(plain.to_string(), "Sheet1!A1");

        let spaced = RangeAddress::cell(0, 0).with_sheet("Quali Schedule");
        assert_eq!(spaced.to_string(), "'Quali Schedule'!A1");

        let quoted = RangeAddress::cell(0, 0).with_sheet("John's Sheet");
        assert_eq!(quoted.to_string(), "'John''s Sheet'!A1");
    }

    #[test]
    fn test_open_bounds_display() {
        let cols_only = RangeAddress {
            sheet: None,
            start_col: Some(1),
            start_row: None,
            end_col: Some(3),
            end_row: None,
        };
        assert_eq!(cols_only.to_string(), "B:D");

        let rows_only = RangeAddress {
            sheet: None,
            start_col: None,
            start_row: Some(1),
            end_col: None,
            end_row: Some(3),
        };
        assert_eq!(rows_only.to_string(), "2:4");

        let half_open = RangeAddress {
            sheet: None,
            start_col: Some(1),
            start_row: Some(2),
            end_col: Some(3),
            end_row: None,
        };
        assert_eq!(half_open.to_string(), "B3:D");
    }
}
