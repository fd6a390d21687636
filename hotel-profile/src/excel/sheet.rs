//! Read-only view of the first worksheet of an xlsx workbook
//!
//! The first sheet in workbook order is read, not whichever sheet was active
//! when the file was last saved. Exports and templates only ever hold one
//! sheet, and a workbook edited by hand keeps its data on the first one unless
//! sheets were added in front of it.
//!
//! Cells are addressed the way spreadsheet users see them: 1-based row numbers
//! and column letters. Row 1 is the header row.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Data, Range, Reader, Xlsx};
use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_INT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("leading integer pattern is valid"));

/// The active (first) sheet of a workbook
#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    range: Range<Data>,
}

impl Sheet {
    /// Parse an xlsx byte stream
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut workbook = Xlsx::new(Cursor::new(bytes.to_vec()))
            .context("Failed to read workbook")?;

        let name = workbook
            .sheet_names()
            .first()
            .context("Excel file has no sheets")?
            .clone();

        let range = workbook
            .worksheet_range(&name)
            .with_context(|| format!("Failed to read sheet: {}", name))?;

        Ok(Sheet { name, range })
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;
        Self::from_bytes(&bytes)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of the last row holding any cell, 0 for an empty sheet
    pub fn highest_row(&self) -> u32 {
        self.range.end().map(|(row, _)| row + 1).unwrap_or(0)
    }

    /// Raw cell at `row` (1-based) and `column` (letters)
    pub fn cell(&self, row: u32, column: &str) -> Option<&Data> {
        if row == 0 {
            return None;
        }
        let col = column_index(column)?;
        self.range.get_value((row - 1, col))
    }

    /// Cell rendered as text; empty cells are `None`
    pub fn text(&self, row: u32, column: &str) -> Option<String> {
        self.cell(row, column).and_then(cell_text)
    }

    /// Cell cast to an integer, 0 when it holds nothing numeric
    pub fn int(&self, row: u32, column: &str) -> i64 {
        self.cell(row, column).map(cell_int).unwrap_or(0)
    }
}

/// Zero-based index of a column given by letters ("A" = 0, "AA" = 26)
pub fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }

    let mut index: u32 = 0;
    for ch in letters.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let digit = (ch.to_ascii_uppercase() as u32) - ('A' as u32) + 1;
        index = index.checked_mul(26)?.checked_add(digit)?;
    }

    Some(index - 1)
}

/// Text of a cell; strings are kept verbatim, whole floats lose their ".0"
pub fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => {
            if f.is_finite() && f.fract() == 0.0 {
                Some((*f as i64).to_string())
            } else {
                Some(f.to_string())
            }
        }
        Data::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Best-effort integer cast: numbers truncate, text uses its leading integer
/// prefix, anything else is 0
pub fn cell_int(cell: &Data) -> i64 {
    match cell {
        Data::Int(i) => *i,
        Data::Float(f) if f.is_nan() => 0,
        Data::Float(f) => f.trunc() as i64,
        Data::Bool(b) => i64::from(*b),
        Data::String(s) => leading_int(s),
        _ => 0,
    }
}

fn leading_int(s: &str) -> i64 {
    let Some(caps) = LEADING_INT.captures(s) else {
        return 0;
    };
    let digits = &caps[1];
    digits.parse().unwrap_or(if digits.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    })
}

#[cfg(test)]
impl Sheet {
    /// Rows that contain at least one non-empty cell
    pub(crate) fn populated_rows(&self) -> usize {
        (1..=self.highest_row())
            .filter(|&row| {
                let Some((_, last_col)) = self.range.end() else {
                    return false;
                };
                (0..=last_col).any(|col| {
                    self.range
                        .get_value((row - 1, col))
                        .is_some_and(|c| cell_text(c).is_some())
                })
            })
            .count()
    }
}
