//! Data row fields.

use crate::error::{CompareError, CompareResult, Side};

/// Column holding the aligner score
pub const SCORE_COLUMN: usize = 0;
/// Column holding the translated document index
pub const TRANSLATED_COLUMN: usize = 1;
/// Column holding the reference document index
pub const REFERENCE_COLUMN: usize = 2;

/// Whitespace-separated fields of one data row.
///
/// Splitting never fails; columns are looked up lazily so that a caller can
/// decide the order in which missing or malformed columns are reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFields<'a> {
    line: usize,
    side: Side,
    fields: Vec<&'a str>,
}

impl<'a> RowFields<'a> {
    /// Split a raw line
    #[must_use]
    pub fn split(line: usize, side: Side, raw: &'a str) -> Self {
        Self {
            line,
            side,
            fields: raw.split_whitespace().collect(),
        }
    }

    /// Field text at `column`
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::MissingColumn`] if the row is too short
    pub fn column(&self, column: usize) -> CompareResult<&'a str> {
        self.fields
            .get(column)
            .copied()
            .ok_or_else(|| CompareError::MissingColumn {
                line: self.line,
                side: self.side,
                column,
                found: self.fields.len(),
            })
    }

    /// Parsed score
    ///
    /// # Errors
    ///
    /// Returns error if the score column is missing or not a float
    pub fn score(&self) -> CompareResult<f64> {
        let text = self.column(SCORE_COLUMN)?;
        text.parse().map_err(|_| CompareError::InvalidScore {
            line: self.line,
            side: self.side,
            value: text.to_string(),
        })
    }

    /// Translated document index
    ///
    /// # Errors
    ///
    /// Returns error if the column is missing
    pub fn translated_index(&self) -> CompareResult<&'a str> {
        self.column(TRANSLATED_COLUMN)
    }

    /// Reference document index
    ///
    /// # Errors
    ///
    /// Returns error if the column is missing
    pub fn reference_index(&self) -> CompareResult<&'a str> {
        self.column(REFERENCE_COLUMN)
    }
}
