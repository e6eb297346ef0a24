//! Comparison report and diagnostic rendering.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Reason a line pair was flagged
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MismatchKind {
    /// Header lines are not identical
    Header,
    /// Score delta above tolerance
    Score {
        /// Absolute score difference
        delta: f64,
    },
    /// Translated index column differs
    TranslatedIndex,
    /// Reference index column differs
    ReferenceIndex,
}

/// A flagged line pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mismatch {
    /// 0-based line number
    pub line: usize,
    /// Raw line from the first input
    pub left: String,
    /// Raw line from the second input
    pub right: String,
    /// Checks that triggered, in evaluation order
    pub kinds: Vec<MismatchKind>,
}

impl Mismatch {
    /// Write the three-line diagnostic for this mismatch.
    ///
    /// Each raw line follows its `< ` or `> ` prefix unchanged. A line with no
    /// trailing `\n` (the last line of a file) gets one appended, so the
    /// diagnostic is always three lines.
    ///
    /// # Errors
    ///
    /// Returns error if the writer fails
    pub fn write_diagnostic<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "--- Line {} ---", self.line)?;
        write_prefixed(out, "< ", &self.left)?;
        write_prefixed(out, "> ", &self.right)
    }

    /// Diagnostic as a string
    #[must_use]
    pub fn diagnostic(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_diagnostic(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn write_prefixed<W: Write + ?Sized>(out: &mut W, prefix: &str, raw: &str) -> io::Result<()> {
    out.write_all(prefix.as_bytes())?;
    out.write_all(raw.as_bytes())?;
    if !raw.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Outcome of comparing two inputs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompareReport {
    /// Number of line pairs compared
    pub lines_compared: usize,
    /// Flagged line pairs, in line order
    pub mismatches: Vec<Mismatch>,
    /// Largest score delta seen over all data rows
    pub max_score_delta: Option<f64>,
    /// One input had lines left after the other ended
    pub length_mismatch: bool,
}

impl CompareReport {
    /// Create an empty report
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any line pair differed
    #[must_use]
    pub fn has_differences(&self) -> bool {
        !self.mismatches.is_empty()
    }

    /// Whether the comparison passed
    #[must_use]
    pub fn passed(&self) -> bool {
        !self.has_differences()
    }

    /// Number of flagged line pairs
    #[must_use]
    pub fn mismatch_count(&self) -> usize {
        self.mismatches.len()
    }

    /// Record a score delta
    pub fn observe_delta(&mut self, delta: f64) {
        if delta.is_nan() {
            return;
        }
        self.max_score_delta = Some(match self.max_score_delta {
            Some(max) => max.max(delta),
            None => delta,
        });
    }

    /// Get summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Comparison {}: {}/{} line pairs differ",
            if self.passed() { "PASSED" } else { "FAILED" },
            self.mismatch_count(),
            self.lines_compared
        )
    }
}
