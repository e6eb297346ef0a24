//! Line-by-line comparison of aligner outputs.

use crate::error::{CompareError, CompareResult, Side};
use crate::report::{CompareReport, Mismatch, MismatchKind};
use crate::row::RowFields;
use crate::tolerance::Tolerance;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use tracing::{debug, info};

/// Comparator configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Maximum allowed score difference
    pub tolerance: Tolerance,
}

impl CompareConfig {
    /// Config with the given tolerance
    #[must_use]
    pub fn with_tolerance(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }
}

/// Compares two line sequences in lockstep.
///
/// Line 0 is a header compared verbatim. Every later line is a data row:
/// the score column is compared within the tolerance and both index columns
/// exactly. Pairing stops at the shorter input.
#[derive(Debug, Clone, Default)]
pub struct LineComparator {
    config: CompareConfig,
}

impl LineComparator {
    /// Create a comparator
    #[must_use]
    pub fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    /// Shorthand for a comparator with only a tolerance
    #[must_use]
    pub fn with_tolerance(tolerance: impl Into<Tolerance>) -> Self {
        Self::new(CompareConfig::with_tolerance(tolerance.into()))
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Compare two line sequences, writing a diagnostic for each differing
    /// pair as soon as it is found.
    ///
    /// # Errors
    ///
    /// Returns error on a read failure, a data row with fewer than three
    /// columns, a non-numeric score, or a failed diagnostic write. Pairs
    /// before the failing line have already been reported.
    pub fn compare<A, B, W>(
        &self,
        left: A,
        right: B,
        diagnostics: &mut W,
    ) -> CompareResult<CompareReport>
    where
        A: IntoIterator<Item = io::Result<String>>,
        B: IntoIterator<Item = io::Result<String>>,
        W: Write + ?Sized,
    {
        let mut left = left.into_iter();
        let mut right = right.into_iter();
        let mut report = CompareReport::new();

        debug!(tolerance = %self.config.tolerance, "starting comparison");

        for line in 0.. {
            let left_line = match left.next() {
                Some(next) => next.map_err(|source| CompareError::Io { side: Side::A, source })?,
                None => {
                    report.length_mismatch = matches!(right.next(), Some(Ok(_)));
                    break;
                }
            };
            let right_line = match right.next() {
                Some(next) => next.map_err(|source| CompareError::Io { side: Side::B, source })?,
                None => {
                    report.length_mismatch = true;
                    break;
                }
            };

            let kinds = self.check_pair(line, &left_line, &right_line, &mut report)?;
            report.lines_compared += 1;

            if kinds.is_empty() {
                continue;
            }

            debug!(line, ?kinds, "line pair differs");
            let mismatch = Mismatch {
                line,
                left: left_line,
                right: right_line,
                kinds,
            };
            mismatch
                .write_diagnostic(diagnostics)
                .map_err(|source| CompareError::Diagnostics { source })?;
            report.mismatches.push(mismatch);
        }

        diagnostics
            .flush()
            .map_err(|source| CompareError::Diagnostics { source })?;

        if report.length_mismatch {
            debug!(
                lines_compared = report.lines_compared,
                "inputs differ in length; trailing lines were not compared"
            );
        }
        info!("{}", report.summary());

        Ok(report)
    }

    /// Checks that flag one line pair.
    ///
    /// All checks run even after one has triggered.
    fn check_pair(
        &self,
        line: usize,
        left: &str,
        right: &str,
        report: &mut CompareReport,
    ) -> CompareResult<Vec<MismatchKind>> {
        let mut kinds = Vec::new();

        if line == 0 {
            if left != right {
                kinds.push(MismatchKind::Header);
            }
            return Ok(kinds);
        }

        let left = RowFields::split(line, Side::A, left);
        let right = RowFields::split(line, Side::B, right);

        let delta = Tolerance::delta(left.score()?, right.score()?);
        report.observe_delta(delta);
        if self.config.tolerance.is_exceeded_by(delta) {
            kinds.push(MismatchKind::Score { delta });
        }

        if left.translated_index()? != right.translated_index()? {
            kinds.push(MismatchKind::TranslatedIndex);
        }

        if left.reference_index()? != right.reference_index()? {
            kinds.push(MismatchKind::ReferenceIndex);
        }

        Ok(kinds)
    }
}
