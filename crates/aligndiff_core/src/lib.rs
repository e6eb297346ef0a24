//! aligndiff core
//!
//! Regression check for document-aligner output. Two score files are read in
//! lockstep: the header line must match exactly, and every data row must keep
//! its index columns while its score stays within a tolerance.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compare;
pub mod error;
pub mod lines;
pub mod report;
pub mod row;
pub mod tolerance;

// Re-exports
pub use compare::{CompareConfig, LineComparator};
pub use error::{CompareError, CompareResult, Side};
pub use lines::RawLines;
pub use report::{CompareReport, Mismatch, MismatchKind};
pub use row::RowFields;
pub use tolerance::Tolerance;
