//! Error types for alignment comparisons.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;

/// Result type for comparison operations
pub type CompareResult<T> = Result<T, CompareError>;

/// Which input a line came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// First input (`path1`)
    A,
    /// Second input (`path2`)
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "first"),
            Self::B => write!(f, "second"),
        }
    }
}

/// Comparison error
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    /// Score column is not a float
    #[error("line {line} of {side} input: invalid score {value:?}")]
    InvalidScore {
        /// 0-based line number
        line: usize,
        /// Input the line came from
        side: Side,
        /// Raw field text
        value: String,
    },

    /// Data row has too few columns
    #[error("line {line} of {side} input: missing column {column} (found {found} fields)")]
    MissingColumn {
        /// 0-based line number
        line: usize,
        /// Input the line came from
        side: Side,
        /// 0-based column index that was requested
        column: usize,
        /// Number of fields present
        found: usize,
    },

    /// Read failure
    #[error("failed to read {side} input")]
    Io {
        /// Input being read
        side: Side,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Diagnostic stream could not be written
    #[error("failed to write diagnostics")]
    Diagnostics {
        /// Underlying error
        #[source]
        source: io::Error,
    },
}
