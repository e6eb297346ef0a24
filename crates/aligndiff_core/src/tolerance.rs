//! Score tolerance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

/// Maximum allowed absolute difference between two scores.
///
/// The sign is not validated. A negative tolerance flags every score pair,
/// identical ones included.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Create a tolerance
    #[must_use]
    pub const fn new(max_diff: f64) -> Self {
        Self(max_diff)
    }

    /// Get raw threshold
    #[must_use]
    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Absolute difference between two scores
    #[must_use]
    pub fn delta(a: f64, b: f64) -> f64 {
        (a - b).abs()
    }

    /// Whether a delta is strictly above the threshold.
    ///
    /// NaN never exceeds.
    #[must_use]
    pub fn is_exceeded_by(self, delta: f64) -> bool {
        delta > self.0
    }

    /// Whether two scores differ by more than the threshold
    #[must_use]
    pub fn scores_differ(self, a: f64, b: f64) -> bool {
        self.is_exceeded_by(Self::delta(a, b))
    }
}

impl FromStr for Tolerance {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for Tolerance {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_boundary_is_not_exceeded() {
        let t = Tolerance::new(0.5);
        assert!(!t.is_exceeded_by(0.5));
        assert!(t.is_exceeded_by(0.500_001));
        assert!(!t.scores_differ(1.0, 1.5));
        assert!(t.scores_differ(1.0, 1.6));
    }

    #[test]
    fn test_spec_fail_example() {
        let t = Tolerance::new(0.01);
        assert!(t.scores_differ(0.50, 0.53));
        assert!(!t.scores_differ(0.50, 0.505));
    }

    #[test]
    fn test_zero_tolerance() {
        let t = Tolerance::default();
        assert!(!t.scores_differ(0.25, 0.25));
        assert!(t.scores_differ(0.25, 0.250_000_1));
    }

    #[test]
    fn test_negative_tolerance_flags_everything() {
        let t = Tolerance::new(-0.1);
        assert!(t.scores_differ(0.3, 0.3));
        assert!(t.scores_differ(0.3, 0.4));
    }

    #[test]
    fn test_nan_never_differs() {
        let t = Tolerance::new(0.0);
        assert!(!t.scores_differ(f64::NAN, 1.0));
        assert!(!t.scores_differ(f64::NAN, f64::NAN));
    }

    #[test]
    fn test_infinite_scores() {
        let t = Tolerance::new(1.0);
        assert!(t.scores_differ(f64::INFINITY, 0.0));
        // inf - inf is NaN
        assert!(!t.scores_differ(f64::INFINITY, f64::INFINITY));
    }

    #[test]
    fn test_parse() {
        assert_eq!("0.01".parse::<Tolerance>().unwrap(), Tolerance::new(0.01));
        assert_eq!("-1e-3".parse::<Tolerance>().unwrap(), Tolerance::new(-0.001));
        assert_eq!(" 2 ".parse::<Tolerance>().unwrap(), Tolerance::new(2.0));
        assert!("abc".parse::<Tolerance>().is_err());
    }

    proptest::proptest! {
        #[test]
        fn prop_flagged_iff_delta_strictly_greater(
            a in -1.0e6f64..1.0e6,
            b in -1.0e6f64..1.0e6,
            t in -10.0f64..10.0
        ) {
            let tol = Tolerance::new(t);
            prop_assert_eq!(tol.scores_differ(a, b), (a - b).abs() > t);
        }

        #[test]
        fn prop_delta_itself_is_never_flagged(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
            let tol = Tolerance::new(Tolerance::delta(a, b));
            prop_assert!(!tol.scores_differ(a, b));
        }

        #[test]
        fn prop_symmetric(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6, t in 0.0f64..10.0) {
            let tol = Tolerance::new(t);
            prop_assert_eq!(tol.scores_differ(a, b), tol.scores_differ(b, a));
        }
    }
}
