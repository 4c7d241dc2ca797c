//! Converting a human magnitude back into clamped seconds.

use crate::error::{DurationError, Result};
use crate::time::{secs_as_f64, SecondsExt};

/// Default lower bound (0 seconds)
pub const DEFAULT_MIN_SECONDS: u64 = 0;

/// Default upper bound (5 years of 365.25 days)
pub const DEFAULT_MAX_SECONDS: u64 = 157_788_000;

/// Inclusive range a committed duration is clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    min: u64,
    max: u64,
}

impl Bounds {
    /// Create bounds, rejecting `min > max`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBounds` if `min` is greater than `max`.
    pub fn new(min: u64, max: u64) -> Result<Self> {
        if min > max {
            return Err(DurationError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(&self) -> u64 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> u64 {
        self.max
    }

    #[must_use]
    pub const fn contains(&self, seconds: u64) -> bool {
        seconds >= self.min && seconds <= self.max
    }

    /// Clamp a whole second count into range
    #[must_use]
    pub fn clamp(&self, seconds: u64) -> u64 {
        seconds.clamp(self.min, self.max)
    }

    /// Clamp a raw (possibly negative or infinite) second count into range.
    ///
    /// Returns the clamped value and whether clamping changed it.
    #[must_use]
    pub fn clamp_raw(&self, raw: f64) -> (u64, bool) {
        if raw < secs_as_f64(self.min) {
            (self.min, true)
        } else if raw > secs_as_f64(self.max) {
            (self.max, true)
        } else {
            // In range as a float; the integer clamp absorbs precision loss near the edges
            (self.clamp(raw.round_to_secs()), false)
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SECONDS,
            max: DEFAULT_MAX_SECONDS,
        }
    }
}

/// Result of a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitOutcome {
    /// Committed seconds, always within bounds
    pub seconds: u64,
    /// Whether `seconds` differs from the previously committed value
    pub changed: bool,
    /// Whether clamping altered the requested value
    pub clamped: bool,
}

/// Convert `human_value` units of `unit_seconds` into seconds clamped to `bounds`.
///
/// Negative and overflowing products clamp to the nearest bound.
///
/// # Errors
///
/// Returns `InvalidMagnitude` if `human_value` is NaN.
pub fn commit(
    human_value: f64,
    unit_seconds: u64,
    bounds: Bounds,
    previous: u64,
) -> Result<CommitOutcome> {
    if human_value.is_nan() {
        return Err(DurationError::InvalidMagnitude {
            input: human_value.to_string(),
        });
    }

    let raw = (human_value * secs_as_f64(unit_seconds)).round();
    let (seconds, clamped) = bounds.clamp_raw(raw);

    Ok(CommitOutcome {
        seconds,
        changed: seconds != previous,
        clamped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(min: u64, max: u64) -> Bounds {
        Bounds::new(min, max).unwrap()
    }

    #[test]
    fn test_default_bounds() {
        let bounds = Bounds::default();
        assert_eq!(bounds.min(), 0);
        assert_eq!(bounds.max(), 157_788_000);
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let err = Bounds::new(10, 5).unwrap_err();
        assert!(matches!(err, DurationError::InvalidBounds { min: 10, max: 5 }));
        assert!(Bounds::new(5, 5).is_ok());
    }

    #[test]
    fn test_commit_in_range() {
        let outcome = commit(1.5, 3600, Bounds::default(), 0).unwrap();
        assert_eq!(
            outcome,
            CommitOutcome {
                seconds: 5400,
                changed: true,
                clamped: false,
            }
        );
    }

    #[test]
    fn test_commit_clamps_to_max() {
        let outcome = commit(10.0, 3600, bounds(0, 3600), 0).unwrap();
        assert_eq!(outcome.seconds, 3600);
        assert!(outcome.changed);
        assert!(outcome.clamped);

        let outcome = commit(10.0, 3600, bounds(0, 3600), 3600).unwrap();
        assert_eq!(outcome.seconds, 3600);
        assert!(!outcome.changed);
    }

    #[test]
    fn test_commit_clamps_to_min() {
        let outcome = commit(5.0, 1, bounds(60, 3600), 120).unwrap();
        assert_eq!(outcome.seconds, 60);
        assert!(outcome.clamped);

        let outcome = commit(-3.0, 60, bounds(30, 3600), 120).unwrap();
        assert_eq!(outcome.seconds, 30);
    }

    #[test]
    fn test_commit_rounds_to_whole_seconds() {
        assert_eq!(commit(0.0004, 3600, Bounds::default(), 0).unwrap().seconds, 1);
        assert_eq!(commit(1.2345, 1, Bounds::default(), 0).unwrap().seconds, 1);
    }

    #[test]
    fn test_commit_unchanged_is_not_a_change() {
        let first = commit(2.0, 60, Bounds::default(), 0).unwrap();
        assert!(first.changed);
        let second = commit(2.0, 60, Bounds::default(), first.seconds).unwrap();
        assert!(!second.changed);
    }

    #[test]
    fn test_commit_rejects_nan() {
        let err = commit(f64::NAN, 60, Bounds::default(), 0).unwrap_err();
        assert!(matches!(err, DurationError::InvalidMagnitude { .. }));
    }

    #[test]
    fn test_commit_always_within_bounds() {
        let bounds = bounds(60, 86_400);
        let magnitudes = [
            f64::NEG_INFINITY,
            -1e300,
            -1.0,
            0.0,
            0.5,
            1.0,
            23.999,
            1e6,
            1e300,
            f64::MAX,
            f64::INFINITY,
        ];
        for unit in [1, 60, 3600, 86_400, 31_557_600] {
            for human in magnitudes {
                let outcome = commit(human, unit, bounds, 0).unwrap();
                assert!(bounds.contains(outcome.seconds), "{human} x {unit}");
            }
        }
    }
}
