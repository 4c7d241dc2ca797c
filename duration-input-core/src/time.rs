//! Numeric conversions between whole seconds and floating-point magnitudes.
//!
//! Conversions saturate explicitly instead of relying on silent truncation.

/// Extension trait for turning a floating-point second count into whole seconds.
pub trait SecondsExt {
    /// Round to the nearest whole second, saturating at `0` and `u64::MAX`.
    ///
    /// `NaN` maps to `0`; callers that care must reject it first.
    fn round_to_secs(self) -> u64;
}

impl SecondsExt for f64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn round_to_secs(self) -> u64 {
        // Float-to-int `as` casts saturate and map NaN to zero
        self.round() as u64
    }
}

/// Convert whole seconds to `f64` for unit arithmetic.
///
/// Exact up to 2^53 seconds (~285 million years).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn secs_as_f64(seconds: u64) -> f64 {
    seconds as f64
}

/// Round a magnitude to three decimal places.
#[must_use]
pub fn round_to_millis(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_secs() {
        assert_eq!(1.4_f64.round_to_secs(), 1);
        assert_eq!(1.5_f64.round_to_secs(), 2);
        assert_eq!(3600.0_f64.round_to_secs(), 3600);
    }

    #[test]
    fn test_round_to_secs_saturates() {
        assert_eq!((-5.0_f64).round_to_secs(), 0);
        assert_eq!(f64::INFINITY.round_to_secs(), u64::MAX);
        assert_eq!(f64::NEG_INFINITY.round_to_secs(), 0);
        assert_eq!(f64::NAN.round_to_secs(), 0);
    }

    #[test]
    fn test_secs_as_f64() {
        assert!((secs_as_f64(157_788_000) - 157_788_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_to_millis() {
        assert!((round_to_millis(1.234_56) - 1.235).abs() < 1e-9);
        assert!((round_to_millis(90.0) - 90.0).abs() < f64::EPSILON);
        assert!((round_to_millis(1.0 / 3.0) - 0.333).abs() < 1e-9);
    }
}
