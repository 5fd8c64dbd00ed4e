//! Signed 16-bit fixed-point helpers.

use crate::math::Real;

/// Scale factor mapping the real value `1.0` onto the fixed-point grid.
pub const FULL_SCALE: Real = i16::MAX as Real;

/// Round to the nearest integer, with ties going toward positive infinity.
///
/// This is `floor(x + 0.5)`, so `-2.5` rounds to `-2` (where `Real::round`
/// would give `-3`).
#[inline]
pub fn round_half_up(x: Real) -> i64 {
    (x + 0.5).floor() as i64
}

/// Clamp an integer into the `i16` range with saturation.
#[inline]
pub fn saturate(value: i64) -> i16 {
    value.clamp(i16::MIN as i64, i16::MAX as i64) as i16
}

/// Quantize a real value in `[-1, 1]` to a saturated 16-bit sample.
///
/// Values outside of that range clip to `i16::MIN` / `i16::MAX`.
#[inline]
pub fn quantize(x: Real) -> i16 {
    saturate(round_half_up(FULL_SCALE * x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_ties_go_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(0.49), 0);
        assert_eq!(round_half_up(-0.51), -1);
    }

    #[test]
    fn saturate_in_range() {
        assert_eq!(saturate(0), 0);
        assert_eq!(saturate(1000), 1000);
        assert_eq!(saturate(-1000), -1000);
        assert_eq!(saturate(32767), 32767);
        assert_eq!(saturate(-32768), -32768);
    }

    #[test]
    fn saturate_overflow() {
        assert_eq!(saturate(40000), 32767);
        assert_eq!(saturate(-40000), -32768);
        assert_eq!(saturate(i64::MAX), i16::MAX);
        assert_eq!(saturate(i64::MIN), i16::MIN);
    }

    #[test]
    fn quantize_full_scale() {
        assert_eq!(quantize(1.0), 32767);
        assert_eq!(quantize(-1.0), -32767);
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(2.0), 32767);
        assert_eq!(quantize(-2.0), -32768);
    }
}
