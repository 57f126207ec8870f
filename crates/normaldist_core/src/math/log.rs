//! Lane-parallel natural logarithm.

use bytemuck::cast;
use core::f32::consts::FRAC_1_SQRT_2;
use wide::{i32x4, u32x4, CmpEq, CmpLt, CmpNe};

use super::horner;
use crate::lane::{from_bits, to_bits, Lane};

/// Cephes `logf` polynomial, highest degree first.
#[allow(clippy::excessive_precision)]
const LOG_POLY: [f32; 9] = [
    7.0376836292e-2,
    -1.1514610310e-1,
    1.1676998740e-1,
    -1.2420140846e-1,
    1.4249322787e-1,
    -1.6668057665e-1,
    2.0000714765e-1,
    -2.4999993993e-1,
    3.3333331174e-1,
];

/// High part of ln(2); exact in 9 bits so `e * LN2_HI` is exact.
const LN2_HI: f32 = 0.693_359_375;

/// Remainder `ln(2) - LN2_HI`.
const LN2_LO: f32 = -2.12194440e-4;

const MANTISSA_MASK: u32 = 0x007F_FFFF;

/// Exponent field of 0.5; forces the mantissa into [0.5, 1).
const HALF_EXPONENT: u32 = 0x3F00_0000;

/// Bias that maps the exponent field to `x = m * 2^e`, `m` in [0.5, 1).
const EXPONENT_BIAS: i32 = 126;

const MANTISSA_BITS: i32 = 23;

/// Computes `ln(x)` for each lane.
///
/// Positive normal inputs follow the Cephes reduction: `x = m * 2^e` with
/// `m` in [√½, √2) after folding, `ln(x) = e*ln2 + ln(m)` with `ln(m)`
/// from a degree-8 polynomial in `m - 1`. Subnormal inputs are evaluated at
/// `f32::MIN_POSITIVE`. Zero gives `-inf`, `+inf` gives `+inf`, negative and
/// NaN lanes give NaN.
///
/// `vec_log(1.0)` is exactly `0.0`.
///
/// # Examples
///
/// ```rust
/// use normaldist_core::{vec_log, Lane};
///
/// let y = vec_log(Lane::new([1.0, 0.5, 0.25, 1e-3])).to_array();
///
/// assert_eq!(y[0], 0.0);
/// assert!((y[1] - 0.5f32.ln()).abs() < 1e-6);
/// assert!((y[3] / 1e-3f32.ln() - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn vec_log(x: Lane) -> Lane {
    let min_normal = Lane::splat(f32::MIN_POSITIVE);
    let clamped = x.cmp_lt(min_normal).blend(min_normal, x);

    // x = m * 2^e, m in [0.5, 1)
    let bits = to_bits(clamped);
    let exponent: i32x4 =
        cast::<u32x4, i32x4>(bits >> MANTISSA_BITS) - i32x4::splat(EXPONENT_BIAS);
    let mut e = exponent.round_float();
    let mut m = from_bits((bits & u32x4::splat(MANTISSA_MASK)) | u32x4::splat(HALF_EXPONENT));

    // Fold [0.5, √½) up to [1, √2) so the polynomial sees [√½ - 1, √2 - 1)
    let below = m.cmp_lt(Lane::splat(FRAC_1_SQRT_2));
    e = below.blend(e - 1.0, e);
    m = below.blend(m + m, m) - 1.0;

    let z = m * m;
    let mut y = horner(m, &LOG_POLY);
    y = y * m;
    y = y * z;
    y = y + e * LN2_LO;
    y = y - z * 0.5;

    let mut r = m + y;
    r = r + e * LN2_HI;

    // Edge lanes, selected without branching
    r = x.cmp_eq(Lane::ZERO).blend(Lane::splat(f32::NEG_INFINITY), r);
    r = x.cmp_eq(Lane::splat(f32::INFINITY)).blend(x, r);
    let invalid = x.cmp_lt(Lane::ZERO) | x.cmp_ne(x);
    invalid.blend(Lane::splat(f32::NAN), r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_log_of_one_is_exactly_zero() {
        let y = vec_log(Lane::ONE).to_array();
        assert_eq!(y, [0.0; 4]);
        assert!(y.iter().all(|v| v.is_sign_positive()));
    }

    #[test]
    fn test_log_of_powers_of_two() {
        let x = Lane::new([0.5, 0.25, 0.125, 2.0f32.powi(-23)]);
        let y = vec_log(x).to_array();

        for (xi, yi) in x.to_array().iter().zip(y) {
            assert_relative_eq!(yi as f64, (*xi as f64).ln(), max_relative = 1e-7);
        }
    }

    #[test]
    fn test_log_near_one_keeps_relative_accuracy() {
        let x = Lane::new([1.0 - f32::EPSILON / 2.0, 1.0 - f32::EPSILON, 0.999, 0.75]);
        let y = vec_log(x).to_array();

        for (xi, yi) in x.to_array().iter().zip(y) {
            assert_relative_eq!(yi as f64, (*xi as f64).ln(), max_relative = 1e-6);
        }
    }

    #[test]
    fn test_log_lanes_are_independent() {
        let x = Lane::new([0.3, 1.0, 0.7, 0.01]);
        let y = vec_log(x).to_array();

        for (lane, xi) in x.to_array().iter().enumerate() {
            let single = vec_log(Lane::splat(*xi)).to_array()[0];
            assert_eq!(y[lane].to_bits(), single.to_bits());
        }
    }

    #[test]
    fn test_log_above_one() {
        let x = Lane::new([2.0, 10.0, 1.5, 1e6]);
        let y = vec_log(x).to_array();

        for (xi, yi) in x.to_array().iter().zip(y) {
            assert_relative_eq!(yi as f64, (*xi as f64).ln(), max_relative = 1e-6);
        }
    }

    #[test]
    fn test_log_edge_lanes() {
        let y = vec_log(Lane::new([0.0, -1.0, f32::NAN, f32::INFINITY])).to_array();

        assert_eq!(y[0], f32::NEG_INFINITY);
        assert!(y[1].is_nan());
        assert!(y[2].is_nan());
        assert_eq!(y[3], f32::INFINITY);
    }

    #[test]
    fn test_log_subnormal_is_finite() {
        let y = vec_log(Lane::splat(f32::MIN_POSITIVE / 4.0)).to_array();
        assert!(y.iter().all(|v| v.is_finite() && *v < -87.0));
    }
}
