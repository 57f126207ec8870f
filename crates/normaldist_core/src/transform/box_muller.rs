//! Cartesian Box-Muller combiner.

use crate::lane::Lane;
use crate::math::{vec_log, vec_sincos};

/// 2π rounded to `f32` (`2 * (π as f32)`, exact doubling).
pub const TAU_F32: f32 = 2.0 * core::f32::consts::PI;

/// Turns a pair of uniform lanes into a pair of standard normal lanes.
///
/// ```text
/// u1'    = 1 - u1                 [0, 1) -> (0, 1]
/// radius = sqrt(-2 * ln(u1'))
/// theta  = 2π * u2
/// z0     = radius * cos(theta)
/// z1     = radius * sin(theta)
/// ```
///
/// The remap keeps `0` away from `ln`: a uniform of exactly `0` yields
/// `u1' = 1`, `ln = 0` and `radius = 0`, so both outputs are zero rather
/// than NaN. `z1` carries the sign of `sin(theta)`.
///
/// # Arguments
///
/// * `u1` - Uniforms in [0, 1) driving the radius
/// * `u2` - Uniforms in [0, 1) driving the angle
///
/// # Examples
///
/// ```rust
/// use normaldist_core::{combine, Lane};
///
/// let (z0, z1) = combine(Lane::splat(0.5), Lane::splat(0.125));
///
/// // radius = sqrt(2 ln 2), theta = π/4
/// let expected = (2.0f32 * 2.0f32.ln()).sqrt() * core::f32::consts::FRAC_1_SQRT_2;
/// assert!((z0.to_array()[0] - expected).abs() < 1e-6);
/// assert!((z1.to_array()[0] - expected).abs() < 1e-6);
/// ```
#[inline]
pub fn combine(u1: Lane, u2: Lane) -> (Lane, Lane) {
    let u1 = Lane::ONE - u1;
    let radius = (Lane::splat(-2.0) * vec_log(u1)).sqrt();
    let theta = Lane::splat(TAU_F32) * u2;
    let (sin_theta, cos_theta) = vec_sincos(theta);

    (radius * cos_theta, radius * sin_theta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Scalar reference in f64.
    fn expected(u1: f32, u2: f32) -> (f64, f64) {
        let radius = (-2.0 * (1.0 - u1 as f64).ln()).sqrt();
        let theta = TAU_F32 as f64 * u2 as f64;
        (radius * theta.cos(), radius * theta.sin())
    }

    #[test]
    fn test_tau_constant() {
        assert_eq!(TAU_F32.to_bits(), 0x40c9_0fdb);
    }

    #[test]
    fn test_zero_uniform_gives_zero_radius() {
        let (z0, z1) = combine(Lane::ZERO, Lane::new([0.0, 0.25, 0.5, 0.9]));

        for (a, b) in z0.to_array().iter().zip(z1.to_array()) {
            assert!(!a.is_nan() && !b.is_nan());
            assert_eq!(*a, 0.0);
            assert_eq!(b, 0.0);
        }
    }

    #[test]
    fn test_smallest_remapped_uniform_is_finite() {
        // Largest generator output: 1 - 2^-23 -> u1' = 2^-23
        let u1 = Lane::splat(1.0 - 2.0f32.powi(-23));
        let (z0, z1) = combine(u1, Lane::new([0.0, 0.3, 0.6, 0.99]));

        let max_radius = (2.0 * 23.0 * core::f64::consts::LN_2).sqrt();
        for (a, b) in z0.to_array().iter().zip(z1.to_array()) {
            assert!(a.is_finite() && b.is_finite());
            assert!(((*a as f64).hypot(b as f64) - max_radius).abs() < 1e-4);
        }
    }

    #[test]
    fn test_matches_scalar_formula() {
        let u1 = Lane::new([0.1, 0.37, 0.62, 0.95]);
        let u2 = Lane::new([0.05, 0.3, 0.55, 0.8]);
        let (z0, z1) = combine(u1, u2);

        for lane in 0..4 {
            let (e0, e1) = expected(u1.to_array()[lane], u2.to_array()[lane]);
            assert_abs_diff_eq!(z0.to_array()[lane] as f64, e0, epsilon = 1e-5);
            assert_abs_diff_eq!(z1.to_array()[lane] as f64, e1, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_second_output_keeps_sine_sign() {
        // theta in (π, 2π): sin < 0, so z1 must be negative
        let (_, z1) = combine(Lane::splat(0.5), Lane::new([0.55, 0.65, 0.75, 0.95]));
        assert!(z1.to_array().iter().all(|z| *z < 0.0));

        // theta in (0, π): sin > 0
        let (_, z1) = combine(Lane::splat(0.5), Lane::new([0.05, 0.2, 0.3, 0.45]));
        assert!(z1.to_array().iter().all(|z| *z > 0.0));
    }

    #[test]
    fn test_outputs_are_not_identical() {
        let (z0, z1) = combine(Lane::splat(0.3), Lane::new([0.1, 0.2, 0.3, 0.4]));
        assert_ne!(z0.to_array(), z1.to_array());
    }
}
