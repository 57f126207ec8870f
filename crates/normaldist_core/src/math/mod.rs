//! # Vectorised Transcendental Kernels
//!
//! Lane-parallel approximations of `ln`, `sin` and `cos` used by the
//! Box-Muller step. Each kernel performs range reduction with vector
//! arithmetic, comparisons, blends and bit reinterpretation only; no lane is
//! ever handled by a scalar fallback or a data-dependent branch.
//!
//! ## Accuracy
//!
//! | Kernel | Domain exercised | Bound |
//! |--------|------------------|-------|
//! | [`vec_log`] | (0, 1] | relative error ≤ 1e-6 |
//! | [`vec_sincos`] | [0, 2π) | absolute error ≤ 1e-6 |
//!
//! Both use Cephes single-precision minimax coefficients. Multiplications and
//! additions are never fused, so results are bit-identical on every target.
//!
//! ## Purity
//!
//! Kernels hold no state: the same input lane always yields the same bits.

mod log;
mod trig;

pub use log::vec_log;
pub use trig::{vec_cos, vec_sin, vec_sincos};

/// Evaluates `c[0]*x^n + c[1]*x^(n-1) + ... + c[n]` by Horner's rule.
///
/// Each step is a separate multiply and add.
#[inline(always)]
pub(crate) fn horner(x: crate::Lane, coeffs: &[f32]) -> crate::Lane {
    let (first, rest) = match coeffs.split_first() {
        Some(split) => split,
        None => return crate::Lane::ZERO,
    };

    rest.iter()
        .fold(crate::Lane::splat(*first), |acc, &c| acc * x + c)
}
