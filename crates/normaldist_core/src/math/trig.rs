//! Lane-parallel sine and cosine with shared range reduction.

use bytemuck::cast;
use wide::{i32x4, CmpEq};

use super::horner;
use crate::lane::Lane;

/// 4/π, scales |x| to octant units.
#[allow(clippy::excessive_precision)]
const FOUR_OVER_PI: f32 = 1.27323954473516;

/// -π/4 split into three parts whose products with the octant are exact
/// for octants below 2^13.
#[allow(clippy::excessive_precision)]
const MINUS_PI_4: [f32; 3] = [-0.78515625, -2.4187564849853515625e-4, -3.77489497744594108e-8];

/// Sine polynomial in x² (Cephes `sinf`), highest degree first.
#[allow(clippy::excessive_precision)]
const SIN_POLY: [f32; 3] = [-1.9515295891e-4, 8.3321608736e-3, -1.6666654611e-1];

/// Cosine polynomial in x² (Cephes `cosf`), highest degree first.
#[allow(clippy::excessive_precision)]
const COS_POLY: [f32; 3] = [2.443315711809948e-5, -1.388731625493765e-3, 4.166664568298827e-2];

/// Sign bit of an f32 lane viewed as `i32`.
const SIGN_BIT: i32 = i32::MIN;

/// Shift taking octant bit 2 (value 4) to the sign bit.
const OCTANT_TO_SIGN: i32 = 29;

/// Computes `(sin(x), cos(x))` for each lane.
///
/// The argument is reduced once and shared by both results:
///
/// 1. `j = trunc(|x| * 4/π)`, rounded up to even, so `|x| - j*π/4` lies in
///    [-π/4, π/4]
/// 2. the reduction subtracts `j*π/4` in three parts to keep the low bits
/// 3. both minimax polynomials are evaluated on the reduced argument
/// 4. `j & 2` selects which polynomial feeds sine and which feeds cosine
/// 5. signs come from `j & 4` (sine, xor the input sign) and
///    `(j - 2) & 4` (cosine), applied by xor-ing bits
///
/// Accurate to better than 1e-6 absolute for |x| up to a few thousand;
/// the reduction loses precision beyond |x| ≈ 8192.
///
/// # Examples
///
/// ```rust
/// use normaldist_core::{vec_sincos, Lane};
///
/// let (s, c) = vec_sincos(Lane::new([0.0, 1.0, 3.0, 6.0]));
///
/// for (i, x) in [0.0f32, 1.0, 3.0, 6.0].iter().enumerate() {
///     assert!((s.to_array()[i] - x.sin()).abs() < 1e-6);
///     assert!((c.to_array()[i] - x.cos()).abs() < 1e-6);
/// }
/// ```
#[inline]
pub fn vec_sincos(x: Lane) -> (Lane, Lane) {
    let input_sign = cast::<Lane, i32x4>(x) & i32x4::splat(SIGN_BIT);
    let xa = x.abs();

    // Octant, rounded up to even
    let j = (xa * FOUR_OVER_PI).trunc_int();
    let j = (j + i32x4::splat(1)) & i32x4::splat(!1);
    let y = j.round_float();

    let sin_sign = input_sign ^ ((j & i32x4::splat(4)) << OCTANT_TO_SIGN);
    let cos_sign = (!(j - i32x4::splat(2)) & i32x4::splat(4)) << OCTANT_TO_SIGN;
    let no_swap: Lane = cast(
        (j & i32x4::splat(2)).cmp_eq(i32x4::splat(0)),
    );

    // Extended-precision reduction: r = |x| - j*π/4
    let mut r = xa;
    for part in MINUS_PI_4 {
        r = r + y * part;
    }

    let z = r * r;

    let mut c = horner(z, &COS_POLY);
    c = c * z;
    c = c * z;
    c = c - z * 0.5;
    c = c + 1.0;

    let mut s = horner(z, &SIN_POLY);
    s = s * z;
    s = s * r;
    s = s + r;

    let sin = no_swap.blend(s, c) ^ cast::<i32x4, Lane>(sin_sign);
    let cos = no_swap.blend(c, s) ^ cast::<i32x4, Lane>(cos_sign);
    (sin, cos)
}

/// Computes `sin(x)` for each lane.
///
/// Shares [`vec_sincos`]'s reduction and discards the cosine.
#[inline]
pub fn vec_sin(x: Lane) -> Lane {
    vec_sincos(x).0
}

/// Computes `cos(x)` for each lane.
#[inline]
pub fn vec_cos(x: Lane) -> Lane {
    vec_sincos(x).1
}
