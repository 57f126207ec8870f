//! Fixed-width lane types shared by every stage of the pipeline.
//!
//! A [`Lane`] is four single-precision floats processed identically and
//! independently. Output is produced in blocks of two lanes ([`BLOCK_LEN`]
//! floats): the cosine half followed by the sine half of one Box-Muller step.

use bytemuck::cast;
use wide::{f32x4, u32x4};

/// Four-wide single-precision lane vector.
pub type Lane = f32x4;

/// Four-wide unsigned integer lane vector (generator state, bit patterns).
pub type LaneBits = u32x4;

/// Number of floats in one lane vector.
pub const LANE_WIDTH: usize = 4;

/// Number of floats written per Box-Muller step (two lane vectors).
pub const BLOCK_LEN: usize = 2 * LANE_WIDTH;

/// Natural alignment of one output block, in bytes.
pub const BLOCK_ALIGN: usize = BLOCK_LEN * std::mem::size_of::<f32>();

/// Minimum buffer alignment accepted by the driver, in bytes.
pub const MIN_ALIGN: usize = LANE_WIDTH * std::mem::size_of::<f32>();

/// Reinterprets the bits of each lane as an unsigned integer.
#[inline(always)]
pub fn to_bits(x: Lane) -> LaneBits {
    cast(x)
}

/// Reinterprets integer lane bits as floats.
#[inline(always)]
pub fn from_bits(bits: LaneBits) -> Lane {
    cast(bits)
}

/// Copies a lane into the first [`LANE_WIDTH`] elements of `out`.
///
/// # Panics
///
/// Panics if `out` is shorter than [`LANE_WIDTH`].
#[inline(always)]
pub fn store(x: Lane, out: &mut [f32]) {
    out[..LANE_WIDTH].copy_from_slice(x.as_array_ref());
}
