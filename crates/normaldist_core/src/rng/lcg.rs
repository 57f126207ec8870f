//! Four-lane linear congruential generator.
//!
//! This module provides [`Lcg`], the uniform source of the Box-Muller
//! pipeline. Each lane owns a 32-bit state advanced by
//! `state = state * MULTIPLIER + INCREMENT (mod 2^32)`.

use wide::u32x4;

use super::UniformLanes;
use crate::lane::{from_bits, store, Lane, LaneBits, LANE_WIDTH};

/// Seed used by [`Lcg::default`] and [`crate::fill_normal`].
pub const DEFAULT_SEED: u32 = 0x1234_5678;

/// LCG multiplier (Numerical Recipes).
pub const MULTIPLIER: u32 = 1_664_525;

/// LCG increment (Numerical Recipes).
pub const INCREMENT: u32 = 1_013_904_223;

/// Knuth multiplier spreading one seed over the four lanes.
const SEED_SPREAD: u32 = 1_812_433_253;

/// Bit pattern of `1.0f32`; or-ing 23 random bits into it gives [1, 2).
const ONE_BITS: u32 = 0x3F80_0000;

/// Drops the low 9 bits so the top 23 state bits become the mantissa.
const MANTISSA_SHIFT: i32 = 9;

/// Lane-parallel linear congruential generator.
///
/// Produces one lane of uniforms in [0, 1) per [`draw`](UniformLanes::draw).
/// Outputs are multiples of 2^-23 no larger than `1 - 2^-23`, so `1 - u` is
/// exact and strictly positive.
///
/// # Lane Seeding
///
/// Lane 0 starts at the seed itself; lane `i` starts at
/// `1812433253 * (s[i-1] ^ (s[i-1] >> 30)) + i`. Lanes therefore run from
/// distinct, unevenly spaced points of the full-period sequence.
///
/// # Examples
///
/// ```rust
/// use normaldist_core::rng::{Lcg, UniformLanes};
///
/// let mut a = Lcg::new(7);
/// let mut b = Lcg::new(7);
///
/// // Same seed produces identical lanes
/// assert_eq!(a.draw().to_array(), b.draw().to_array());
/// ```
#[derive(Clone, Debug)]
pub struct Lcg {
    /// Per-lane 32-bit states.
    state: LaneBits,
    /// Seed used for initialisation (kept for reproducibility tracking).
    seed: u32,
}

impl Lcg {
    /// Creates a generator initialised from `seed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use normaldist_core::rng::Lcg;
    ///
    /// let lcg = Lcg::new(42);
    /// assert_eq!(lcg.seed(), 42);
    /// assert_eq!(lcg.state()[0], 42);
    /// ```
    pub fn new(seed: u32) -> Self {
        let mut lanes = [0u32; LANE_WIDTH];
        lanes[0] = seed;
        for i in 1..LANE_WIDTH {
            let prev = lanes[i - 1];
            lanes[i] = SEED_SPREAD
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }

        tracing::trace!(seed, ?lanes, "lcg initialised");

        Self {
            state: u32x4::new(lanes),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns a copy of the current per-lane states.
    #[inline]
    pub fn state(&self) -> [u32; LANE_WIDTH] {
        self.state.to_array()
    }

    /// Fills `buffer` with uniforms in [0, 1).
    ///
    /// Whole lanes are copied in order; a trailing partial lane takes the
    /// leading elements of one final draw.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use normaldist_core::rng::Lcg;
    ///
    /// let mut lcg = Lcg::default();
    /// let mut buffer = [0.0f32; 10];
    /// lcg.fill_uniform(&mut buffer);
    ///
    /// assert!(buffer.iter().all(|&u| (0.0..1.0).contains(&u)));
    /// ```
    pub fn fill_uniform(&mut self, buffer: &mut [f32]) {
        let mut chunks = buffer.chunks_exact_mut(LANE_WIDTH);
        for chunk in &mut chunks {
            store(self.draw(), chunk);
        }

        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            let last = self.draw();
            tail.copy_from_slice(&last.as_array_ref()[..tail.len()]);
        }
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl UniformLanes for Lcg {
    #[inline(always)]
    fn draw(&mut self) -> Lane {
        self.state = self.state * u32x4::splat(MULTIPLIER) + u32x4::splat(INCREMENT);

        let mantissa = (self.state >> MANTISSA_SHIFT) | u32x4::splat(ONE_BITS);
        from_bits(mantissa) - Lane::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_seeds_follow_spread_recurrence() {
        let lcg = Lcg::new(0x1234_5678);
        let s = lcg.state();

        assert_eq!(s[0], 0x1234_5678);
        for i in 1..LANE_WIDTH {
            let expected = SEED_SPREAD
                .wrapping_mul(s[i - 1] ^ (s[i - 1] >> 30))
                .wrapping_add(i as u32);
            assert_eq!(s[i], expected);
        }
    }

    #[test]
    fn test_draw_advances_every_lane_by_recurrence() {
        let mut lcg = Lcg::new(99);
        let before = lcg.state();
        let _ = lcg.draw();
        let after = lcg.state();

        for lane in 0..LANE_WIDTH {
            assert_eq!(
                after[lane],
                before[lane].wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT)
            );
        }
    }

    #[test]
    fn test_draw_uses_top_state_bits() {
        let mut lcg = Lcg::new(1);
        let u = lcg.draw().to_array();
        let s = lcg.state();

        for lane in 0..LANE_WIDTH {
            let expected = (s[lane] >> 9) as f32 / (1u32 << 23) as f32;
            assert_eq!(u[lane], expected);
        }
    }

    #[test]
    fn test_zero_state_maps_to_zero_uniform() {
        // state * A + C == 0  <=>  state == -C * A^-1 (mod 2^32)
        let a_inv = (0..32).fold(1u32, |inv, _| {
            inv.wrapping_mul(2u32.wrapping_sub(MULTIPLIER.wrapping_mul(inv)))
        });
        let pre_zero = 0u32.wrapping_sub(INCREMENT).wrapping_mul(a_inv);

        let mut lcg = Lcg::new(pre_zero);
        let u = lcg.draw().to_array();

        assert_eq!(lcg.state()[0], 0);
        assert_eq!(u[0], 0.0);
    }
}
