//! Reference normal generators used for comparison.
//!
//! - [`ScalarBoxMuller`]: the same Box-Muller pipeline evaluated one element
//!   at a time with `f32::ln` and `f32::sin_cos`, over the same [`Lcg`]
//!   stream. Its output tracks the vector path closely, which makes it a
//!   cross-check for the transcendental kernels.
//! - [`ZigguratNormal`]: `rand_distr::StandardNormal` (ZIGNOR Ziggurat) over
//!   a seeded `StdRng`, an independent baseline for timing and moments.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

use crate::driver::check_buffer;
use crate::error::FillError;
use crate::lane::LANE_WIDTH;
use crate::rng::{Lcg, UniformLanes};
use crate::transform::TAU_F32;

/// Element-wise Box-Muller over the lane generator.
///
/// Consumes uniforms in exactly the order of [`crate::NormalFiller`] and
/// writes the same blocked layout, so for equal seeds the two outputs agree
/// element by element up to kernel error.
///
/// # Examples
///
/// ```rust
/// use normaldist_core::reference::ScalarBoxMuller;
/// use normaldist_core::AlignedBuffer;
///
/// let mut generator = ScalarBoxMuller::new(42);
/// let mut buffer = AlignedBuffer::new(64).unwrap();
/// generator.fill(&mut buffer).unwrap();
///
/// assert!(buffer.iter().all(|z| z.is_finite()));
/// ```
#[derive(Clone, Debug)]
pub struct ScalarBoxMuller {
    lcg: Lcg,
}

impl ScalarBoxMuller {
    /// Creates a generator over an [`Lcg`] initialised from `seed`.
    pub fn new(seed: u32) -> Self {
        Self {
            lcg: Lcg::new(seed),
        }
    }

    /// Fills `buffer` with standard normal variates.
    ///
    /// # Errors
    ///
    /// Returns [`FillError`] under the same preconditions as
    /// [`crate::try_fill_normal`].
    pub fn fill(&mut self, buffer: &mut [f32]) -> Result<(), FillError> {
        check_buffer(buffer)?;

        for block in buffer.chunks_exact_mut(2 * LANE_WIDTH) {
            let u1 = self.lcg.draw().to_array();
            let u2 = self.lcg.draw().to_array();
            let (cos_half, sin_half) = block.split_at_mut(LANE_WIDTH);

            for lane in 0..LANE_WIDTH {
                let radius = (-2.0 * (1.0 - u1[lane]).ln()).sqrt();
                let (sin, cos) = (TAU_F32 * u2[lane]).sin_cos();
                cos_half[lane] = radius * cos;
                sin_half[lane] = radius * sin;
            }
        }

        Ok(())
    }
}

impl Default for ScalarBoxMuller {
    fn default() -> Self {
        Self { lcg: Lcg::default() }
    }
}

/// Ziggurat normal generator from `rand_distr`.
///
/// Accepts buffers of any length and alignment.
///
/// # Examples
///
/// ```rust
/// use normaldist_core::reference::ZigguratNormal;
///
/// let mut a = ZigguratNormal::new(7);
/// let mut b = ZigguratNormal::new(7);
/// let (mut x, mut y) = ([0.0f32; 5], [0.0f32; 5]);
///
/// a.fill(&mut x);
/// b.fill(&mut y);
/// assert_eq!(x, y);
/// ```
#[derive(Clone, Debug)]
pub struct ZigguratNormal {
    inner: StdRng,
    seed: u64,
}

impl ZigguratNormal {
    /// Creates a generator initialised with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fills `buffer` with standard normal variates.
    pub fn fill(&mut self, buffer: &mut [f32]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}

impl Default for ZigguratNormal {
    fn default() -> Self {
        Self::new(u64::from(crate::DEFAULT_SEED))
    }
}
