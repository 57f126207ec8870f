//! Batch driver filling caller-owned buffers with normal variates.
//!
//! This module provides [`fill_normal`], the single entry point consumed by
//! harnesses, its checked counterpart [`try_fill_normal`], the stateful
//! [`NormalFiller`] that continues one stream across calls, and
//! [`AlignedBuffer`] for callers that need correctly aligned storage.
//!
//! # Memory Layout
//!
//! Output is written in blocks of [`BLOCK_LEN`] floats. Each block holds the
//! result of one Box-Muller step in blocked order:
//!
//! ```text
//! [ z0 z0 z0 z0 | z1 z1 z1 z1 ] [ z0 z0 z0 z0 | z1 z1 z1 z1 ] ...
//!   radius*cos    radius*sin
//! ```
//!
//! # Preconditions
//!
//! - `buffer.len()` is a multiple of [`BLOCK_LEN`]
//! - a non-empty buffer starts on a [`MIN_ALIGN`]-byte boundary
//!
//! No partial blocks are written and nothing is allocated.

use bytemuck::{Pod, Zeroable};
use std::ops::{Deref, DerefMut};

use crate::error::FillError;
use crate::lane::{Lane, BLOCK_LEN, MIN_ALIGN};
use crate::rng::{Lcg, UniformLanes};
use crate::transform::combine;

/// Fills `buffer` with standard normal variates from a fresh default generator.
///
/// Every call starts from [`crate::DEFAULT_SEED`], so two calls on buffers of
/// the same length produce bit-identical output.
///
/// # Panics
///
/// Panics if the buffer violates a precondition (length not a multiple of
/// [`BLOCK_LEN`], or start not aligned to [`MIN_ALIGN`] bytes). Use
/// [`try_fill_normal`] to receive the violation as a value instead.
///
/// # Examples
///
/// ```rust
/// use normaldist_core::{fill_normal, AlignedBuffer};
///
/// let mut buffer = AlignedBuffer::new(16).unwrap();
/// fill_normal(&mut buffer);
///
/// assert!(buffer.iter().all(|z| z.is_finite()));
/// ```
pub fn fill_normal(buffer: &mut [f32]) {
    if let Err(err) = try_fill_normal(buffer) {
        panic!("fill_normal precondition violated: {}", err);
    }
}

/// Checked form of [`fill_normal`].
///
/// # Errors
///
/// Returns [`FillError`] if the buffer violates a precondition; the buffer
/// is left untouched in that case.
///
/// # Examples
///
/// ```rust
/// use normaldist_core::{try_fill_normal, AlignedBuffer, FillError};
///
/// let mut buffer = AlignedBuffer::new(16).unwrap();
/// assert!(try_fill_normal(&mut buffer).is_ok());
///
/// let err = try_fill_normal(&mut buffer[..12]).unwrap_err();
/// assert_eq!(err, FillError::LengthNotMultiple { count: 12, block: 8 });
/// ```
pub fn try_fill_normal(buffer: &mut [f32]) -> Result<(), FillError> {
    NormalFiller::<Lcg>::default().fill(buffer)
}

/// Validates the buffer preconditions without writing.
///
/// # Errors
///
/// Returns [`FillError::LengthNotMultiple`] or [`FillError::Misaligned`].
pub fn check_buffer(buffer: &[f32]) -> Result<(), FillError> {
    if buffer.len() % BLOCK_LEN != 0 {
        return Err(FillError::LengthNotMultiple {
            count: buffer.len(),
            block: BLOCK_LEN,
        });
    }

    let address = buffer.as_ptr() as usize;
    if !buffer.is_empty() && address % MIN_ALIGN != 0 {
        return Err(FillError::Misaligned {
            address,
            align: MIN_ALIGN,
        });
    }

    Ok(())
}

/// Stateful normal generator over a uniform lane source.
///
/// Unlike [`fill_normal`], successive [`fill`](Self::fill) calls continue
/// the same stream.
///
/// # Examples
///
/// ```rust
/// use normaldist_core::{AlignedBuffer, NormalFiller};
///
/// let mut filler = NormalFiller::with_seed(42);
/// let mut first = AlignedBuffer::new(8).unwrap();
/// let mut second = AlignedBuffer::new(8).unwrap();
///
/// filler.fill(&mut first).unwrap();
/// filler.fill(&mut second).unwrap();
///
/// assert_ne!(first.as_slice(), second.as_slice());
/// ```
#[derive(Clone, Debug)]
pub struct NormalFiller<G = Lcg> {
    generator: G,
}

impl<G: UniformLanes> NormalFiller<G> {
    /// Creates a filler drawing uniforms from `generator`.
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Returns the underlying uniform source.
    #[inline]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Consumes the filler and returns the uniform source.
    pub fn into_inner(self) -> G {
        self.generator
    }

    /// Fills `buffer` with standard normal variates.
    ///
    /// For each block: draw `u1`, then `u2`, combine, and store the cosine
    /// lane followed by the sine lane.
    ///
    /// # Errors
    ///
    /// Returns [`FillError`] if the buffer violates a precondition. Nothing
    /// is written and the generator is not advanced in that case.
    pub fn fill(&mut self, buffer: &mut [f32]) -> Result<(), FillError> {
        check_buffer(buffer)?;
        if buffer.is_empty() {
            return Ok(());
        }

        tracing::debug!(count = buffer.len(), "filling normal buffer");

        let address = buffer.as_ptr() as usize;
        let lanes: &mut [Lane] = bytemuck::try_cast_slice_mut(buffer).map_err(|_| {
            FillError::Misaligned {
                address,
                align: MIN_ALIGN,
            }
        })?;

        for pair in lanes.chunks_exact_mut(2) {
            let u1 = self.generator.draw();
            let u2 = self.generator.draw();
            let (z0, z1) = combine(u1, u2);
            pair[0] = z0;
            pair[1] = z1;
        }

        Ok(())
    }
}

impl NormalFiller<Lcg> {
    /// Creates a filler over an [`Lcg`] initialised from `seed`.
    pub fn with_seed(seed: u32) -> Self {
        Self::new(Lcg::new(seed))
    }
}

impl Default for NormalFiller<Lcg> {
    fn default() -> Self {
        Self::new(Lcg::default())
    }
}

/// One output block on its natural alignment.
#[derive(Clone, Copy, Debug, Default)]
#[repr(C, align(32))]
struct Block([f32; BLOCK_LEN]);

// SAFETY: `Block` is `repr(C)` over plain floats; size equals alignment
// (32 bytes), so there is no padding and every bit pattern is valid.
unsafe impl Zeroable for Block {}
unsafe impl Pod for Block {}

/// Zero-initialised, 32-byte aligned float storage of whole output blocks.
///
/// Dereferences to `[f32]`, so it can be handed straight to
/// [`fill_normal`].
///
/// # Examples
///
/// ```rust
/// use normaldist_core::AlignedBuffer;
///
/// let buffer = AlignedBuffer::new(24).unwrap();
/// assert_eq!(buffer.len(), 24);
/// assert_eq!(buffer.as_ptr() as usize % 32, 0);
///
/// assert!(AlignedBuffer::new(20).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct AlignedBuffer {
    blocks: Vec<Block>,
}

impl AlignedBuffer {
    /// Allocates `count` zeroed floats.
    ///
    /// # Errors
    ///
    /// Returns [`FillError::LengthNotMultiple`] if `count` is not a multiple
    /// of [`BLOCK_LEN`].
    pub fn new(count: usize) -> Result<Self, FillError> {
        if count % BLOCK_LEN != 0 {
            return Err(FillError::LengthNotMultiple {
                count,
                block: BLOCK_LEN,
            });
        }

        Ok(Self {
            blocks: vec![Block::default(); count / BLOCK_LEN],
        })
    }

    /// Returns the contents as a float slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        bytemuck::cast_slice(&self.blocks)
    }

    /// Returns the contents as a mutable float slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        bytemuck::cast_slice_mut(&mut self.blocks)
    }
}

impl Deref for AlignedBuffer {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        self.as_slice()
    }
}

impl DerefMut for AlignedBuffer {
    fn deref_mut(&mut self) -> &mut [f32] {
        self.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_buffer_alignment_and_len() {
        for count in [8, 16, 1024] {
            let buffer = AlignedBuffer::new(count).unwrap();
            assert_eq!(buffer.len(), count);
            assert_eq!(buffer.as_ptr() as usize % 32, 0);
            assert!(buffer.iter().all(|&x| x == 0.0));
        }
    }

    #[test]
    fn test_aligned_buffer_rejects_partial_block() {
        assert_eq!(
            AlignedBuffer::new(9).unwrap_err(),
            FillError::LengthNotMultiple { count: 9, block: 8 }
        );
    }

    #[test]
    fn test_empty_buffer_is_noop() {
        let mut filler = NormalFiller::with_seed(1);
        let before = filler.generator().state();
        let mut empty: [f32; 0] = [];

        filler.fill(&mut empty).unwrap();
        assert_eq!(filler.generator().state(), before);
    }

    #[test]
    fn test_length_error_leaves_buffer_untouched() {
        let mut buffer = AlignedBuffer::new(16).unwrap();
        let mut filler = NormalFiller::with_seed(1);

        let err = filler.fill(&mut buffer[..4]).unwrap_err();
        assert_eq!(err, FillError::LengthNotMultiple { count: 4, block: 8 });
        assert!(buffer.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_misaligned_slice_is_rejected() {
        let mut buffer = AlignedBuffer::new(24).unwrap();
        let shifted = &mut buffer[1..17];

        let err = try_fill_normal(shifted).unwrap_err();
        assert!(matches!(err, FillError::Misaligned { align: 16, .. }));
    }

    #[test]
    fn test_sixteen_byte_offset_is_accepted() {
        let mut buffer = AlignedBuffer::new(24).unwrap();
        assert!(try_fill_normal(&mut buffer[4..20]).is_ok());
    }

    #[test]
    #[should_panic(expected = "must be a multiple of 8")]
    fn test_fill_normal_panics_on_bad_length() {
        let mut buffer = AlignedBuffer::new(16).unwrap();
        fill_normal(&mut buffer[..12]);
    }

    #[test]
    #[should_panic(expected = "Misaligned buffer")]
    fn test_fill_normal_panics_on_misalignment() {
        let mut buffer = AlignedBuffer::new(16).unwrap();
        fill_normal(&mut buffer[2..10]);
    }

    #[test]
    fn test_block_layout_matches_combine() {
        let mut reference = Lcg::new(9);
        let mut buffer = AlignedBuffer::new(16).unwrap();
        NormalFiller::with_seed(9).fill(&mut buffer).unwrap();

        for block in buffer.chunks_exact(BLOCK_LEN) {
            let u1 = reference.draw();
            let u2 = reference.draw();
            let (z0, z1) = combine(u1, u2);
            assert_eq!(&block[..4], &z0.to_array());
            assert_eq!(&block[4..], &z1.to_array());
        }
    }

    #[test]
    fn test_filler_consumes_two_draws_per_block() {
        let mut filler = NormalFiller::with_seed(3);
        let mut buffer = AlignedBuffer::new(24).unwrap();
        filler.fill(&mut buffer).unwrap();

        let mut expected = Lcg::new(3);
        for _ in 0..6 {
            let _ = expected.draw();
        }
        assert_eq!(filler.into_inner().state(), expected.state());
    }
}
