//! # Uniform Lane Generation
//!
//! This module provides the uniform source feeding the Box-Muller transform:
//! a linear congruential generator advancing four independent 32-bit states
//! in parallel, one per lane.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator is constructed from a `u32` seed and
//!   produces the same stream on every platform
//! - **Zero allocation**: state lives in one lane register; draws return by value
//! - **Static dispatch**: consumers are generic over [`UniformLanes`], no
//!   `Box<dyn Trait>` in the hot loop
//! - **Exclusive state**: draws take `&mut self`, so one instance is never
//!   advanced from two places at once
//!
//! ## Usage Example
//!
//! ```rust
//! use normaldist_core::rng::{Lcg, UniformLanes};
//!
//! let mut lcg = Lcg::new(12345);
//! let u = lcg.draw().to_array();
//!
//! assert!(u.iter().all(|&x| (0.0..1.0).contains(&x)));
//! ```

mod lcg;

pub use lcg::{Lcg, DEFAULT_SEED, INCREMENT, MULTIPLIER};

use crate::lane::Lane;

/// Source of lane-parallel uniform variates in [0, 1).
///
/// Each call advances the source and returns [`crate::LANE_WIDTH`] fresh
/// uniforms. Implementations must be deterministic for a given construction.
pub trait UniformLanes {
    /// Advances the state and returns the next lane of uniforms in [0, 1).
    fn draw(&mut self) -> Lane;
}

impl<G: UniformLanes + ?Sized> UniformLanes for &mut G {
    #[inline(always)]
    fn draw(&mut self) -> Lane {
        (**self).draw()
    }
}
