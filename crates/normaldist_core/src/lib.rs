//! # normaldist_core
//!
//! Vectorised standard normal generation via the Box-Muller transform.
//!
//! ## Pipeline
//!
//! Data flows in one direction:
//!
//! ```text
//! rng::Lcg ──u1,u2──▶ math::{vec_log, vec_sincos} ──▶ transform::combine ──▶ driver (buffer)
//! ```
//!
//! - [`rng`]: 4-lane linear congruential generator producing uniforms in [0, 1)
//! - [`math`]: branch-free lane-parallel `log`, `sin`, `cos` approximations
//! - [`transform`]: Cartesian Box-Muller step turning uniform pairs into normal pairs
//! - [`driver`]: fills caller-owned buffers block by block
//! - [`reference`]: scalar and Ziggurat generators used for comparison
//!
//! ## Usage Example
//!
//! ```rust
//! use normaldist_core::{fill_normal, AlignedBuffer};
//!
//! // 32-byte aligned storage, length a multiple of 8
//! let mut buffer = AlignedBuffer::new(1024).unwrap();
//! fill_normal(buffer.as_mut_slice());
//!
//! assert!(buffer.as_slice().iter().all(|z| z.is_finite()));
//! ```
//!
//! ## Preconditions
//!
//! Output buffers must hold a multiple of [`BLOCK_LEN`] floats and start on a
//! [`MIN_ALIGN`]-byte boundary. [`fill_normal`] panics when either is violated;
//! [`try_fill_normal`] and [`NormalFiller::fill`] return a [`FillError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod driver;
pub mod error;
pub mod lane;
pub mod math;
pub mod reference;
pub mod rng;
pub mod transform;

pub use driver::{fill_normal, try_fill_normal, AlignedBuffer, NormalFiller};
pub use error::FillError;
pub use lane::{Lane, BLOCK_ALIGN, BLOCK_LEN, LANE_WIDTH, MIN_ALIGN};
pub use math::{vec_cos, vec_log, vec_sin, vec_sincos};
pub use rng::{Lcg, UniformLanes, DEFAULT_SEED};
pub use transform::combine;
