//! # Uniform-to-Normal Transforms
//!
//! The Box-Muller step of the pipeline. It consumes two lanes of uniforms
//! and produces two lanes of independent standard normal variates.
//!
//! Only the Cartesian form is provided; the polar (rejection) form needs a
//! data-dependent loop per lane and does not vectorise.

mod box_muller;

pub use box_muller::{combine, TAU_F32};
