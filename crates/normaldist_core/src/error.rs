//! Error types for the batch driver.
//!
//! The core has no recoverable runtime failures. The only errors are
//! violated buffer preconditions, which [`crate::fill_normal`] turns into a
//! panic and the checked entry points hand back to the caller.

use thiserror::Error;

/// Buffer precondition violation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FillError {
    /// Buffer length is not a whole number of output blocks.
    #[error("Invalid buffer length {count}: must be a multiple of {block}")]
    LengthNotMultiple {
        /// Requested number of floats.
        count: usize,
        /// Required block length.
        block: usize,
    },

    /// Buffer does not start on the required byte boundary.
    #[error("Misaligned buffer at {address:#x}: must be aligned to {align} bytes")]
    Misaligned {
        /// Start address of the buffer.
        address: usize,
        /// Required alignment in bytes.
        align: usize,
    },
}
