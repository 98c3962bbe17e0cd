#![deny(missing_docs)]
//! Channel matrix types: a dense `rows x cols x channels` array in one buffer.

/// channel matrix representation.
pub mod matrix;

/// Error types for the matrix module.
pub mod error;

/// serde support for the channel matrix.
#[cfg(feature = "serde")]
pub mod serde;

pub use crate::error::MatrixError;
pub use crate::matrix::{ChannelMatrix, MatrixDtype, MatrixSize};
