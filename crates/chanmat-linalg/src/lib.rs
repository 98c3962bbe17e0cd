#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Conversions between channel matrices and ndarray arrays.
pub mod convert;

/// Error types for the linalg module.
pub mod error;

/// Shape categories of the ndarray side.
pub mod shape;

pub use crate::convert::{
    linalg_to_matrix, matrix_channel_to_plane, matrix_to_linalg, matrix_to_plane,
    matrix_to_volume, plane_to_matrix, volume_to_matrix,
};
pub use crate::error::LinalgError;
pub use crate::shape::LinalgShape;
