#![doc = include_str!("../README.md")]

#[doc(inline)]
pub use chanmat_matrix as matrix;

#[doc(inline)]
pub use chanmat_linalg as linalg;
