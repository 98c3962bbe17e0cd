use chanmat_matrix::MatrixError;

/// An error type for the linalg module.
#[derive(thiserror::Error, Debug)]
pub enum LinalgError {
    /// Error when an array has neither two nor three axes.
    #[error("Unsupported array with {0} axes, expected 2 (plane) or 3 (volume)")]
    UnsupportedShape(usize),

    /// Error when the channel count does not fit the destination.
    #[error("Channel count mismatch: expected {expected}, found {found}")]
    ChannelMismatch {
        /// Channels the destination can hold.
        expected: usize,
        /// Channels present in the source.
        found: usize,
    },

    /// Error when ndarray rejects a shape.
    #[error("Invalid shape")]
    Shape(#[from] ndarray::ShapeError),

    /// Error from the channel matrix.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
