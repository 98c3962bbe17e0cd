/// An error type for the matrix module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MatrixError {
    /// Error when the data length does not match the matrix shape.
    #[error("Data length ({0}) does not match the matrix size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index {0} is out of bounds for {1} channels")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when the element index is out of bounds.
    #[error("Index ({0}, {1}, {2}) is out of bounds for shape ({3}, {4}, {5})")]
    IndexOutOfBounds(usize, usize, usize, usize, usize, usize),
}
