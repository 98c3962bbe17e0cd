use crate::error::MatrixError;

/// Matrix size in elements per channel.
///
/// # Examples
///
/// ```
/// use chanmat_matrix::MatrixSize;
///
/// let size = MatrixSize { rows: 20, cols: 10 };
///
/// assert_eq!(size.rows, 20);
/// assert_eq!(size.cols, 10);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatrixSize {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl std::fmt::Display for MatrixSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "MatrixSize {{ rows: {}, cols: {} }}", self.rows, self.cols)
    }
}

impl From<[usize; 2]> for MatrixSize {
    fn from(size: [usize; 2]) -> Self {
        MatrixSize {
            rows: size[0],
            cols: size[1],
        }
    }
}

/// Trait for the real scalar element types a channel matrix can hold.
///
/// Complex numbers are not supported; `PartialOrd` keeps them out.
pub trait MatrixDtype:
    Copy + Default + num_traits::Num + PartialOrd + Send + Sync + 'static
{
}

macro_rules! impl_matrix_dtype {
    ($($t:ty),*) => {
        $(impl MatrixDtype for $t {})*
    };
}

impl_matrix_dtype!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

/// A dense `rows x cols x channels` matrix backed by a single buffer.
///
/// The row index varies fastest, then the column, then the channel. Element
/// `(row, col, ch)` lives at `row + rows * (col + cols * ch)`, which is the
/// Fortran (column-major) order of the shape `(rows, cols, channels)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChannelMatrix<T>
where
    T: MatrixDtype,
{
    pub(crate) data: Vec<T>,
    pub(crate) size: MatrixSize,
    pub(crate) channels: usize,
}

impl<T> ChannelMatrix<T>
where
    T: MatrixDtype,
{
    /// Create a new matrix from its element buffer.
    ///
    /// # Arguments
    ///
    /// * `size` - The number of rows and columns.
    /// * `channels` - The number of channels.
    /// * `data` - The elements, row fastest and channel slowest.
    ///
    /// # Errors
    ///
    /// If the length of the data does not match the shape, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use chanmat_matrix::{ChannelMatrix, MatrixSize};
    ///
    /// let mat = ChannelMatrix::<u8>::new(
    ///     MatrixSize { rows: 20, cols: 10 },
    ///     3,
    ///     vec![0u8; 20 * 10 * 3],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(mat.nrows(), 20);
    /// assert_eq!(mat.ncols(), 10);
    /// assert_eq!(mat.nchannels(), 3);
    /// ```
    pub fn new(size: MatrixSize, channels: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        let expected = size.rows * size.cols * channels;
        if data.len() != expected {
            return Err(MatrixError::InvalidDataLength(data.len(), expected));
        }

        Ok(Self {
            data,
            size,
            channels,
        })
    }

    /// Create a new matrix with every element set to `val`.
    pub fn from_size_val(size: MatrixSize, channels: usize, val: T) -> Result<Self, MatrixError> {
        let data = vec![val; size.rows * size.cols * channels];
        Self::new(size, channels, data)
    }

    /// An empty `0 x 0 x 0` matrix.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reallocate the matrix to a new shape.
    ///
    /// The previous contents are not preserved; every element is reset to
    /// `T::default()`.
    pub fn create(&mut self, rows: usize, cols: usize, channels: usize) {
        let numel = rows * cols * channels;
        self.data.clear();
        self.data.resize(numel, T::default());
        self.size = MatrixSize { rows, cols };
        self.channels = channels;
    }

    /// Get the number of rows.
    pub fn nrows(&self) -> usize {
        self.size.rows
    }

    /// Get the number of columns.
    pub fn ncols(&self) -> usize {
        self.size.cols
    }

    /// Get the number of channels.
    pub fn nchannels(&self) -> usize {
        self.channels
    }

    /// Get the size of a single channel.
    pub fn size(&self) -> MatrixSize {
        self.size
    }

    /// Get the total number of elements.
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The element buffer, row fastest and channel slowest.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The mutable element buffer, row fastest and channel slowest.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix and return its element buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Compute the buffer offset of `(row, col, ch)` without bounds checks.
    #[inline]
    pub fn linear_index(&self, row: usize, col: usize, ch: usize) -> usize {
        row + self.size.rows * (col + self.size.cols * ch)
    }

    fn in_bounds(&self, row: usize, col: usize, ch: usize) -> bool {
        row < self.size.rows && col < self.size.cols && ch < self.channels
    }

    /// Get a reference to the element at `(row, col, ch)`.
    pub fn get(&self, row: usize, col: usize, ch: usize) -> Option<&T> {
        if !self.in_bounds(row, col, ch) {
            return None;
        }
        self.data.get(self.linear_index(row, col, ch))
    }

    /// Get a mutable reference to the element at `(row, col, ch)`.
    pub fn get_mut(&mut self, row: usize, col: usize, ch: usize) -> Option<&mut T> {
        if !self.in_bounds(row, col, ch) {
            return None;
        }
        let idx = self.linear_index(row, col, ch);
        self.data.get_mut(idx)
    }

    /// Read the element at `(row, col, ch)`.
    ///
    /// # Errors
    ///
    /// If the index is out of bounds, an error is returned.
    pub fn at(&self, row: usize, col: usize, ch: usize) -> Result<T, MatrixError> {
        self.get(row, col, ch).copied().ok_or(MatrixError::IndexOutOfBounds(
            row,
            col,
            ch,
            self.size.rows,
            self.size.cols,
            self.channels,
        ))
    }

    /// Get a single channel of the matrix.
    ///
    /// # Returns
    ///
    /// A new single-channel matrix holding a copy of the given channel.
    ///
    /// # Errors
    ///
    /// If the channel index is out of bounds, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use chanmat_matrix::{ChannelMatrix, MatrixSize};
    ///
    /// let mat = ChannelMatrix::<f32>::new(
    ///     MatrixSize { rows: 2, cols: 1 },
    ///     3,
    ///     vec![0., 1., 2., 3., 4., 5.],
    /// )
    /// .unwrap();
    ///
    /// let ch = mat.channel(2).unwrap();
    /// assert_eq!(ch.as_slice(), &[4., 5.]);
    /// ```
    pub fn channel(&self, channel: usize) -> Result<ChannelMatrix<T>, MatrixError> {
        if channel >= self.channels {
            return Err(MatrixError::ChannelIndexOutOfBounds(channel, self.channels));
        }

        // channels are contiguous because the channel axis varies slowest
        let plane_len = self.size.rows * self.size.cols;
        let start = channel * plane_len;
        let channel_data = self.data[start..start + plane_len].to_vec();

        ChannelMatrix::new(self.size, 1, channel_data)
    }

    /// Split the matrix into its channels.
    pub fn split_channels(&self) -> Result<Vec<ChannelMatrix<T>>, MatrixError> {
        (0..self.channels).map(|ch| self.channel(ch)).collect()
    }
}
