//! Layout conversions between [`ChannelMatrix`] and ndarray arrays.
//!
//! A plane is an [`Array2`] of shape `(rows, cols)` and a volume is an
//! [`Array3`] of shape `(rows, cols, slices)`, with the slice axis holding
//! the channels.
//!
//! # Layout
//!
//! A channel matrix stores its elements row fastest, then column, then
//! channel. That is exactly the Fortran (column-major) element order of the
//! shape `(rows, cols[, channels])`, so the matrix to ndarray direction is a
//! single linear copy into a Fortran-contiguous destination. The reverse
//! direction reads every element through ndarray indexing, so sources in any
//! memory layout (C order, Fortran order, strided views) are accepted.

use chanmat_matrix::{ChannelMatrix, MatrixDtype, MatrixError};
use ndarray::{
    Array, Array2, Array3, ArrayBase, ArrayD, Data, Dimension, Ix2, Ix3, IxDyn, ShapeBuilder,
};

use crate::error::LinalgError;
use crate::shape::LinalgShape;

/// Bulk copy `data` into `dst`, resizing it to `shape` in Fortran order.
///
/// `data` must already be in Fortran order for `shape`. The existing buffer
/// of `dst` is reused when it has the right shape and is Fortran-contiguous.
fn fortran_copy<T, D>(data: &[T], shape: D, dst: &mut Array<T, D>) -> Result<(), LinalgError>
where
    T: MatrixDtype,
    D: Dimension,
{
    if dst.raw_dim() == shape && dst.t().is_standard_layout() {
        if let Some(buf) = dst.as_slice_memory_order_mut() {
            buf.copy_from_slice(data);
            return Ok(());
        }
    }

    *dst = Array::from_shape_vec(shape.f(), data.to_vec())?;

    Ok(())
}

/// Check that a matrix can be written to a plane without dropping data.
fn check_plane_channels<T: MatrixDtype>(src: &ChannelMatrix<T>) -> Result<(), LinalgError> {
    let plane_len = src.nrows() * src.ncols();
    if src.nchannels() > 1 || src.numel() != plane_len {
        log::warn!(
            "refusing to convert a {}x{}x{} matrix into a plane",
            src.nrows(),
            src.ncols(),
            src.nchannels()
        );
        return Err(LinalgError::ChannelMismatch {
            expected: 1,
            found: src.nchannels(),
        });
    }
    Ok(())
}

/// Resize `dst` and fill it by reading `at(row, col, ch)`.
///
/// Channels are the outer loop and rows the inner one, which reproduces the
/// matrix buffer order.
fn fill_matrix<T, F>(dst: &mut ChannelMatrix<T>, rows: usize, cols: usize, channels: usize, at: F)
where
    T: MatrixDtype,
    F: Fn(usize, usize, usize) -> T,
{
    dst.create(rows, cols, channels);

    let buf = dst.as_slice_mut();
    let mut count = 0;
    for k in 0..channels {
        for j in 0..cols {
            for i in 0..rows {
                buf[count] = at(i, j, k);
                count += 1;
            }
        }
    }
}

/// Convert a single-channel matrix into a plane.
///
/// # Arguments
///
/// * `src` - The matrix to convert. Must have exactly one channel.
/// * `dst` - The plane to write to. It is resized to `(rows, cols)`.
///
/// # Errors
///
/// Returns [`LinalgError::ChannelMismatch`] if `src` has more than one channel.
/// `dst` is left untouched in that case. Use [`matrix_channel_to_plane`] to
/// extract a single channel instead.
///
/// # Examples
///
/// ```
/// use chanmat_linalg::matrix_to_plane;
/// use chanmat_matrix::{ChannelMatrix, MatrixSize};
/// use ndarray::Array2;
///
/// let mat = ChannelMatrix::new(MatrixSize { rows: 3, cols: 2 }, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
///
/// let mut plane = Array2::<i32>::default((0, 0));
/// matrix_to_plane(&mat, &mut plane).unwrap();
///
/// assert_eq!(plane.dim(), (3, 2));
/// assert_eq!(plane[[2, 1]], 6);
/// ```
pub fn matrix_to_plane<T>(src: &ChannelMatrix<T>, dst: &mut Array2<T>) -> Result<(), LinalgError>
where
    T: MatrixDtype,
{
    check_plane_channels(src)?;

    log::debug!("matrix {}x{} -> plane", src.nrows(), src.ncols());

    fortran_copy(src.as_slice(), Ix2(src.nrows(), src.ncols()), dst)
}

/// Copy one channel of a matrix into a plane.
///
/// # Errors
///
/// Returns [`LinalgError::Matrix`] if the channel index is out of bounds.
/// `dst` is left untouched in that case.
pub fn matrix_channel_to_plane<T>(
    src: &ChannelMatrix<T>,
    channel: usize,
    dst: &mut Array2<T>,
) -> Result<(), LinalgError>
where
    T: MatrixDtype,
{
    if channel >= src.nchannels() {
        return Err(MatrixError::ChannelIndexOutOfBounds(channel, src.nchannels()).into());
    }

    log::debug!(
        "matrix {}x{} channel {} -> plane",
        src.nrows(),
        src.ncols(),
        channel
    );

    let plane_len = src.nrows() * src.ncols();
    let start = channel * plane_len;
    fortran_copy(
        &src.as_slice()[start..start + plane_len],
        Ix2(src.nrows(), src.ncols()),
        dst,
    )
}

/// Convert a matrix into a volume with one slice per channel.
///
/// # Examples
///
/// ```
/// use chanmat_linalg::matrix_to_volume;
/// use chanmat_matrix::{ChannelMatrix, MatrixSize};
/// use ndarray::Array3;
///
/// let mat = ChannelMatrix::new(MatrixSize { rows: 2, cols: 3 }, 2, (0..12).collect()).unwrap();
///
/// let mut volume = Array3::<i32>::default((0, 0, 0));
/// matrix_to_volume(&mat, &mut volume).unwrap();
///
/// assert_eq!(volume.dim(), (2, 3, 2));
/// assert_eq!(volume[[1, 2, 1]], 11);
/// ```
pub fn matrix_to_volume<T>(src: &ChannelMatrix<T>, dst: &mut Array3<T>) -> Result<(), LinalgError>
where
    T: MatrixDtype,
{
    log::debug!(
        "matrix {}x{}x{} -> volume",
        src.nrows(),
        src.ncols(),
        src.nchannels()
    );

    fortran_copy(
        src.as_slice(),
        Ix3(src.nrows(), src.ncols(), src.nchannels()),
        dst,
    )
}

/// Convert a matrix into a dynamically shaped array.
///
/// The number of axes of `dst` selects the target: two axes for a plane,
/// three for a volume.
///
/// # Returns
///
/// The shape category that was written.
///
/// # Errors
///
/// Returns [`LinalgError::UnsupportedShape`] if `dst` has neither two nor three
/// axes, and [`LinalgError::ChannelMismatch`] for a multi-channel matrix into a
/// plane. `dst` is left untouched on error.
pub fn matrix_to_linalg<T>(
    src: &ChannelMatrix<T>,
    dst: &mut ArrayD<T>,
) -> Result<LinalgShape, LinalgError>
where
    T: MatrixDtype,
{
    let shape = LinalgShape::from_ndim(dst.ndim()).map_err(|e| {
        log::warn!("cannot convert matrix into array: {e}");
        e
    })?;

    match shape {
        LinalgShape::Plane => {
            check_plane_channels(src)?;
            fortran_copy(src.as_slice(), IxDyn(&[src.nrows(), src.ncols()]), dst)?;
        }
        LinalgShape::Volume => {
            fortran_copy(
                src.as_slice(),
                IxDyn(&[src.nrows(), src.ncols(), src.nchannels()]),
                dst,
            )?;
        }
    }

    log::debug!(
        "matrix {}x{}x{} -> {shape}",
        src.nrows(),
        src.ncols(),
        src.nchannels()
    );

    Ok(shape)
}

/// Convert a plane into a single-channel matrix.
///
/// The plane may be in any memory layout.
///
/// # Examples
///
/// ```
/// use chanmat_linalg::plane_to_matrix;
/// use chanmat_matrix::ChannelMatrix;
/// use ndarray::array;
///
/// let plane = array![[1.0f32, 4.0], [2.0, 5.0], [3.0, 6.0]];
///
/// let mut mat = ChannelMatrix::empty();
/// plane_to_matrix(&plane, &mut mat);
///
/// assert_eq!(mat.nchannels(), 1);
/// assert_eq!(mat.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// ```
pub fn plane_to_matrix<T, S>(src: &ArrayBase<S, Ix2>, dst: &mut ChannelMatrix<T>)
where
    T: MatrixDtype,
    S: Data<Elem = T>,
{
    let (rows, cols) = src.dim();

    log::debug!("plane {rows}x{cols} -> matrix");

    fill_matrix(dst, rows, cols, 1, |i, j, _| src[[i, j]]);
}

/// Convert a volume into a matrix with one channel per slice.
///
/// The volume may be in any memory layout.
pub fn volume_to_matrix<T, S>(src: &ArrayBase<S, Ix3>, dst: &mut ChannelMatrix<T>)
where
    T: MatrixDtype,
    S: Data<Elem = T>,
{
    let (rows, cols, slices) = src.dim();

    log::debug!("volume {rows}x{cols}x{slices} -> matrix");

    fill_matrix(dst, rows, cols, slices, |i, j, k| src[[i, j, k]]);
}

/// Convert a dynamically shaped array into a matrix.
///
/// # Returns
///
/// The shape category of the source.
///
/// # Errors
///
/// Returns [`LinalgError::UnsupportedShape`] if `src` has neither two nor three
/// axes. `dst` is left untouched in that case.
pub fn linalg_to_matrix<T, S>(
    src: &ArrayBase<S, IxDyn>,
    dst: &mut ChannelMatrix<T>,
) -> Result<LinalgShape, LinalgError>
where
    T: MatrixDtype,
    S: Data<Elem = T>,
{
    let shape = LinalgShape::from_ndim(src.ndim()).map_err(|e| {
        log::warn!("cannot convert array into matrix: {e}");
        e
    })?;

    match shape {
        LinalgShape::Plane => plane_to_matrix(&src.view().into_dimensionality::<Ix2>()?, dst),
        LinalgShape::Volume => volume_to_matrix(&src.view().into_dimensionality::<Ix3>()?, dst),
    }

    Ok(shape)
}
