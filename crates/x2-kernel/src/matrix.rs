//! Dense column-major matrices.
//!
//! Feature matrices are stored one sample per column: rows are the feature
//! dimension, columns are samples. Element `(r, c)` of a contiguous matrix
//! lives at `data[c * rows + r]`, so every sample is one contiguous slice.
//!
//! - [`MatrixRef`]: a read-only, optionally strided view over borrowed data.
//! - [`Matrix`]: an owned, contiguous matrix, used for kernel outputs.

use std::ops::{Index, IndexMut};

use scirs2_core::ndarray::{Array2, ArrayView2};

use crate::error::{KernelError, Result};

/// Read-only view of a column-major `f64` matrix.
///
/// `col_stride` is the distance between the starts of consecutive columns
/// (the leading dimension). It equals `rows` for a contiguous matrix and may
/// be larger when viewing a sub-block of a bigger buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixRef<'a> {
    data: &'a [f64],
    rows: usize,
    cols: usize,
    col_stride: usize,
}

impl<'a> MatrixRef<'a> {
    /// Create a contiguous view. `data.len()` must equal `rows * cols`.
    ///
    /// # Examples
    /// ```
    /// use x2_kernel::MatrixRef;
    ///
    /// // Two 3-dimensional samples
    /// let data = [0.1, 0.2, 0.7, 0.3, 0.3, 0.4];
    /// let view = MatrixRef::new(&data, 3, 2).unwrap();
    /// assert_eq!(view.column(1), &[0.3, 0.3, 0.4]);
    /// ```
    pub fn new(data: &'a [f64], rows: usize, cols: usize) -> Result<Self> {
        match rows.checked_mul(cols) {
            Some(len) if len == data.len() => Ok(Self {
                data,
                rows,
                cols,
                col_stride: rows,
            }),
            _ => Err(KernelError::InvalidShape {
                rows,
                cols,
                len: data.len(),
                reason: "buffer length must equal rows * cols".to_string(),
            }),
        }
    }

    /// Create a strided view where column `j` starts at `data[j * col_stride]`.
    pub fn with_stride(
        data: &'a [f64],
        rows: usize,
        cols: usize,
        col_stride: usize,
    ) -> Result<Self> {
        let invalid = |reason: &str| KernelError::InvalidShape {
            rows,
            cols,
            len: data.len(),
            reason: reason.to_string(),
        };

        if col_stride < rows {
            return Err(invalid("column stride must be at least the row count"));
        }

        let required = if cols == 0 {
            Some(0)
        } else {
            col_stride
                .checked_mul(cols - 1)
                .and_then(|offset| offset.checked_add(rows))
        };

        match required {
            Some(required) if required <= data.len() => Ok(Self {
                data,
                rows,
                cols,
                col_stride,
            }),
            _ => Err(invalid("buffer too short for the requested stride")),
        }
    }

    /// Number of rows (feature dimension).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (samples).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Distance between consecutive column starts.
    pub fn col_stride(&self) -> usize {
        self.col_stride
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the view covers zero elements.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Column `j` as a contiguous slice of length `rows`.
    ///
    /// # Panics
    /// Panics if `j >= cols`.
    pub fn column(&self, j: usize) -> &'a [f64] {
        assert!(j < self.cols, "column {} out of bounds ({})", j, self.cols);
        let start = j * self.col_stride;
        &self.data[start..start + self.rows]
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[col * self.col_stride + row])
        } else {
            None
        }
    }

    /// Iterate over columns in order.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &'a [f64]> + 'a {
        let view = *self;
        (0..view.cols).map(move |j| view.column(j))
    }

    /// Copy the viewed elements into a contiguous owned matrix.
    pub fn to_matrix(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.rows * self.cols);
        for column in self.columns() {
            data.extend_from_slice(column);
        }
        Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

/// Owned, contiguous, column-major `f64` matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Allocate a `rows x cols` matrix filled with zeros.
    ///
    /// # Panics
    /// Panics with "capacity overflow" if `rows * cols` overflows `usize`,
    /// like any other oversized `Vec` allocation.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let len = rows.checked_mul(cols).expect("capacity overflow");
        Self {
            data: vec![0.0; len],
            rows,
            cols,
        }
    }

    /// Wrap a column-major buffer. `data.len()` must equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        MatrixRef::new(&data, rows, cols)?;
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix whose columns are the given sample vectors.
    ///
    /// # Examples
    /// ```
    /// use x2_kernel::Matrix;
    ///
    /// let m = Matrix::from_columns(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[(1, 2)], 6.0);
    /// ```
    pub fn from_columns(columns: &[Vec<f64>]) -> Result<Self> {
        let rows = columns.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows * columns.len());

        for (j, column) in columns.iter().enumerate() {
            if column.len() != rows {
                return Err(KernelError::DimensionMismatch {
                    expected: vec![rows],
                    got: vec![column.len()],
                    context: format!("column {} of matrix", j),
                });
            }
            data.extend_from_slice(column);
        }

        Ok(Self {
            data,
            rows,
            cols: columns.len(),
        })
    }

    /// Copy an ndarray view into column-major storage.
    pub fn from_array(array: ArrayView2<'_, f64>) -> Self {
        let (rows, cols) = array.dim();
        // Row-major iteration of the transpose walks the original column by column.
        let data = array.t().iter().copied().collect();
        Self { data, rows, cols }
    }

    /// Convert to an ndarray with the same logical shape.
    pub fn to_array2(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.rows, self.cols), |(r, c)| self[(r, c)])
    }

    /// Borrow as a contiguous view.
    pub fn view(&self) -> MatrixRef<'_> {
        MatrixRef {
            data: &self.data,
            rows: self.rows,
            cols: self.cols,
            col_stride: self.rows,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.view().get(row, col)
    }

    /// Column `j` as a slice.
    ///
    /// # Panics
    /// Panics if `j >= cols`.
    pub fn column(&self, j: usize) -> &[f64] {
        assert!(j < self.cols, "column {} out of bounds ({})", j, self.cols);
        &self.data[j * self.rows..(j + 1) * self.rows]
    }

    /// Column `j` as a mutable slice.
    ///
    /// # Panics
    /// Panics if `j >= cols`.
    pub fn column_mut(&mut self, j: usize) -> &mut [f64] {
        assert!(j < self.cols, "column {} out of bounds ({})", j, self.cols);
        &mut self.data[j * self.rows..(j + 1) * self.rows]
    }

    /// Underlying column-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Take ownership of the column-major buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[col * self.rows + row]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &mut self.data[col * self.rows + row]
    }
}

impl<'a> From<&'a Matrix> for MatrixRef<'a> {
    fn from(matrix: &'a Matrix) -> Self {
        matrix.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::ndarray::array;

    #[test]
    fn test_new_rejects_wrong_length() {
        let data = [1.0, 2.0, 3.0];
        let err = MatrixRef::new(&data, 2, 2).unwrap_err();
        assert!(matches!(err, KernelError::InvalidShape { len: 3, .. }));
    }

    #[test]
    fn test_column_major_layout() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let view = MatrixRef::new(&data, 3, 2).unwrap();
        assert_eq!(view.column(0), &[1.0, 2.0, 3.0]);
        assert_eq!(view.column(1), &[4.0, 5.0, 6.0]);
        assert_eq!(view.get(2, 1), Some(6.0));
        assert_eq!(view.get(3, 0), None);
        assert_eq!(view.get(0, 2), None);
    }

    #[test]
    fn test_strided_view() {
        // 2x2 block out of a buffer with leading dimension 3
        let data = [1.0, 2.0, -1.0, 3.0, 4.0];
        let view = MatrixRef::with_stride(&data, 2, 2, 3).unwrap();
        assert_eq!(view.column(0), &[1.0, 2.0]);
        assert_eq!(view.column(1), &[3.0, 4.0]);
        assert_eq!(view.to_matrix().as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_stride_validation() {
        let data = [0.0; 5];
        assert!(MatrixRef::with_stride(&data, 3, 2, 2).is_err());
        assert!(MatrixRef::with_stride(&data, 2, 2, 4).is_err());
        assert!(MatrixRef::with_stride(&data, 2, 0, 100).is_ok());
    }

    #[test]
    fn test_empty_shapes() {
        let view = MatrixRef::new(&[], 4, 0).unwrap();
        assert_eq!(view.shape(), (4, 0));
        assert!(view.is_empty());
        assert_eq!(view.columns().count(), 0);

        let view = MatrixRef::new(&[], 0, 3).unwrap();
        assert_eq!(view.columns().len(), 3);
        assert!(view.columns().all(|c| c.is_empty()));
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_zeros_overflowing_shape_panics() {
        let _ = Matrix::zeros(usize::MAX, 2);
    }

    #[test]
    fn test_zeros_large_empty_shape() {
        let m = Matrix::zeros(0, usize::MAX);
        assert_eq!(m.shape(), (0, usize::MAX));
        assert!(m.as_slice().is_empty());
    }

    #[test]
    fn test_from_columns() {
        let m = Matrix::from_columns(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);

        let err = Matrix::from_columns(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, KernelError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_index_and_column_mut() {
        let mut m = Matrix::zeros(2, 3);
        m[(1, 2)] = 5.0;
        m.column_mut(0)[0] = 1.0;
        assert_eq!(m.as_slice(), &[1.0, 0.0, 0.0, 0.0, 0.0, 5.0]);
        assert_eq!(m.get(1, 2), Some(5.0));
    }

    #[test]
    fn test_ndarray_interop() {
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let m = Matrix::from_array(a.view());
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.column(1), &[2.0, 5.0]);
        assert_eq!(m.to_array2(), a);
    }
}
