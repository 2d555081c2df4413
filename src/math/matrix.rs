use std::error::Error;
use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::Zero;

/// Dense row-major matrix. Every row has exactly `cols` elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Array2<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(ShapeError {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a dense matrix from nested rows. Fails unless all rows have the
    /// same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != ncols) {
            return Err(ShapeError {
                rows: nrows,
                cols: ncols,
                len: rows.iter().map(Vec::len).sum(),
            });
        }
        let data: Vec<T> = rows.into_iter().flatten().collect();
        Self::from_shape_vec((nrows, ncols), data)
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        (0..self.rows).map(|r| self.row_slice(r).to_vec()).collect()
    }
}

impl<T> Array2<T>
where
    T: Clone + Zero,
{
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> Index<(usize, usize)> for Array2<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Array2<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl<T: fmt::Display> fmt::Display for Array2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows {
            if row > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    rows: usize,
    cols: usize,
    len: usize,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid shape ({}, {}) for buffer of length {}",
            self.rows, self.cols, self.len
        )
    }
}

impl Error for ShapeError {}

/// Caller-supplied matrix addressed as `matrix[row][column]`.
///
/// Rows may have different lengths and may be missing entirely; the
/// multiplication validator is responsible for rejecting both.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowMatrix {
    rows: Vec<Option<Vec<i32>>>,
}

impl RowMatrix {
    pub fn with_rows(rows: Vec<Option<Vec<i32>>>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[i32]> {
        self.rows.get(index).and_then(|r| r.as_deref())
    }

    pub fn rows(&self) -> impl Iterator<Item = Option<&[i32]>> + '_ {
        self.rows.iter().map(|r| r.as_deref())
    }

    /// Index of the first absent row, if any.
    pub fn first_missing_row(&self) -> Option<usize> {
        self.rows.iter().position(Option::is_none)
    }
}

impl From<Vec<Vec<i32>>> for RowMatrix {
    fn from(rows: Vec<Vec<i32>>) -> Self {
        Self {
            rows: rows.into_iter().map(Some).collect(),
        }
    }
}

impl From<Array2<i32>> for RowMatrix {
    fn from(value: Array2<i32>) -> Self {
        RowMatrix::from(value.to_rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_rejects_jagged_input() {
        let err = Array2::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(err.to_string(), "invalid shape (2, 2) for buffer of length 3");

        // same element count as a 3x2 matrix, but still jagged
        assert!(Array2::from_rows(vec![vec![1, 2], vec![3], vec![4, 5, 6]]).is_err());
    }

    #[test]
    fn test_dense_matrix_back_to_rows() {
        let dense = Array2::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let rows = RowMatrix::from(dense);
        assert_eq!(rows.row_count(), 2);
        assert_eq!(rows.row(1), Some(&[3, 4][..]));
    }

    #[test]
    fn test_zeros_and_index() {
        let mut m = Array2::<i32>::zeros(2, 3);
        m[(1, 2)] = 7;
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.row_slice(1), &[0, 0, 7]);
        assert_eq!(m.to_string(), "[[0, 0, 0], [0, 0, 7]]");
    }

    #[test]
    fn test_row_matrix_missing_rows() {
        let m = RowMatrix::with_rows(vec![Some(vec![1]), None, Some(vec![2, 3])]);
        assert_eq!(m.row_count(), 3);
        assert_eq!(m.first_missing_row(), Some(1));
        assert_eq!(m.row(2), Some(&[2, 3][..]));
        assert_eq!(m.row(1), None);
        assert!(RowMatrix::from(vec![vec![1]]).first_missing_row().is_none());
    }
}
