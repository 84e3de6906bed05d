//! A wrapper around [`nalgebra::DMatrix`] with checked construction and checked arithmetic.
//!
//! The arithmetic is written out element by element instead of using nalgebra's operators,
//! products always sum their terms in index order.

use crate::error::{CurveError, Result};
use nalgebra::{DMatrix, Scalar};
use num::Num;
use std::fmt;

/// Dense, non-empty, rectangular matrix
///
/// A matrix never changes after construction, all operations return new matrices.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T: Scalar>(DMatrix<T>);

impl<T: Scalar + Copy> Matrix<T> {
    /// Builds a matrix from its rows.
    ///
    /// Fails if there are no rows, no columns or if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let ncols = match rows.first() {
            None => return Err(CurveError::Dimension("a matrix needs at least one row".into())),
            Some(row) if row.is_empty() => {
                return Err(CurveError::Dimension("a matrix needs at least one column".into()))
            }
            Some(row) => row.len(),
        };
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != ncols) {
            return Err(CurveError::Dimension(format!(
                "row {} has {} columns while row 0 has {}",
                i,
                row.len(),
                ncols
            )));
        }

        let nrows = rows.len();
        let data: Vec<T> = rows.into_iter().flatten().collect();
        Ok(Matrix(DMatrix::from_row_slice(nrows, ncols, &data)))
    }

    /// Builds a matrix from a fixed size array of rows.
    ///
    /// Only used with literal arrays of at least one row and column.
    pub(crate) fn from_array<const R: usize, const C: usize>(rows: [[T; C]; R]) -> Self {
        Matrix(DMatrix::from_fn(R, C, |i, j| rows[i][j]))
    }

    /// Returns the element at row `i` and column `j`.
    pub fn element(&self, i: usize, j: usize) -> Result<T> {
        let (rows, columns) = self.dimensions();
        self.0.get((i, j)).copied().ok_or(CurveError::Index {
            row: i,
            column: j,
            rows,
            columns,
        })
    }

    /// Returns the number of rows and columns
    pub fn dimensions(&self) -> (usize, usize) {
        self.0.shape()
    }

    /// Checks whether two matrices have the same number of rows and columns
    pub fn have_same_dimensions(a: &Self, b: &Self) -> bool {
        a.dimensions() == b.dimensions()
    }

    /// Borrows the underlying nalgebra matrix
    pub fn as_nalgebra(&self) -> &DMatrix<T> {
        &self.0
    }
}

impl<T: Scalar + Copy + Num> Matrix<T> {
    /// Adds `self` and `rhs` element wise.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        if !Matrix::have_same_dimensions(self, rhs) {
            return Err(CurveError::DimensionMismatch {
                operation: "add",
                left: self.dimensions(),
                right: rhs.dimensions(),
            });
        }
        let (rows, columns) = self.dimensions();
        Ok(Matrix(DMatrix::from_fn(rows, columns, |i, j| {
            self.0[(i, j)] + rhs.0[(i, j)]
        })))
    }

    /// Multiplies every element by the scalar `k`.
    pub fn scale(&self, k: T) -> Self {
        Matrix(self.0.map(|x| x * k))
    }

    /// Computes the matrix product `self * rhs`.
    ///
    /// `self` needs as many columns as `rhs` has rows.
    pub fn multiply(&self, rhs: &Self) -> Result<Self> {
        let (rows, shared) = self.dimensions();
        let (rhs_rows, columns) = rhs.dimensions();
        if shared != rhs_rows {
            return Err(CurveError::DimensionMismatch {
                operation: "multiply",
                left: self.dimensions(),
                right: rhs.dimensions(),
            });
        }
        Ok(Matrix(DMatrix::from_fn(rows, columns, |i, j| {
            (0..shared).fold(T::zero(), |sum, k| sum + self.0[(i, k)] * rhs.0[(k, j)])
        })))
    }
}

impl<T: Scalar + Copy> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = CurveError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Matrix::from_rows(rows)
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
