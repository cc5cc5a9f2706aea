//! Determinants by cofactor expansion.
//!
//! The determinant is expanded along the first row of the matrix, recursing into the minors until
//! one of the 0x0, 1x1 or 2x2 base cases is reached. This takes *O(n!)* time, so it is only
//! practical for small matrices.

use crate::{Matrix, Number, Result};

/// Matrices of this order or larger get a log message before their determinant is expanded.
const EXPENSIVE_EXPANSION_ORDER: usize = 10;

impl<T: Number> Matrix<T> {
    /// Returns the [determinant] of the matrix.
    ///
    /// The 0x0 matrix has a determinant of 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSquare`] if the matrix is not square.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cofactor::*;
    /// assert_eq!(Matrix::from([[1, 2], [3, 4]]).determinant()?, -2);
    /// assert_eq!(Matrix::from([
    ///     [1, 5, 3, 7],
    ///     [4, 8, 6, 2],
    ///     [7, 8, 9, 5],
    ///     [5, 2, 8, 6],
    /// ]).determinant()?, 408);
    ///
    /// let err = Matrix::from([[1, 2, 3], [4, 5, 6]]).determinant().unwrap_err();
    /// assert_eq!(err.to_string(), "expected square matrix, got rows=2 cols=3");
    /// # Ok::<(), Error>(())
    /// ```
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    /// [`Error::NotSquare`]: crate::Error::NotSquare
    pub fn determinant(&self) -> Result<T> {
        self.require_square()?;
        if self.rows() >= EXPENSIVE_EXPANSION_ORDER {
            log::debug!(
                "expanding determinant of {} matrix by cofactors, this may take a while",
                self.shape()
            );
        }
        Ok(expand(self))
    }

    /// Returns the cofactor of the element at `(row, col)`: the determinant of the [minor] obtained
    /// by deleting that row and column, negated if `row + col` is odd.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSquare`] if the matrix is not square.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cofactor::*;
    /// let mat = Matrix::from([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    ///     [7, 8, 10],
    /// ]);
    /// assert_eq!(mat.cofactor(0, 0)?, 2);
    /// assert_eq!(mat.cofactor(0, 1)?, 2);
    /// assert_eq!(mat.cofactor(1, 1)?, -11);
    /// # Ok::<(), Error>(())
    /// ```
    ///
    /// [minor]: Matrix::minor
    /// [`Error::NotSquare`]: crate::Error::NotSquare
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T> {
        self.require_square()?;
        Ok(cofactor(self, row, col))
    }

    /// Returns whether the matrix is invertible, ie. whether its [determinant] is not zero.
    ///
    /// The determinant is compared against zero exactly. Floating-point rounding can produce a tiny
    /// nonzero determinant for a matrix that is singular in exact arithmetic, which is then
    /// reported as invertible.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSquare`] if the matrix is not square.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cofactor::*;
    /// assert!(Matrix::from([[1.0, 1.0], [1.0, 2.0]]).is_invertible()?);
    /// assert!(!Matrix::from([[1.0, 1.0], [1.0, 1.0]]).is_invertible()?);
    /// # Ok::<(), Error>(())
    /// ```
    ///
    /// [determinant]: Matrix::determinant
    /// [`Error::NotSquare`]: crate::Error::NotSquare
    pub fn is_invertible(&self) -> Result<bool> {
        Ok(self.determinant()? != T::ZERO)
    }
}

/// Laplace expansion along the first row. `mat` must be square.
fn expand<T: Number>(mat: &Matrix<T>) -> T {
    match mat.rows() {
        0 => T::ONE,
        1 => mat[(0, 0)],
        2 => mat[(0, 0)] * mat[(1, 1)] - mat[(0, 1)] * mat[(1, 0)],
        n => (0..n).fold(T::ZERO, |acc, col| {
            acc + mat[(0, col)] * cofactor(mat, 0, col)
        }),
    }
}

fn cofactor<T: Number>(mat: &Matrix<T>, row: usize, col: usize) -> T {
    let minor = expand(&mat.minor(row, col));
    if (row + col) % 2 == 0 {
        minor
    } else {
        -minor
    }
}
