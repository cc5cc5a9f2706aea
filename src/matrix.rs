use std::fmt;

use itertools::iproduct;

use crate::{Error, One, Result, Zero};

mod elimination;
mod ops;

/// The dimensions of a [`Matrix`].
///
/// Displayed as `[rows][cols]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns whether a matrix of this shape has as many rows as it has columns.
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}]", self.rows, self.cols)
    }
}

/// A dense, row-major matrix with element type `T`.
///
/// The dimensions of a [`Matrix`] are determined at runtime, and every row always holds the same
/// number of elements. Operations that require specific shapes (like [`Matrix::determinant`] or
/// [`Matrix::matmul`]) check them and return an [`Error`] describing the mismatch.
///
/// # Construction
///
/// - [`Matrix::from_rows`] builds a matrix from any iterator of rows, and rejects rows of unequal
///   length.
/// - The [`From`] impl for nested arrays (`[[T; C]; R]`) is infallible, since arrays are always
///   rectangular.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - [`Matrix::zeros`] and [`Matrix::identity`] create the most commonly used matrices.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for tuples of `(usize, usize)`. The first
/// element of the tuple is the *row*, the second is the *column*. Indices are 0-based.
///
/// ```
/// # use cofactor::*;
/// let mut mat = Matrix::from([
///     [0, 1],
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Creates a [`Matrix`] from an iterator of rows.
    ///
    /// Passing no rows at all results in a 0x0 matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Ragged`] if any row has a different length than the first one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cofactor::*;
    /// let mat = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]])?;
    /// assert_eq!(mat.shape(), Shape::new(2, 3));
    ///
    /// let ragged = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5]]);
    /// assert_eq!(ragged, Err(Error::Ragged { row: 1, expected: 3, got: 2 }));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut data = Vec::new();
        let mut cols = None;
        let mut count = 0;
        for (index, row) in rows.into_iter().enumerate() {
            let start = data.len();
            data.extend(row);
            let got = data.len() - start;
            match cols {
                None => cols = Some(got),
                Some(expected) if expected != got => {
                    return Err(Error::Ragged {
                        row: index,
                        expected,
                        got,
                    });
                }
                Some(_) => {}
            }
            count += 1;
        }

        Ok(Self {
            data,
            rows: count,
            cols: cols.unwrap_or(0),
        })
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each
    /// element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cofactor::*;
    /// let mat = Matrix::from_fn(2, 3, |row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(rows: usize, cols: usize, mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self {
            data: iproduct!(0..rows, 0..cols)
                .map(|(row, col)| cb(row, col))
                .collect(),
            rows,
            cols,
        }
    }

    /// Creates a matrix of the given size with every element set to 0.
    pub fn zeros(rows: usize, cols: usize) -> Self
    where
        T: Zero,
    {
        Self::from_fn(rows, cols, |_, _| T::ZERO)
    }

    /// Creates the `n`x`n` identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cofactor::*;
    /// assert_eq!(Matrix::identity(2), Matrix::from([
    ///     [1, 0],
    ///     [0, 1],
    /// ]));
    /// ```
    pub fn identity(n: usize) -> Self
    where
        T: Zero + One,
    {
        Self::from_fn(n, n, |row, col| if row == col { T::ONE } else { T::ZERO })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Returns the elements of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[T] {
        self.check_row(row);
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Returns the elements of row `row` as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        self.check_row(row);
        &mut self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Returns an iterator over the rows of this matrix, from top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |row| self.row(row))
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cofactor::*;
    /// let mat = Matrix::from([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// assert_eq!(mat.get(0, 3), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            self.data.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Applies a closure to each element, returning a new matrix of the same shape.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cofactor::*;
    /// let mat = Matrix::from([[1, 2], [3, 4]]).map(|i| i as f64 / 2.0);
    /// assert_eq!(mat, Matrix::from([[0.5, 1.0], [1.5, 2.0]]));
    /// ```
    pub fn map<F, U>(self, f: F) -> Matrix<U>
    where
        F: FnMut(T) -> U,
    {
        Matrix {
            data: self.data.into_iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Returns whether this matrix has as many rows as it has columns.
    ///
    /// The 0x0 matrix is considered square.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cofactor::*;
    /// assert!(Matrix::from([[1]]).is_square());
    /// assert!(Matrix::from([[1, 1], [2, 2]]).is_square());
    /// assert!(!Matrix::from([[1, 1], [2, 2], [3, 3]]).is_square());
    /// ```
    #[inline]
    pub fn is_square(&self) -> bool {
        self.shape().is_square()
    }

    /// Returns whether this matrix is an identity matrix.
    ///
    /// Non-square matrices are never identity matrices. Elements are compared exactly, so a
    /// floating-point matrix that is only *close* to the identity is not accepted; use the
    /// [`approx`] trait implementations on [`Matrix`] to compare against [`Matrix::identity`] with a
    /// tolerance instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cofactor::*;
    /// assert!(Matrix::<f64>::identity(3).is_identity());
    /// assert!(!Matrix::from([[1, 0], [1, 1]]).is_identity());
    /// assert!(!Matrix::from([[1, 0, 0], [0, 1, 0]]).is_identity());
    /// ```
    pub fn is_identity(&self) -> bool
    where
        T: Zero + One + PartialEq,
    {
        self.is_square()
            && iproduct!(0..self.rows, 0..self.cols).all(|(row, col)| {
                let expected = if row == col { T::ONE } else { T::ZERO };
                self[(row, col)] == expected
            })
    }

    /// Swaps the rows and columns of this matrix, returning a new matrix.
    ///
    /// Works for matrices of any shape; `self` is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cofactor::*;
    /// let mat = Matrix::from([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.transpose(), Matrix::from([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(&self) -> Self
    where
        T: Clone,
    {
        Self::from_fn(self.cols, self.rows, |row, col| self[(col, row)].clone())
    }

    /// Returns the *minor* of this matrix obtained by deleting row `row` and column `col`.
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
    ///     [7, 8, 9],
    /// ]);
    /// assert_eq!(mat.minor(0, 1), Matrix::from([
    ///     [4, 6],
    ///     [7, 9],
    /// ]));
    /// ```
    pub fn minor(&self, row: usize, col: usize) -> Self
    where
        T: Clone,
    {
        self.check_row(row);
        self.check_col(col);

        let data = self
            .iter_rows()
            .enumerate()
            .filter(|&(r, _)| r != row)
            .flat_map(|(_, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(move |&(c, _)| c != col)
                    .map(|(_, cell)| cell.clone())
            })
            .collect();

        Self {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        }
    }

    /// Appends the columns of `other` to the right of the columns of `self`, returning a new
    /// matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the matrices have a different number of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cofactor::*;
    /// let a = Matrix::from([[1, 2], [3, 4]]);
    /// let b = Matrix::from([[5], [6]]);
    /// assert_eq!(a.concat_columns(&b)?, Matrix::from([
    ///     [1, 2, 5],
    ///     [3, 4, 6],
    /// ]));
    /// assert!(a.concat_columns(&Matrix::from([[5]])).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn concat_columns(&self, other: &Self) -> Result<Self>
    where
        T: Clone,
    {
        if self.rows != other.rows {
            return Err(Error::ShapeMismatch {
                op: "column concatenation",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }

        let data = self
            .iter_rows()
            .zip(other.iter_rows())
            .flat_map(|(left, right)| left.iter().chain(right).cloned())
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols + other.cols,
        })
    }

    /// Returns [`Error::NotSquare`] unless this matrix is square.
    pub(crate) fn require_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(Error::NotSquare {
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    #[track_caller]
    fn check_row(&self, row: usize) {
        assert!(
            row < self.rows,
            "row index {row} out of bounds for {} matrix",
            self.shape()
        );
    }

    #[track_caller]
    fn check_col(&self, col: usize) {
        assert!(
            col < self.cols,
            "column index {col} out of bounds for {} matrix",
            self.shape()
        );
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T> {
    fn from(rows: [[T; C]; R]) -> Self {
        Self {
            data: rows.into_iter().flatten().collect(),
            rows: R,
            cols: C,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug>(&'a [T]);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, cell) in self.0.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", cell)?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in self.iter_rows() {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}
