use std::ops::{Index, IndexMut};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{vector::dot_unchecked, Error, Matrix, Number, Result};

impl<T> Matrix<T> {
    #[inline]
    #[track_caller]
    fn offset(&self, row: usize, col: usize) -> usize {
        self.check_row(row);
        self.check_col(col);
        row * self.cols + col
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[self.offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}

impl<T: Number> Matrix<T> {
    /// Multiplies `self` with `rhs`, returning a new matrix.
    ///
    /// Element `(i, j)` of the result is the dot product of row `i` of `self` and column `j` of
    /// `rhs` (which is row `j` of `rhs.transpose()`). The result has as many rows as `self` and as
    /// many columns as `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the number of columns of `self` differs from the number
    /// of rows of `rhs`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cofactor::*;
    /// let a = Matrix::from([
    ///     [1, 2],
    ///     [3, 4],
    ///     [5, 6],
    /// ]);
    /// let b = Matrix::from([
    ///     [1, 0, 2],
    ///     [0, 1, 3],
    /// ]);
    /// assert_eq!(a.matmul(&b)?, Matrix::from([
    ///     [1, 2,  8],
    ///     [3, 4, 18],
    ///     [5, 6, 28],
    /// ]));
    ///
    /// let err = b.matmul(&b).unwrap_err();
    /// assert_eq!(err.to_string(), "incompatible matrix sizes for matrix multiplication: [2][3] and [2][3]");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn matmul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != rhs.rows {
            return Err(Error::ShapeMismatch {
                op: "matrix multiplication",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        let columns = rhs.transpose();
        Ok(Matrix::from_fn(self.rows, rhs.cols, |i, j| {
            dot_unchecked(self.row(i), columns.row(j))
        }))
    }
}

impl<T> AbsDiffEq for Matrix<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T> RelativeEq for Matrix<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T> UlpsEq for Matrix<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_relative_eq, assert_relative_ne};

    use crate::Shape;

    use super::*;

    #[test]
    fn index() {
        let mut mat = Matrix::from([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(mat[(1, 0)], 4);
        mat[(0, 2)] = 30;
        assert_eq!(mat.row(0), &[1, 2, 30]);
    }

    #[test]
    #[should_panic(expected = "column index 2 out of bounds for [2][2] matrix")]
    fn index_out_of_bounds() {
        // Must not wrap around into the next row.
        let mat = Matrix::from([[1, 2], [3, 4]]);
        let _value = mat[(0, 2)];
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.shape(), Shape::new(4, 3));
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
    }

    #[test]
    fn identity_is_neutral() {
        let mat = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let identity = Matrix::identity(3);
        assert_eq!(identity.matmul(&mat).unwrap(), mat);
        assert_eq!(mat.matmul(&identity).unwrap(), mat);

        let wide = Matrix::from([[1.0, 2.0, 3.0]]);
        assert_eq!(Matrix::identity(1).matmul(&wide).unwrap(), wide);
        assert_eq!(wide.matmul(&Matrix::identity(3)).unwrap(), wide);
    }

    #[test]
    fn mismatched_shapes() {
        let a = Matrix::from([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(
            a.matmul(&a),
            Err(Error::ShapeMismatch {
                op: "matrix multiplication",
                lhs: Shape::new(2, 3),
                rhs: Shape::new(2, 3),
            })
        );
    }

    #[test]
    fn approximate_equality() {
        let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        let b = a.clone().map(|v| v + 1e-12);
        assert_relative_eq!(a, b, epsilon = 1e-9);
        assert_relative_ne!(a, b, epsilon = 1e-15, max_relative = 1e-15);
        assert_relative_ne!(a, a.transpose());
        assert_relative_ne!(a, Matrix::from([[1.0, 2.0, 0.0], [3.0, 4.0, 0.0]]));
    }
}
