//! Elementary row operations and Gauss-Jordan elimination.

use crate::{Error, Float, Matrix, Number, Result};

impl<T> Matrix<T> {
    /// Exchanges rows `a` and `b` in place.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cofactor::*;
    /// let mut mat = Matrix::from([[1, 2], [3, 4], [5, 6]]);
    /// mat.swap_rows(0, 2);
    /// assert_eq!(mat, Matrix::from([[5, 6], [3, 4], [1, 2]]));
    /// ```
    pub fn swap_rows(&mut self, a: usize, b: usize) -> &mut Self {
        self.check_row(a);
        self.check_row(b);

        let (low, high) = (a.min(b), a.max(b));
        if low != high {
            let cols = self.cols;
            let (head, tail) = self.data.split_at_mut(high * cols);
            head[low * cols..(low + 1) * cols].swap_with_slice(&mut tail[..cols]);
        }
        self
    }
}

impl<T: Number> Matrix<T> {
    /// Multiplies every element of row `row` by `scalar`, in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroScalar`] if `scalar` is zero. The matrix is left unchanged in that case.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cofactor::*;
    /// let mut mat = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
    /// mat.scale_row(1, 0.5)?;
    /// assert_eq!(mat, Matrix::from([[1.0, 2.0], [1.5, 2.0]]));
    ///
    /// assert_eq!(mat.scale_row(0, 0.0).unwrap_err(), Error::ZeroScalar { row: 0 });
    /// # Ok::<(), Error>(())
    /// ```
    pub fn scale_row(&mut self, row: usize, scalar: T) -> Result<&mut Self> {
        if scalar == T::ZERO {
            return Err(Error::ZeroScalar { row });
        }

        for elem in self.row_mut(row) {
            *elem = *elem * scalar;
        }
        Ok(self)
    }

    /// Adds `scalar` times row `src` to row `dst`, in place.
    ///
    /// # Panics
    ///
    /// Panics if `dst` or `src` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cofactor::*;
    /// let mut mat = Matrix::from([[1, 2], [3, 4]]);
    /// mat.add_scaled_row(1, 0, -3);
    /// assert_eq!(mat, Matrix::from([[1, 2], [0, -2]]));
    /// ```
    pub fn add_scaled_row(&mut self, dst: usize, src: usize, scalar: T) -> &mut Self {
        self.check_row(dst);
        self.check_row(src);

        for col in 0..self.cols {
            let addend = scalar * self[(src, col)];
            self[(dst, col)] = self[(dst, col)] + addend;
        }
        self
    }
}

impl<T: Float> Matrix<T> {
    /// Reduces the matrix to *row-reduced echelon form* in place, using Gauss-Jordan elimination.
    ///
    /// For every diagonal position, the pivot row is scaled so that the pivot becomes 1, and then
    /// multiples of it are added to every other row so that the rest of the pivot's column becomes
    /// 0. If a pivot is exactly zero, the pivot row is first exchanged with the nearest row below it
    /// that has a nonzero element in the pivot column.
    ///
    /// The matrix may have more columns than rows. Only the leading square block is reduced to the
    /// identity; the remaining columns are transformed along with it. This is how
    /// [`Matrix::inverse`] works.
    ///
    /// There is no pivoting for numerical stability: any nonzero pivot is accepted, no matter how
    /// small.
    ///
    /// # Errors
    ///
    /// - [`Error::NotSquare`] if the matrix has fewer columns than rows.
    /// - [`Error::Singular`] if a column has no usable pivot, which means that the leading square
    ///   block is not invertible. The matrix is left partially reduced; use [`Matrix::reduced`] to
    ///   keep the original.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cofactor::*;
    /// let mut mat = Matrix::from([
    ///     [0.0, 2.0],
    ///     [4.0, 0.0],
    /// ]);
    /// mat.reduce_to_identity()?;
    /// assert!(mat.is_identity());
    /// # Ok::<(), Error>(())
    /// ```
    ///
    /// Integer matrices cannot be reduced, since dividing by a pivot would truncate:
    ///
    /// ```compile_fail
    /// # use cofactor::*;
    /// let mut mat = Matrix::from([[2, 0], [0, 2]]);
    /// mat.reduce_to_identity();
    /// ```
    pub fn reduce_to_identity(&mut self) -> Result<&mut Self> {
        let n = self.rows;
        if self.cols < n {
            return Err(Error::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }

        for pivot in 0..n {
            if self[(pivot, pivot)] == T::ZERO {
                let replacement = (pivot + 1..n)
                    .find(|&row| self[(row, pivot)] != T::ZERO)
                    .ok_or(Error::Singular { column: pivot })?;
                log::trace!("zero pivot in column {pivot}, exchanging rows {pivot} and {replacement}");
                self.swap_rows(pivot, replacement);
            }

            let pivot_value = self[(pivot, pivot)];
            self.scale_row(pivot, T::ONE / pivot_value)?;

            for row in (0..n).filter(|&row| row != pivot) {
                let factor = self[(row, pivot)];
                if factor != T::ZERO {
                    self.add_scaled_row(row, pivot, -factor);
                }
            }
        }

        Ok(self)
    }

    /// Returns a row-reduced copy of this matrix, leaving `self` untouched.
    ///
    /// See [`Matrix::reduce_to_identity`] for details and errors.
    pub fn reduced(&self) -> Result<Self> {
        let mut copy = self.clone();
        copy.reduce_to_identity()?;
        Ok(copy)
    }

    /// Computes the inverse of this matrix.
    ///
    /// The matrix is extended with an identity matrix of the same size, and the result is
    /// reduced with [`Matrix::reduce_to_identity`]. The columns that started out as the identity
    /// then hold the inverse.
    ///
    /// Only available for floating-point elements. A unimodular integer matrix can be inverted by
    /// converting it first:
    ///
    /// ```
    /// # use cofactor::*;
    /// let mat = Matrix::from([[2, 1], [1, 1]]);
    /// assert!(mat.is_invertible()?);
    /// let inverse = mat.map(f64::from).inverse()?;
    /// assert_eq!(inverse, Matrix::from([[1.0, -1.0], [-1.0, 2.0]]));
    /// # Ok::<(), Error>(())
    /// ```
    ///
    /// ```compile_fail
    /// # use cofactor::*;
    /// Matrix::from([[2, 1], [1, 1]]).inverse();
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::NotSquare`] if the matrix is not square.
    /// - [`Error::Singular`] if the matrix is not invertible.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cofactor::*;
    /// let mat = Matrix::from([
    ///     [2.0, 0.0],
    ///     [0.0, 4.0],
    /// ]);
    /// assert_eq!(mat.inverse()?, Matrix::from([
    ///     [0.5, 0.0],
    ///     [0.0, 0.25],
    /// ]));
    ///
    /// let singular = Matrix::from([[1.0, 2.0], [2.0, 4.0]]);
    /// assert_eq!(singular.inverse(), Err(Error::Singular { column: 1 }));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        self.require_square()?;

        let n = self.rows;
        let mut augmented = self.concat_columns(&Matrix::identity(n))?;
        augmented.reduce_to_identity()?;
        log::trace!("inverted {} matrix", self.shape());

        Ok(Matrix::from_fn(n, n, |row, col| augmented[(row, n + col)]))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::test::init_logger;

    use super::*;

    #[test]
    fn swap() {
        let mut mat = Matrix::from([[1, 2], [3, 4]]);
        mat.swap_rows(1, 0);
        assert_eq!(mat, Matrix::from([[3, 4], [1, 2]]));
        mat.swap_rows(1, 1);
        assert_eq!(mat, Matrix::from([[3, 4], [1, 2]]));
    }

    #[test]
    #[should_panic(expected = "row index 2 out of bounds for [2][2] matrix")]
    fn swap_out_of_bounds() {
        Matrix::<f64>::identity(2).swap_rows(0, 2);
    }

    #[test]
    fn chaining() {
        let mut mat = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        mat.swap_rows(0, 1)
            .scale_row(0, 2.0)
            .unwrap()
            .add_scaled_row(1, 0, -1.0);
        assert_eq!(mat, Matrix::from([[6.0, 8.0], [-5.0, -6.0]]));
    }

    #[test]
    fn scale_by_zero() {
        let mut mat = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(
            mat.scale_row(1, 0.0).map(|_| ()),
            Err(Error::ZeroScalar { row: 1 })
        );
        assert_eq!(mat, Matrix::from([[1.0, 2.0], [3.0, 4.0]]));
    }

    #[test]
    fn reduce() {
        init_logger();

        let mut mat = Matrix::from([[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]]);
        mat.reduce_to_identity().unwrap();
        assert_relative_eq!(mat, Matrix::identity(3), epsilon = 1e-12);
    }

    #[test]
    fn reduce_exchanges_zero_pivot() {
        init_logger();

        let mut mat = Matrix::from([[0.0, 1.0], [1.0, 0.0]]);
        mat.reduce_to_identity().unwrap();
        assert!(mat.is_identity());

        #[rustfmt::skip]
        let mut mat = Matrix::from([
            [1.0, 2.0, 3.0],
            [2.0, 4.0, 7.0],
            [1.0, 3.0, 4.0],
        ]);
        mat.reduce_to_identity().unwrap();
        assert_relative_eq!(mat, Matrix::identity(3), epsilon = 1e-12);
    }

    #[test]
    fn reduce_singular() {
        let mat = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(mat.reduced(), Err(Error::Singular { column: 2 }));

        let zeros = Matrix::<f64>::zeros(2, 2);
        assert_eq!(zeros.reduced(), Err(Error::Singular { column: 0 }));
    }

    #[test]
    fn reduce_tall() {
        let mut tall = Matrix::from([[1.0], [2.0]]);
        assert_eq!(
            tall.reduce_to_identity().map(|_| ()),
            Err(Error::NotSquare { rows: 2, cols: 1 })
        );
    }

    #[test]
    fn reduced_copies() {
        let mat = Matrix::from([[4.0, 0.0], [0.0, 2.0]]);
        let reduced = mat.reduced().unwrap();
        assert!(reduced.is_identity());
        assert_eq!(mat, Matrix::from([[4.0, 0.0], [0.0, 2.0]]));
    }

    #[test]
    fn reduce_augmented() {
        // [A | b] reduces to [I | x] where A x = b.
        let mut system = Matrix::from([[2.0, 1.0, 5.0], [1.0, 3.0, 10.0]]);
        system.reduce_to_identity().unwrap();
        assert_relative_eq!(
            system,
            Matrix::from([[1.0, 0.0, 1.0], [0.0, 1.0, 3.0]]),
            epsilon = 1e-12
        );
    }

    #[test]
    fn inverse() {
        let mat = Matrix::from([[4.0, 7.0], [2.0, 6.0]]);
        let inverse = mat.inverse().unwrap();
        assert_relative_eq!(
            inverse,
            Matrix::from([[0.6, -0.7], [-0.2, 0.4]]),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            mat.matmul(&inverse).unwrap(),
            Matrix::identity(2),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            inverse.matmul(&mat).unwrap(),
            Matrix::identity(2),
            epsilon = 1e-12
        );
    }

    #[test]
    fn integer_matrices_reduce_after_conversion() {
        let unimodular = Matrix::from([[2, 1], [1, 1]]);
        assert_eq!(unimodular.determinant(), Ok(1));

        let inverse = unimodular.clone().map(f64::from).inverse().unwrap();
        assert_eq!(inverse, Matrix::from([[1.0, -1.0], [-1.0, 2.0]]));
        assert_eq!(
            unimodular.map(f64::from).matmul(&inverse).unwrap(),
            Matrix::identity(2)
        );

        let mut doubled = Matrix::from([[2, 0], [0, 2]]).map(|v| v as f32);
        doubled.reduce_to_identity().unwrap();
        assert!(doubled.is_identity());
    }

    #[test]
    fn inverse_errors() {
        assert_eq!(
            Matrix::<f64>::zeros(2, 3).inverse(),
            Err(Error::NotSquare { rows: 2, cols: 3 })
        );
        assert_eq!(
            Matrix::from([[1.0, 1.0], [1.0, 1.0]]).inverse(),
            Err(Error::Singular { column: 1 })
        );
        assert_eq!(
            Matrix::<f64>::identity(0).inverse(),
            Ok(Matrix::identity(0))
        );
    }
}
