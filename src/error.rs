//! Error type returned by fallible matrix and vector operations.

use thiserror::Error;

use crate::Shape;

/// Result type alias using this crate's [`enum@Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur in matrix and vector operations.
///
/// Every error carries the dimensions or indices involved, so that the message alone is enough to
/// find the offending operand.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operation requires a square matrix.
    #[error("expected square matrix, got rows={rows} cols={cols}")]
    NotSquare {
        /// Number of rows of the offending matrix.
        rows: usize,
        /// Number of columns of the offending matrix.
        cols: usize,
    },

    /// Vector operands have incompatible lengths.
    #[error("incompatible vector sizes for {op}: {lhs} and {rhs}")]
    LengthMismatch {
        /// The operation that was attempted.
        op: &'static str,
        /// Length of the left-hand operand.
        lhs: usize,
        /// Length of the right-hand operand.
        rhs: usize,
    },

    /// Matrix operands have incompatible shapes.
    #[error("incompatible matrix sizes for {op}: {lhs} and {rhs}")]
    ShapeMismatch {
        /// The operation that was attempted.
        op: &'static str,
        /// Shape of the left-hand operand.
        lhs: Shape,
        /// Shape of the right-hand operand.
        rhs: Shape,
    },

    /// A row was scaled by zero, which is not an invertible row operation.
    #[error("cannot scale row {row} by zero")]
    ZeroScalar {
        /// Index of the row that was to be scaled.
        row: usize,
    },

    /// Row reduction found no nonzero pivot for a column.
    #[error("matrix is singular: no nonzero pivot in column {column}")]
    Singular {
        /// Column in which elimination got stuck.
        column: usize,
    },

    /// The rows passed to a constructor do not all have the same length.
    #[error("row {row} has {got} elements, expected {expected}")]
    Ragged {
        /// Index of the first row whose length differs from the first row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::NotSquare { rows: 2, cols: 3 }.to_string(),
            "expected square matrix, got rows=2 cols=3"
        );
        assert_eq!(
            Error::ShapeMismatch {
                op: "matrix multiplication",
                lhs: Shape::new(2, 3),
                rhs: Shape::new(2, 2),
            }
            .to_string(),
            "incompatible matrix sizes for matrix multiplication: [2][3] and [2][2]"
        );
        assert_eq!(
            Error::LengthMismatch {
                op: "dot product",
                lhs: 2,
                rhs: 3
            }
            .to_string(),
            "incompatible vector sizes for dot product: 2 and 3"
        );
    }
}
