//! Dense matrix arithmetic built around cofactor expansion and row reduction.
//!
//! # Overview
//!
//! - [`Matrix`] is a dense, row-major matrix whose shape is checked at runtime. It offers
//!   determinants ([`Matrix::determinant`]), cofactors and minors, multiplication
//!   ([`Matrix::matmul`]), transposition, and the predicates [`Matrix::is_square`],
//!   [`Matrix::is_identity`] and [`Matrix::is_invertible`].
//! - Elementary row operations ([`Matrix::swap_rows`], [`Matrix::scale_row`],
//!   [`Matrix::add_scaled_row`]) mutate a matrix in place and can be chained. Gauss-Jordan
//!   elimination ([`Matrix::reduce_to_identity`]) is built from them and powers
//!   [`Matrix::inverse`].
//! - [`Vector`] provides the dot product and the 3D cross product.
//!
//! Operations that can be handed operands of the wrong shape return a [`Result`] with an
//! [`enum@Error`] that describes the offending dimensions.
//!
//! # Goals & Non-Goals
//!
//! - Keep the algorithms simple and easy to verify. Determinants are computed by cofactor
//!   expansion, which takes *O(n!)* time and is only suitable for small matrices. There is no LU
//!   decomposition fallback.
//! - Elimination only exchanges rows when it encounters a pivot that is exactly zero. There is no
//!   partial pivoting for numerical stability.
//! - Comparisons in predicates are exact. Use the [`approx`] trait implementations of [`Matrix`]
//!   and [`Vector`] when a tolerance is needed.
//! - Dense storage only. Sparse matrices, complex numbers and SIMD are out of scope.
//!
//! # Examples
//!
//! ```
//! # use cofactor::*;
//! let a = Matrix::from([
//!     [1.0, 2.0, 3.0],
//!     [3.0, 5.0, 6.0],
//!     [3.0, 2.0, 1.0],
//! ]);
//! let b = Matrix::from([
//!     [ 7.0, 2.0, 3.0],
//!     [-3.0, 5.0, 6.0],
//!     [ 4.0, 2.0, 1.0],
//! ]);
//! assert_eq!(a.determinant()?, -4.0);
//! assert_eq!(b.determinant()?, -73.0);
//! assert_eq!(a.matmul(&b)?.determinant()?, 292.0);
//! # Ok::<(), Error>(())
//! ```

mod determinant;
mod error;
mod matrix;
mod traits;
mod vector;


pub use error::*;
pub use matrix::*;
pub use traits::*;
pub use vector::*;
