use std::fmt;

use crate::{Error, Matrix, Number, Result};

mod ops;

/// An owned sequence of scalars with a length determined at runtime.
///
/// # Construction
///
/// - Vectors can be created from arrays and [`Vec`]s using their [`From`] implementations, or
///   collected from an iterator.
/// - [`Vector::from_fn`] creates each element by invoking a closure with its index.
///
/// # Element Access
///
/// - The [`Index`] and [`IndexMut`] impls can be used just like on slices.
/// - [`Vector::as_slice`] and the [`AsRef`] impl give access to the underlying elements.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Vector<T>(Vec<T>);

impl<T> Vector<T> {
    /// Creates a [`Vector`] of length `len` by invoking a closure with the index of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cofactor::*;
    /// let squares = Vector::from_fn(4, |i| i * i);
    /// assert_eq!(squares, [0, 1, 4, 9]);
    /// ```
    pub fn from_fn<F>(len: usize, cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self((0..len).map(cb).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<F, U>(self, f: F) -> Vector<U>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.into_iter().map(f).collect())
    }

    /// Computes the dot product of `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the vectors have different lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cofactor::*;
    /// let a = Vector::from([1, 2, 3]);
    /// let b = Vector::from([4, 5, 6]);
    /// assert_eq!(a.dot(&b)?, 32);
    ///
    /// let err = a.dot(&Vector::from([1, 2])).unwrap_err();
    /// assert_eq!(err.to_string(), "incompatible vector sizes for dot product: 3 and 2");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn dot(&self, other: &Self) -> Result<T>
    where
        T: Number,
    {
        if self.len() != other.len() {
            return Err(Error::LengthMismatch {
                op: "dot product",
                lhs: self.len(),
                rhs: other.len(),
            });
        }

        Ok(dot_unchecked(&self.0, &other.0))
    }

    /// Computes the cross product of two 3-element vectors.
    ///
    /// Each component of the result is a cofactor of the 3x3 matrix whose first row holds the unit
    /// vectors and whose remaining rows are `self` and `other`, so the components use the sign
    /// pattern `(+, -, +)`. The result is orthogonal to both inputs, and swapping the arguments
    /// negates it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] unless both vectors have exactly 3 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cofactor::*;
    /// let a = Vector::from([1, 2, 3]);
    /// let b = Vector::from([4, 5, 6]);
    /// assert_eq!(a.cross(&b)?, [-3, 6, -3]);
    /// assert_eq!(b.cross(&a)?, [3, -6, 3]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn cross(&self, other: &Self) -> Result<Self>
    where
        T: Number,
    {
        if self.len() != 3 || other.len() != 3 {
            return Err(Error::LengthMismatch {
                op: "cross product of 3-element vectors",
                lhs: self.len(),
                rhs: other.len(),
            });
        }

        // The first row never contributes to its own cofactors.
        let stacked = Matrix::from_fn(3, 3, |row, col| match row {
            0 => T::ZERO,
            1 => self[col],
            _ => other[col],
        });
        (0..3).map(|col| stacked.cofactor(0, col)).collect()
    }
}

/// Dot product of two slices of equal length.
pub(crate) fn dot_unchecked<T: Number>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value.into())
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    #[inline]
    fn from(value: Vec<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    #[inline]
    fn from(value: Vector<T>) -> Self {
        value.0
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}
