use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Scalar types that can be stored in a [`Matrix`][crate::Matrix] or [`Vector`][crate::Vector].
///
/// Implemented for the floating-point and signed integer types. Unsigned integers lack [`Neg`] and
/// only get [`Zero`] and [`One`], which is enough for [`Matrix::zeros`][crate::Matrix::zeros] and
/// [`Matrix::identity`][crate::Matrix::identity].
///
/// [`Neg`]: ops::Neg
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// [`Number`]s with exact-enough division, required by the row reduction routines
/// ([`Matrix::reduce_to_identity`][crate::Matrix::reduce_to_identity],
/// [`Matrix::inverse`][crate::Matrix::inverse]).
///
/// Integer division truncates, so dividing a row by its pivot would destroy it.
pub trait Float: Number {}

macro_rules! impl_constants {
    ($zero:literal, $one:literal => $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }
            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
impl_constants!(0.0, 1.0 => f32, f64);

macro_rules! impl_float {
    ($($types:ty),+) => {
        $(
            impl Float for $types {}
        )+
    };
}
impl_float!(f32, f64);
impl_constants!(0, 1 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
