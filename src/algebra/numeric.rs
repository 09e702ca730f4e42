//! Additive and multiplicative instances for primitive types.
//!
//! [`Additive`] and [`Multiplicative`] play the role of type constraints:
//! they are implemented for every primitive integer and float, and
//! [`Additive`] additionally for [`String`] (concatenation). Strings have no
//! multiplicative structure.

use std::fmt;
use std::marker::PhantomData;

use super::monoid::Monoid;
use super::semigroup::Semigroup;

/// Types with an associative `+` and its identity.
pub trait Additive: Sized {
    /// The identity of [`plus`](Additive::plus): `0` or the empty string.
    fn zero() -> Self;

    /// `self + other`.
    #[must_use]
    fn plus(self, other: Self) -> Self;
}

/// Types with an associative `*` and its identity.
pub trait Multiplicative: Sized {
    /// The identity of [`times`](Multiplicative::times): `1`.
    fn one() -> Self;

    /// `self * other`.
    #[must_use]
    fn times(self, other: Self) -> Self;
}

macro_rules! impl_numeric {
    ($zero:literal, $one:literal => $($numeric:ty),+ $(,)?) => {
        $(
            impl Additive for $numeric {
                #[inline]
                fn zero() -> Self {
                    $zero
                }

                #[inline]
                fn plus(self, other: Self) -> Self {
                    self + other
                }
            }

            impl Multiplicative for $numeric {
                #[inline]
                fn one() -> Self {
                    $one
                }

                #[inline]
                fn times(self, other: Self) -> Self {
                    self * other
                }
            }
        )+
    };
}

impl_numeric!(0, 1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(0.0, 1.0 => f32, f64);

impl Additive for String {
    fn zero() -> Self {
        Self::new()
    }

    fn plus(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

/// The monoid of `+` with identity [`Additive::zero`].
///
/// Created by [`derive_additive_semigroup`] or [`derive_additive_monoid`].
pub struct AdditiveMonoid<T> {
    marker: PhantomData<fn(T) -> T>,
}

/// The monoid of `*` with identity [`Multiplicative::one`].
///
/// Created by [`derive_multiplicative_semigroup`] or
/// [`derive_multiplicative_monoid`].
pub struct MultiplicativeMonoid<T> {
    marker: PhantomData<fn(T) -> T>,
}

/// Derives the semigroup of `+`.
///
/// # Examples
///
/// ```rust
/// use dogs::algebra::{derive_additive_semigroup, Semigroup};
///
/// assert_eq!(derive_additive_semigroup::<f64>().combine(1.5, 2.0), 3.5);
/// assert_eq!(
///     derive_additive_semigroup::<String>().combine("foo".into(), "bar".into()),
///     "foobar"
/// );
/// ```
pub const fn derive_additive_semigroup<T: Additive>() -> AdditiveMonoid<T> {
    AdditiveMonoid {
        marker: PhantomData,
    }
}

/// Derives the monoid of `+` and zero.
pub const fn derive_additive_monoid<T: Additive>() -> AdditiveMonoid<T> {
    derive_additive_semigroup()
}

/// Derives the semigroup of `*`.
pub const fn derive_multiplicative_semigroup<T: Multiplicative>() -> MultiplicativeMonoid<T> {
    MultiplicativeMonoid {
        marker: PhantomData,
    }
}

/// Derives the monoid of `*` and one.
///
/// # Examples
///
/// ```rust
/// use dogs::algebra::{derive_multiplicative_monoid, Monoid, Semigroup};
///
/// let product = derive_multiplicative_monoid::<u64>();
/// assert_eq!(product.combine(product.empty(), 5), 5);
/// ```
pub const fn derive_multiplicative_monoid<T: Multiplicative>() -> MultiplicativeMonoid<T> {
    derive_multiplicative_semigroup()
}

impl<T: Additive> Semigroup<T> for AdditiveMonoid<T> {
    fn combine(&self, x: T, y: T) -> T {
        x.plus(y)
    }
}

impl<T: Additive> Monoid<T> for AdditiveMonoid<T> {
    fn empty(&self) -> T {
        T::zero()
    }
}

impl<T: Multiplicative> Semigroup<T> for MultiplicativeMonoid<T> {
    fn combine(&self, x: T, y: T) -> T {
        x.times(y)
    }
}

impl<T: Multiplicative> Monoid<T> for MultiplicativeMonoid<T> {
    fn empty(&self) -> T {
        T::one()
    }
}

macro_rules! impl_marker_traits {
    ($($instance:ident),+) => {
        $(
            impl<T> Clone for $instance<T> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<T> Copy for $instance<T> {}

            impl<T> Default for $instance<T> {
                fn default() -> Self {
                    Self {
                        marker: PhantomData,
                    }
                }
            }

            impl<T> fmt::Debug for $instance<T> {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    formatter.write_str(stringify!($instance))
                }
            }
        )+
    };
}

impl_marker_traits!(AdditiveMonoid, MultiplicativeMonoid);
