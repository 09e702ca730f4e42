//! Equality instances.

use std::fmt;
use std::marker::PhantomData;

/// An equivalence relation over `T`.
///
/// # Laws
///
/// For all `x`, `y`, `z`:
///
/// ```text
/// equal(x, x)                                  (reflexivity)
/// equal(x, y) == equal(y, x)                   (symmetry)
/// equal(x, y) && equal(y, z) implies equal(x, z) (transitivity)
/// ```
///
/// The laws are a caller obligation and are not checked.
///
/// # Examples
///
/// ```rust
/// use dogs::cmp::{self, Eq};
///
/// let case_insensitive = cmp::EqFn::new(|x: &String, y: &String| {
///     x.eq_ignore_ascii_case(y)
/// });
/// assert!(case_insensitive.equal(&"Hoge".to_string(), &"hoge".to_string()));
/// ```
pub trait Eq<T> {
    /// Returns `true` if and only if `x` and `y` are equivalent.
    fn equal(&self, x: &T, y: &T) -> bool;
}

impl<T, E> Eq<T> for &E
where
    E: Eq<T> + ?Sized,
{
    fn equal(&self, x: &T, y: &T) -> bool {
        (**self).equal(x, y)
    }
}

/// The [`Eq`] instance given by `T`'s own `==`.
///
/// Created by [`derive_eq`].
pub struct DerivedEq<T> {
    marker: PhantomData<fn(&T)>,
}

/// Derives an [`Eq`] instance from `T`'s [`PartialEq`] implementation.
///
/// # Examples
///
/// ```rust
/// use dogs::cmp::{derive_eq, Eq};
///
/// let eq = derive_eq::<&str>();
/// assert!(eq.equal(&"hoge", &"hoge"));
/// assert!(!eq.equal(&"hoge", &"fuga"));
/// ```
pub const fn derive_eq<T: PartialEq>() -> DerivedEq<T> {
    DerivedEq {
        marker: PhantomData,
    }
}

impl<T: PartialEq> Eq<T> for DerivedEq<T> {
    fn equal(&self, x: &T, y: &T) -> bool {
        x == y
    }
}

impl<T> Clone for DerivedEq<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DerivedEq<T> {}

impl<T> Default for DerivedEq<T> {
    fn default() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for DerivedEq<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("DerivedEq")
    }
}

/// An [`Eq`] instance backed by a closure.
#[derive(Clone, Copy)]
pub struct EqFn<F> {
    function: F,
}

impl<F> EqFn<F> {
    /// Wraps `function` as an equality instance.
    pub const fn new<T>(function: F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        Self { function }
    }
}

impl<T, F> Eq<T> for EqFn<F>
where
    F: Fn(&T, &T) -> bool,
{
    fn equal(&self, x: &T, y: &T) -> bool {
        (self.function)(x, y)
    }
}

impl<F> fmt::Debug for EqFn<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("EqFn(<function>)")
    }
}
