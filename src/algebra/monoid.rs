//! Monoid instances - semigroups with an identity element.
//!
//! # Laws
//!
//! In addition to associativity, for all `a`:
//!
//! ## Left Identity
//!
//! ```text
//! combine(empty(), a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! combine(a, empty()) == a
//! ```

use std::fmt;

use super::semigroup::Semigroup;

/// A [`Semigroup`] together with the identity element of its operation.
///
/// # Laws
///
/// For all `a`:
///
/// ```text
/// m.combine(m.empty(), a) == a
/// m.combine(a, m.empty()) == a
/// ```
///
/// # Examples
///
/// ```rust
/// use dogs::algebra::{derive_additive_monoid, Monoid, Semigroup};
///
/// let monoid = derive_additive_monoid::<String>();
/// let value = "hello".to_string();
/// assert_eq!(monoid.combine(monoid.empty(), value.clone()), value);
/// ```
pub trait Monoid<T>: Semigroup<T> {
    /// Returns the identity element.
    fn empty(&self) -> T;

    /// Returns whether `value` is the identity element.
    fn is_empty_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        *value == self.empty()
    }
}

impl<T, M> Monoid<T> for &M
where
    M: Monoid<T> + ?Sized,
{
    fn empty(&self) -> T {
        (**self).empty()
    }
}

/// A [`Monoid`] instance assembled from a semigroup and an identity closure.
///
/// # Examples
///
/// ```rust
/// use dogs::algebra::{Monoid, MonoidFn, Semigroup, SemigroupFn};
///
/// let max = MonoidFn::new(SemigroupFn::new(|x: u8, y: u8| x.max(y)), || u8::MIN);
/// assert_eq!(max.combine(max.empty(), 9), 9);
/// ```
#[derive(Clone, Copy)]
pub struct MonoidFn<S, E> {
    semigroup: S,
    empty: E,
}

impl<S, E> MonoidFn<S, E> {
    /// Pairs `semigroup` with `empty`, which must produce its identity.
    pub const fn new<T>(semigroup: S, empty: E) -> Self
    where
        S: Semigroup<T>,
        E: Fn() -> T,
    {
        Self { semigroup, empty }
    }
}

impl<T, S, E> Semigroup<T> for MonoidFn<S, E>
where
    S: Semigroup<T>,
{
    fn combine(&self, x: T, y: T) -> T {
        self.semigroup.combine(x, y)
    }
}

impl<T, S, E> Monoid<T> for MonoidFn<S, E>
where
    S: Semigroup<T>,
    E: Fn() -> T,
{
    fn empty(&self) -> T {
        (self.empty)()
    }
}

impl<S: fmt::Debug, E> fmt::Debug for MonoidFn<S, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MonoidFn")
            .field("semigroup", &self.semigroup)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::SemigroupFn;
    use rstest::rstest;

    #[rstest]
    fn monoid_fn_uses_both_closures() {
        let product = MonoidFn::new(SemigroupFn::new(|x: i64, y: i64| x * y), || 1);
        assert_eq!(product.combine(6, 7), 42);
        assert_eq!(product.empty(), 1);
    }

    #[rstest]
    fn is_empty_value_compares_with_identity() {
        let concat = MonoidFn::new(SemigroupFn::new(|x: String, y: String| x + &y), String::new);
        assert!(concat.is_empty_value(&String::new()));
        assert!(!concat.is_empty_value(&"x".to_string()));
    }
}
