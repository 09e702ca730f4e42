//! Operations on [`Option`].
//!
//! `Option` is the standard library's; this module adds the free-function
//! surface shared with the other containers, the iterator bridge and the
//! instance derivations.
//!
//! # Instances
//!
//! [`derive_monoid`] lifts any [`Semigroup`] to a [`Monoid`] over `Option`,
//! with `None` as the identity:
//!
//! ```rust
//! use dogs::algebra::{derive_additive_semigroup, Monoid, Semigroup};
//! use dogs::types::option;
//!
//! let concat = option::derive_monoid(derive_additive_semigroup::<String>());
//! assert_eq!(concat.combine(Some("Fizz".into()), Some("Buzz".into())), Some("FizzBuzz".into()));
//! assert_eq!(concat.combine(None, Some("Buzz".into())), Some("Buzz".into()));
//! assert_eq!(concat.empty(), None);
//! ```

use crate::algebra::{Monoid, Semigroup};
use crate::cmp::{self, Ordering};
use crate::collection::{FromLazyIterator, IntoLazyIterator};
use crate::iterator::{LazyIterator, Pure};

/// Wraps `value` in `Some`.
#[inline]
pub const fn some<T>(value: T) -> Option<T> {
    Some(value)
}

/// The absent value.
#[inline]
pub const fn none<T>() -> Option<T> {
    None
}

/// `true` when `x` holds a value.
#[inline]
pub const fn is_some<T>(x: &Option<T>) -> bool {
    x.is_some()
}

/// `true` when `x` is absent.
#[inline]
pub const fn is_none<T>(x: &Option<T>) -> bool {
    x.is_none()
}

/// Extracts the value.
///
/// # Panics
///
/// Panics with `option::unwrap: None` when `x` is `None`.
#[track_caller]
pub fn unwrap<T>(x: Option<T>) -> T {
    match x {
        Some(value) => value,
        None => panic!("option::unwrap: None"),
    }
}

/// Extracts the value, or returns `default`.
#[inline]
pub fn unwrap_or<T>(x: Option<T>, default: T) -> T {
    x.unwrap_or(default)
}

/// Extracts the value, or computes a default.
#[inline]
pub fn unwrap_or_else<T, F>(x: Option<T>, default: F) -> T
where
    F: FnOnce() -> T,
{
    x.unwrap_or_else(default)
}

/// Applies `function` to the value, or returns `default`.
#[inline]
pub fn map_or<T, U, F>(x: Option<T>, default: U, function: F) -> U
where
    F: FnOnce(T) -> U,
{
    x.map_or(default, function)
}

/// Applies `function` to the value, or computes a default.
#[inline]
pub fn map_or_else<T, U, D, F>(x: Option<T>, default: D, function: F) -> U
where
    D: FnOnce() -> U,
    F: FnOnce(T) -> U,
{
    x.map_or_else(default, function)
}

/// Runs `if_some` on the value, or `if_none` when absent.
///
/// # Examples
///
/// ```rust
/// use dogs::types::option;
///
/// let describe = |x: Option<i32>| option::switch(x, |n| format!("got {n}"), || "nothing".to_string());
/// assert_eq!(describe(Some(3)), "got 3");
/// assert_eq!(describe(None), "nothing");
/// ```
pub fn switch<T, R, S, N>(x: Option<T>, if_some: S, if_none: N) -> R
where
    S: FnOnce(T) -> R,
    N: FnOnce() -> R,
{
    match x {
        Some(value) => if_some(value),
        None => if_none(),
    }
}

/// `true` when both are `None`, or both hold equal values.
#[inline]
pub fn equal<T: PartialEq>(x: &Option<T>, y: &Option<T>) -> bool {
    x == y
}

/// An iterator yielding the value once, or nothing.
#[inline]
pub const fn iter<T>(x: Option<T>) -> Pure<T> {
    Pure::from_option(x)
}

/// The first value of `iter`, if any.
///
/// Pulls at most one value.
pub fn from_iterator<I: IntoLazyIterator>(iter: I) -> Option<I::Item> {
    iter.into_lazy_iter().next()
}

/// Wraps `value` in `Some`.
#[inline]
pub const fn pure<T>(value: T) -> Option<T> {
    Some(value)
}

/// Monadic bind: applies `function` to the value, if any.
#[inline]
pub fn and_then<T, U, F>(x: Option<T>, function: F) -> Option<U>
where
    F: FnOnce(T) -> Option<U>,
{
    x.and_then(function)
}

impl<T> IntoLazyIterator for Option<T> {
    type Item = T;
    type IntoIter = Pure<T>;

    fn into_lazy_iter(self) -> Pure<T> {
        iter(self)
    }
}

impl<T> FromLazyIterator<T> for Option<T> {
    fn from_lazy_iter<I>(iter: I) -> Self
    where
        I: IntoLazyIterator<Item = T>,
    {
        from_iterator(iter)
    }
}

crate::collection_functions!(Option);
crate::monad_functions!(Option);

// =============================================================================
// Instances
// =============================================================================

/// An instance over `Option<T>` lifted from an instance over `T`.
///
/// Created by [`derive_semigroup`], [`derive_monoid`], [`derive_eq`] and
/// [`derive_ord`].
#[derive(Clone, Copy, Debug, Default)]
pub struct OptionInstance<I> {
    inner: I,
}

/// Lifts a semigroup; `None` is skipped when combining.
pub const fn derive_semigroup<S>(semigroup: S) -> OptionInstance<S> {
    OptionInstance { inner: semigroup }
}

/// Lifts a semigroup to a monoid whose identity is `None`.
pub const fn derive_monoid<S>(semigroup: S) -> OptionInstance<S> {
    OptionInstance { inner: semigroup }
}

/// Lifts an equality; `None` equals only `None`.
pub const fn derive_eq<E>(eq: E) -> OptionInstance<E> {
    OptionInstance { inner: eq }
}

/// Lifts an order; `None` sorts before every `Some`.
pub const fn derive_ord<O>(ord: O) -> OptionInstance<O> {
    OptionInstance { inner: ord }
}

impl<T, S: Semigroup<T>> Semigroup<Option<T>> for OptionInstance<S> {
    fn combine(&self, x: Option<T>, y: Option<T>) -> Option<T> {
        match (x, y) {
            (Some(a), Some(b)) => Some(self.inner.combine(a, b)),
            (Some(a), None) => Some(a),
            (None, y) => y,
        }
    }
}

impl<T, S: Semigroup<T>> Monoid<Option<T>> for OptionInstance<S> {
    fn empty(&self) -> Option<T> {
        None
    }
}

impl<T, E: cmp::Eq<T>> cmp::Eq<Option<T>> for OptionInstance<E> {
    fn equal(&self, x: &Option<T>, y: &Option<T>) -> bool {
        match (x, y) {
            (Some(a), Some(b)) => self.inner.equal(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T, O: cmp::Ord<T>> cmp::Ord<Option<T>> for OptionInstance<O> {
    fn compare(&self, x: &Option<T>, y: &Option<T>) -> Ordering {
        match (x, y) {
            (Some(a), Some(b)) => self.inner.compare(a, b),
            (Some(_), None) => Ordering::GT,
            (None, Some(_)) => Ordering::LT,
            (None, None) => Ordering::EQ,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{derive_additive_monoid, derive_additive_semigroup};
    use crate::cmp::{Eq as _, Ord as _};
    use crate::iterator::{empty, unfold};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn constructors_and_predicates() {
        assert!(is_some(&some(1)));
        assert!(is_none(&none::<i32>()));
        assert_eq!(unwrap(some("x")), "x");
        assert_eq!(unwrap_or(None, 5), 5);
        assert_eq!(unwrap_or_else(None, || 6), 6);
        assert_eq!(map_or(Some(2), 0, |x| x * 10), 20);
        assert_eq!(map_or_else(None::<i32>, || -1, |x| x * 10), -1);
    }

    #[rstest]
    #[should_panic(expected = "option::unwrap: None")]
    fn unwrap_none_panics() {
        let _ = unwrap(none::<i32>());
    }

    #[rstest]
    #[case(Some(1), Some(1), true)]
    #[case(Some(1), Some(2), false)]
    #[case(Some(1), None, false)]
    #[case(None, None, true)]
    fn equal_compares_contents(
        #[case] x: Option<i32>,
        #[case] y: Option<i32>,
        #[case] expected: bool,
    ) {
        assert_eq!(equal(&x, &y), expected);
        assert_eq!(derive_eq(crate::cmp::derive_eq::<i32>()).equal(&x, &y), expected);
    }

    #[rstest]
    fn iter_yields_value_once() {
        assert_eq!(iter(Some(3)).to_vec(), vec![3]);
        assert!(iter(None::<i32>).to_vec().is_empty());
    }

    #[rstest]
    fn from_iterator_pulls_at_most_one() {
        let pulls = Cell::new(0);
        let naturals = unfold(0, |n| {
            pulls.set(pulls.get() + 1);
            Some((n + 1, n))
        });
        assert_eq!(from_iterator(naturals), Some(0));
        assert_eq!(pulls.get(), 1);
        assert_eq!(from_iterator(empty::<i32>()), None);
    }

    #[rstest]
    fn semigroup_is_first_biased_around_none() {
        let instance = derive_semigroup(derive_additive_semigroup::<String>());
        assert_eq!(
            instance.combine(Some("a".into()), Some("b".into())),
            Some("ab".to_string())
        );
        assert_eq!(instance.combine(Some("a".into()), None), Some("a".to_string()));
        assert_eq!(instance.combine(None, Some("b".into())), Some("b".to_string()));
        assert_eq!(instance.combine(None, None), None);
    }

    #[rstest]
    fn monoid_identity_is_none() {
        let instance = derive_monoid(derive_additive_monoid::<i32>());
        assert_eq!(instance.empty(), None);
        assert_eq!(instance.combine(instance.empty(), Some(4)), Some(4));
        assert_eq!(instance.combine(Some(4), instance.empty()), Some(4));
    }

    #[rstest]
    #[case(None, Some(i32::MIN), Ordering::LT)]
    #[case(Some(0), None, Ordering::GT)]
    #[case(None, None, Ordering::EQ)]
    #[case(Some(1), Some(2), Ordering::LT)]
    fn ord_puts_none_first(
        #[case] x: Option<i32>,
        #[case] y: Option<i32>,
        #[case] expected: Ordering,
    ) {
        let instance = derive_ord(crate::cmp::derive_ord::<i32>());
        assert_eq!(instance.compare(&x, &y), expected);
    }

    #[rstest]
    fn generated_functions_treat_option_as_collection() {
        assert_eq!(map(Some(2), |x| x + 1), Some(3));
        assert_eq!(filter(Some(2), |x| x % 2 == 1), None);
        assert_eq!(fold(10, Some(5), |acc, x| acc + x), 15);
        assert_eq!(sum(derive_additive_monoid::<i32>(), None), 0);
        assert_eq!(find_index(Some('x'), |c| *c == 'x'), Some(0));
    }

    #[rstest]
    fn lift_m_maps_inside_option() {
        let shout = lift_m(|s: &str| s.to_uppercase());
        assert_eq!(shout(Some("hi")), Some("HI".to_string()));
        assert_eq!(shout(None), None);
    }
}
