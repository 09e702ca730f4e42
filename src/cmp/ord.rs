//! Ordering instances.

use std::fmt;
use std::marker::PhantomData;

use super::Ordering;

/// A total order over `T`.
///
/// Only [`compare`](Ord::compare) is required; the six predicates are derived
/// from it and may be overridden when a cheaper direct test exists.
///
/// # Laws
///
/// `compare` must be a strict total order: antisymmetric
/// (`compare(x, y) == compare(y, x).reverse()`), transitive and total.
///
/// # Examples
///
/// ```rust
/// use dogs::cmp::{self, Ord as _, Ordering};
///
/// let reversed = cmp::OrdFn::new(|x: &i32, y: &i32| Ordering::from(y.cmp(x)));
/// assert_eq!(reversed.compare(&1, &2), Ordering::GT);
/// assert!(reversed.gt(&1, &2));
/// assert!(reversed.ne(&1, &2));
/// ```
pub trait Ord<T> {
    /// Compares `x` with `y`:
    ///
    /// - `LT` if `x < y`
    /// - `EQ` if `x == y`
    /// - `GT` if `x > y`
    fn compare(&self, x: &T, y: &T) -> Ordering;

    /// `x < y`.
    fn lt(&self, x: &T, y: &T) -> bool {
        self.compare(x, y) == Ordering::LT
    }

    /// `x <= y`.
    fn le(&self, x: &T, y: &T) -> bool {
        self.compare(x, y) != Ordering::GT
    }

    /// `x > y`.
    fn gt(&self, x: &T, y: &T) -> bool {
        self.compare(x, y) == Ordering::GT
    }

    /// `x >= y`.
    fn ge(&self, x: &T, y: &T) -> bool {
        self.compare(x, y) != Ordering::LT
    }

    /// `x == y` in the sense of this order.
    fn eq(&self, x: &T, y: &T) -> bool {
        self.compare(x, y) == Ordering::EQ
    }

    /// `x != y` in the sense of this order.
    fn ne(&self, x: &T, y: &T) -> bool {
        self.compare(x, y) != Ordering::EQ
    }
}

impl<T, O> Ord<T> for &O
where
    O: Ord<T> + ?Sized,
{
    fn compare(&self, x: &T, y: &T) -> Ordering {
        (**self).compare(x, y)
    }

    fn lt(&self, x: &T, y: &T) -> bool {
        (**self).lt(x, y)
    }

    fn le(&self, x: &T, y: &T) -> bool {
        (**self).le(x, y)
    }

    fn gt(&self, x: &T, y: &T) -> bool {
        (**self).gt(x, y)
    }

    fn ge(&self, x: &T, y: &T) -> bool {
        (**self).ge(x, y)
    }

    fn eq(&self, x: &T, y: &T) -> bool {
        (**self).eq(x, y)
    }

    fn ne(&self, x: &T, y: &T) -> bool {
        (**self).ne(x, y)
    }
}

/// The [`Ord`] instance given by `T`'s comparison operators.
///
/// Created by [`derive_ord`]. Incomparable values (such as `NaN`) compare as
/// `GT`, and the predicates use the operators directly.
pub struct DerivedOrd<T> {
    marker: PhantomData<fn(&T)>,
}

/// Derives an [`Ord`] instance from `T`'s `<`, `<=`, `>`, `>=`, `==` and `!=`.
///
/// # Examples
///
/// ```rust
/// use dogs::cmp::{derive_ord, Ord as _, Ordering};
///
/// let ord = derive_ord::<String>();
/// assert_eq!(ord.compare(&"hoga".to_string(), &"hoge".to_string()), Ordering::LT);
/// ```
pub const fn derive_ord<T: PartialOrd>() -> DerivedOrd<T> {
    DerivedOrd {
        marker: PhantomData,
    }
}

impl<T: PartialOrd> Ord<T> for DerivedOrd<T> {
    fn compare(&self, x: &T, y: &T) -> Ordering {
        if x < y {
            Ordering::LT
        } else if x == y {
            Ordering::EQ
        } else {
            Ordering::GT
        }
    }

    fn lt(&self, x: &T, y: &T) -> bool {
        x < y
    }

    fn le(&self, x: &T, y: &T) -> bool {
        x <= y
    }

    fn gt(&self, x: &T, y: &T) -> bool {
        x > y
    }

    fn ge(&self, x: &T, y: &T) -> bool {
        x >= y
    }

    fn eq(&self, x: &T, y: &T) -> bool {
        x == y
    }

    fn ne(&self, x: &T, y: &T) -> bool {
        x != y
    }
}

impl<T> Clone for DerivedOrd<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DerivedOrd<T> {}

impl<T> Default for DerivedOrd<T> {
    fn default() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for DerivedOrd<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("DerivedOrd")
    }
}

/// An [`Ord`] instance backed by a comparison closure.
#[derive(Clone, Copy)]
pub struct OrdFn<F> {
    function: F,
}

impl<F> OrdFn<F> {
    /// Wraps `function` as an ordering instance.
    pub const fn new<T>(function: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering,
    {
        Self { function }
    }
}

impl<T, F> Ord<T> for OrdFn<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, x: &T, y: &T) -> Ordering {
        (self.function)(x, y)
    }
}

impl<F> fmt::Debug for OrdFn<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("OrdFn(<function>)")
    }
}
