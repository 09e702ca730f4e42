//! Semigroup instances - associative binary operations.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! combine(combine(a, b), c) == combine(a, combine(b, c))
//! ```

use std::fmt;

/// An associative binary operation over `T`.
///
/// # Laws
///
/// All implementations must satisfy associativity:
///
/// ```text
/// s.combine(s.combine(a, b), c) == s.combine(a, s.combine(b, c))
/// ```
///
/// # Examples
///
/// ```rust
/// use dogs::algebra::{Semigroup, SemigroupFn};
///
/// let max = SemigroupFn::new(|x: i32, y: i32| x.max(y));
/// assert_eq!(max.combine(3, 7), 7);
/// ```
pub trait Semigroup<T> {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(&self, x: T, y: T) -> T;

    /// Combines a value with itself `count` times.
    ///
    /// `combine_n(x, 1)` returns `x`, `combine_n(x, 3)` returns
    /// `combine(combine(x, x), x)`.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dogs::algebra::{derive_additive_semigroup, Semigroup};
    ///
    /// let concat = derive_additive_semigroup::<String>();
    /// assert_eq!(concat.combine_n("ab".to_string(), 3), "ababab");
    /// ```
    #[must_use]
    fn combine_n(&self, x: T, count: usize) -> T
    where
        T: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");

        let mut result = x.clone();
        for _ in 1..count {
            result = self.combine(result, x.clone());
        }
        result
    }
}

impl<T, S> Semigroup<T> for &S
where
    S: Semigroup<T> + ?Sized,
{
    fn combine(&self, x: T, y: T) -> T {
        (**self).combine(x, y)
    }
}

/// A [`Semigroup`] instance backed by a closure.
///
/// The closure must be associative; this is not checked.
#[derive(Clone, Copy)]
pub struct SemigroupFn<F> {
    function: F,
}

impl<F> SemigroupFn<F> {
    /// Wraps `function` as a semigroup instance.
    pub const fn new<T>(function: F) -> Self
    where
        F: Fn(T, T) -> T,
    {
        Self { function }
    }
}

impl<T, F> Semigroup<T> for SemigroupFn<F>
where
    F: Fn(T, T) -> T,
{
    fn combine(&self, x: T, y: T) -> T {
        (self.function)(x, y)
    }
}

impl<F> fmt::Debug for SemigroupFn<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("SemigroupFn(<function>)")
    }
}
