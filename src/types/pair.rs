//! The product of two values and its instance derivations.
//!
//! Instances for a pair are built from instances for its components:
//!
//! ```rust
//! use dogs::algebra::{derive_additive_monoid, Monoid, Semigroup};
//! use dogs::types::pair::{self, Pair};
//!
//! let both = pair::derive_monoid(
//!     derive_additive_monoid::<i32>(),
//!     derive_additive_monoid::<String>(),
//! );
//! let combined = both.combine(Pair::new(1, "a".to_string()), Pair::new(2, "b".to_string()));
//! assert_eq!(combined, Pair::new(3, "ab".to_string()));
//! assert_eq!(both.empty(), Pair::new(0, String::new()));
//! ```

use crate::algebra::{Monoid, Semigroup};
use crate::cmp::{self, Ordering};

/// Two values held together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<T, U> {
    /// The first component.
    pub first: T,
    /// The second component.
    pub second: U,
}

impl<T, U> Pair<T, U> {
    /// Creates a pair.
    #[inline]
    pub const fn new(first: T, second: U) -> Self {
        Self { first, second }
    }

    /// Splits the pair into its components.
    #[inline]
    pub fn values(self) -> (T, U) {
        (self.first, self.second)
    }

    /// Borrows both components.
    #[inline]
    pub const fn each_ref(&self) -> Pair<&T, &U> {
        Pair::new(&self.first, &self.second)
    }

    /// Exchanges the components.
    #[inline]
    pub fn swap(self) -> Pair<U, T> {
        Pair::new(self.second, self.first)
    }
}

impl<T, U> From<(T, U)> for Pair<T, U> {
    fn from((first, second): (T, U)) -> Self {
        Self::new(first, second)
    }
}

impl<T, U> From<Pair<T, U>> for (T, U) {
    fn from(pair: Pair<T, U>) -> Self {
        pair.values()
    }
}

// =============================================================================
// Instances
// =============================================================================

/// An instance over [`Pair`] built from one instance per component.
///
/// Which traits it implements depends on the component instances: two
/// semigroups give a semigroup, two monoids a monoid, two `Eq`s an `Eq` and
/// two `Ord`s a lexicographic `Ord`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PairInstance<A, B> {
    first: A,
    second: B,
}

impl<A, B> PairInstance<A, B> {
    const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

/// Combines pairs component-wise.
pub const fn derive_semigroup<A, B>(first: A, second: B) -> PairInstance<A, B> {
    PairInstance::new(first, second)
}

/// Combines pairs component-wise; the identity is the pair of identities.
pub const fn derive_monoid<A, B>(first: A, second: B) -> PairInstance<A, B> {
    PairInstance::new(first, second)
}

/// Two pairs are equal when both components are.
///
/// # Examples
///
/// ```rust
/// use dogs::cmp::{derive_eq, Eq as _};
/// use dogs::types::pair::{self, Pair};
///
/// let eq = pair::derive_eq(derive_eq::<i32>(), derive_eq::<&str>());
/// assert!(eq.equal(&Pair::new(1, "a"), &Pair::new(1, "a")));
/// assert!(!eq.equal(&Pair::new(1, "a"), &Pair::new(1, "b")));
/// ```
pub const fn derive_eq<A, B>(first: A, second: B) -> PairInstance<A, B> {
    PairInstance::new(first, second)
}

/// Orders pairs lexicographically: by the first component, then the second.
///
/// # Examples
///
/// ```rust
/// use dogs::cmp::{derive_ord, Ord as _, Ordering};
/// use dogs::types::pair::{self, Pair};
///
/// let ord = pair::derive_ord(derive_ord::<i32>(), derive_ord::<i32>());
/// assert_eq!(ord.compare(&Pair::new(1, 9), &Pair::new(2, 0)), Ordering::LT);
/// assert_eq!(ord.compare(&Pair::new(1, 2), &Pair::new(1, 1)), Ordering::GT);
/// ```
pub const fn derive_ord<A, B>(first: A, second: B) -> PairInstance<A, B> {
    PairInstance::new(first, second)
}

impl<T, U, A, B> Semigroup<Pair<T, U>> for PairInstance<A, B>
where
    A: Semigroup<T>,
    B: Semigroup<U>,
{
    fn combine(&self, x: Pair<T, U>, y: Pair<T, U>) -> Pair<T, U> {
        Pair::new(
            self.first.combine(x.first, y.first),
            self.second.combine(x.second, y.second),
        )
    }
}

impl<T, U, A, B> Monoid<Pair<T, U>> for PairInstance<A, B>
where
    A: Monoid<T>,
    B: Monoid<U>,
{
    fn empty(&self) -> Pair<T, U> {
        Pair::new(self.first.empty(), self.second.empty())
    }
}

impl<T, U, A, B> cmp::Eq<Pair<T, U>> for PairInstance<A, B>
where
    A: cmp::Eq<T>,
    B: cmp::Eq<U>,
{
    fn equal(&self, x: &Pair<T, U>, y: &Pair<T, U>) -> bool {
        self.first.equal(&x.first, &y.first) && self.second.equal(&x.second, &y.second)
    }
}

impl<T, U, A, B> cmp::Ord<Pair<T, U>> for PairInstance<A, B>
where
    A: cmp::Ord<T>,
    B: cmp::Ord<U>,
{
    fn compare(&self, x: &Pair<T, U>, y: &Pair<T, U>) -> Ordering {
        self.first
            .compare(&x.first, &y.first)
            .then_with(|| self.second.compare(&x.second, &y.second))
    }
}
