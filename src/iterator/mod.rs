//! The lazy, pull-based iterator engine.
//!
//! A [`LazyIterator`] produces a single-pass sequence of values through one
//! primitive operation, [`next`](LazyIterator::next). Everything else in this
//! module is built from it:
//!
//! - **Sources** create iterators: [`range`], [`unfold`], [`pure`],
//!   [`empty`], [`repeat`], [`from_std`]
//! - **Combinators** wrap an iterator in a new one without evaluating
//!   anything: `map`, `filter`, `take`, `drop_first`, `flat_map`, `zip`,
//!   `zip_with`
//! - **Terminal operations** drive evaluation: `fold`, `for_each`, `find`,
//!   `find_index`, `find_elem`, `sum`, `sum_with_init`, `min_by`, `max_by`,
//!   `collect`
//!
//! Every operation is available both as a method on [`LazyIterator`] and as a
//! free function taking any [`IntoLazyIterator`].
//!
//! # Exhaustion
//!
//! Once `next` has returned `None`, every later call must return `None` as
//! well. All sources and combinators here uphold this; `filter`, `take`,
//! `flat_map`, `zip` and `unfold` stop pulling their upstream after it has
//! ended.
//!
//! # Examples
//!
//! ```rust
//! use dogs::iterator::{self, range, repeat, LazyIterator};
//!
//! let squares_of_evens: Vec<i32> = range(1, 10)
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * x)
//!     .to_vec();
//! assert_eq!(squares_of_evens, vec![4, 16, 36, 64, 100]);
//!
//! let expanded = iterator::flat_map(vec![2, 3], |x| repeat(x, x as usize)).to_vec();
//! assert_eq!(expanded, vec![2, 2, 3, 3, 3]);
//! ```

mod adapters;
mod bridge;
mod sources;

pub use adapters::{DropFirst, Filter, FlatMap, Map, Take, Zip, ZipWith};
pub use bridge::{FromStd, IntoStd, from_std};
pub use sources::{Empty, Pure, Range, RangeBound, Repeat, Unfold, empty, pure, range, repeat, unfold};

use crate::algebra::{Monoid, Semigroup};
use crate::cmp;
use crate::collection::{FromLazyIterator, IntoLazyIterator};

/// A boxed iterator, for when the concrete iterator type varies at runtime.
pub type BoxedIterator<'a, T> = Box<dyn LazyIterator<Item = T> + 'a>;

/// A single-pass sequence of values, produced on demand.
///
/// Only [`next`](LazyIterator::next) is required. Combinators take `self` by
/// value, so an iterator has exactly one consumer at a time; pass
/// `&mut iterator` to keep using it after a partial traversal.
///
/// # Examples
///
/// ```rust
/// use dogs::iterator::LazyIterator;
///
/// struct Countdown(u32);
///
/// impl LazyIterator for Countdown {
///     type Item = u32;
///
///     fn next(&mut self) -> Option<u32> {
///         if self.0 == 0 {
///             return None;
///         }
///         self.0 -= 1;
///         Some(self.0 + 1)
///     }
/// }
///
/// assert_eq!(Countdown(3).to_vec(), vec![3, 2, 1]);
/// ```
pub trait LazyIterator {
    /// The type of the produced values.
    type Item;

    /// Returns the next value and advances, or `None` once exhausted.
    fn next(&mut self) -> Option<Self::Item>;

    /// Applies `function` to every value as it is pulled.
    fn map<U, F>(self, function: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, function)
    }

    /// Yields only the values that satisfy `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Yields at most the first `count` values.
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    /// Skips the first `count` values.
    fn drop_first(self, count: usize) -> DropFirst<Self>
    where
        Self: Sized,
    {
        DropFirst::new(self, count)
    }

    /// Replaces every value with the values of `function(value)`, in order.
    fn flat_map<J, F>(self, function: F) -> FlatMap<Self, F, J>
    where
        Self: Sized,
        J: IntoLazyIterator,
        F: FnMut(Self::Item) -> J,
    {
        FlatMap::new(self, function)
    }

    /// Monadic bind; the same as [`flat_map`](LazyIterator::flat_map).
    fn and_then<J, F>(self, function: F) -> FlatMap<Self, F, J>
    where
        Self: Sized,
        J: IntoLazyIterator,
        F: FnMut(Self::Item) -> J,
    {
        self.flat_map(function)
    }

    /// Pairs up values of `self` and `other` until either one ends.
    fn zip<J>(self, other: J) -> Zip<Self, J::IntoIter>
    where
        Self: Sized,
        J: IntoLazyIterator,
    {
        Zip::new(self, other.into_lazy_iter())
    }

    /// Combines values of `self` and `other` with `function` until either one
    /// ends.
    fn zip_with<J, U, F>(self, other: J, function: F) -> ZipWith<Self, J::IntoIter, F>
    where
        Self: Sized,
        J: IntoLazyIterator,
        F: FnMut(Self::Item, J::Item) -> U,
    {
        ZipWith::new(self, other.into_lazy_iter(), function)
    }

    /// Left fold: `function(... function(function(init, x1), x2) ..., xn)`.
    ///
    /// Returns `init` for an empty iterator.
    fn fold<A, F>(mut self, init: A, mut function: F) -> A
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> A,
    {
        let mut accumulator = init;
        while let Some(element) = self.next() {
            accumulator = function(accumulator, element);
        }
        accumulator
    }

    /// Calls `function` on every value, in order.
    fn for_each<F>(mut self, mut function: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        while let Some(element) = self.next() {
            function(element);
        }
    }

    /// Returns the first value satisfying `predicate`.
    ///
    /// Consumes values up to and including the match.
    fn find<P>(&mut self, mut predicate: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        while let Some(element) = self.next() {
            if predicate(&element) {
                return Some(element);
            }
        }
        None
    }

    /// Returns the zero-based position of the first value satisfying
    /// `predicate`.
    fn find_index<P>(&mut self, mut predicate: P) -> Option<usize>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut index = 0;
        while let Some(element) = self.next() {
            if predicate(&element) {
                return Some(index);
            }
            index += 1;
        }
        None
    }

    /// Returns the first value equal to `target` in the sense of `eq`.
    fn find_elem<E>(&mut self, target: &Self::Item, eq: E) -> Option<Self::Item>
    where
        Self: Sized,
        E: cmp::Eq<Self::Item>,
    {
        self.find(|element| eq.equal(element, target))
    }

    /// Returns the position of the first value equal to `target` in the sense
    /// of `eq`.
    fn find_elem_index<E>(&mut self, target: &Self::Item, eq: E) -> Option<usize>
    where
        Self: Sized,
        E: cmp::Eq<Self::Item>,
    {
        self.find_index(|element| eq.equal(element, target))
    }

    /// Counts the remaining values.
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.fold(0, |count, _| count + 1)
    }

    /// Returns the smallest value according to `ord`; the first one on ties.
    fn min_by<O>(self, ord: O) -> Option<Self::Item>
    where
        Self: Sized,
        O: cmp::Ord<Self::Item>,
    {
        self.fold(None, |minimum, element| match minimum {
            Some(current) if ord.le(&current, &element) => Some(current),
            _ => Some(element),
        })
    }

    /// Returns the greatest value according to `ord`; the last one on ties.
    fn max_by<O>(self, ord: O) -> Option<Self::Item>
    where
        Self: Sized,
        O: cmp::Ord<Self::Item>,
    {
        self.fold(None, |maximum, element| match maximum {
            Some(current) if ord.gt(&current, &element) => Some(current),
            _ => Some(element),
        })
    }

    /// Combines `init` and every value with `semigroup`, left to right.
    fn sum_with_init<S>(self, semigroup: S, init: Self::Item) -> Self::Item
    where
        Self: Sized,
        S: Semigroup<Self::Item>,
    {
        self.fold(init, |accumulator, element| {
            semigroup.combine(accumulator, element)
        })
    }

    /// Combines every value with `monoid`; `monoid.empty()` when exhausted.
    fn sum<M>(self, monoid: M) -> Self::Item
    where
        Self: Sized,
        M: Monoid<Self::Item>,
    {
        let init = monoid.empty();
        self.sum_with_init(monoid, init)
    }

    /// Drains the iterator into a container.
    fn collect<C>(self) -> C
    where
        Self: Sized,
        C: FromLazyIterator<Self::Item>,
    {
        C::from_lazy_iter(self)
    }

    /// Drains the iterator into a `Vec`, in iteration order.
    fn to_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.collect()
    }

    /// Adapts this iterator to [`std::iter::Iterator`].
    fn into_std(self) -> IntoStd<Self>
    where
        Self: Sized,
    {
        IntoStd::new(self)
    }

    /// Erases the concrete iterator type.
    fn boxed<'a>(self) -> BoxedIterator<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<I> LazyIterator for &mut I
where
    I: LazyIterator + ?Sized,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

impl<I> LazyIterator for Box<I>
where
    I: LazyIterator + ?Sized,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// Applies `function` to every value of `iter` as it is pulled.
pub fn map<I, U, F>(iter: I, function: F) -> Map<I::IntoIter, F>
where
    I: IntoLazyIterator,
    F: FnMut(I::Item) -> U,
{
    iter.into_lazy_iter().map(function)
}

/// Yields only the values of `iter` that satisfy `predicate`.
pub fn filter<I, P>(iter: I, predicate: P) -> Filter<I::IntoIter, P>
where
    I: IntoLazyIterator,
    P: FnMut(&I::Item) -> bool,
{
    iter.into_lazy_iter().filter(predicate)
}

/// Yields at most the first `count` values of `iter`.
pub fn take<I>(iter: I, count: usize) -> Take<I::IntoIter>
where
    I: IntoLazyIterator,
{
    iter.into_lazy_iter().take(count)
}

/// Skips the first `count` values of `iter`.
pub fn drop_first<I>(iter: I, count: usize) -> DropFirst<I::IntoIter>
where
    I: IntoLazyIterator,
{
    iter.into_lazy_iter().drop_first(count)
}

/// Concatenates `function(x)` for every `x` in `iter`.
pub fn flat_map<I, J, F>(iter: I, function: F) -> FlatMap<I::IntoIter, F, J>
where
    I: IntoLazyIterator,
    J: IntoLazyIterator,
    F: FnMut(I::Item) -> J,
{
    iter.into_lazy_iter().flat_map(function)
}

/// Monadic bind over iterators; the same as [`flat_map`].
pub fn and_then<I, J, F>(iter: I, function: F) -> FlatMap<I::IntoIter, F, J>
where
    I: IntoLazyIterator,
    J: IntoLazyIterator,
    F: FnMut(I::Item) -> J,
{
    flat_map(iter, function)
}

/// Pairs up the values of `first` and `second`; stops at the shorter one.
///
/// # Examples
///
/// ```rust
/// use dogs::iterator::{self, LazyIterator};
/// use dogs::types::pair::Pair;
///
/// let zipped = iterator::zip(vec![1, 2, 3], vec!["a", "b"]).to_vec();
/// assert_eq!(zipped, vec![Pair::new(1, "a"), Pair::new(2, "b")]);
/// ```
pub fn zip<I, J>(first: I, second: J) -> Zip<I::IntoIter, J::IntoIter>
where
    I: IntoLazyIterator,
    J: IntoLazyIterator,
{
    first.into_lazy_iter().zip(second)
}

/// Combines the values of `first` and `second` with `function`; stops at the
/// shorter one.
pub fn zip_with<I, J, U, F>(first: I, second: J, function: F) -> ZipWith<I::IntoIter, J::IntoIter, F>
where
    I: IntoLazyIterator,
    J: IntoLazyIterator,
    F: FnMut(I::Item, J::Item) -> U,
{
    first.into_lazy_iter().zip_with(second, function)
}

/// Left fold of `iter` starting from `init`.
///
/// # Examples
///
/// ```rust
/// use dogs::iterator;
///
/// assert_eq!(iterator::fold(0, vec![1, 2, 3], |acc, x| acc + x), 6);
/// ```
pub fn fold<A, I, F>(init: A, iter: I, function: F) -> A
where
    I: IntoLazyIterator,
    F: FnMut(A, I::Item) -> A,
{
    iter.into_lazy_iter().fold(init, function)
}

/// Calls `function` on every value of `iter`, in order.
pub fn for_each<I, F>(iter: I, function: F)
where
    I: IntoLazyIterator,
    F: FnMut(I::Item),
{
    iter.into_lazy_iter().for_each(function);
}

/// Returns the first value of `iter` that satisfies `predicate`.
pub fn find<I, P>(iter: I, predicate: P) -> Option<I::Item>
where
    I: IntoLazyIterator,
    P: FnMut(&I::Item) -> bool,
{
    iter.into_lazy_iter().find(predicate)
}

/// Returns the position of the first value of `iter` that satisfies
/// `predicate`.
pub fn find_index<I, P>(iter: I, predicate: P) -> Option<usize>
where
    I: IntoLazyIterator,
    P: FnMut(&I::Item) -> bool,
{
    iter.into_lazy_iter().find_index(predicate)
}

/// Returns the first value of `iter` equal to `target` in the sense of `eq`.
pub fn find_elem<I, E>(iter: I, target: &I::Item, eq: E) -> Option<I::Item>
where
    I: IntoLazyIterator,
    E: cmp::Eq<I::Item>,
{
    iter.into_lazy_iter().find_elem(target, eq)
}

/// Returns the position of the first value of `iter` equal to `target` in the
/// sense of `eq`.
pub fn find_elem_index<I, E>(iter: I, target: &I::Item, eq: E) -> Option<usize>
where
    I: IntoLazyIterator,
    E: cmp::Eq<I::Item>,
{
    iter.into_lazy_iter().find_elem_index(target, eq)
}

/// Returns the smallest value of `iter` according to `ord`.
pub fn min_by<I, O>(iter: I, ord: O) -> Option<I::Item>
where
    I: IntoLazyIterator,
    O: cmp::Ord<I::Item>,
{
    iter.into_lazy_iter().min_by(ord)
}

/// Returns the greatest value of `iter` according to `ord`.
pub fn max_by<I, O>(iter: I, ord: O) -> Option<I::Item>
where
    I: IntoLazyIterator,
    O: cmp::Ord<I::Item>,
{
    iter.into_lazy_iter().max_by(ord)
}

/// Sums up `init` and every value of `iter` with `semigroup`.
pub fn sum_with_init<I, S>(semigroup: S, init: I::Item, iter: I) -> I::Item
where
    I: IntoLazyIterator,
    S: Semigroup<I::Item>,
{
    iter.into_lazy_iter().sum_with_init(semigroup, init)
}

/// Sums up every value of `iter` with `monoid`.
///
/// Returns `monoid.empty()` when `iter` is empty.
///
/// # Examples
///
/// ```rust
/// use dogs::algebra::derive_additive_monoid;
/// use dogs::iterator;
///
/// assert_eq!(iterator::sum(derive_additive_monoid::<i32>(), Vec::<i32>::new()), 0);
/// assert_eq!(iterator::sum(derive_additive_monoid::<i32>(), vec![1, 2, 3]), 6);
/// ```
pub fn sum<I, M>(monoid: M, iter: I) -> I::Item
where
    I: IntoLazyIterator,
    M: Monoid<I::Item>,
{
    iter.into_lazy_iter().sum(monoid)
}

/// Drains `iter` into a `Vec`.
pub fn to_vec<I>(iter: I) -> Vec<I::Item>
where
    I: IntoLazyIterator,
{
    iter.into_lazy_iter().to_vec()
}

/// Promotes `function` to a function over iterators.
pub fn lift_m<I, U, F>(function: F) -> impl Fn(I) -> Map<I::IntoIter, F>
where
    I: IntoLazyIterator,
    F: Fn(I::Item) -> U + Clone,
{
    move |iter| map(iter, function.clone())
}
