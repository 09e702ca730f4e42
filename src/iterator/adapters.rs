//! Combinators: iterators that wrap other iterators.
//!
//! None of these evaluate anything on construction. Each `next` call pulls
//! only as many upstream values as it needs to produce one value.

use std::fmt;

use super::LazyIterator;
use crate::collection::IntoLazyIterator;
use crate::types::pair::Pair;

// =============================================================================
// Map
// =============================================================================

/// Applies a function to every value. Created by [`LazyIterator::map`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Map<I, F> {
    iter: I,
    function: F,
    finished: bool,
}

impl<I, F> Map<I, F> {
    pub(super) const fn new(iter: I, function: F) -> Self {
        Self {
            iter,
            function,
            finished: false,
        }
    }
}

impl<I, U, F> LazyIterator for Map<I, F>
where
    I: LazyIterator,
    F: FnMut(I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        if self.finished {
            return None;
        }
        let mapped = self.iter.next().map(&mut self.function);
        self.finished = mapped.is_none();
        mapped
    }
}

impl<I: fmt::Debug, F> fmt::Debug for Map<I, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Map")
            .field("iter", &self.iter)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Yields the values satisfying a predicate. Created by
/// [`LazyIterator::filter`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Filter<I, P> {
    iter: I,
    predicate: P,
    finished: bool,
}

impl<I, P> Filter<I, P> {
    pub(super) const fn new(iter: I, predicate: P) -> Self {
        Self {
            iter,
            predicate,
            finished: false,
        }
    }
}

impl<I, P> LazyIterator for Filter<I, P>
where
    I: LazyIterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.finished {
            return None;
        }
        while let Some(element) = self.iter.next() {
            if (self.predicate)(&element) {
                return Some(element);
            }
        }
        self.finished = true;
        None
    }
}

impl<I: fmt::Debug, P> fmt::Debug for Filter<I, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Filter")
            .field("iter", &self.iter)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Take / DropFirst
// =============================================================================

/// Yields at most a fixed number of values. Created by
/// [`LazyIterator::take`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Take<I> {
    iter: I,
    limit: usize,
    taken: usize,
}

impl<I> Take<I> {
    pub(super) const fn new(iter: I, limit: usize) -> Self {
        Self {
            iter,
            limit,
            taken: 0,
        }
    }
}

impl<I: LazyIterator> LazyIterator for Take<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.taken >= self.limit {
            return None;
        }
        if let Some(element) = self.iter.next() {
            self.taken += 1;
            Some(element)
        } else {
            // The source ended early; never pull it again.
            self.taken = self.limit;
            None
        }
    }
}

/// Skips a fixed number of values, then yields the rest. Created by
/// [`LazyIterator::drop_first`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct DropFirst<I> {
    iter: I,
    remaining: usize,
    finished: bool,
}

impl<I> DropFirst<I> {
    pub(super) const fn new(iter: I, count: usize) -> Self {
        Self {
            iter,
            remaining: count,
            finished: false,
        }
    }
}

impl<I: LazyIterator> LazyIterator for DropFirst<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.finished {
            return None;
        }
        while self.remaining > 0 {
            self.remaining -= 1;
            if self.iter.next().is_none() {
                self.remaining = 0;
                self.finished = true;
                return None;
            }
        }
        let element = self.iter.next();
        self.finished = element.is_none();
        element
    }
}

// =============================================================================
// FlatMap
// =============================================================================

/// Flattens the iterators produced by a function. Created by
/// [`LazyIterator::flat_map`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FlatMap<I, F, J: IntoLazyIterator> {
    iter: I,
    function: F,
    current: Option<J::IntoIter>,
    finished: bool,
}

impl<I, F, J: IntoLazyIterator> FlatMap<I, F, J> {
    pub(super) const fn new(iter: I, function: F) -> Self {
        Self {
            iter,
            function,
            current: None,
            finished: false,
        }
    }
}

impl<I, F, J> LazyIterator for FlatMap<I, F, J>
where
    I: LazyIterator,
    J: IntoLazyIterator,
    F: FnMut(I::Item) -> J,
{
    type Item = J::Item;

    fn next(&mut self) -> Option<J::Item> {
        if self.finished {
            return None;
        }
        loop {
            if let Some(inner) = self.current.as_mut() {
                if let Some(element) = inner.next() {
                    return Some(element);
                }
                self.current = None;
            }
            match self.iter.next() {
                Some(outer) => self.current = Some((self.function)(outer).into_lazy_iter()),
                None => {
                    self.finished = true;
                    return None;
                }
            }
        }
    }
}

impl<I, F, J> Clone for FlatMap<I, F, J>
where
    I: Clone,
    F: Clone,
    J: IntoLazyIterator,
    J::IntoIter: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            function: self.function.clone(),
            current: self.current.clone(),
            finished: self.finished,
        }
    }
}

impl<I: fmt::Debug, F, J: IntoLazyIterator> fmt::Debug for FlatMap<I, F, J> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FlatMap")
            .field("iter", &self.iter)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Zip / ZipWith
// =============================================================================

/// Pairs up the values of two iterators. Created by [`LazyIterator::zip`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Zip<A, B> {
    first: A,
    second: B,
    finished: bool,
}

impl<A, B> Zip<A, B> {
    pub(super) const fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            finished: false,
        }
    }
}

impl<A, B> LazyIterator for Zip<A, B>
where
    A: LazyIterator,
    B: LazyIterator,
{
    type Item = Pair<A::Item, B::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let pulled = self
            .first
            .next()
            .and_then(|x| self.second.next().map(|y| Pair::new(x, y)));
        self.finished = pulled.is_none();
        pulled
    }
}

/// Combines the values of two iterators with a function. Created by
/// [`LazyIterator::zip_with`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ZipWith<A, B, F> {
    first: A,
    second: B,
    function: F,
    finished: bool,
}

impl<A, B, F> ZipWith<A, B, F> {
    pub(super) const fn new(first: A, second: B, function: F) -> Self {
        Self {
            first,
            second,
            function,
            finished: false,
        }
    }
}

impl<A, B, U, F> LazyIterator for ZipWith<A, B, F>
where
    A: LazyIterator,
    B: LazyIterator,
    F: FnMut(A::Item, B::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        if self.finished {
            return None;
        }
        let pulled = self
            .first
            .next()
            .and_then(|x| self.second.next().map(|y| (self.function)(x, y)));
        self.finished = pulled.is_none();
        pulled
    }
}

impl<A: fmt::Debug, B: fmt::Debug, F> fmt::Debug for ZipWith<A, B, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ZipWith")
            .field("first", &self.first)
            .field("second", &self.second)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterator::{empty, pure, range, repeat, unfold};
    use rstest::rstest;
    use std::cell::Cell;

    /// Yields `1..=limit`, counting how often it was pulled.
    struct Counting<'a> {
        pulls: &'a Cell<usize>,
        limit: usize,
    }

    impl LazyIterator for Counting<'_> {
        type Item = usize;

        fn next(&mut self) -> Option<usize> {
            let pulls = self.pulls.get() + 1;
            self.pulls.set(pulls);
            (pulls <= self.limit).then_some(pulls)
        }
    }

    /// Yields `Some(1)`, `None`, `Some(3)`, `None`, ... ignoring its own end.
    struct Resurrecting(i32);

    impl LazyIterator for Resurrecting {
        type Item = i32;

        fn next(&mut self) -> Option<i32> {
            self.0 += 1;
            (self.0 % 2 == 1).then_some(self.0)
        }
    }

    #[rstest]
    fn map_stays_finished_after_upstream_ends() {
        let mut mapped = Resurrecting(0).map(|x| x * 10);
        let pulled = [mapped.next(), mapped.next(), mapped.next()];
        assert_eq!(pulled, [Some(10), None, None]);
    }

    #[rstest]
    #[case(0, [Some(1), None, None])]
    #[case(1, [None, None, None])]
    fn drop_first_stays_finished_after_upstream_ends(
        #[case] count: usize,
        #[case] expected: [Option<i32>; 3],
    ) {
        let mut dropped = Resurrecting(0).drop_first(count);
        let pulled = [dropped.next(), dropped.next(), dropped.next()];
        assert_eq!(pulled, expected);
    }

    #[rstest]
    fn map_is_lazy_until_pulled() {
        let calls = Cell::new(0);
        let mut mapped = range(1, 3).map(|x| {
            calls.set(calls.get() + 1);
            x * 10
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(mapped.next(), Some(10));
        assert_eq!(calls.get(), 1);
        assert_eq!(mapped.to_vec(), vec![20, 30]);
    }

    #[rstest]
    fn filter_keeps_matching_values() {
        let evens = range(1, 10).filter(|x| x % 2 == 0).to_vec();
        assert_eq!(evens, vec![2, 4, 6, 8, 10]);
    }

    #[rstest]
    fn filter_stops_pulling_after_exhaustion() {
        let pulls = Cell::new(0);
        let mut filtered = Counting {
            pulls: &pulls,
            limit: 3,
        }
        .filter(|_| false);
        assert_eq!(filtered.next(), None);
        assert_eq!(pulls.get(), 4);
        assert_eq!(filtered.next(), None);
        assert_eq!(pulls.get(), 4);
    }

    #[rstest]
    #[case(0, vec![])]
    #[case(2, vec![1, 2])]
    #[case(10, vec![1, 2, 3])]
    fn take_yields_at_most_count(#[case] count: usize, #[case] expected: Vec<i32>) {
        assert_eq!(range(1, 3).take(count).to_vec(), expected);
    }

    #[rstest]
    fn take_does_not_pull_beyond_limit() {
        let pulls = Cell::new(0);
        let taken = Counting {
            pulls: &pulls,
            limit: 100,
        }
        .take(3)
        .to_vec();
        assert_eq!(taken, vec![1, 2, 3]);
        assert_eq!(pulls.get(), 3);
    }

    #[rstest]
    fn take_latches_when_source_ends_early() {
        let pulls = Cell::new(0);
        let mut taken = Counting {
            pulls: &pulls,
            limit: 1,
        }
        .take(5);
        assert_eq!(taken.next(), Some(1));
        assert_eq!(taken.next(), None);
        assert_eq!(taken.next(), None);
        assert_eq!(pulls.get(), 2);
    }

    #[rstest]
    #[case(0, vec![1, 2, 3])]
    #[case(2, vec![3])]
    #[case(5, vec![])]
    fn drop_first_skips_prefix(#[case] count: usize, #[case] expected: Vec<i32>) {
        assert_eq!(range(1, 3).drop_first(count).to_vec(), expected);
    }

    #[rstest]
    fn flat_map_concatenates_in_order() {
        let expanded = vec![2, 3]
            .into_lazy_iter()
            .flat_map(|x| repeat(x, x as usize))
            .to_vec();
        assert_eq!(expanded, vec![2, 2, 3, 3, 3]);
    }

    #[rstest]
    fn flat_map_skips_empty_inner_iterators() {
        let expanded = range(0, 3)
            .flat_map(|x| if x % 2 == 0 { vec![] } else { vec![x, x] })
            .to_vec();
        assert_eq!(expanded, vec![1, 1, 3, 3]);
    }

    #[rstest]
    fn flat_map_over_empty_is_empty() {
        let expanded = empty::<i32>().flat_map(pure).to_vec();
        assert!(expanded.is_empty());
    }

    #[rstest]
    fn zip_stops_at_shorter_without_extra_pulls() {
        let pulls = Cell::new(0);
        let mut zipped = range(1, 2).zip(Counting {
            pulls: &pulls,
            limit: 10,
        });
        assert_eq!(zipped.next(), Some(Pair::new(1, 1)));
        assert_eq!(zipped.next(), Some(Pair::new(2, 2)));
        assert_eq!(zipped.next(), None);
        assert_eq!(zipped.next(), None);
        assert_eq!(pulls.get(), 2);
    }

    #[rstest]
    fn zip_with_infinite_source() {
        let naturals = unfold(0_u64, |n| Some((n + 1, n)));
        let labelled = vec!["a", "b", "c"]
            .into_lazy_iter()
            .zip_with(naturals, |label, index| format!("{index}:{label}"))
            .to_vec();
        assert_eq!(labelled, vec!["0:a", "1:b", "2:c"]);
    }
}
