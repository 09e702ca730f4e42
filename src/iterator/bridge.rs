//! Conversions between [`LazyIterator`] and [`std::iter::Iterator`].

use std::iter::{Fuse, FusedIterator};

use super::LazyIterator;

/// A [`LazyIterator`] over a standard iterator. Created by [`from_std`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FromStd<I> {
    iter: I,
}

/// Wraps anything iterable by the standard library.
///
/// The source is fused, so it is never polled again once it has ended.
///
/// # Examples
///
/// ```rust
/// use dogs::iterator::{from_std, LazyIterator};
///
/// let chars = from_std("abc".chars()).map(|c| c.to_ascii_uppercase()).to_vec();
/// assert_eq!(chars, vec!['A', 'B', 'C']);
/// ```
pub fn from_std<I: IntoIterator>(iterable: I) -> FromStd<Fuse<I::IntoIter>> {
    FromStd {
        iter: iterable.into_iter().fuse(),
    }
}

impl<I: Iterator> LazyIterator for FromStd<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.iter.next()
    }
}

/// A standard iterator over a [`LazyIterator`]. Created by
/// [`LazyIterator::into_std`].
///
/// The wrapped iterator is released after its first `None`, so the result is
/// fused even when the source is not.
///
/// # Examples
///
/// ```rust
/// use dogs::iterator::{range, LazyIterator};
///
/// let total: i32 = range(1, 4).into_std().sum();
/// assert_eq!(total, 10);
/// ```
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoStd<I> {
    iter: Option<I>,
}

impl<I> IntoStd<I> {
    pub(super) const fn new(iter: I) -> Self {
        Self { iter: Some(iter) }
    }
}

impl<I: LazyIterator> Iterator for IntoStd<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let element = self.iter.as_mut()?.next();
        if element.is_none() {
            self.iter = None;
        }
        element
    }
}

impl<I: LazyIterator> FusedIterator for IntoStd<I> {}
