//! A growable sequence backed by a `Vec`.
//!
//! ```rust
//! use dogs::cmp::derive_ord;
//! use dogs::types::slice::{self, Slice};
//!
//! let mut words = Slice::from(vec!["pear", "fig", "apple"]);
//! words.sort(derive_ord::<&str>());
//! assert_eq!(words.as_slice(), &["apple", "fig", "pear"]);
//!
//! let lengths = slice::map(words, str::len);
//! assert_eq!(lengths.into_vec(), vec![5, 3, 4]);
//! ```

use crate::cmp;
use crate::collection::{FromLazyIterator, IntoLazyIterator};
use crate::iterator::{self, LazyIterator};

/// An ordered, index-addressable sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Slice<T>(Vec<T>);

impl<T> Slice<T> {
    /// Creates an empty slice.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates a slice with the values of `iter`, in iteration order.
    pub fn from_iterator<I>(iter: I) -> Self
    where
        I: IntoLazyIterator<Item = T>,
    {
        Self(iter.into_lazy_iter().to_vec())
    }

    /// Appends `element` at the end.
    #[inline]
    pub fn push(&mut self, element: T) {
        self.0.push(element);
    }

    /// The element at `index`, if in bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the slice holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the elements.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Unwraps the underlying `Vec`.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    /// Iterates over references to the elements by index.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            elements: &self.0,
            index: 0,
        }
    }

    /// Sorts in place by `ord`. Equal elements keep their relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dogs::cmp::{OrdFn, Ordering};
    /// use dogs::types::slice::Slice;
    ///
    /// let mut numbers = Slice::from(vec![3, 1, 2]);
    /// numbers.sort(OrdFn::new(|x: &i32, y: &i32| Ordering::from(y.cmp(x))));
    /// assert_eq!(numbers.into_vec(), vec![3, 2, 1]);
    /// ```
    pub fn sort<O>(&mut self, ord: O)
    where
        O: cmp::Ord<T>,
    {
        self.0
            .sort_by(|x, y| std::cmp::Ordering::from(ord.compare(x, y)));
    }
}

impl<T> From<Vec<T>> for Slice<T> {
    fn from(elements: Vec<T>) -> Self {
        Self(elements)
    }
}

impl<T> From<Slice<T>> for Vec<T> {
    fn from(slice: Slice<T>) -> Self {
        slice.0
    }
}

impl<T> AsRef<[T]> for Slice<T> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T> FromIterator<T> for Slice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the elements of a [`Slice`].
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    elements: &'a [T],
    index: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements,
            index: self.index,
        }
    }
}

impl<'a, T> LazyIterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let element = self.elements.get(self.index)?;
        self.index += 1;
        Some(element)
    }
}

/// Owning iterator over the elements of a [`Slice`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    elements: std::vec::IntoIter<T>,
}

impl<T> LazyIterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.elements.next()
    }
}

impl<T> IntoLazyIterator for Slice<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_lazy_iter(self) -> IntoIter<T> {
        IntoIter {
            elements: self.0.into_iter(),
        }
    }
}

impl<T> FromLazyIterator<T> for Slice<T> {
    fn from_lazy_iter<I>(iter: I) -> Self
    where
        I: IntoLazyIterator<Item = T>,
    {
        Self::from_iterator(iter)
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// A slice holding only `value`.
pub fn pure<T>(value: T) -> Slice<T> {
    Slice(vec![value])
}

/// Concatenates `function(x)` for every element `x`, in order.
pub fn and_then<T, U, F>(xs: Slice<T>, function: F) -> Slice<U>
where
    Slice<T>: IntoLazyIterator<Item = T>,
    Slice<U>: IntoLazyIterator<Item = U> + FromLazyIterator<U>,
    F: FnMut(T) -> Slice<U>,
{
    Slice::from_lazy_iter(iterator::flat_map(xs, function))
}

crate::collection_functions!(Slice);
crate::ordered_collection_functions!(Slice);
crate::monad_functions!(Slice);
