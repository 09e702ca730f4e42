//! Persistent singly-linked list.
//!
//! [`List`] is a cons list with structural sharing: `cons` and `tail` are
//! O(1) and never copy elements, so many lists can share one suffix.
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = list1.cons(0): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3] with list1
//! ```
//!
//! # Examples
//!
//! ```rust
//! use dogs::iterator::range;
//! use dogs::types::list::{self, List};
//!
//! let numbers = List::from_iterator(range(1, 5));
//! let doubled = list::map(numbers.clone(), |x| x * 2);
//! assert_eq!(doubled, List::from_vec(vec![2, 4, 6, 8, 10]));
//! assert_eq!(numbers.len(), 5);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::collection::{FromLazyIterator, IntoLazyIterator};
use crate::iterator::{self, IntoStd, LazyIterator};

struct Node<T> {
    element: T,
    next: Option<Rc<Self>>,
}

/// A persistent (immutable) singly-linked list.
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `new`     | O(1)       |
/// | `cons`    | O(1)       |
/// | `head`    | O(1)       |
/// | `tail`    | O(1)       |
/// | `len`     | O(1)       |
///
/// Nodes are reference counted with [`Rc`], so lists are neither `Send` nor
/// `Sync`.
#[derive(Clone)]
pub struct List<T> {
    head: Option<Rc<Node<T>>>,
    length: usize,
}

static_assertions::assert_not_impl_any!(List<i32>: Send, Sync);

impl<T> List<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list holding one element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().cons(element)
    }

    /// Creates a list with the elements of `elements`, in order.
    #[must_use]
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::build_from_vec(elements)
    }

    /// Creates a list with the values of `iter`, in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dogs::iterator::range;
    /// use dogs::types::list::List;
    ///
    /// let list = List::from_iterator(range(1, 3));
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn from_iterator<I>(iter: I) -> Self
    where
        I: IntoLazyIterator<Item = T>,
    {
        Self::build_from_vec(iter.into_lazy_iter().to_vec())
    }

    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        let mut head: Option<Rc<Node<T>>> = None;
        while let Some(element) = elements.pop() {
            head = Some(Rc::new(Node {
                element,
                next: head,
            }));
        }
        Self { head, length }
    }

    /// Prepends `element`, sharing the rest with `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dogs::types::list::List;
    ///
    /// let list = List::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// The first element, if any.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// The list without its first element; empty when `self` is empty.
    #[must_use]
    pub fn tail(&self) -> Self {
        self.head.as_ref().map_or_else(Self::new, |node| Self {
            head: node.next.clone(),
            length: self.length - 1,
        })
    }

    /// The first element together with the rest of the list.
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.head().map(|head| (head, self.tail()))
    }

    /// Number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// `true` when the list holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Iterates over references to the elements, head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head.as_deref(),
        }
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        // Unlink uniquely owned nodes one at a time instead of recursively.
        let mut current = self.head.take();
        while let Some(node) = current {
            match Rc::try_unwrap(node) {
                Ok(mut node) => current = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the elements of a [`List`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
        }
    }
}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Iter").finish_non_exhaustive()
    }
}

impl<'a, T> LazyIterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            &node.element
        })
    }
}

/// Owning iterator over the elements of a [`List`].
///
/// Nodes owned only by this list are moved out; shared nodes are cloned.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: Clone> LazyIterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = self.list.head.take()?;
        self.list.length -= 1;
        match Rc::try_unwrap(node) {
            Ok(Node { element, next }) => {
                self.list.head = next;
                Some(element)
            }
            Err(shared) => {
                self.list.head.clone_from(&shared.next);
                Some(shared.element.clone())
            }
        }
    }
}

impl<T: Clone> IntoLazyIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_lazy_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<T> FromLazyIterator<T> for List<T> {
    fn from_lazy_iter<I>(iter: I) -> Self
    where
        I: IntoLazyIterator<Item = T>,
    {
        Self::from_iterator(iter)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = IntoStd<Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter().into_std()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.into_iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.into_iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// A list holding only `value`.
pub fn pure<T>(value: T) -> List<T> {
    List::singleton(value)
}

/// Concatenates `function(x)` for every element `x`, in order.
///
/// # Examples
///
/// ```rust
/// use dogs::types::list::{self, List};
///
/// let expanded = list::and_then(List::from_vec(vec![1, 2]), |x| List::from_vec(vec![x; x]));
/// assert_eq!(expanded, List::from_vec(vec![1, 2, 2]));
/// ```
pub fn and_then<T, U, F>(xs: List<T>, function: F) -> List<U>
where
    List<T>: IntoLazyIterator<Item = T>,
    List<U>: IntoLazyIterator<Item = U> + FromLazyIterator<U>,
    F: FnMut(T) -> List<U>,
{
    List::from_lazy_iter(iterator::flat_map(xs, function))
}

crate::collection_functions!(List);
crate::ordered_collection_functions!(List);
crate::monad_functions!(List);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for List<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::de::Visitor<'de> for ListVisitor<T> {
    type Value = List<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(List::build_from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for List<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ListVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::derive_additive_monoid;
    use crate::iterator::range;
    use crate::types::pair::Pair;
    use rstest::rstest;

    #[rstest]
    fn new_is_empty() {
        let list: List<i32> = List::new();
        assert!(list.is_empty());
        assert_eq!(list.head(), None);
        assert!(list.tail().is_empty());
    }

    #[rstest]
    fn cons_shares_the_tail() {
        let base = List::from_vec(vec![2, 3]);
        let extended = base.cons(1);
        assert_eq!(extended.len(), 3);
        assert_eq!(base.len(), 2);
        assert_eq!(extended.tail(), base);
        assert_eq!(extended.iter().to_vec(), vec![&1, &2, &3]);
    }

    #[rstest]
    fn uncons_splits_head_and_tail() {
        let list = List::from_vec(vec!['a', 'b']);
        let (head, tail) = list.uncons().expect("non-empty list");
        assert_eq!(*head, 'a');
        assert_eq!(tail, List::singleton('b'));
    }

    #[rstest]
    fn from_iterator_preserves_order() {
        let list = List::from_iterator(range(1, 4));
        assert_eq!(list.iter().map(|x| *x).to_vec(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn owning_iteration_leaves_shared_lists_intact() {
        let shared = List::from_vec(vec![String::from("a"), String::from("b")]);
        let moved = shared.clone().into_lazy_iter().to_vec();
        assert_eq!(moved, vec!["a", "b"]);
        assert_eq!(shared.len(), 2);
        assert_eq!(shared.head().map(String::as_str), Some("a"));
    }

    #[rstest]
    fn dropping_a_long_list_does_not_overflow() {
        let long = List::from_iterator(range(0, 500_000));
        assert_eq!(long.len(), 500_001);
        drop(long);
    }

    #[rstest]
    fn display_and_debug() {
        let list = List::from_vec(vec![1, 2, 3]);
        assert_eq!(format!("{list}"), "[1, 2, 3]");
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
        assert_eq!(format!("{}", List::<i32>::new()), "[]");
    }

    #[rstest]
    fn generated_functions() {
        let list = List::from_vec(vec![1, 2, 3, 4]);
        assert_eq!(
            filter(list.clone(), |x| x % 2 == 0),
            List::from_vec(vec![2, 4])
        );
        assert_eq!(fold(0, list.clone(), |acc, x| acc + x), 10);
        assert_eq!(sum(derive_additive_monoid::<i32>(), list.clone()), 10);
        assert_eq!(find_index(list.clone(), |x| *x == 3), Some(2));
        assert_eq!(
            zip(list, List::from_vec(vec!["a", "b"])),
            List::from_vec(vec![Pair::new(1, "a"), Pair::new(2, "b")])
        );
    }

    #[rstest]
    fn lift_m_and_pure() {
        let negate = lift_m(|x: i32| -x);
        assert_eq!(negate(List::from_vec(vec![1, 2])), List::from_vec(vec![-1, -2]));
        assert_eq!(negate(pure(5)), List::singleton(-5));
    }
}
