//! Mutable hash set.
//!
//! [`Set`] wraps [`HashSet`] with the free-function surface shared by the
//! other containers. Iteration order is unspecified, so `zip` is not
//! provided.
//!
//! With the `fxhash` feature, sets hash with `rustc_hash::FxBuildHasher`
//! instead of the standard library's randomly seeded hasher.

use std::collections::HashSet;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::collection::{FromLazyIterator, IntoLazyIterator};
use crate::iterator::LazyIterator;

/// The hasher used by [`Set`] unless another one is given.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hasher used by [`Set`] unless another one is given.
#[cfg(not(feature = "fxhash"))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

/// A set of unique elements.
///
/// # Examples
///
/// ```rust
/// use dogs::types::set::{self, Set};
///
/// let mut primes = Set::from_elems([2, 3, 5]);
/// primes.add(7);
/// assert!(primes.has(&7));
/// assert!(set::subset(&Set::from_elems([3, 7]), &primes));
/// assert_eq!(primes, Set::from_elems([7, 5, 3, 2]));
/// ```
#[derive(Clone)]
pub struct Set<T, S = DefaultHashBuilder> {
    elements: HashSet<T, S>,
}

impl<T: Eq + Hash> Set<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates a set holding `elements`; duplicates are kept once.
    pub fn from_elems<I: IntoIterator<Item = T>>(elements: I) -> Self {
        elements.into_iter().collect()
    }

    /// Creates a set with the values of `iter`.
    pub fn from_iterator<I>(iter: I) -> Self
    where
        I: IntoLazyIterator<Item = T>,
    {
        Self::from_lazy_iter(iter)
    }
}

impl<T: Eq + Hash, S: BuildHasher> Set<T, S> {
    /// Creates an empty set hashing with `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            elements: HashSet::with_hasher(hasher),
        }
    }

    /// Inserts `element`; returns `false` if it was already present.
    pub fn add(&mut self, element: T) -> bool {
        self.elements.insert(element)
    }

    /// Removes `element`; returns `false` if it was absent.
    pub fn remove(&mut self, element: &T) -> bool {
        self.elements.remove(element)
    }

    /// `true` when `element` is present.
    #[must_use]
    pub fn has(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// `true` when the set holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Moves every element of `other` into `self`.
    pub fn merge(&mut self, other: Self) {
        self.elements.extend(other.elements);
    }
}

impl<T, S> Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Iterates over a snapshot of the current elements.
    ///
    /// Later changes to the set are not observed by the iterator.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            elements: self.elems().into_iter(),
        }
    }

    /// Copies the elements into a `Vec`, in unspecified order.
    #[must_use]
    pub fn elems(&self) -> Vec<T> {
        self.elements.iter().cloned().collect()
    }

    /// The elements present in either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut elements = self.elements.clone();
        elements.extend(other.elements.iter().cloned());
        Self { elements }
    }

    /// The elements present in both sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dogs::types::set::Set;
    ///
    /// let common = Set::from_elems([1, 2, 3]).intersection(&Set::from_elems([2, 3, 4]));
    /// assert_eq!(common, Set::from_elems([2, 3]));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut elements = HashSet::with_hasher(self.elements.hasher().clone());
        elements.extend(self.elements.intersection(&other.elements).cloned());
        Self { elements }
    }
}

/// `true` when every element of `s` is in `t`.
pub fn subset<T, S>(s: &Set<T, S>, t: &Set<T, S>) -> bool
where
    T: Eq + Hash,
    S: BuildHasher,
{
    s.elements.is_subset(&t.elements)
}

/// `true` when `s` and `t` hold the same elements, in any order.
pub fn equal<T, S>(s: &Set<T, S>, t: &Set<T, S>) -> bool
where
    T: Eq + Hash,
    S: BuildHasher,
{
    s.len() == t.len() && subset(s, t)
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over a snapshot of a [`Set`]. Created by [`Set::iter`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<T> {
    elements: std::vec::IntoIter<T>,
}

impl<T> LazyIterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.elements.next()
    }
}

/// Owning iterator over the elements of a [`Set`].
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    elements: std::collections::hash_set::IntoIter<T>,
}

impl<T> LazyIterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.elements.next()
    }
}

impl<T, S> IntoLazyIterator for Set<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_lazy_iter(self) -> IntoIter<T> {
        IntoIter {
            elements: self.elements.into_iter(),
        }
    }
}

impl<T, S> FromLazyIterator<T> for Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_lazy_iter<I>(iter: I) -> Self
    where
        I: IntoLazyIterator<Item = T>,
    {
        iter.into_lazy_iter()
            .fold(Self::with_hasher(S::default()), |mut set, element| {
                set.add(element);
                set
            })
    }
}

impl<T, S> FromIterator<T> for Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T, S> Extend<T> for Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash, S: BuildHasher> PartialEq for Set<T, S> {
    fn eq(&self, other: &Self) -> bool {
        equal(self, other)
    }
}

impl<T: Eq + Hash, S: BuildHasher> Eq for Set<T, S> {}

impl<T: fmt::Debug, S> fmt::Debug for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.elements.iter()).finish()
    }
}

crate::collection_functions!(Set);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, S> serde::Serialize for Set<T, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.elements.len()))?;
        for element in &self.elements {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SetVisitor<T, S> {
    marker: std::marker::PhantomData<(T, S)>,
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::de::Visitor<'de> for SetVisitor<T, S>
where
    T: serde::Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    type Value = Set<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = Set::with_hasher(S::default());
        while let Some(element) = seq.next_element()? {
            set.add(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for Set<T, S>
where
    T: serde::Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}
