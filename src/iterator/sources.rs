//! Iterator sources.

use std::fmt;
use std::marker::PhantomData;

use super::LazyIterator;

// =============================================================================
// Range
// =============================================================================

/// Integer types usable as [`range`] bounds.
///
/// This trait is sealed.
pub trait RangeBound: Copy + PartialOrd + private::Sealed {
    /// The next value, or `None` at the type's maximum.
    fn successor(self) -> Option<Self>;
}

mod private {
    pub trait Sealed {}
}

macro_rules! impl_range_bound {
    ($($integer:ty),* $(,)?) => {
        $(
            impl private::Sealed for $integer {}

            impl RangeBound for $integer {
                #[inline]
                fn successor(self) -> Option<Self> {
                    self.checked_add(1)
                }
            }
        )*
    };
}

impl_range_bound!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// The inclusive integer range `[start, end]`. Created by [`range`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Range<T> {
    next: Option<T>,
    end: T,
}

/// Yields `start, start + 1, ..., end`, both ends inclusive.
///
/// Empty when `end < start`. Stops cleanly at `end == T::MAX`.
///
/// # Examples
///
/// ```rust
/// use dogs::iterator::{range, LazyIterator};
///
/// assert_eq!(range(1, 4).to_vec(), vec![1, 2, 3, 4]);
/// assert_eq!(range(3, 3).to_vec(), vec![3]);
/// assert!(range(5, 1).to_vec().is_empty());
/// assert_eq!(range(254_u8, u8::MAX).to_vec(), vec![254, 255]);
/// ```
pub const fn range<T: RangeBound>(start: T, end: T) -> Range<T> {
    Range {
        next: Some(start),
        end,
    }
}

impl<T: RangeBound> LazyIterator for Range<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next.take()?;
        if current > self.end {
            return None;
        }
        if current < self.end {
            self.next = current.successor();
        }
        Some(current)
    }
}

// =============================================================================
// Unfold
// =============================================================================

/// Generates values from a state and a step function. Created by [`unfold`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Unfold<S, F> {
    state: Option<S>,
    step: F,
}

/// Generates values by repeatedly applying `step` to a state.
///
/// Each call of `step` receives the current state and returns the next state
/// with the value to yield, or `None` to finish. After `None` the step
/// function is never called again.
///
/// # Examples
///
/// ```rust
/// use dogs::iterator::{unfold, LazyIterator};
///
/// let fibonacci = unfold((0_u64, 1_u64), |(a, b)| Some(((b, a + b), a)));
/// assert_eq!(fibonacci.take(8).to_vec(), vec![0, 1, 1, 2, 3, 5, 8, 13]);
///
/// let countdown = unfold(3, |n| (n > 0).then(|| (n - 1, n)));
/// assert_eq!(countdown.to_vec(), vec![3, 2, 1]);
/// ```
pub const fn unfold<S, U, F>(init: S, step: F) -> Unfold<S, F>
where
    F: FnMut(S) -> Option<(S, U)>,
{
    Unfold {
        state: Some(init),
        step,
    }
}

impl<S, U, F> LazyIterator for Unfold<S, F>
where
    F: FnMut(S) -> Option<(S, U)>,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let state = self.state.take()?;
        let (state, value) = (self.step)(state)?;
        self.state = Some(state);
        Some(value)
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Unfold<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Unfold")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Pure / Empty / Repeat
// =============================================================================

/// Yields a single value. Created by [`pure`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Pure<T> {
    value: Option<T>,
}

impl<T> Pure<T> {
    pub(crate) const fn from_option(value: Option<T>) -> Self {
        Self { value }
    }
}

/// Yields `value` once.
pub const fn pure<T>(value: T) -> Pure<T> {
    Pure::from_option(Some(value))
}

impl<T> LazyIterator for Pure<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.value.take()
    }
}

/// Yields nothing. Created by [`empty`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Empty<T> {
    marker: PhantomData<fn() -> T>,
}

/// An iterator with no values.
pub const fn empty<T>() -> Empty<T> {
    Empty {
        marker: PhantomData,
    }
}

impl<T> LazyIterator for Empty<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        None
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Empty")
    }
}

/// Yields clones of one value a fixed number of times. Created by [`repeat`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Repeat<T> {
    value: T,
    remaining: usize,
}

/// Yields `value` exactly `count` times.
pub const fn repeat<T: Clone>(value: T, count: usize) -> Repeat<T> {
    Repeat {
        value,
        remaining: count,
    }
}

impl<T: Clone> LazyIterator for Repeat<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.value.clone())
    }
}
