//! Conversions between containers and iterators, and the macros that generate
//! each container's free functions.
//!
//! A container participates in the library by implementing
//! [`IntoLazyIterator`] (to be read) and [`FromLazyIterator`] (to be built).
//! The macros then stamp out the usual set of functions inside the
//! container's module:
//!
//! | Macro | Functions |
//! |-------|-----------|
//! | [`fold_functions!`](crate::fold_functions) | `find`, `find_index`, `find_elem`, `find_elem_index`, `fold`, `for_each`, `sum`, `sum_with_init` |
//! | [`collection_functions!`](crate::collection_functions) | everything above, plus `filter` and `map` |
//! | [`ordered_collection_functions!`](crate::ordered_collection_functions) | `zip` |
//! | [`monad_functions!`](crate::monad_functions) | `lift_m` |
//!
//! Every generated function is a thin wrapper over the iterator engine in
//! [`crate::iterator`].

use crate::iterator::{FromStd, LazyIterator, from_std};

/// Conversion into a [`LazyIterator`].
///
/// Every iterator converts into itself, so functions taking an
/// `IntoLazyIterator` accept both iterators and containers.
pub trait IntoLazyIterator {
    /// The type of the produced values.
    type Item;

    /// The iterator this converts into.
    type IntoIter: LazyIterator<Item = Self::Item>;

    /// Starts iterating over `self`.
    fn into_lazy_iter(self) -> Self::IntoIter;
}

impl<I: LazyIterator> IntoLazyIterator for I {
    type Item = I::Item;
    type IntoIter = I;

    fn into_lazy_iter(self) -> I {
        self
    }
}

/// Construction of a container from the values of an iterator.
pub trait FromLazyIterator<T>: Sized {
    /// Drains `iter` into a new container.
    fn from_lazy_iter<I>(iter: I) -> Self
    where
        I: IntoLazyIterator<Item = T>;
}

impl<T> IntoLazyIterator for Vec<T> {
    type Item = T;
    type IntoIter = FromStd<std::iter::Fuse<std::vec::IntoIter<T>>>;

    fn into_lazy_iter(self) -> Self::IntoIter {
        from_std(self)
    }
}

impl<T> FromLazyIterator<T> for Vec<T> {
    fn from_lazy_iter<I>(iter: I) -> Self
    where
        I: IntoLazyIterator<Item = T>,
    {
        iter.into_lazy_iter().fold(Self::new(), |mut values, value| {
            values.push(value);
            values
        })
    }
}

// =============================================================================
// Function-Generating Macros
// =============================================================================

/// Generates `find`, `find_index`, `find_elem`, `find_elem_index`, `fold`,
/// `for_each`, `sum` and `sum_with_init` for a container.
///
/// The container must be a type constructor in scope with one type parameter
/// (further parameters must have defaults) and implement
/// [`IntoLazyIterator`].
///
/// # Examples
///
/// ```rust
/// mod stack {
///     use dogs::collection::IntoLazyIterator;
///     use dogs::iterator::{from_std, FromStd};
///
///     pub struct Stack<T>(pub Vec<T>);
///
///     impl<T> IntoLazyIterator for Stack<T> {
///         type Item = T;
///         type IntoIter = FromStd<std::iter::Fuse<std::iter::Rev<std::vec::IntoIter<T>>>>;
///
///         fn into_lazy_iter(self) -> Self::IntoIter {
///             from_std(self.0.into_iter().rev())
///         }
///     }
///
///     dogs::fold_functions!(Stack);
/// }
///
/// let stack = stack::Stack(vec![1, 2, 3]);
/// assert_eq!(stack::find_index(stack, |x| *x == 1), Some(2));
/// ```
#[macro_export]
macro_rules! fold_functions {
    ($container:ident) => {
        /// Returns the first element satisfying `predicate`.
        pub fn find<T, P>(xs: $container<T>, predicate: P) -> ::core::option::Option<T>
        where
            $container<T>: $crate::collection::IntoLazyIterator<Item = T>,
            P: FnMut(&T) -> bool,
        {
            $crate::iterator::find(xs, predicate)
        }

        /// Returns the position of the first element satisfying `predicate`.
        pub fn find_index<T, P>(xs: $container<T>, predicate: P) -> ::core::option::Option<usize>
        where
            $container<T>: $crate::collection::IntoLazyIterator<Item = T>,
            P: FnMut(&T) -> bool,
        {
            $crate::iterator::find_index(xs, predicate)
        }

        /// Returns the first element equal to `target` under `eq`.
        pub fn find_elem<T, E>(xs: $container<T>, target: &T, eq: E) -> ::core::option::Option<T>
        where
            $container<T>: $crate::collection::IntoLazyIterator<Item = T>,
            E: $crate::cmp::Eq<T>,
        {
            $crate::iterator::find_elem(xs, target, eq)
        }

        /// Returns the position of the first element equal to `target` under
        /// `eq`.
        pub fn find_elem_index<T, E>(
            xs: $container<T>,
            target: &T,
            eq: E,
        ) -> ::core::option::Option<usize>
        where
            $container<T>: $crate::collection::IntoLazyIterator<Item = T>,
            E: $crate::cmp::Eq<T>,
        {
            $crate::iterator::find_elem_index(xs, target, eq)
        }

        /// Left fold of the elements, starting from `init`.
        pub fn fold<A, T, F>(init: A, xs: $container<T>, function: F) -> A
        where
            $container<T>: $crate::collection::IntoLazyIterator<Item = T>,
            F: FnMut(A, T) -> A,
        {
            $crate::iterator::fold(init, xs, function)
        }

        /// Calls `function` on every element.
        pub fn for_each<T, F>(xs: $container<T>, function: F)
        where
            $container<T>: $crate::collection::IntoLazyIterator<Item = T>,
            F: FnMut(T),
        {
            $crate::iterator::for_each(xs, function);
        }

        /// Combines all elements with `monoid`; `monoid.empty()` when there
        /// are none.
        pub fn sum<T, M>(monoid: M, xs: $container<T>) -> T
        where
            $container<T>: $crate::collection::IntoLazyIterator<Item = T>,
            M: $crate::algebra::Monoid<T>,
        {
            $crate::iterator::sum(monoid, xs)
        }

        /// Combines `init` and all elements with `semigroup`.
        pub fn sum_with_init<T, S>(semigroup: S, init: T, xs: $container<T>) -> T
        where
            $container<T>: $crate::collection::IntoLazyIterator<Item = T>,
            S: $crate::algebra::Semigroup<T>,
        {
            $crate::iterator::sum_with_init(semigroup, init, xs)
        }
    };
}

/// Generates everything [`fold_functions!`](crate::fold_functions) does, plus
/// `filter` and `map`.
///
/// The container must additionally implement [`FromLazyIterator`].
#[macro_export]
macro_rules! collection_functions {
    ($container:ident) => {
        $crate::fold_functions!($container);

        /// Keeps the elements satisfying `predicate`.
        pub fn filter<T, P>(xs: $container<T>, predicate: P) -> $container<T>
        where
            $container<T>: $crate::collection::IntoLazyIterator<Item = T>
                + $crate::collection::FromLazyIterator<T>,
            P: FnMut(&T) -> bool,
        {
            <$container<T> as $crate::collection::FromLazyIterator<T>>::from_lazy_iter(
                $crate::iterator::filter(xs, predicate),
            )
        }

        /// Applies `function` to every element.
        pub fn map<T, U, F>(xs: $container<T>, function: F) -> $container<U>
        where
            $container<T>: $crate::collection::IntoLazyIterator<Item = T>,
            $container<U>: $crate::collection::FromLazyIterator<U>,
            F: FnMut(T) -> U,
        {
            <$container<U> as $crate::collection::FromLazyIterator<U>>::from_lazy_iter(
                $crate::iterator::map(xs, function),
            )
        }
    };
}

/// Generates `zip` for a container whose iteration order is meaningful.
#[macro_export]
macro_rules! ordered_collection_functions {
    ($container:ident) => {
        /// Pairs up the elements of `xs` and `ys`; the result is as long as
        /// the shorter input.
        pub fn zip<T, U>(
            xs: $container<T>,
            ys: $container<U>,
        ) -> $container<$crate::types::pair::Pair<T, U>>
        where
            $container<T>: $crate::collection::IntoLazyIterator<Item = T>,
            $container<U>: $crate::collection::IntoLazyIterator<Item = U>,
            $container<$crate::types::pair::Pair<T, U>>:
                $crate::collection::FromLazyIterator<$crate::types::pair::Pair<T, U>>,
        {
            <$container<$crate::types::pair::Pair<T, U>> as $crate::collection::FromLazyIterator<
                $crate::types::pair::Pair<T, U>,
            >>::from_lazy_iter($crate::iterator::zip(xs, ys))
        }
    };
}

/// Generates `lift_m` from the module's own `pure` and `and_then`.
///
/// The invoking module must define
/// `pure<T>(value: T) -> C<T>` and
/// `and_then<T, U, F: FnMut(T) -> C<U>>(xs: C<T>, function: F) -> C<U>`,
/// where `and_then` is bounded by at most
/// `C<T>: IntoLazyIterator<Item = T>` and
/// `C<U>: IntoLazyIterator<Item = U> + FromLazyIterator<U>`.
#[macro_export]
macro_rules! monad_functions {
    ($container:ident) => {
        /// Promotes `function` to a function over the container.
        pub fn lift_m<T, U, F>(function: F) -> impl Fn($container<T>) -> $container<U>
        where
            $container<T>: $crate::collection::IntoLazyIterator<Item = T>,
            $container<U>: $crate::collection::IntoLazyIterator<Item = U>
                + $crate::collection::FromLazyIterator<U>,
            F: Fn(T) -> U + Clone,
        {
            move |xs| {
                let function = function.clone();
                and_then(xs, move |x| pure(function(x)))
            }
        }
    };
}
