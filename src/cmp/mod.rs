//! Equality and ordering instances.
//!
//! This module mirrors the layout of `std::cmp`, but its traits describe
//! *instances* rather than properties of a type: an [`Eq<T>`] or [`Ord<T>`]
//! is a value that knows how to compare two `T`s. A type can therefore have
//! any number of orderings, and composite orderings are built by derivation
//! (see [`crate::types::pair::derive_ord`] and
//! [`crate::types::option::derive_ord`]).
//!
//! - [`Ordering`]: the three-valued comparison result `LT`, `EQ`, `GT`
//! - [`Eq`]: an equivalence relation `equal(&T, &T) -> bool`
//! - [`Ord`]: a total order `compare(&T, &T) -> Ordering`, with the derived
//!   predicates `lt`, `le`, `gt`, `ge`, `eq`, `ne`
//!
//! # Examples
//!
//! ```rust
//! use dogs::cmp::{self, Ord as _, Ordering};
//!
//! let by_length = cmp::OrdFn::new(|x: &&str, y: &&str| Ordering::from(x.len().cmp(&y.len())));
//! assert_eq!(by_length.compare(&"hoge", &"fo"), Ordering::GT);
//! assert!(by_length.le(&"ab", &"cd"));
//!
//! let natural = cmp::derive_ord::<i32>();
//! assert!(natural.lt(&1, &2));
//! ```

mod eq;
mod ord;
mod ordering;

pub use eq::{DerivedEq, Eq, EqFn, derive_eq};
pub use ord::{DerivedOrd, Ord, OrdFn, derive_ord};
pub use ordering::{InvalidOrdering, Ordering};
