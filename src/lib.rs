//! # dogs
//!
//! Typeclass-style algebra and a lazy iterator engine for Rust.
//!
//! ## Overview
//!
//! - **Comparison**: [`cmp::Ordering`], [`cmp::Eq`] and [`cmp::Ord`] instances
//! - **Algebra**: [`algebra::Semigroup`] and [`algebra::Monoid`] instances,
//!   with derivations for numbers, strings, pairs and options
//! - **Iterators**: the pull-based [`iterator::LazyIterator`] contract, lazy
//!   combinators (`map`, `filter`, `take`, `flat_map`, `zip`, `unfold`) and
//!   terminal operations (`fold`, `for_each`, `find`, `sum`)
//! - **Containers**: [`types::list::List`], [`types::slice::Slice`],
//!   [`types::set::Set`], [`types::pair::Pair`], `Option` and (with the
//!   `channel` feature) [`types::channel::Chan`], all bridged into the
//!   iterator engine through [`collection`]
//!
//! Instances are plain values. The same type can carry several of them, so
//! `i32` has both an additive and a multiplicative monoid and callers pick one
//! explicitly:
//!
//! ```rust
//! use dogs::algebra::{derive_additive_monoid, derive_multiplicative_monoid};
//! use dogs::iterator::{self, range};
//!
//! assert_eq!(iterator::sum(derive_additive_monoid::<i32>(), range(1, 4)), 10);
//! assert_eq!(iterator::sum(derive_multiplicative_monoid::<i32>(), range(1, 4)), 24);
//! ```
//!
//! ## Feature Flags
//!
//! - `channel` (default): thread-backed [`types::channel::Chan`]
//! - `serde`: `Serialize`/`Deserialize` for the data types
//! - `fxhash`: hash [`types::set::Set`] with `rustc_hash`
//! - `full`: enable all features

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the instance traits, the iterator contract and the container
/// types. The comparison traits are left out because their names shadow
/// `std::cmp::Eq` and `std::cmp::Ord`; use them through [`cmp`].
///
/// # Usage
///
/// ```rust
/// use dogs::prelude::*;
///
/// let total = range(1, 3).map(|x| x * 2).fold(0, |acc, x| acc + x);
/// assert_eq!(total, 12);
/// ```
pub mod prelude {
    pub use crate::algebra::{Monoid, Semigroup};
    pub use crate::collection::{FromLazyIterator, IntoLazyIterator};
    pub use crate::iterator::{LazyIterator, empty, pure, range, repeat, unfold};
    pub use crate::types::list::List;
    pub use crate::types::pair::Pair;
    pub use crate::types::set::Set;
    pub use crate::types::slice::Slice;

    #[cfg(feature = "channel")]
    pub use crate::types::channel::Chan;
}

pub mod algebra;
pub mod cmp;
pub mod collection;
pub mod iterator;
pub mod types;
