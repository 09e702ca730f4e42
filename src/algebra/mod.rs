//! Semigroup and monoid instances.
//!
//! A [`Semigroup<T>`] is a value that knows an associative way to combine two
//! `T`s; a [`Monoid<T>`] additionally knows the identity element of that
//! operation. Because instances are values rather than trait impls on `T`
//! itself, one type can have several of them:
//!
//! ```rust
//! use dogs::algebra::{
//!     derive_additive_monoid, derive_multiplicative_monoid, Monoid, Semigroup,
//! };
//!
//! let additive = derive_additive_monoid::<i32>();
//! let multiplicative = derive_multiplicative_monoid::<i32>();
//!
//! assert_eq!(additive.combine(3, 4), 7);
//! assert_eq!(multiplicative.combine(3, 4), 12);
//! assert_eq!(additive.empty(), 0);
//! assert_eq!(multiplicative.empty(), 1);
//! ```
//!
//! Instances for composite types are derived from instances of their parts:
//! see [`crate::types::pair::derive_monoid`] and
//! [`crate::types::option::derive_monoid`].

mod monoid;
mod numeric;
mod semigroup;

pub use monoid::{Monoid, MonoidFn};
pub use numeric::{
    Additive, AdditiveMonoid, Multiplicative, MultiplicativeMonoid, derive_additive_monoid,
    derive_additive_semigroup, derive_multiplicative_monoid, derive_multiplicative_semigroup,
};
pub use semigroup::{Semigroup, SemigroupFn};
