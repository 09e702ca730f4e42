//! Containers bridged into the iterator engine.
//!
//! Each submodule holds one container together with its free functions
//! (`map`, `filter`, `fold`, `find`, `sum`, ...), generated by the macros in
//! [`crate::collection`].
//!
//! | Module | Container | `zip` | `lift_m` |
//! |--------|-----------|-------|----------|
//! | [`list`] | persistent cons list | yes | yes |
//! | [`slice`] | growable vector | yes | yes |
//! | [`set`] | hash set | no | no |
//! | [`option`] | `Option` | no | yes |
//! | `channel` | thread-fed stream | no | no |
//!
//! [`pair`] holds the product type used by `zip` and its instance
//! derivations.

#[cfg(feature = "channel")]
pub mod channel;
pub mod list;
pub mod option;
pub mod pair;
pub mod set;
pub mod slice;
