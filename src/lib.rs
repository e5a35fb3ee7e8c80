//! # sets
//!
//! A generic hash set with set algebra.
//!
//! ## Overview
//!
//! [`Set`](set::Set) is an unordered collection of unique elements backed by a
//! hash map from element to `()`. On top of the usual membership operations it
//! provides:
//!
//! - **Pure algebra**: [`plus`](set::algebra::plus), [`minus`](set::algebra::minus)
//!   and the `|`, `-`, `&`, `^` operators, which leave their operands untouched
//! - **Dual-mutation algebra**: [`remove_common`](set::algebra::remove_common) and
//!   [`xor`](set::algebra::xor), which rewrite two sets in a single pass over the
//!   smaller one
//! - **N-ary reducers**: [`union`](set::algebra::union) and
//!   [`intersection`](set::algebra::intersection), the latter stopping as soon as
//!   the running result is empty
//! - **Deterministic rendering**: `Display` sorts the elements and joins them
//!   with `,`, so sets can be compared in logs and snapshots
//!
//! ## Feature Flags
//!
//! - `set`: The [`set`] module (enabled by default)
//! - `fxhash`: Use `rustc-hash`'s `FxBuildHasher` as the default hasher
//! - `ahash`: Use `ahash`'s `RandomState` as the default hasher
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sets::prelude::*;
//!
//! let mut left = set!["a", "b", "c", "d"];
//! let mut right = set!["b", "d", "e", "f", "g"];
//!
//! assert_eq!(minus(&left, &right).to_string(), "a,c");
//! assert_eq!(intersection([&left, &right]).to_string(), "b,d");
//!
//! remove_common(&mut left, &mut right);
//! assert_eq!(left.to_string(), "a,c");
//! assert_eq!(right.to_string(), "e,f,g");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the set type, its algebra and the [`set!`] macro.
///
/// # Usage
///
/// ```rust
/// use sets::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "set")]
    pub use crate::set;

    #[cfg(feature = "set")]
    pub use crate::set::algebra::*;

    #[cfg(feature = "set")]
    pub use crate::set::{DefaultHashBuilder, Set};
}

#[cfg(feature = "set")]
pub mod set;

/// Creates a [`Set`](set::Set) containing the given elements.
///
/// Duplicates are collapsed; `set![]` is the empty set.
///
/// # Examples
///
/// ```rust
/// use sets::set;
///
/// let letters = set!['z', 'a', 'c', 'b', 'a'];
/// assert_eq!(letters.len(), 4);
/// assert_eq!(letters.to_string(), "a,b,c,z");
///
/// let empty: sets::set::Set<char> = set![];
/// assert!(empty.is_empty());
/// ```
#[cfg(feature = "set")]
#[macro_export]
macro_rules! set {
    () => {
        $crate::set::Set::new()
    };
    ($($element: expr),+ $(,)?) => {
        $crate::set::Set::from([$($element),+])
    };
}
