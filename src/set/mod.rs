//! Hash set and set algebra.
//!
//! This module provides [`Set`], an unordered collection of unique elements,
//! and the [`algebra`] functions built on top of it:
//!
//! - [`algebra::plus`] / [`algebra::minus`]: allocating union and difference
//! - [`algebra::remove_common`] / [`algebra::xor`]: in-place operators that
//!   rewrite both operands at once
//! - [`algebra::union`] / [`algebra::intersection`]: n-ary reducers
//! - [`algebra::sort`] / [`algebra::tuplets`]: ordered views of a set
//!
//! # Ordering
//!
//! A [`Set`] keeps no order. Iteration order is unspecified and may differ
//! between two equal sets. The only ordered outputs are `Display`,
//! [`Set::sorted`], [`algebra::sort`] and [`algebra::tuplets`], all of which
//! sort ascending.
//!
//! # Examples
//!
//! ```rust
//! use sets::set;
//! use sets::set::algebra;
//!
//! let left = set!["a", "b", "c", "d"];
//! let right = set!["b", "d", "e", "f", "g"];
//!
//! assert_eq!(algebra::plus(&left, &right).to_string(), "a,b,c,d,e,f,g");
//! assert_eq!(algebra::minus(&right, &left).to_string(), "e,f,g");
//!
//! // Operands are never modified by the allocating operators
//! assert_eq!(left.len(), 4);
//! assert_eq!(right.len(), 5);
//! ```

// =============================================================================
// Hasher Type Alias
// =============================================================================

/// Hasher builder used when a [`Set`] does not name one.
///
/// When the `fxhash` feature is enabled, this is `rustc_hash::FxBuildHasher`.
/// Otherwise, when the `ahash` feature is enabled, this is `ahash::RandomState`.
/// With neither feature, this is the standard library's `RandomState`.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hasher builder used when a [`Set`] does not name one (`ahash`).
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hasher builder used when a [`Set`] does not name one (standard library).
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

pub mod algebra;
mod hashset;

pub use hashset::Set;
pub use hashset::SetIntoIterator;
pub use hashset::SetIterator;

// =============================================================================
// Tests
// =============================================================================
