//! Hash set of unique elements.
//!
//! This module provides [`Set`], a mutable hash set that stores each element
//! as a key of a `HashMap<T, ()>`.
//!
//! # Overview
//!
//! - O(1) amortized `contains`, `insert` and `remove`
//! - O(1) `len` and `is_empty`
//! - O(n log n) sorted rendering through `Display`
//!
//! Binary algebra comes in three flavours:
//!
//! | Form        | Example                                     | Operands             |
//! |-------------|---------------------------------------------|----------------------|
//! | allocating  | `left.union(&right)`, `&left - &right`      | untouched            |
//! | in place    | `left.difference_with(&right)`, `left -= &right` | `left` mutated  |
//! | consuming   | `left.clone().minus(&right)`                | `left` moved         |
//!
//! # Examples
//!
//! ```rust
//! use sets::set;
//!
//! let mut letters = set!["z", "a", "c", "b"];
//! assert_eq!(letters.to_string(), "a,b,c,z");
//!
//! assert!(!letters.insert("a")); // already present
//! assert!(letters.remove(&"z"));
//! assert!(!letters.remove(&"z")); // absent, not an error
//! assert_eq!(letters.to_string(), "a,b,c");
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::{FromIterator, FusedIterator};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::DefaultHashBuilder;
use super::algebra;

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered collection of unique elements.
///
/// `Set` maps every element to `()`, so membership tests cost a single hash
/// lookup. Inserting an element that is already present leaves the set
/// unchanged.
///
/// # Time Complexity
///
/// | Operation              | Complexity              |
/// |------------------------|-------------------------|
/// | `new`                  | O(1)                    |
/// | `contains`             | O(1) amortized          |
/// | `insert`               | O(1) amortized          |
/// | `remove`               | O(1) amortized          |
/// | `len`                  | O(1)                    |
/// | `union`                | O(n + m)                |
/// | `intersection`         | O(min(n, m))            |
/// | `difference`           | O(n)                    |
/// | `symmetric_difference` | O(n + m)                |
/// | `is_subset`            | O(n)                    |
/// | `to_string`, `sorted`  | O(n log n)              |
///
/// # Thread Safety
///
/// `Set` has no internal synchronization. It is `Send`/`Sync` whenever the
/// element and hasher types are, so several threads may read a shared
/// `&Set` at once. Mutation needs `&mut Set`; sharing a set that some
/// thread mutates requires an external lock such as `Mutex<Set<T>>`.
///
/// # Examples
///
/// ```rust
/// use sets::set::Set;
///
/// let mut set = Set::new();
/// set.insert(3);
/// set.insert(1);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&1));
/// assert_eq!(set.to_string(), "1,3");
/// ```
#[derive(Clone)]
pub struct Set<T, S = DefaultHashBuilder> {
    inner: HashMap<T, (), S>,
}

static_assertions::assert_impl_all!(Set<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Set<String>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<i32>>: Send, Sync);

impl<T> Set<T> {
    /// Creates a new empty set using the [`DefaultHashBuilder`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.to_string(), "");
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T: Clone + Hash + Eq> Set<T> {
    /// Creates a set from the elements of a slice.
    ///
    /// Elements are cloned and duplicates collapse into one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let set = Set::from_slice(&["z", "a", "c", "b", "a"]);
    /// assert_eq!(set.len(), 4);
    /// assert_eq!(set.sorted(), vec!["a", "b", "c", "z"]);
    /// ```
    #[must_use]
    pub fn from_slice(elements: &[T]) -> Self {
        elements.iter().cloned().collect()
    }
}

impl<T, S> Set<T, S> {
    /// Creates an empty set that hashes its elements with `hash_builder`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::hash_map::RandomState;
    /// use sets::set::Set;
    ///
    /// let mut set = Set::with_hasher(RandomState::new());
    /// set.insert("element");
    /// assert!(set.contains("element"));
    /// ```
    #[inline]
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            inner: HashMap::with_hasher(hash_builder),
        }
    }

    /// Creates an empty set with the given capacity and hasher.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            inner: HashMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Returns the set's hasher builder.
    #[inline]
    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// assert_eq!(set![1, 2, 2, 3].len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes every element. The allocated capacity is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// let mut set = set!["z", "a", "c", "b"];
    /// set.clear();
    /// assert_eq!(set.len(), 0);
    /// assert_eq!(set.to_string(), "");
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.inner.retain(|element, _| predicate(element));
    }

    /// Returns an iterator over the elements, in unspecified order.
    ///
    /// Use [`Set::sorted`] when a stable order is needed.
    #[must_use]
    pub fn iter(&self) -> SetIterator<'_, T> {
        SetIterator {
            inner: self.inner.keys(),
        }
    }

    /// Returns the elements in ascending order.
    ///
    /// Every call returns a freshly allocated `Vec`; it never aliases the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// let set = set![30, 10, 20];
    /// assert_eq!(set.sorted(), vec![10, 20, 30]);
    /// ```
    #[must_use]
    pub fn sorted(&self) -> Vec<T>
    where
        T: Ord + Clone,
    {
        algebra::sort(self)
    }
}

impl<T: Hash + Eq, S: BuildHasher> Set<T, S> {
    /// Returns `true` if the set contains `element`.
    ///
    /// The element may be any borrowed form of the set's element type,
    /// but `Hash` and `Eq` on the borrowed form must match those for
    /// the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let set: Set<String> = ["hello", "world"].iter().map(|word| word.to_string()).collect();
    ///
    /// // Can use &str to look up String elements
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("other"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(element)
    }

    /// Inserts `element`, returning `true` if it was not already present.
    ///
    /// Inserting a present element leaves the set unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.insert(42));
    /// assert!(!set.insert(42));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        self.inner.insert(element, ()).is_none()
    }

    /// Inserts every element produced by `elements`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// let mut set = set!["a"];
    /// set.add(["b", "c", "a"]);
    /// assert_eq!(set.to_string(), "a,b,c");
    /// ```
    pub fn add<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(elements);
    }

    /// Removes `element`, returning `true` if it was present.
    ///
    /// Removing an absent element is a no-op.
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element).is_some()
    }

    /// Returns `true` if both sets hold the same elements.
    ///
    /// Equivalent to `==`: equal cardinality and every element of `self`
    /// found in `other`.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }

    /// Returns `true` if every element of `self` is in `other`.
    ///
    /// The relation is reflexive, and the empty set is a subset of every set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    /// use sets::set::Set;
    ///
    /// let small = set!["b", "d"];
    /// let large = set!["a", "b", "c", "d"];
    /// let empty: Set<&str> = set![];
    ///
    /// assert!(small.is_subset(&large));
    /// assert!(large.is_subset(&large));
    /// assert!(!large.is_subset(&small));
    /// assert!(empty.is_subset(&empty));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if `self` is a subset of `other` and smaller than it.
    #[must_use]
    pub fn is_strict_subset(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if the two sets have no element in common.
    ///
    /// # Complexity
    ///
    /// O(min(n, m))
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = smaller_first(self, other);
        !smaller.iter().any(|element| larger.contains(element))
    }

    /// Removes from `self` every element that is in `other`.
    ///
    /// Walks whichever of the two sets is smaller.
    pub fn difference_with(&mut self, other: &Self) {
        if other.len() < self.len() {
            for element in other {
                self.inner.remove(element);
            }
        } else {
            self.inner.retain(|element, _| !other.contains(element));
        }
    }

    /// Keeps in `self` only the elements that are also in `other`.
    pub fn intersection_with(&mut self, other: &Self) {
        self.inner.retain(|element, _| other.contains(element));
    }
}

impl<T: Clone + Hash + Eq, S: BuildHasher + Clone> Set<T, S> {
    /// Returns a new set holding the elements of both sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// let left = set![1, 2];
    /// let right = set![2, 3];
    /// assert_eq!(left.union(&right).to_string(), "1,2,3");
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let (smaller, larger) = smaller_first(self, other);
        let mut result = larger.clone();
        result.union_with(smaller);
        result
    }

    /// Returns a new set holding the elements of `self` that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.clone().minus(other)
    }

    /// Returns a new set holding the elements present in both sets.
    ///
    /// # Complexity
    ///
    /// O(min(n, m))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// let left = set!["a", "b", "c", "d"];
    /// let right = set!["b", "d", "e", "f", "g"];
    /// assert_eq!(left.intersection(&right).to_string(), "b,d");
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (smaller, larger) = smaller_first(self, other);
        let mut result = Self::with_capacity_and_hasher(smaller.len(), self.hasher().clone());
        for element in smaller {
            if larger.contains(element) {
                result.inner.insert(element.clone(), ());
            }
        }
        result
    }

    /// Returns a new set holding the elements present in exactly one set.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.symmetric_difference_with(other);
        result
    }

    /// Adds every element of `other` to `self`.
    pub fn union_with(&mut self, other: &Self) {
        self.inner.extend(other.iter().map(|element| (element.clone(), ())));
    }

    /// Turns `self` into the symmetric difference of `self` and `other`.
    pub fn symmetric_difference_with(&mut self, other: &Self) {
        for element in other {
            if self.inner.remove(element).is_none() {
                self.inner.insert(element.clone(), ());
            }
        }
    }

    /// Adds every element of `other` to this set and returns it.
    ///
    /// Consumes the receiver: clone it first when the original must survive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// let left = set!["a", "b", "c", "d"];
    /// let right = set!["b", "d", "e", "f", "g"];
    ///
    /// assert_eq!(left.clone().plus(&right).to_string(), "a,b,c,d,e,f,g");
    /// assert_eq!(right.clone().plus(&left).to_string(), "a,b,c,d,e,f,g");
    /// assert_eq!(left.len(), 4);
    /// ```
    #[must_use]
    pub fn plus(mut self, other: &Self) -> Self {
        self.union_with(other);
        self
    }

    /// Removes every element of `other` from this set and returns it.
    ///
    /// Consumes the receiver: clone it first when the original must survive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// let left = set!["a", "b", "c", "d"];
    /// let right = set!["b", "d", "e", "f", "g"];
    ///
    /// assert_eq!(left.clone().minus(&right).to_string(), "a,c");
    /// assert_eq!(right.clone().minus(&left).to_string(), "e,f,g");
    /// ```
    #[must_use]
    pub fn minus(mut self, other: &Self) -> Self {
        self.difference_with(other);
        self
    }
}

/// Orders two sets by cardinality, smaller first. Ties keep the given order.
fn smaller_first<'a, T, S>(
    first: &'a Set<T, S>,
    second: &'a Set<T, S>,
) -> (&'a Set<T, S>, &'a Set<T, S>) {
    if first.len() <= second.len() {
        (first, second)
    } else {
        (second, first)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`Set`].
pub struct SetIterator<'a, T> {
    inner: hash_map::Keys<'a, T, ()>,
}

impl<'a, T> Iterator for SetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SetIterator<'_, T> {}

/// An owning iterator over the elements of a [`Set`].
pub struct SetIntoIterator<T> {
    inner: hash_map::IntoKeys<T, ()>,
}

impl<T> Iterator for SetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SetIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for Set<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> FromIterator<T> for Set<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Hash + Eq> From<Vec<T>> for Set<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter.into_iter().map(|element| (element, ())));
    }
}

impl<'a, T: Copy + Hash + Eq + 'a, S: BuildHasher> Extend<&'a T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, S> IntoIterator for Set<T, S> {
    type Item = T;
    type IntoIter = SetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            inner: self.inner.into_keys(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;
    type IntoIter = SetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq, S: BuildHasher> PartialEq for Set<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for Set<T, S> {}

impl<T: fmt::Debug, S> fmt::Debug for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the elements in ascending order, separated by `,`.
///
/// The empty set renders as the empty string. The output does not depend on
/// insertion order, so it is safe to compare in tests and logs.
impl<T: Ord + fmt::Display, S> fmt::Display for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements: Vec<&T> = self.iter().collect();
        elements.sort_unstable();
        for (index, element) in elements.into_iter().enumerate() {
            if index > 0 {
                formatter.write_str(",")?;
            }
            write!(formatter, "{element}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Operator Implementations
// =============================================================================

/// Implements a binary operator on `&Set` through the allocating method and
/// its compound-assignment form on `Set` through the matching `_with` method.
macro_rules! impl_set_operator {
    ($($trait: ident, $method: ident => $operation: ident;)*) => {
        paste::paste! {
            $(
                impl<T, S> $trait<&Set<T, S>> for &Set<T, S>
                where
                    T: Clone + Hash + Eq,
                    S: BuildHasher + Clone,
                {
                    type Output = Set<T, S>;

                    fn $method(self, rhs: &Set<T, S>) -> Self::Output {
                        self.$operation(rhs)
                    }
                }

                impl<T, S> [<$trait Assign>]<&Set<T, S>> for Set<T, S>
                where
                    T: Clone + Hash + Eq,
                    S: BuildHasher + Clone,
                {
                    fn [<$method _assign>](&mut self, rhs: &Set<T, S>) {
                        self.[<$operation _with>](rhs);
                    }
                }
            )*
        }
    };
}

impl_set_operator! {
    BitOr, bitor => union;
    BitAnd, bitand => intersection;
    BitXor, bitxor => symmetric_difference;
    Sub, sub => difference;
}

// =============================================================================
// Tests
// =============================================================================
