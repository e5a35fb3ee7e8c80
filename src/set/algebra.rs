//! Set algebra over [`Set`].
//!
//! Free functions in three groups:
//!
//! - **Pure**: [`plus`] and [`minus`] read both operands and allocate the
//!   result.
//! - **Dual-mutation**: [`remove_common`] and [`xor`] rewrite both operands
//!   in a single pass over the smaller one, without allocating.
//! - **N-ary**: [`union`] and [`intersection`] fold any number of sets.
//!
//! [`sort`] and [`tuplets`] produce ordered views of a set.
//!
//! # Examples
//!
//! ```rust
//! use sets::set;
//! use sets::set::algebra::{intersection, remove_common, union};
//!
//! let mut left = set!["a", "b", "c", "d"];
//! let mut right = set!["b", "d", "e", "f", "g"];
//!
//! assert_eq!(union([&left, &right]).to_string(), "a,b,c,d,e,f,g");
//! assert_eq!(intersection([&left, &right]).to_string(), "b,d");
//!
//! remove_common(&mut left, &mut right);
//! assert_eq!(left.to_string(), "a,c");
//! assert_eq!(right.to_string(), "e,f,g");
//! ```

use std::hash::{BuildHasher, Hash};

use smallvec::SmallVec;

use super::Set;

/// Index path of the tuple being built by [`tuplets`].
type TupletPath = SmallVec<[usize; 8]>;

// =============================================================================
// Pure Binary Algebra
// =============================================================================

/// Returns the union of `left` and `right` as a new set.
///
/// # Examples
///
/// ```rust
/// use sets::set;
/// use sets::set::algebra::plus;
///
/// let left = set![1, 2];
/// let right = set![2, 3];
/// assert_eq!(plus(&left, &right), plus(&right, &left));
/// assert_eq!(plus(&left, &right).to_string(), "1,2,3");
/// ```
#[must_use]
pub fn plus<T, S>(left: &Set<T, S>, right: &Set<T, S>) -> Set<T, S>
where
    T: Clone + Hash + Eq,
    S: BuildHasher + Clone,
{
    left.union(right)
}

/// Returns the elements of `left` that are not in `right`, as a new set.
///
/// # Examples
///
/// ```rust
/// use sets::set;
/// use sets::set::algebra::minus;
///
/// let left = set!["a", "b", "c", "d"];
/// let right = set!["b", "d", "e", "f", "g"];
/// assert_eq!(minus(&left, &right).to_string(), "a,c");
/// assert_eq!(minus(&right, &left).to_string(), "e,f,g");
/// ```
#[must_use]
pub fn minus<T, S>(left: &Set<T, S>, right: &Set<T, S>) -> Set<T, S>
where
    T: Clone + Hash + Eq,
    S: BuildHasher + Clone,
{
    left.difference(right)
}

// =============================================================================
// Dual-Mutation Algebra
// =============================================================================

/// Removes the elements common to both sets from both sets.
///
/// Afterwards `left` holds what was only in `left` and `right` holds what
/// was only in `right`; the two sets are disjoint.
///
/// The smaller set drives a single pass: each of its elements is removed
/// from the larger set, and kept only if that removal found nothing.
///
/// # Complexity
///
/// O(min(n, m)), no allocation
///
/// # Examples
///
/// ```rust
/// use sets::set;
/// use sets::set::algebra::remove_common;
///
/// let mut left = set!["a", "b", "c", "d"];
/// let mut right = set!["b", "d", "e", "f", "g"];
///
/// remove_common(&mut left, &mut right);
///
/// assert_eq!(left.to_string(), "a,c");
/// assert_eq!(right.to_string(), "e,f,g");
/// ```
pub fn remove_common<T, S>(left: &mut Set<T, S>, right: &mut Set<T, S>)
where
    T: Hash + Eq,
    S: BuildHasher,
{
    let (smaller, larger) = if left.len() <= right.len() {
        (left, right)
    } else {
        (right, left)
    };
    smaller.retain(|element| !larger.remove(element));
}

/// Splits two sets into their symmetric difference, crossing the parts over.
///
/// Afterwards `left` holds what was only in `right`, and `right` holds what
/// was only in `left`. Together they hold the symmetric difference.
///
/// Runs [`remove_common`] and then exchanges the two sets, so the cost is
/// the same O(min(n, m)) single pass.
///
/// # Examples
///
/// ```rust
/// use sets::set;
/// use sets::set::algebra::xor;
///
/// let mut left = set!["a", "b", "c", "d"];
/// let mut right = set!["b", "d", "e", "f", "g"];
///
/// xor(&mut left, &mut right);
///
/// assert_eq!(left.to_string(), "e,f,g");
/// assert_eq!(right.to_string(), "a,c");
/// ```
pub fn xor<T, S>(left: &mut Set<T, S>, right: &mut Set<T, S>)
where
    T: Hash + Eq,
    S: BuildHasher,
{
    remove_common(left, right);
    std::mem::swap(left, right);
}

// =============================================================================
// N-ary Reducers
// =============================================================================

/// Folds any number of sets into their union.
///
/// No sets yields the empty set. The result never shares storage with the
/// inputs.
///
/// # Examples
///
/// ```rust
/// use sets::set;
/// use sets::set::Set;
/// use sets::set::algebra::union;
///
/// let left = set!["a", "b", "c", "d"];
/// let right = set!["b", "d", "e", "f", "g"];
/// let nothing: Set<&str> = union([]);
///
/// assert!(nothing.is_empty());
/// assert_eq!(union([&nothing, &left, &right]).to_string(), "a,b,c,d,e,f,g");
/// ```
#[must_use]
pub fn union<'a, T, S, I>(sets: I) -> Set<T, S>
where
    I: IntoIterator<Item = &'a Set<T, S>>,
    T: Clone + Hash + Eq + 'a,
    S: BuildHasher + Clone + Default + 'a,
{
    sets.into_iter().fold(Set::default(), Set::plus)
}

/// Folds any number of sets into their intersection.
///
/// - No sets yields the empty set.
/// - One set yields a copy of it.
/// - Once the running intersection is empty, no further set is pulled from
///   `sets`.
///
/// # Examples
///
/// ```rust
/// use sets::set;
/// use sets::set::Set;
/// use sets::set::algebra::intersection;
///
/// let first = set!["a", "b", "c"];
/// let second = set!["d", "e", "f"];
/// let nothing: Set<&str> = intersection([]);
///
/// assert!(nothing.is_empty());
/// assert_eq!(intersection([&first]), first);
/// assert_eq!(intersection([&first, &second, &first]).to_string(), "");
/// ```
#[must_use]
pub fn intersection<'a, T, S, I>(sets: I) -> Set<T, S>
where
    I: IntoIterator<Item = &'a Set<T, S>>,
    T: Clone + Hash + Eq + 'a,
    S: BuildHasher + Clone + Default + 'a,
{
    let mut sets = sets.into_iter();
    let Some(first) = sets.next() else {
        return Set::default();
    };

    let mut result = first.clone();
    while !result.is_empty() {
        let Some(set) = sets.next() else {
            break;
        };
        result.intersection_with(set);
    }
    result
}

// =============================================================================
// Ordered Views
// =============================================================================

/// Returns the elements of `set` in ascending order.
///
/// # Examples
///
/// ```rust
/// use sets::set::Set;
/// use sets::set::algebra::sort;
///
/// let set = Set::from_slice(&["z", "a", "c", "b"]);
/// assert_eq!(sort(&set), vec!["a", "b", "c", "z"]);
/// ```
#[must_use]
pub fn sort<T, S>(set: &Set<T, S>) -> Vec<T>
where
    T: Ord + Clone,
{
    let mut elements: Vec<T> = set.iter().cloned().collect();
    elements.sort_unstable();
    elements
}

/// Returns every ordered `size`-tuple of distinct elements of `set`.
///
/// Tuples are listed in lexicographic order of the sorted elements. A
/// `size` of zero, or larger than the set, yields no tuples.
///
/// # Complexity
///
/// O(n! / (n - size)!) tuples of `size` elements each
///
/// # Examples
///
/// ```rust
/// use sets::set;
/// use sets::set::algebra::tuplets;
///
/// let set = set!['c', 'a', 'b'];
/// assert_eq!(
///     tuplets(&set, 2),
///     vec![
///         vec!['a', 'b'],
///         vec!['a', 'c'],
///         vec!['b', 'a'],
///         vec!['b', 'c'],
///         vec!['c', 'a'],
///         vec!['c', 'b'],
///     ]
/// );
/// assert!(tuplets(&set, 4).is_empty());
/// ```
#[must_use]
pub fn tuplets<T, S>(set: &Set<T, S>, size: usize) -> Vec<Vec<T>>
where
    T: Ord + Clone,
{
    let mut elements: Vec<&T> = set.iter().collect();
    if size == 0 || size > elements.len() {
        return Vec::new();
    }
    elements.sort_unstable();

    let mut tuples = Vec::new();
    let mut used = vec![false; elements.len()];
    let mut path = TupletPath::new();
    collect_tuplets(&elements, size, &mut used, &mut path, &mut tuples);
    tuples
}

/// Depth-first step of [`tuplets`]: extends `path` with every unused index.
fn collect_tuplets<T: Clone>(
    elements: &[&T],
    size: usize,
    used: &mut [bool],
    path: &mut TupletPath,
    tuples: &mut Vec<Vec<T>>,
) {
    if path.len() == size {
        tuples.push(path.iter().map(|&index| elements[index].clone()).collect());
        return;
    }

    for index in 0..elements.len() {
        if used[index] {
            continue;
        }
        used[index] = true;
        path.push(index);
        collect_tuplets(elements, size, used, path, tuples);
        path.pop();
        used[index] = false;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn letters(text: &str) -> Set<char> {
        text.chars().collect()
    }

    // =========================================================================
    // Pure Algebra Tests
    // =========================================================================

    #[rstest]
    #[case("abcd", "bdefg", "a,c")]
    #[case("bdefg", "abcd", "e,f,g")]
    #[case("abc", "xyz", "a,b,c")]
    #[case("", "abc", "")]
    #[case("abc", "", "a,b,c")]
    fn test_minus(#[case] left: &str, #[case] right: &str, #[case] expected: &str) {
        let left = letters(left);
        let right = letters(right);
        assert_eq!(minus(&left, &right).to_string(), expected);
    }

    #[rstest]
    fn test_plus_leaves_operands_untouched() {
        let left = letters("abcd");
        let right = letters("bdefg");
        let result = plus(&left, &right);

        assert_eq!(result.to_string(), "a,b,c,d,e,f,g");
        assert_eq!(left.to_string(), "a,b,c,d");
        assert_eq!(right.to_string(), "b,d,e,f,g");
    }

    // =========================================================================
    // Dual-Mutation Tests
    // =========================================================================

    #[rstest]
    #[case("abcd", "bdefg", "a,c", "e,f,g")]
    #[case("bdefg", "abcd", "e,f,g", "a,c")]
    #[case("abc", "abc", "", "")]
    #[case("", "abc", "", "a,b,c")]
    #[case("abc", "xyz", "a,b,c", "x,y,z")]
    fn test_remove_common(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected_left: &str,
        #[case] expected_right: &str,
    ) {
        let mut left = letters(left);
        let mut right = letters(right);

        remove_common(&mut left, &mut right);

        assert_eq!(left.to_string(), expected_left);
        assert_eq!(right.to_string(), expected_right);
        assert!(left.is_disjoint(&right));
    }

    #[rstest]
    #[case("abcd", "bdefg", "e,f,g", "a,c")]
    #[case("bdefg", "abcd", "a,c", "e,f,g")]
    #[case("abc", "abc", "", "")]
    #[case("", "abc", "a,b,c", "")]
    fn test_xor_crosses_exclusive_parts(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected_left: &str,
        #[case] expected_right: &str,
    ) {
        let mut left = letters(left);
        let mut right = letters(right);

        xor(&mut left, &mut right);

        assert_eq!(left.to_string(), expected_left);
        assert_eq!(right.to_string(), expected_right);
    }

    // =========================================================================
    // N-ary Tests
    // =========================================================================

    #[rstest]
    fn test_union_of_nothing_is_empty() {
        let result: Set<char> = union([]);
        assert!(result.is_empty());
    }

    #[rstest]
    fn test_union_is_independent_of_inputs() {
        let mut left = letters("ab");
        let right = letters("bc");
        let mut result = union([&left, &right]);

        left.insert('z');
        result.remove(&'a');

        assert_eq!(left.to_string(), "a,b,z");
        assert_eq!(result.to_string(), "b,c");
    }

    #[rstest]
    fn test_intersection_of_nothing_is_empty() {
        let result: Set<char> = intersection([]);
        assert_eq!(result.len(), 0);
    }

    #[rstest]
    fn test_intersection_of_one_is_copy() {
        let only = letters("abc");
        let mut result = intersection([&only]);
        assert_eq!(result, only);

        result.clear();
        assert_eq!(only.len(), 3);
    }

    #[rstest]
    fn test_intersection_stops_at_empty() {
        let first = letters("abc");
        let second = letters("def");
        let pulled = Cell::new(0);

        let result = intersection(
            [&first, &second, &first, &first]
                .into_iter()
                .inspect(|_| pulled.set(pulled.get() + 1)),
        );

        assert_eq!(result.to_string(), "");
        assert_eq!(pulled.get(), 2);
    }

    #[rstest]
    fn test_intersection_with_empty_first_reads_nothing_else() {
        let empty = Set::new();
        let other = letters("abc");
        let pulled = Cell::new(0);

        let result = intersection(
            [&empty, &other]
                .into_iter()
                .inspect(|_| pulled.set(pulled.get() + 1)),
        );

        assert!(result.is_empty());
        assert_eq!(pulled.get(), 1);
    }

    #[rstest]
    fn test_intersection_of_three() {
        let result = intersection([&letters("abcd"), &letters("bcde"), &letters("cdef")]);
        assert_eq!(result.to_string(), "c,d");
    }

    // =========================================================================
    // Ordered View Tests
    // =========================================================================

    #[rstest]
    fn test_sort() {
        assert_eq!(sort(&letters("zacb")), vec!['a', 'b', 'c', 'z']);
        assert!(sort(&Set::<char>::new()).is_empty());
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 4)]
    #[case(2, 12)]
    #[case(3, 24)]
    #[case(4, 24)]
    #[case(5, 0)]
    fn test_tuplets_count(#[case] size: usize, #[case] expected: usize) {
        assert_eq!(tuplets(&letters("abcd"), size).len(), expected);
    }

    #[rstest]
    fn test_tuplets_singletons_are_sorted() {
        assert_eq!(
            tuplets(&letters("cab"), 1),
            vec![vec!['a'], vec!['b'], vec!['c']]
        );
    }

    #[rstest]
    fn test_tuplets_have_distinct_elements() {
        for tuple in tuplets(&letters("abcde"), 3) {
            let distinct: Set<char> = tuple.iter().copied().collect();
            assert_eq!(distinct.len(), 3);
        }
    }
}
