// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The set-algebra abstraction behind the set notation.
//!
//! `SetAlgebra` captures exactly what the notation needs from a set type:
//! membership, inclusion, size and the four value-returning operations. It
//! is implemented for `HashSet` with any default-constructible hasher (so
//! `FxHashSet` works unchanged) and for `BTreeSet`.

use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

/// A finite set with value-returning set operations.
///
/// # Invariants
///
/// - `a.is_subset_of(&b) && b.is_subset_of(&a)` implies `a == b`.
/// - `Self::default()` is the empty set.
pub trait SetAlgebra: Sized + PartialEq + Default {
    /// The type of the members of the set.
    type Element;

    /// Returns `true` if `element` is a member of the set.
    fn contains_element(&self, element: &Self::Element) -> bool;

    /// Returns `true` if every member of `self` is a member of `other`.
    fn is_subset_of(&self, other: &Self) -> bool;

    /// Returns `true` if every member of `other` is a member of `self`.
    #[inline]
    fn is_superset_of(&self, other: &Self) -> bool {
        other.is_subset_of(self)
    }

    /// The number of members.
    fn cardinality(&self) -> usize;

    /// The members common to both sets.
    fn intersected_with(&self, other: &Self) -> Self;

    /// The members of either set.
    fn united_with(&self, other: &Self) -> Self;

    /// The members of `self` that are not members of `other`.
    fn subtracting(&self, other: &Self) -> Self;

    /// The members of exactly one of the two sets.
    fn symmetrically_subtracting(&self, other: &Self) -> Self;

    /// The empty set, `Ø`.
    #[inline]
    fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if the set has no members.
    #[inline]
    fn is_empty_set(&self) -> bool {
        self.cardinality() == 0
    }
}

impl<T, S> SetAlgebra for HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    type Element = T;

    #[inline]
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }

    #[inline]
    fn is_subset_of(&self, other: &Self) -> bool {
        self.is_subset(other)
    }

    #[inline]
    fn cardinality(&self) -> usize {
        self.len()
    }

    #[inline]
    fn intersected_with(&self, other: &Self) -> Self {
        self.intersection(other).cloned().collect()
    }

    #[inline]
    fn united_with(&self, other: &Self) -> Self {
        self.union(other).cloned().collect()
    }

    #[inline]
    fn subtracting(&self, other: &Self) -> Self {
        self.difference(other).cloned().collect()
    }

    #[inline]
    fn symmetrically_subtracting(&self, other: &Self) -> Self {
        self.symmetric_difference(other).cloned().collect()
    }
}

impl<T> SetAlgebra for BTreeSet<T>
where
    T: Ord + Clone,
{
    type Element = T;

    #[inline]
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }

    #[inline]
    fn is_subset_of(&self, other: &Self) -> bool {
        self.is_subset(other)
    }

    #[inline]
    fn cardinality(&self) -> usize {
        self.len()
    }

    #[inline]
    fn intersected_with(&self, other: &Self) -> Self {
        self.intersection(other).cloned().collect()
    }

    #[inline]
    fn united_with(&self, other: &Self) -> Self {
        self.union(other).cloned().collect()
    }

    #[inline]
    fn subtracting(&self, other: &Self) -> Self {
        self.difference(other).cloned().collect()
    }

    #[inline]
    fn symmetrically_subtracting(&self, other: &Self) -> Self {
        self.symmetric_difference(other).cloned().collect()
    }
}

/// `Ø`: the empty set of the requested set type.
///
/// # Examples
///
/// ```rust
/// use mathsym_sets::algebra::{empty_set, SetAlgebra};
/// use std::collections::{BTreeSet, HashSet};
///
/// let none: HashSet<i32> = empty_set();
/// assert_eq!(none.cardinality(), 0);
/// assert!(empty_set::<BTreeSet<char>>().is_empty_set());
/// ```
#[inline]
pub fn empty_set<S>() -> S
where
    S: SetAlgebra,
{
    S::empty()
}
