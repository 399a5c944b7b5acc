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

//! Subset notation: `⊂ ⊄ ⊆ ⊈ ⊊`.
//!
//! A set is a strict subset of another when every member is shared and the
//! other set has at least one member more. A set is therefore never a
//! strict subset of itself, but always a subset of itself.
//!
//! ```rust
//! use mathsym_sets::algebra::SetAlgebra;
//! use mathsym_sets::subsets::Subsets;
//! use std::collections::BTreeSet;
//!
//! let small: BTreeSet<i32> = [1, 2, 3].into();
//! let large: BTreeSet<i32> = [1, 2, 3, 4, 5].into();
//!
//! assert!(small.is_strict_subset_of(&large));
//! assert!(!large.is_strict_subset_of(&large));
//! assert!(large.is_subset_of(&large));
//! ```

use crate::algebra::SetAlgebra;

/// Subset predicates for every [`SetAlgebra`] type.
pub trait Subsets: SetAlgebra {
    /// `self ⊂ other`.
    #[inline]
    fn is_strict_subset_of(&self, other: &Self) -> bool {
        self.cardinality() < other.cardinality() && self.is_subset_of(other)
    }

    /// `self ⊄ other`.
    #[inline]
    fn is_not_strict_subset_of(&self, other: &Self) -> bool {
        !self.is_strict_subset_of(other)
    }

    /// `self ⊈ other`.
    #[inline]
    fn is_not_subset_of(&self, other: &Self) -> bool {
        !self.is_subset_of(other)
    }

    /// `self ⊊ other`: a subset that is not equal to `other`.
    #[inline]
    fn is_proper_subset_of(&self, other: &Self) -> bool {
        self.is_subset_of(other) && self != other
    }
}

impl<S> Subsets for S where S: SetAlgebra {}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn set<const N: usize>(values: [i32; N]) -> FxHashSet<i32> {
        values.into_iter().collect()
    }

    #[test]
    fn test_strict_subset() {
        let all = set([1, 2, 3, 4, 5]);
        assert!(set([1, 2, 3]).is_strict_subset_of(&all));
        assert!(set([1, 3, 2]).is_strict_subset_of(&all));
        assert!(!set([1, 8, 2]).is_strict_subset_of(&all));
        assert!(!all.is_strict_subset_of(&all));
    }

    #[test]
    fn test_not_strict_subset() {
        let all = set([1, 2, 3, 4, 5]);
        assert!(!set([1, 2, 3]).is_not_strict_subset_of(&all));
        assert!(set([1, 8, 2]).is_not_strict_subset_of(&all));
        assert!(all.is_not_strict_subset_of(&all));
    }

    #[test]
    fn test_subset_includes_equality() {
        let all = set([1, 2, 3, 4, 5]);
        assert!(set([1, 2, 3]).is_subset_of(&all));
        assert!(all.is_subset_of(&all));
        assert!(!set([1, 8, 2]).is_subset_of(&all));
        assert!(set([1, 8, 2]).is_not_subset_of(&all));
        assert!(!all.is_not_subset_of(&all));
    }

    #[test]
    fn test_proper_subset() {
        let all = set([1, 2, 3, 4, 5]);
        assert!(set([1, 2, 3]).is_proper_subset_of(&all));
        assert!(!set([1, 8, 2]).is_proper_subset_of(&all));
        assert!(!all.is_proper_subset_of(&all));
    }

    #[test]
    fn test_proper_and_strict_agree() {
        let candidates = [set([]), set([1]), set([1, 2]), set([2, 9]), set([1, 2, 3])];
        for a in &candidates {
            for b in &candidates {
                assert_eq!(a.is_strict_subset_of(b), a.is_proper_subset_of(b));
            }
        }
    }

    #[test]
    fn test_empty_set_is_subset_of_everything() {
        let empty = FxHashSet::<i32>::empty();
        assert!(empty.is_subset_of(&set([1])));
        assert!(empty.is_strict_subset_of(&set([1])));
        assert!(empty.is_subset_of(&empty));
        assert!(!empty.is_strict_subset_of(&empty));
    }
}
