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

//! Superset notation: `⊃ ⊅ ⊇ ⊉ ⊋`, the mirror images of the subset
//! predicates.

use crate::algebra::SetAlgebra;
use crate::subsets::Subsets;

/// Superset predicates for every [`SetAlgebra`] type.
pub trait Supersets: SetAlgebra {
    /// `self ⊃ other`.
    #[inline]
    fn is_strict_superset_of(&self, other: &Self) -> bool {
        other.is_strict_subset_of(self)
    }

    /// `self ⊅ other`.
    #[inline]
    fn is_not_strict_superset_of(&self, other: &Self) -> bool {
        !self.is_strict_superset_of(other)
    }

    /// `self ⊉ other`.
    #[inline]
    fn is_not_superset_of(&self, other: &Self) -> bool {
        !self.is_superset_of(other)
    }

    /// `self ⊋ other`: a superset that is not equal to `other`.
    #[inline]
    fn is_proper_superset_of(&self, other: &Self) -> bool {
        other.is_proper_subset_of(self)
    }
}

impl<S> Supersets for S where S: SetAlgebra {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn set<const N: usize>(values: [i32; N]) -> BTreeSet<i32> {
        BTreeSet::from(values)
    }

    #[test]
    fn test_strict_superset() {
        let all = set([1, 2, 3, 4, 5]);
        assert!(all.is_strict_superset_of(&set([1, 2, 3])));
        assert!(all.is_strict_superset_of(&set([1, 3, 2])));
        assert!(!all.is_strict_superset_of(&set([1, 8, 2])));
        assert!(!all.is_strict_superset_of(&all));
        assert!(all.is_not_strict_superset_of(&all));
    }

    #[test]
    fn test_superset_includes_equality() {
        let all = set([1, 2, 3, 4, 5]);
        assert!(all.is_superset_of(&set([1, 2, 3])));
        assert!(all.is_superset_of(&all));
        assert!(all.is_not_superset_of(&set([1, 8, 2])));
        assert!(!all.is_not_superset_of(&all));
    }

    #[test]
    fn test_proper_superset() {
        let all = set([1, 2, 3, 4, 5]);
        assert!(all.is_proper_superset_of(&set([1, 2, 3])));
        assert!(!all.is_proper_superset_of(&set([1, 8, 2])));
        assert!(!all.is_proper_superset_of(&all));
    }

    #[test]
    fn test_mirrors_subset_predicates() {
        let sets = [set([]), set([1]), set([1, 2]), set([2, 3]), set([1, 2, 3])];
        for a in &sets {
            for b in &sets {
                assert_eq!(a.is_strict_superset_of(b), b.is_strict_subset_of(a));
                assert_eq!(a.is_superset_of(b), b.is_subset_of(a));
                assert_eq!(a.is_not_superset_of(b), b.is_not_subset_of(a));
                assert_eq!(a.is_proper_superset_of(b), b.is_proper_subset_of(a));
            }
        }
    }
}
