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

//! Set operations as free functions: `∩ ∪ ∖ ∆` and the cartesian product
//! `×`.
//!
//! Each operation leaves its operands untouched and returns a new set.
//!
//! ```rust
//! use mathsym_sets::operations::{difference, intersection, symmetric_difference, union};
//! use std::collections::BTreeSet;
//!
//! let employees = BTreeSet::from(["Alicia", "Bethany", "Chris", "Diana", "Eric"]);
//! let neighbors = BTreeSet::from(["Bethany", "Eric", "Forlani", "Greta"]);
//!
//! assert_eq!(intersection(&employees, &neighbors), BTreeSet::from(["Bethany", "Eric"]));
//! assert_eq!(difference(&employees, &neighbors), BTreeSet::from(["Alicia", "Chris", "Diana"]));
//! assert_eq!(union(&employees, &neighbors).len(), 7);
//! assert_eq!(symmetric_difference(&employees, &neighbors).len(), 5);
//! ```

use crate::algebra::SetAlgebra;

/// `lhs ∩ rhs`.
#[inline]
pub fn intersection<S>(lhs: &S, rhs: &S) -> S
where
    S: SetAlgebra,
{
    lhs.intersected_with(rhs)
}

/// `lhs ∪ rhs`.
#[inline]
pub fn union<S>(lhs: &S, rhs: &S) -> S
where
    S: SetAlgebra,
{
    lhs.united_with(rhs)
}

/// `lhs ∖ rhs`, the members of `lhs` that are not members of `rhs`.
#[inline]
pub fn difference<S>(lhs: &S, rhs: &S) -> S
where
    S: SetAlgebra,
{
    lhs.subtracting(rhs)
}

/// `lhs ∆ rhs`, the members of exactly one operand.
#[inline]
pub fn symmetric_difference<S>(lhs: &S, rhs: &S) -> S
where
    S: SetAlgebra,
{
    lhs.symmetrically_subtracting(rhs)
}

/// `lhs × rhs`: every ordered pair `(a, b)` with `a ∈ lhs` and `b ∈ rhs`,
/// collected into any container of pairs.
///
/// The operands may be any collections iterable by reference, so the
/// product of a `HashSet` and a `BTreeSet` is as valid as that of two
/// slices. The result has `|lhs| × |rhs|` members when collected into a set.
///
/// # Examples
///
/// ```rust
/// use mathsym_sets::operations::cartesian_product;
/// use std::collections::BTreeSet;
///
/// let numbers = BTreeSet::from([1, 2]);
/// let kinds = BTreeSet::from(["Array", "Set"]);
///
/// let pairs: Vec<(i32, &str)> = cartesian_product(&numbers, &kinds);
/// assert_eq!(pairs, vec![(1, "Array"), (1, "Set"), (2, "Array"), (2, "Set")]);
/// ```
pub fn cartesian_product<'a, 'b, A, B, L, R, C>(lhs: &'a L, rhs: &'b R) -> C
where
    &'a L: IntoIterator<Item = &'a A>,
    &'b R: IntoIterator<Item = &'b B>,
    A: Clone + 'a,
    B: Clone + 'b,
    L: ?Sized,
    R: ?Sized,
    C: FromIterator<(A, B)>,
{
    lhs.into_iter()
        .flat_map(move |a| rhs.into_iter().map(move |b| (a.clone(), b.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;
    use std::collections::BTreeSet;

    fn names<const N: usize>(values: [&'static str; N]) -> FxHashSet<&'static str> {
        values.into_iter().collect()
    }

    #[test]
    fn test_intersection() {
        let employees = names(["Alicia", "Bethany", "Chris", "Diana", "Eric"]);
        let neighbors = names(["Bethany", "Eric", "Forlani", "Greta"]);
        assert_eq!(
            intersection(&employees, &neighbors),
            names(["Bethany", "Eric"])
        );
    }

    #[test]
    fn test_union_removes_duplicates() {
        let initial: FxHashSet<i32> = (0..5).collect();
        let extra: FxHashSet<i32> = [2, 3, 6, 6, 7, 7].into_iter().collect();
        let expanded = union(&initial, &extra);
        assert_eq!(expanded, (0..8).filter(|&x| x != 5).collect::<FxHashSet<i32>>());
    }

    #[test]
    fn test_difference() {
        let employees = names(["Alicia", "Bethany", "Chris", "Diana", "Eric"]);
        let neighbors = names(["Bethany", "Eric", "Forlani", "Greta"]);
        assert_eq!(
            difference(&employees, &neighbors),
            names(["Alicia", "Chris", "Diana"])
        );
    }

    #[test]
    fn test_symmetric_difference() {
        let employees = names(["Alicia", "Bethany", "Diana", "Eric"]);
        let neighbors = names(["Bethany", "Eric", "Forlani"]);
        assert_eq!(
            symmetric_difference(&employees, &neighbors),
            names(["Alicia", "Diana", "Forlani"])
        );
    }

    #[test]
    fn test_symmetric_difference_is_union_of_differences() {
        let a: BTreeSet<u8> = (0..20).filter(|x| x % 2 == 0).collect();
        let b: BTreeSet<u8> = (0..20).filter(|x| x % 3 == 0).collect();
        let expected = union(&difference(&a, &b), &difference(&b, &a));
        assert_eq!(symmetric_difference(&a, &b), expected);
    }

    #[test]
    fn test_operands_are_unchanged() {
        let a = BTreeSet::from([1, 2, 3]);
        let b = BTreeSet::from([3, 4]);
        let _ = union(&a, &b);
        let _ = difference(&a, &b);
        assert_eq!(a, BTreeSet::from([1, 2, 3]));
        assert_eq!(b, BTreeSet::from([3, 4]));
    }

    #[test]
    fn test_cartesian_product_of_sets() {
        let numbers: FxHashSet<i32> = [1, 2, 3, 4].into_iter().collect();
        let kinds = names(["Set", "Array", "Dictionary"]);
        let pairs: FxHashSet<(i32, &str)> = cartesian_product(&numbers, &kinds);

        assert_eq!(pairs.len(), 12);
        for n in &numbers {
            for k in &kinds {
                assert!(pairs.contains(&(*n, *k)));
            }
        }
    }

    #[test]
    fn test_cartesian_product_with_itself_and_empty() {
        let numbers = BTreeSet::from([1, 2]);
        let square: BTreeSet<(i32, i32)> = cartesian_product(&numbers, &numbers);
        assert_eq!(square, BTreeSet::from([(1, 1), (1, 2), (2, 1), (2, 2)]));

        let empty = BTreeSet::<i32>::new();
        let none: Vec<(i32, i32)> = cartesian_product(&numbers, &empty);
        assert!(none.is_empty());
    }

    #[test]
    fn test_cartesian_product_of_slices() {
        let pairs: Vec<(char, bool)> = cartesian_product(&['x', 'y'][..], &[true, false][..]);
        assert_eq!(
            pairs,
            vec![('x', true), ('x', false), ('y', true), ('y', false)]
        );
    }
}
