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

//! # Ordering Predicates
//!
//! The comparison row of the notation (`≤ ≥ ⋜ ⋝ ≨ ≩ ≮ ≯ ≰ ≱ ≶ ≷ ≸ ≹ ⋚ ⋛ ≬`),
//! each derived from a single three-way comparison, `PartialOrd::partial_cmp`.
//!
//! All predicates are non-associative and sit on the comparison precedence
//! tier. For incomparable operands (such as NaN)
//! `partial_cmp` yields `None`: every predicate that asserts a relation is
//! then `false`, and every predicate that denies one is `true`, which is what
//! the primitive `!(x < y)` style expressions produce.
//!
//! ```rust
//! use mathsym_core::cmp::ordering::Comparison;
//!
//! assert!(42i32.is_leq(&69));
//! assert!(69i32.is_not_lt(&42));
//! assert!(42i32.is_lt_eq_or_gt(&69));
//! assert!(5i32.is_between(&1, &10));
//! ```

use std::cmp::Ordering::{self, Equal, Greater, Less};

/// Ordering notation for every `PartialOrd` type.
pub trait Comparison: PartialOrd {
    /// The underlying three-way comparison every predicate is derived from.
    #[inline(always)]
    fn three_way(&self, other: &Self) -> Option<Ordering> {
        self.partial_cmp(other)
    }

    /// `self ≤ other`.
    #[inline(always)]
    fn is_leq(&self, other: &Self) -> bool {
        matches!(self.three_way(other), Some(Less | Equal))
    }

    /// `self ≥ other`.
    #[inline(always)]
    fn is_geq(&self, other: &Self) -> bool {
        matches!(self.three_way(other), Some(Greater | Equal))
    }

    /// `self ⋜ other`, equal to or less than. Same truth table as `≤`.
    #[inline(always)]
    fn is_eq_or_lt(&self, other: &Self) -> bool {
        self.is_leq(other)
    }

    /// `self ⋝ other`, equal to or greater than. Same truth table as `≥`.
    #[inline(always)]
    fn is_eq_or_gt(&self, other: &Self) -> bool {
        self.is_geq(other)
    }

    /// `self ≨ other`, less than but not equal to.
    #[inline(always)]
    fn is_lt_but_neq(&self, other: &Self) -> bool {
        matches!(self.three_way(other), Some(Less))
    }

    /// `self ≩ other`, greater than but not equal to.
    #[inline(always)]
    fn is_gt_but_neq(&self, other: &Self) -> bool {
        matches!(self.three_way(other), Some(Greater))
    }

    /// `self ≮ other`, not less than.
    #[inline(always)]
    fn is_not_lt(&self, other: &Self) -> bool {
        !matches!(self.three_way(other), Some(Less))
    }

    /// `self ≯ other`, not greater than.
    #[inline(always)]
    fn is_not_gt(&self, other: &Self) -> bool {
        !matches!(self.three_way(other), Some(Greater))
    }

    /// `self ≰ other`, neither less than nor equal to.
    #[inline(always)]
    fn is_neither_lt_nor_eq(&self, other: &Self) -> bool {
        !matches!(self.three_way(other), Some(Less | Equal))
    }

    /// `self ≱ other`, neither greater than nor equal to.
    #[inline(always)]
    fn is_neither_gt_nor_eq(&self, other: &Self) -> bool {
        !matches!(self.three_way(other), Some(Greater | Equal))
    }

    /// `self ≶ other`, less than or greater than.
    #[inline(always)]
    fn is_lt_or_gt(&self, other: &Self) -> bool {
        matches!(self.three_way(other), Some(Less | Greater))
    }

    /// `self ≷ other`, greater than or less than.
    #[inline(always)]
    fn is_gt_or_lt(&self, other: &Self) -> bool {
        self.is_lt_or_gt(other)
    }

    /// `self ≸ other`, neither less than nor greater than.
    #[inline(always)]
    fn is_neither_lt_nor_gt(&self, other: &Self) -> bool {
        !self.is_lt_or_gt(other)
    }

    /// `self ≹ other`, neither greater than nor less than.
    #[inline(always)]
    fn is_neither_gt_nor_lt(&self, other: &Self) -> bool {
        !self.is_lt_or_gt(other)
    }

    /// `self ⋚ other`, less than, equal to, or greater than.
    ///
    /// Always `true` for a total order.
    #[inline(always)]
    fn is_lt_eq_or_gt(&self, other: &Self) -> bool {
        self.three_way(other).is_some()
    }

    /// `self ⋛ other`, greater than, equal to, or less than.
    #[inline(always)]
    fn is_gt_eq_or_lt(&self, other: &Self) -> bool {
        self.is_lt_eq_or_gt(other)
    }

    /// `self ≬ [lower, upper]`, between the bounds (inclusive on both ends).
    #[inline(always)]
    fn is_between(&self, lower: &Self, upper: &Self) -> bool {
        lower.is_leq(self) && self.is_leq(upper)
    }
}

impl<T> Comparison for T where T: PartialOrd + ?Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    const X: i32 = 42;
    const Y: i32 = 69;

    #[test]
    fn test_leq_and_geq() {
        assert!(X.is_leq(&X));
        assert!(X.is_leq(&Y));
        assert!(!Y.is_leq(&X));
        assert!(Y.is_leq(&Y));

        assert!(X.is_geq(&X));
        assert!(!X.is_geq(&Y));
        assert!(Y.is_geq(&X));
        assert!(Y.is_geq(&Y));
    }

    #[test]
    fn test_strict_and_negated_predicates() {
        assert!(X.is_lt_but_neq(&Y));
        assert!(!X.is_lt_but_neq(&X));
        assert!(Y.is_gt_but_neq(&X));
        assert!(X.is_not_lt(&X));
        assert!(!X.is_not_lt(&Y));
        assert!(X.is_not_gt(&Y));
        assert!(Y.is_neither_lt_nor_eq(&X));
        assert!(!X.is_neither_lt_nor_eq(&X));
        assert!(X.is_neither_gt_nor_eq(&Y));
        assert!(!Y.is_neither_gt_nor_eq(&Y));
    }

    #[test]
    fn test_either_and_neither_predicates() {
        assert!(X.is_lt_or_gt(&Y));
        assert!(Y.is_gt_or_lt(&X));
        assert!(!X.is_lt_or_gt(&X));
        assert!(X.is_neither_lt_nor_gt(&X));
        assert!(X.is_neither_gt_nor_lt(&X));
        assert!(!X.is_neither_lt_nor_gt(&Y));
    }

    #[test]
    fn test_between_is_inclusive() {
        assert!(5i32.is_between(&1, &10));
        assert!(1i32.is_between(&1, &10));
        assert!(10i32.is_between(&1, &10));
        assert!(!11i32.is_between(&1, &10));
        assert!(!5i32.is_between(&10, &1));
    }

    #[test]
    fn test_nan_is_incomparable() {
        let nan = f64::NAN;
        assert!(!nan.is_leq(&1.0));
        assert!(!nan.is_geq(&1.0));
        assert!(!nan.is_lt_eq_or_gt(&nan));
        assert!(!nan.is_gt_eq_or_lt(&1.0));
        assert!(nan.is_not_lt(&1.0));
        assert!(nan.is_not_gt(&1.0));
        assert!(nan.is_neither_lt_nor_gt(&1.0));
        assert!(!nan.is_between(&0.0, &1.0));
    }

    #[test]
    fn test_works_for_unsized_and_non_numeric_types() {
        assert!("apple".is_leq("banana"));
        assert!([1i32, 2, 3][..].is_lt_but_neq(&[1, 2, 4][..]));
    }

    #[test]
    fn test_total_order_properties_random() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let x: i64 = rng.random_range(-100..100);
            let y: i64 = rng.random_range(-100..100);

            assert!(x.is_lt_eq_or_gt(&y));
            assert!(x.is_gt_eq_or_lt(&y));
            assert_eq!(x.is_leq(&y), x.is_not_gt(&y));
            assert_eq!(x.is_geq(&y), x.is_not_lt(&y));
            assert_eq!(x.is_eq_or_lt(&y), x <= y);
            assert_eq!(x.is_eq_or_gt(&y), x >= y);
            assert_eq!(x.is_lt_or_gt(&y), x != y);
            assert_eq!(x.is_neither_lt_nor_eq(&y), x > y);
            assert_eq!(x.is_neither_gt_nor_eq(&y), x < y);
        }
    }
}
