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

//! # Mathsym
//!
//! Mathematical notation as named Rust operations. Each symbol of the
//! notation (`× ÷ √ ≤ ≈ ¬ ∧ ∑ ∘ ∈ ⊂ ∩` and many more) is a thin redirect to
//! the built-in operation it stands for, so formulas can be written in terms
//! of the mathematics they express without any runtime cost.
//!
//! Rust has no user-defined operator syntax, so every symbol is a method of
//! an extension trait or a free function. Nesting the calls expresses the
//! grouping that precedence would otherwise provide.
//!
//! ## Crates
//!
//! - [`mathsym_core`]: numbers, comparisons, logic, reductions, functions.
//! - [`mathsym_sets`]: set membership, inclusion and operations.
//!
//! The [`prelude`] brings every notation trait and function into scope.
//!
//! ## Example
//!
//! ```rust
//! use mathsym::prelude::*;
//! use std::collections::BTreeSet;
//!
//! // -b ± √(b² - 4ac) over 2a, for x² - 3x + 2.
//! let (a, b, c) = (1.0f64, -3.0f64, 2.0f64);
//! let discriminant = b.raised_to(2.0) - 4.0f64.times(a).times(c);
//! let (r1, r2) = (-b).plus_minus_by(discriminant.square_root());
//! assert_eq!((r1.divided_by(2.0 * a), r2.divided_by(2.0 * a)), (2.0, 1.0));
//!
//! // ∑_{k=1}^{4} k² ≤ 30, and it's exactly 30.
//! let s = bounded_summation(1, 4, |k| k * k);
//! assert!(s.is_leq(&30) && s.is_not_equal(&31));
//!
//! // {2, 4} ⊂ {1, 2, 3, 4}
//! let evens: BTreeSet<i32> = [2, 4].into();
//! let digits: BTreeSet<i32> = (1..=4).collect();
//! assert!(evens.is_strict_subset_of(&digits));
//! assert!(implies(3i32.is_element_of(&evens), || false));
//! ```

pub use mathsym_core::{cmp, func, logic, math, num};
pub use mathsym_sets as sets;

/// Every notation trait and function of the workspace.
pub mod prelude {
    pub use mathsym_core::cmp::equality::{ApproxEq, NotEqual, Tolerance};
    pub use mathsym_core::cmp::identity::{Identity, identical, not_identical};
    pub use mathsym_core::cmp::ordering::Comparison;
    pub use mathsym_core::func::composition::{Compose, compose};
    pub use mathsym_core::logic::connectives::{Logic, and, nand, nor, not, or, xnor, xor};
    pub use mathsym_core::logic::implication::{converse, iff, implies};
    pub use mathsym_core::math::range::ClosedRange;
    pub use mathsym_core::math::reduction::{bounded_product, bounded_summation, product, summation};
    pub use mathsym_core::num::constants::MathConstants;
    pub use mathsym_core::num::ops::arithmetic::{DividedBy, Percent, Times};
    pub use mathsym_core::num::ops::plus_minus::PlusMinus;
    pub use mathsym_core::num::ops::powers::Power;
    pub use mathsym_core::num::ops::roots::{Root, nth_root};
    pub use mathsym_sets::algebra::{SetAlgebra, empty_set};
    pub use mathsym_sets::membership::{ElementOf, SetMembership};
    pub use mathsym_sets::operations::{
        cartesian_product, difference, intersection, symmetric_difference, union,
    };
    pub use mathsym_sets::subsets::Subsets;
    pub use mathsym_sets::supersets::Supersets;
}
