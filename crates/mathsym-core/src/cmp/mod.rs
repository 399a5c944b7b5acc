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

//! # Comparison Notation
//!
//! Ordering, equality and identity predicates. Every predicate is a thin,
//! stateless redirect to `PartialOrd`, `PartialEq`, `num_traits::Float`, or a
//! pointer comparison.
//!
//! ## Submodules
//!
//! - `ordering`: The `Comparison` trait (`≤ ≥ ⋜ ⋝ ≨ ≩ ≮ ≯ ≰ ≱ ≶ ≷ ≸ ≹ ⋚ ⋛ ≬`),
//!   derived from a single three-way comparison.
//! - `equality`: `NotEqual` (`≠`) and `ApproxEq` (`≈ ≉ ⩰`) with a validated,
//!   configurable `Tolerance`.
//! - `identity`: Reference identity (`≡ ≢`) for references, `Rc` and `Arc`.

pub mod equality;
pub mod identity;
pub mod ordering;
