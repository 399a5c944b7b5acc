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

//! # Mathsym Core
//!
//! Mathematical notation for numbers, comparisons, logic, reductions and
//! functions. Every operation is a thin, stateless redirect to the built-in
//! operation it names, exposed as an extension-trait method or a free
//! function, so that formulas read close to how they are written on paper.
//!
//! ## Modules
//!
//! - `num`: Constants (`π τ e φ ε ∞`) and arithmetic notation (`× ÷ % ** √ ∛ ∜
//!   ± ∓`) for the primitive integer and float types.
//! - `cmp`: Ordering predicates derived from one three-way comparison,
//!   inequality, tolerance-based approximate equality and reference identity.
//! - `logic`: Boolean connectives and implications, with the right operand
//!   of short-circuiting connectives deferred through a closure.
//! - `math`: Closed integer ranges and the `∑`/`∏` reductions over sequences
//!   and bounded ranges.
//! - `func`: Function composition (`∘`).
//!
//! ## Example
//!
//! ```rust
//! use mathsym_core::cmp::equality::ApproxEq;
//! use mathsym_core::math::reduction::bounded_summation;
//! use mathsym_core::num::constants::PI;
//! use mathsym_core::num::ops::roots::Root;
//!
//! let basel: f64 = bounded_summation(1u32, 100_000, |k| 1.0 / (k as f64 * k as f64));
//! assert!((6.0 * basel).square_root().is_finite());
//! assert!(!basel.approx_eq(PI * PI / 6.0));
//! assert!((basel - PI * PI / 6.0).abs() < 1e-4);
//! ```

pub mod cmp;
pub mod func;
pub mod logic;
pub mod math;
pub mod num;
