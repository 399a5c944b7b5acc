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

//! # Numeric Notation
//!
//! Constants and arithmetic notation over the primitive numeric types.
//!
//! ## Submodules
//!
//! - `constants`: The `MathConstants` associated-constant trait (π, τ, e, φ,
//!   ε, ∞) for `f32` and `f64`, and `f64` module constants.
//! - `ops`: By-value traits for `×`, `÷`, `%`, `**`, the roots and `±`/`∓`.
//!
//! Integer operations keep Rust's intrinsic semantics (truncating division,
//! panics on a zero divisor), while float operations propagate IEEE-754
//! special values instead of signaling errors.

pub mod constants;
pub mod ops;
