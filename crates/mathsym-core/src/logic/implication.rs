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

//! # Material Implication and Equivalence
//!
//! `→`, `←`, `↔` and the boolean reading of `≡`. Written infix, these
//! bind looser than the ternary conditional but tighter than assignment, and
//! group to the right, so `p → q → r` means `p → (q → r)`. Nested calls
//! express the same grouping: `implies(p, || implies(q, || r))`.

use crate::logic::connectives::{and, not};

/// `p → q`, material implication: `¬(p ∧ ¬q)`.
///
/// `q` is only evaluated if `p` is `true`.
///
/// # Examples
///
/// ```rust
/// # use mathsym_core::logic::implication::implies;
/// assert!(implies(true, || true));
/// assert!(!implies(true, || false));
/// assert!(implies(false, || unreachable!()));
/// ```
#[inline(always)]
pub fn implies<F>(p: bool, q: F) -> bool
where
    F: FnOnce() -> bool,
{
    not(and(p, || not(q())))
}

/// `p ← q`, converse implication: `¬(q ∧ ¬p)`.
///
/// Here the left operand is the deferred one: `p` is only evaluated if `q` is
/// `true`.
///
/// # Examples
///
/// ```rust
/// # use mathsym_core::logic::implication::converse;
/// assert!(converse(|| true, true));
/// assert!(!converse(|| false, true));
/// assert!(converse(|| unreachable!(), false));
/// ```
#[inline(always)]
pub fn converse<F>(p: F, q: bool) -> bool
where
    F: FnOnce() -> bool,
{
    implies(q, p)
}

/// `p ↔ q` (also written `p ≡ q`), material equivalence.
#[inline(always)]
pub fn iff(p: bool, q: bool) -> bool {
    p == q
}
