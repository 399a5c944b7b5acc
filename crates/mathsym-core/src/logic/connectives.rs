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

//! # Boolean Connectives
//!
//! Negation, conjunction, disjunction and their exclusive and negated
//! variants. Connectives that can short-circuit take their right operand as
//! a closure and never call it when the left operand already decides the
//! result, so a guarded expression such as a division is only evaluated when
//! needed:
//!
//! ```rust
//! use mathsym_core::logic::connectives::and;
//!
//! let divisor = std::hint::black_box(0);
//! assert!(!and(divisor != 0, || 10 / divisor > 1));
//! ```
//!
//! Written infix, `∧`, `⊼` and `↑` sit on the conjunction tier, which
//! binds tighter than the disjunction tier of `∨ ⊻ ⊕ ⊙ ↓`.

use crate::logic::implication;

/// `¬p`, logical negation.
#[inline(always)]
pub fn not(p: bool) -> bool {
    !p
}

/// `p ∧ q`, logical conjunction. `q` is only evaluated if `p` is `true`.
#[inline(always)]
pub fn and<F>(p: bool, q: F) -> bool
where
    F: FnOnce() -> bool,
{
    p && q()
}

/// `p ∨ q`, logical disjunction. `q` is only evaluated if `p` is `false`.
#[inline(always)]
pub fn or<F>(p: bool, q: F) -> bool
where
    F: FnOnce() -> bool,
{
    p || q()
}

/// `p ⊻ q` (also written `p ⊕ q` or `p ≢ q`), exclusive or.
///
/// Both operands are always needed, so both are eager.
#[inline(always)]
pub fn xor(p: bool, q: bool) -> bool {
    p != q
}

/// `p ⊼ q` (also written `p ↑ q`), the negation of `p ∧ q`.
/// `q` is only evaluated if `p` is `true`.
#[inline(always)]
pub fn nand<F>(p: bool, q: F) -> bool
where
    F: FnOnce() -> bool,
{
    !and(p, q)
}

/// `p ↓ q`, the negation of `p ∨ q`. `q` is only evaluated if `p` is `false`.
#[inline(always)]
pub fn nor<F>(p: bool, q: F) -> bool
where
    F: FnOnce() -> bool,
{
    !or(p, q)
}

/// `p ⊙ q`, exclusive nor: `true` when both operands agree.
#[inline(always)]
pub fn xnor(p: bool, q: bool) -> bool {
    !xor(p, q)
}

/// Boolean notation as methods on `bool`.
///
/// # Examples
///
/// ```rust
/// # use mathsym_core::logic::connectives::Logic;
/// assert!(true.negated().negated());
/// assert!(true.and(|| true));
/// assert!(false.or(|| true));
/// assert!(true.xor(false));
/// assert!(false.implies(|| unreachable!()));
/// assert!(true.implied_by(|| unreachable!()));
/// assert!(true.iff(true));
/// ```
pub trait Logic: Sized {
    /// `¬self`.
    fn negated(self) -> Self;

    /// `self ∧ q`.
    fn and<F>(self, q: F) -> Self
    where
        F: FnOnce() -> Self;

    /// `self ∨ q`.
    fn or<F>(self, q: F) -> Self
    where
        F: FnOnce() -> Self;

    /// `self ⊻ q`.
    fn xor(self, q: Self) -> Self;

    /// `self ⊼ q`.
    fn nand<F>(self, q: F) -> Self
    where
        F: FnOnce() -> Self;

    /// `self ↓ q`.
    fn nor<F>(self, q: F) -> Self
    where
        F: FnOnce() -> Self;

    /// `self ⊙ q`.
    fn xnor(self, q: Self) -> Self;

    /// `self → q`, material implication.
    fn implies<F>(self, q: F) -> Self
    where
        F: FnOnce() -> Self;

    /// `self ← q`, converse implication. `q` is only evaluated if `self` is
    /// `false`.
    fn implied_by<F>(self, q: F) -> Self
    where
        F: FnOnce() -> Self;

    /// `self ↔ q`, material equivalence.
    fn iff(self, q: Self) -> Self;
}

impl Logic for bool {
    #[inline(always)]
    fn negated(self) -> bool {
        not(self)
    }

    #[inline(always)]
    fn and<F>(self, q: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        and(self, q)
    }

    #[inline(always)]
    fn or<F>(self, q: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        or(self, q)
    }

    #[inline(always)]
    fn xor(self, q: bool) -> bool {
        xor(self, q)
    }

    #[inline(always)]
    fn nand<F>(self, q: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        nand(self, q)
    }

    #[inline(always)]
    fn nor<F>(self, q: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        nor(self, q)
    }

    #[inline(always)]
    fn xnor(self, q: bool) -> bool {
        xnor(self, q)
    }

    #[inline(always)]
    fn implies<F>(self, q: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        implication::implies(self, q)
    }

    #[inline(always)]
    fn implied_by<F>(self, q: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        or(self, || not(q()))
    }

    #[inline(always)]
    fn iff(self, q: bool) -> bool {
        implication::iff(self, q)
    }
}
