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

use core::ops::{Add, Neg, Sub};

/// The plus-minus `±` and minus-plus `∓` notation.
///
/// Both the prefix and the infix forms return an ordered pair. The infix
/// forms sit on the additive precedence tier.
///
/// # Examples
///
/// ```rust
/// # use mathsym_core::num::ops::plus_minus::PlusMinus;
/// assert_eq!(3i32.plus_minus(), (3, -3));
/// assert_eq!(3i32.minus_plus(), (-3, 3));
/// assert_eq!(5i32.plus_minus_by(3), (8, 2));
/// assert_eq!(5i32.minus_plus_by(3), (2, 8));
/// ```
pub trait PlusMinus: Sized {
    /// Returns `±self`, that is `(self, -self)`.
    fn plus_minus(self) -> (Self, Self);

    /// Returns `∓self`, that is `(-self, self)`.
    fn minus_plus(self) -> (Self, Self);

    /// Returns `self ± rhs`, that is `(self + rhs, self - rhs)`.
    fn plus_minus_by(self, rhs: Self) -> (Self, Self);

    /// Returns `self ∓ rhs`, that is `(self - rhs, self + rhs)`.
    fn minus_plus_by(self, rhs: Self) -> (Self, Self);
}

impl<T> PlusMinus for T
where
    T: Copy + Neg<Output = T> + Add<Output = T> + Sub<Output = T>,
{
    #[inline(always)]
    fn plus_minus(self) -> (T, T) {
        (self, -self)
    }

    #[inline(always)]
    fn minus_plus(self) -> (T, T) {
        (-self, self)
    }

    #[inline(always)]
    fn plus_minus_by(self, rhs: T) -> (T, T) {
        (self + rhs, self - rhs)
    }

    #[inline(always)]
    fn minus_plus_by(self, rhs: T) -> (T, T) {
        (self - rhs, self + rhs)
    }
}
