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

use core::ops::{Div, DivAssign, Mul, MulAssign};

/// Multiplication by value, the `×` and `×=` notation.
///
/// `×` binds like `*` and `×=` like a compound
/// assignment.
///
/// # Examples
///
/// ```rust
/// # use mathsym_core::num::ops::arithmetic::Times;
/// assert_eq!(6i32.times(9), 54);
///
/// let mut x: i32 = 6;
/// x.times_assign(9);
/// assert_eq!(x, 54);
/// ```
pub trait Times: Sized + Mul<Self, Output = Self> + MulAssign<Self> {
    /// Returns `self × rhs`.
    fn times(self, rhs: Self) -> Self;

    /// Performs `self ×= rhs`.
    fn times_assign(&mut self, rhs: Self);
}

/// Division by value, the `÷` and `÷=` notation.
///
/// Integers truncate toward zero and panic on a zero divisor, exactly like
/// the primitive `/`. Floats follow IEEE-754, so dividing by zero yields an
/// infinity or NaN.
///
/// # Examples
///
/// ```rust
/// # use mathsym_core::num::ops::arithmetic::DividedBy;
/// assert_eq!(7.0f64.divided_by(4.0), 1.75);
/// assert_eq!(7i32.divided_by(4), 1);
/// assert_eq!(7i32.checked_divided_by(0), None);
/// assert!(1.0f64.divided_by(0.0).is_infinite());
/// ```
pub trait DividedBy: Sized + Div<Self, Output = Self> + DivAssign<Self> {
    /// Returns `self ÷ rhs`.
    fn divided_by(self, rhs: Self) -> Self;

    /// Performs `self ÷= rhs`.
    fn divide_assign(&mut self, rhs: Self);

    /// Returns `self ÷ rhs`, or `None` if the division has no representable
    /// result (an integer zero divisor or `MIN ÷ -1`).
    ///
    /// Float division always returns `Some`.
    fn checked_divided_by(self, rhs: Self) -> Option<Self>;
}

/// The postfix percent notation `x%`, which divides by one hundred.
///
/// Integers produce an `f64`; floats stay in their own type.
///
/// # Examples
///
/// ```rust
/// # use mathsym_core::num::ops::arithmetic::Percent;
/// assert_eq!(42i32.percent(), 0.42);
/// assert_eq!(250i32.percent(), 2.5);
/// ```
pub trait Percent {
    /// The type of the resulting fraction.
    type Output;

    /// Returns `self / 100`.
    fn percent(self) -> Self::Output;
}

macro_rules! times_impl {
    ($($t:ty),*) => {
        $(
            impl Times for $t {
                #[inline(always)]
                fn times(self, rhs: $t) -> $t {
                    self * rhs
                }

                #[inline(always)]
                fn times_assign(&mut self, rhs: $t) {
                    *self *= rhs;
                }
            }
        )*
    };
}

macro_rules! divided_by_int_impl {
    ($($t:ty),*) => {
        $(
            impl DividedBy for $t {
                #[inline(always)]
                fn divided_by(self, rhs: $t) -> $t {
                    self / rhs
                }

                #[inline(always)]
                fn divide_assign(&mut self, rhs: $t) {
                    *self /= rhs;
                }

                #[inline(always)]
                fn checked_divided_by(self, rhs: $t) -> Option<$t> {
                    <$t>::checked_div(self, rhs)
                }
            }

            impl Percent for $t {
                type Output = f64;

                #[inline(always)]
                fn percent(self) -> f64 {
                    self as f64 / 100.0
                }
            }
        )*
    };
}

macro_rules! divided_by_float_impl {
    ($($t:ty),*) => {
        $(
            impl DividedBy for $t {
                #[inline(always)]
                fn divided_by(self, rhs: $t) -> $t {
                    self / rhs
                }

                #[inline(always)]
                fn divide_assign(&mut self, rhs: $t) {
                    *self /= rhs;
                }

                #[inline(always)]
                fn checked_divided_by(self, rhs: $t) -> Option<$t> {
                    Some(self / rhs)
                }
            }

            impl Percent for $t {
                type Output = $t;

                #[inline(always)]
                fn percent(self) -> $t {
                    self / 100.0
                }
            }
        )*
    };
}

times_impl!(u8, u16, u32, u64, u128, usize);
times_impl!(i8, i16, i32, i64, i128, isize);
times_impl!(f32, f64);

divided_by_int_impl!(u8, u16, u32, u64, u128, usize);
divided_by_int_impl!(i8, i16, i32, i64, i128, isize);
divided_by_float_impl!(f32, f64);
