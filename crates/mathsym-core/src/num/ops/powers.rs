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

/// Exponentiation by value, the `**` and `**=` notation.
///
/// Written infix, `**` binds tighter than `×` and `÷`. Floats raise
/// to a float exponent through `powf`; integers raise to a `u32` exponent
/// through `pow` and panic on overflow in debug builds like the primitive.
///
/// # Examples
///
/// ```rust
/// # use mathsym_core::num::ops::powers::Power;
/// assert_eq!(3i64.raised_to(4), 81);
/// assert_eq!(4.0f64.raised_to(0.5), 2.0);
///
/// let mut x = 11.0f64;
/// x.raise_to(2.0);
/// assert_eq!(x, 121.0);
/// ```
pub trait Power<Exp = Self>: Sized {
    /// Returns `self ** exponent`.
    fn raised_to(self, exponent: Exp) -> Self;

    /// Performs `self **= exponent`.
    fn raise_to(&mut self, exponent: Exp);
}

macro_rules! power_float_impl {
    ($($t:ty),*) => {
        $(
            impl Power for $t {
                #[inline(always)]
                fn raised_to(self, exponent: $t) -> $t {
                    self.powf(exponent)
                }

                #[inline(always)]
                fn raise_to(&mut self, exponent: $t) {
                    *self = self.powf(exponent);
                }
            }
        )*
    };
}

macro_rules! power_int_impl {
    ($($t:ty),*) => {
        $(
            impl Power<u32> for $t {
                #[inline(always)]
                fn raised_to(self, exponent: u32) -> $t {
                    self.pow(exponent)
                }

                #[inline(always)]
                fn raise_to(&mut self, exponent: u32) {
                    *self = self.pow(exponent);
                }
            }
        )*
    };
}

power_float_impl!(f32, f64);
power_int_impl!(u8, u16, u32, u64, u128, usize);
power_int_impl!(i8, i16, i32, i64, i128, isize);
