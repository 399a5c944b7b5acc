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

use num_traits::Float;

/// Root extraction, the prefix `√`, `∛`, `∜` and the infix
/// index-radicand form `n√x`.
///
/// The infix form binds like `**`. A negative
/// radicand under an even (or non-integer) index produces NaN, while a
/// negative radicand under an odd integer index yields the negated root of
/// its magnitude.
///
/// # Examples
///
/// ```rust
/// # use mathsym_core::num::ops::roots::Root;
/// assert_eq!(64.0f64.square_root(), 8.0);
/// assert_eq!((-8.0f64).cube_root(), -2.0);
/// assert_eq!(81.0f64.fourth_root(), 3.0);
/// assert!((-128.0f64).root(6.0).is_nan());
/// ```
pub trait Root: Float {
    /// Returns `√self`.
    #[inline(always)]
    fn square_root(self) -> Self {
        self.sqrt()
    }

    /// Returns `∛self`. Unlike the other roots this is defined for negative
    /// values.
    #[inline(always)]
    fn cube_root(self) -> Self {
        self.cbrt()
    }

    /// Returns `∜self`.
    #[inline(always)]
    fn fourth_root(self) -> Self {
        self.sqrt().sqrt()
    }

    /// Returns `index√self`.
    #[inline(always)]
    fn root(self, index: Self) -> Self {
        nth_root(index, self)
    }
}

impl<T> Root for T where T: Float {}

/// Computes the `index`-th root of `radicand`.
///
/// Indices two and three dispatch to `sqrt` and `cbrt` so that perfect
/// squares and cubes come out exact. Any other index goes through
/// `powf(1 / index)`, with the sign of the radicand restored for odd integer
/// indices.
///
/// # Examples
///
/// ```rust
/// # use mathsym_core::num::ops::roots::nth_root;
/// assert_eq!(nth_root(1.0f64, 7.0), 7.0);
/// assert_eq!(nth_root(3.0f64, -27.0), -3.0);
/// assert!((nth_root(5.0f64, -32.0) + 2.0).abs() < 1e-15);
/// assert!(nth_root(6.0, -128.0f64).is_nan());
/// ```
pub fn nth_root<T>(index: T, radicand: T) -> T
where
    T: Float,
{
    let two = T::one() + T::one();
    if index == two {
        return radicand.sqrt();
    }
    if index == two + T::one() {
        return radicand.cbrt();
    }
    if radicand < T::zero() && is_odd_integer(index) {
        return -(-radicand).powf(index.recip());
    }
    radicand.powf(index.recip())
}

/// Returns `true` if `value` is a finite odd integer.
#[inline(always)]
fn is_odd_integer<T>(value: T) -> bool
where
    T: Float,
{
    let two = T::one() + T::one();
    value.is_finite() && value.fract() == T::zero() && (value / two).fract() != T::zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::constants::PI;
    use approx::assert_relative_eq;

    #[test]
    fn test_square_roots() {
        assert_eq!(64.0f64.square_root(), 8.0);
        assert_eq!(2.0f64.square_root(), 1.414_213_562_373_095_1);
        assert_eq!(2.2f64.square_root(), 1.483_239_697_419_132_6);
        assert!((-4.0f64).square_root().is_nan());
    }

    #[test]
    fn test_cube_roots() {
        assert_eq!(8.0f64.cube_root(), 2.0);
        assert_eq!(64.0f64.cube_root(), 4.0);
        assert_eq!((-8.0f64).cube_root(), -2.0);
        assert_relative_eq!(5.1f64.cube_root(), 1.721_300_620_726_315_9, max_relative = 1e-15);
    }

    #[test]
    fn test_fourth_roots() {
        assert_eq!(81.0f64.fourth_root(), 3.0);
        assert_relative_eq!(9.24f64.fourth_root(), 1.743_484_106_814_321_6, max_relative = 1e-15);
        assert!((-16.0f64).fourth_root().is_nan());
    }

    #[test]
    fn test_nth_root_index_one_and_decimal_index() {
        assert_eq!(7.0f64.root(1.0), 7.0);
        assert_relative_eq!(PI.root(PI), 1.439_619_495_847_590_7, max_relative = 1e-15);
    }

    #[test]
    fn test_nth_root_negative_index() {
        assert_relative_eq!(5.0f64.root(-2.0), 0.447_213_595_5, epsilon = 1e-10);
    }

    #[test]
    fn test_nth_root_odd_index_negative_radicand() {
        assert_relative_eq!((-32.0f64).root(5.0), -2.0, max_relative = 1e-15);
        assert_eq!(nth_root(3.0f64, -8.0), -2.0);
        assert_relative_eq!(nth_root(-3.0f64, -8.0), -0.5, max_relative = 1e-15);
    }

    #[test]
    fn test_nth_root_even_or_fractional_index_negative_radicand() {
        assert!((-128.0f64).root(6.0).is_nan());
        assert!((-4.0f64).root(2.0).is_nan());
        assert!((-4.0f64).root(2.5).is_nan());
    }

    #[test]
    fn test_is_odd_integer() {
        assert!(is_odd_integer(5.0f64));
        assert!(is_odd_integer(-3.0f64));
        assert!(!is_odd_integer(4.0f64));
        assert!(!is_odd_integer(2.5f64));
        assert!(!is_odd_integer(f64::INFINITY));
        assert!(!is_odd_integer(f64::NAN));
    }

    #[test]
    fn test_roots_for_f32() {
        assert_eq!(9.0f32.square_root(), 3.0);
        assert_eq!((-27.0f32).root(3.0), -3.0);
    }
}
