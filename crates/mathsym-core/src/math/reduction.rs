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

//! Summation and product reductions.
//!
//! `∑` and `∏` come in two shapes: over an arbitrary finite sequence of
//! values, and over a closed integer range `[start, end]` mapped through a
//! function. The empty sum is `0` and the empty product is `1`.
//!
//! ```rust
//! use mathsym_core::math::reduction::{bounded_product, bounded_summation, product, summation};
//!
//! assert_eq!(summation([1, 2, 3, 4, 5]), 15);
//! assert_eq!(product([1, 2, 3, 4, 5]), 120);
//! assert_eq!(bounded_summation(3, 6, |x| x * x), 86);
//! assert_eq!(bounded_product(3, 6, |x| x + x), 5760);
//! ```

use crate::math::range::{ClosedRange, InvalidRangeError};
use num_traits::{One, PrimInt, Zero};
use std::ops::{Add, Mul};

/// `∑ values`: the sum of all values, or zero for an empty sequence.
///
/// # Examples
///
/// ```rust
/// # use mathsym_core::math::reduction::summation;
/// assert_eq!(summation(vec![0.5f64, 0.25, 0.25]), 1.0);
/// assert_eq!(summation(Vec::<i32>::new()), 0);
/// ```
#[inline]
pub fn summation<I>(values: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Zero + Add<Output = I::Item>,
{
    values.into_iter().fold(I::Item::zero(), |acc, x| acc + x)
}

/// `∏ values`: the product of all values, or one for an empty sequence.
///
/// # Examples
///
/// ```rust
/// # use mathsym_core::math::reduction::product;
/// assert_eq!(product([2u64, 3, 7]), 42);
/// assert_eq!(product(Vec::<i32>::new()), 1);
/// ```
#[inline]
pub fn product<I>(values: I) -> I::Item
where
    I: IntoIterator,
    I::Item: One + Mul<Output = I::Item>,
{
    values.into_iter().fold(I::Item::one(), |acc, x| acc * x)
}

/// `∑_{i = start}^{end} f(i)` over the inclusive range `[start, end]`.
///
/// # Panics
///
/// Panics if `start > end`. Use [`try_bounded_summation`] to handle that
/// case without panicking.
#[inline]
pub fn bounded_summation<T, R, F>(start: T, end: T, f: F) -> R
where
    T: PrimInt,
    R: Zero + Add<Output = R>,
    F: FnMut(T) -> R,
{
    ClosedRange::new(start, end).summation_of(f)
}

/// `∏_{i = start}^{end} f(i)` over the inclusive range `[start, end]`.
///
/// # Panics
///
/// Panics if `start > end`. Use [`try_bounded_product`] to handle that
/// case without panicking.
#[inline]
pub fn bounded_product<T, R, F>(start: T, end: T, f: F) -> R
where
    T: PrimInt,
    R: One + Mul<Output = R>,
    F: FnMut(T) -> R,
{
    ClosedRange::new(start, end).product_of(f)
}

/// Fallible form of [`bounded_summation`].
///
/// # Examples
///
/// ```rust
/// # use mathsym_core::math::reduction::try_bounded_summation;
/// assert_eq!(try_bounded_summation(1, 4, |x| x), Ok(10));
/// assert!(try_bounded_summation(4, 1, |x| x).is_err());
/// ```
#[inline]
pub fn try_bounded_summation<T, R, F>(start: T, end: T, f: F) -> Result<R, InvalidRangeError<T>>
where
    T: PrimInt,
    R: Zero + Add<Output = R>,
    F: FnMut(T) -> R,
{
    Ok(ClosedRange::try_new(start, end)?.summation_of(f))
}

/// Fallible form of [`bounded_product`].
#[inline]
pub fn try_bounded_product<T, R, F>(start: T, end: T, f: F) -> Result<R, InvalidRangeError<T>>
where
    T: PrimInt,
    R: One + Mul<Output = R>,
    F: FnMut(T) -> R,
{
    Ok(ClosedRange::try_new(start, end)?.product_of(f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_summation_of_sequence() {
        assert_eq!(summation([1, 2, 3, 4, 5]), 15);
        assert_eq!(summation(vec![-1i64, 1, -1, 1]), 0);
        assert_eq!(summation((1..=100).map(|x: u32| x)), 5050);
    }

    #[test]
    fn test_product_of_sequence() {
        assert_eq!(product([1, 2, 3, 4, 5]), 120);
        assert_eq!(product([3i8, -2]), -6);
    }

    #[test]
    fn test_empty_sequences_use_identities() {
        assert_eq!(summation(std::iter::empty::<i32>()), 0);
        assert_eq!(product(std::iter::empty::<i32>()), 1);
        assert_eq!(summation(std::iter::empty::<f64>()), 0.0);
        assert_eq!(product(std::iter::empty::<f64>()), 1.0);
    }

    #[test]
    fn test_floating_point_reductions() {
        assert_relative_eq!(summation([0.1f64, 0.2, 0.3]), 0.6, epsilon = 1e-12);
        assert_relative_eq!(product([0.5f64, 4.0, 1.5]), 3.0);
    }

    #[test]
    fn test_bounded_summation() {
        assert_eq!(bounded_summation(3, 6, |x| x * x), 86);
        assert_eq!(bounded_summation(1, 1, |x| x), 1);
        assert_eq!(bounded_summation(-2, 2, |x| x), 0);
    }

    #[test]
    fn test_bounded_product() {
        assert_eq!(bounded_product(3, 6, |x| x + x), 5760);
        assert_eq!(bounded_product(1u64, 10, |x| x), 3_628_800);
    }

    #[test]
    fn test_bounded_with_different_output_type() {
        let harmonic: f64 = bounded_summation(1, 4, |k| 1.0 / k as f64);
        assert_relative_eq!(harmonic, 25.0 / 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bounded_at_type_maximum_terminates() {
        assert_eq!(
            bounded_summation(u8::MAX - 2, u8::MAX, |x| x as u32),
            253 + 254 + 255
        );
    }

    #[test]
    #[should_panic(expected = "Invalid range")]
    fn test_bounded_summation_panics_on_inverted_range() {
        bounded_summation(6, 3, |x| x);
    }

    #[test]
    #[should_panic(expected = "Invalid range")]
    fn test_bounded_product_panics_on_inverted_range() {
        bounded_product(6, 3, |x| x);
    }

    #[test]
    fn test_try_bounded_reports_bounds() {
        assert_eq!(try_bounded_summation(1, 3, |x| x), Ok(6));
        assert_eq!(try_bounded_product(1, 3, |x| x), Ok(6));

        let err = try_bounded_product(9, 2, |x| x).unwrap_err();
        assert_eq!(err, InvalidRangeError { start: 9, end: 2 });
    }
}
