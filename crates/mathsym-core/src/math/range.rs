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

use crate::math::reduction::{product, summation};
use num_traits::{One, PrimInt, ToPrimitive, Zero};
use std::{
    iter::FusedIterator,
    ops::{Add, Mul, RangeInclusive},
};

/// The error returned when a range is requested with `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidRangeError<T> {
    /// The requested inclusive start.
    pub start: T,
    /// The requested inclusive end.
    pub end: T,
}

impl<T> std::fmt::Display for InvalidRangeError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid range: start {} must be less than or equal to end {}",
            self.start, self.end
        )
    }
}

impl<T> std::error::Error for InvalidRangeError<T> where T: std::fmt::Debug + std::fmt::Display {}

/// A closed interval `[start, end]` of integers, inclusive on both ends.
///
/// This is the domain of the bounded summation and product: every integer
/// from `start` up to and including `end` is visited exactly once.
///
/// # Invariants
/// `start` must always be less than or equal to `end`, so a `ClosedRange`
/// is never empty.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedRange<T>
where
    T: PrimInt,
{
    start: T,
    end: T,
}

/// An iterator over the integers contained within a `ClosedRange`.
///
/// Iteration terminates correctly even when `end` is the maximum value of
/// `T`.
///
/// # Examples
///
/// ```rust
/// # use mathsym_core::math::range::ClosedRange;
/// let range = ClosedRange::new(1, 4);
/// let points: Vec<_> = range.iter().collect();
/// assert_eq!(points, vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct ClosedRangeIterator<T>
where
    T: PrimInt,
{
    current: T,
    end: T,
    exhausted: bool,
}

impl<T> ClosedRangeIterator<T>
where
    T: PrimInt,
{
    #[inline]
    fn remaining(&self) -> Option<usize> {
        if self.exhausted {
            return Some(0);
        }
        inclusive_len(self.current, self.end)
    }
}

/// The number of integers in `[start, end]`, or `None` if it does not fit in
/// `usize`.
///
/// The distance is taken in `i128` so that full-width signed ranges such as
/// `[i8::MIN, i8::MAX]` do not overflow `T`. Only `u128` values beyond
/// `i128::MAX` fall back to subtracting in `T`.
#[inline]
fn inclusive_len<T>(start: T, end: T) -> Option<usize>
where
    T: PrimInt,
{
    debug_assert!(start <= end, "called `inclusive_len` with `start > end`");
    let distance = match (start.to_i128(), end.to_i128()) {
        (Some(start), Some(end)) => end.checked_sub(start)?.to_usize()?,
        _ => end.checked_sub(&start)?.to_usize()?,
    };
    distance.checked_add(1)
}

impl<T> Iterator for ClosedRangeIterator<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        debug_assert!(
            self.current <= self.end,
            "`ClosedRangeIterator` advanced past its end"
        );
        let result = self.current;
        if self.current == self.end {
            self.exhausted = true;
        } else {
            self.current = self.current + T::one();
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<T> DoubleEndedIterator for ClosedRangeIterator<T>
where
    T: PrimInt,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        debug_assert!(
            self.current <= self.end,
            "`ClosedRangeIterator` advanced past its end"
        );
        let result = self.end;
        if self.current == self.end {
            self.exhausted = true;
        } else {
            self.end = self.end - T::one();
        }
        Some(result)
    }
}

impl<T> FusedIterator for ClosedRangeIterator<T> where T: PrimInt {}

impl<T> ClosedRange<T>
where
    T: PrimInt,
{
    /// Creates a new `ClosedRange`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use mathsym_core::math::range::ClosedRange;
    /// let range = ClosedRange::new(3, 6);
    /// assert_eq!(range.count(), Some(4));
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        assert!(
            start <= end,
            "Invalid range: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Creates a new `ClosedRange` if `start <= end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use mathsym_core::math::range::ClosedRange;
    /// assert!(ClosedRange::try_new(0, 10).is_ok());
    /// assert!(ClosedRange::try_new(5, 5).is_ok());
    ///
    /// let err = ClosedRange::try_new(10, 0).unwrap_err();
    /// assert_eq!((err.start, err.end), (10, 0));
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Result<Self, InvalidRangeError<T>> {
        if start <= end {
            Ok(Self { start, end })
        } else {
            Err(InvalidRangeError { start, end })
        }
    }

    /// Returns the inclusive start bound.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the inclusive end bound.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns `true` if `start <= value <= end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use mathsym_core::math::range::ClosedRange;
    /// let range = ClosedRange::new(0, 10);
    /// assert!(range.contains(0));
    /// assert!(range.contains(10));
    /// assert!(!range.contains(11));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns `true` if `other` lies entirely within `self`.
    #[inline]
    pub fn contains_range(&self, other: Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns the number of integers in the range, `end - start + 1`, or
    /// `None` if that number does not fit in `usize`.
    ///
    /// A range covering a whole type is counted correctly even though the
    /// count itself does not fit in `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use mathsym_core::math::range::ClosedRange;
    /// assert_eq!(ClosedRange::new(u8::MIN, u8::MAX).count(), Some(256));
    /// assert_eq!(ClosedRange::new(u128::MIN, u128::MAX).count(), None);
    /// ```
    #[inline]
    pub fn count(&self) -> Option<usize> {
        inclusive_len(self.start, self.end)
    }

    /// Creates an iterator over the integers in the range, in ascending order.
    #[inline]
    pub fn iter(&self) -> ClosedRangeIterator<T> {
        ClosedRangeIterator {
            current: self.start,
            end: self.end,
            exhausted: false,
        }
    }

    /// `∑_{i = start}^{end} f(i)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use mathsym_core::math::range::ClosedRange;
    /// assert_eq!(ClosedRange::new(3, 6).summation_of(|x| x * x), 86);
    /// ```
    #[inline]
    pub fn summation_of<R, F>(&self, f: F) -> R
    where
        R: Zero + Add<Output = R>,
        F: FnMut(T) -> R,
    {
        summation(self.iter().map(f))
    }

    /// `∏_{i = start}^{end} f(i)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use mathsym_core::math::range::ClosedRange;
    /// assert_eq!(ClosedRange::new(3, 6).product_of(|x| x + x), 5760);
    /// ```
    #[inline]
    pub fn product_of<R, F>(&self, f: F) -> R
    where
        R: One + Mul<Output = R>,
        F: FnMut(T) -> R,
    {
        product(self.iter().map(f))
    }
}

impl<T> std::fmt::Debug for ClosedRange<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosedRange")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> std::fmt::Display for ClosedRange<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T> std::ops::RangeBounds<T> for ClosedRange<T>
where
    T: PrimInt,
{
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.start)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.end)
    }
}

impl<T> IntoIterator for ClosedRange<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = ClosedRangeIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &ClosedRange<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = ClosedRangeIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> TryFrom<RangeInclusive<T>> for ClosedRange<T>
where
    T: PrimInt,
{
    type Error = InvalidRangeError<T>;

    #[inline]
    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (start, end) = range.into_inner();
        Self::try_new(start, end)
    }
}

impl<T> From<ClosedRange<T>> for RangeInclusive<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(range: ClosedRange<T>) -> Self {
        range.start..=range.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::{Bound, RangeBounds};

    #[test]
    fn test_construction_valid() {
        let range = ClosedRange::new(10, 20);
        assert_eq!(range.start(), 10);
        assert_eq!(range.end(), 20);
        assert_eq!(range.count(), Some(11));
    }

    #[test]
    fn test_construction_single_point() {
        let range = ClosedRange::new(5, 5);
        assert_eq!(range.count(), Some(1));
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn test_try_new() {
        assert!(ClosedRange::try_new(5, 10).is_ok());
        assert!(ClosedRange::try_new(5, 5).is_ok());
        assert_eq!(
            ClosedRange::try_new(10, 5),
            Err(InvalidRangeError { start: 10, end: 5 })
        );
    }

    #[test]
    #[should_panic(expected = "Invalid range")]
    fn test_new_panic() {
        ClosedRange::new(10, 5);
    }

    #[test]
    fn test_contains() {
        let range = ClosedRange::new(-3, 3);
        assert!(range.contains(-3));
        assert!(range.contains(0));
        assert!(range.contains(3));
        assert!(!range.contains(4));
        assert!(!range.contains(-4));
    }

    #[test]
    fn test_contains_range() {
        let outer = ClosedRange::new(0, 10);
        assert!(outer.contains_range(ClosedRange::new(0, 10)));
        assert!(outer.contains_range(ClosedRange::new(2, 8)));
        assert!(!outer.contains_range(ClosedRange::new(-1, 5)));
        assert!(!outer.contains_range(ClosedRange::new(5, 11)));
    }

    #[test]
    fn test_iteration_forward_and_backward() {
        let range = ClosedRange::new(1, 4);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(range.iter().rev().collect::<Vec<_>>(), vec![4, 3, 2, 1]);

        let mut it = range.iter();
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_iteration_at_type_bounds() {
        let top = ClosedRange::new(u8::MAX - 1, u8::MAX);
        assert_eq!(top.iter().collect::<Vec<_>>(), vec![254, 255]);

        let bottom = ClosedRange::new(i8::MIN, i8::MIN + 1);
        assert_eq!(bottom.iter().rev().collect::<Vec<_>>(), vec![-127, -128]);

        assert_eq!(ClosedRange::new(u8::MIN, u8::MAX).iter().count(), 256);
    }

    #[test]
    fn test_count_of_full_width_ranges() {
        let unsigned = ClosedRange::new(u8::MIN, u8::MAX);
        assert_eq!(unsigned.count(), Some(256));
        assert_eq!(unsigned.count(), Some(unsigned.iter().count()));

        let signed = ClosedRange::new(i8::MIN, i8::MAX);
        assert_eq!(signed.count(), Some(256));
        assert_eq!(signed.count(), Some(signed.iter().count()));

        assert_eq!(ClosedRange::new(i16::MIN, i16::MAX).count(), Some(65_536));
        assert_eq!(ClosedRange::new(u128::MAX - 2, u128::MAX).count(), Some(3));
        assert_eq!(ClosedRange::new(i128::MIN, i128::MAX).count(), None);
        assert_eq!(ClosedRange::new(u128::MIN, u128::MAX).count(), None);
    }

    #[test]
    fn test_size_hint_of_full_width_signed_range() {
        let it = ClosedRange::new(i8::MIN, i8::MAX).iter();
        assert_eq!(it.size_hint(), (256, Some(256)));
    }

    #[test]
    fn test_size_hint_is_exact() {
        let mut it = ClosedRange::new(0u32, 9).iter();
        assert_eq!(it.size_hint(), (10, Some(10)));
        it.next();
        it.next_back();
        assert_eq!(it.size_hint(), (8, Some(8)));
        it.by_ref().for_each(drop);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_fused_iterator() {
        let mut it = ClosedRange::new(0, 0).iter();
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);

        fn assert_fused<I: FusedIterator>(_: I) {}
        assert_fused(it);
    }

    #[test]
    fn test_summation_and_product_of() {
        let range = ClosedRange::new(3, 6);
        assert_eq!(range.summation_of(|x| x * x), 86);
        assert_eq!(range.product_of(|x| x + x), 5760);
        assert_eq!(range.summation_of(|x| x as f64 / 2.0), 9.0);
    }

    #[test]
    fn test_range_bounds() {
        let range = ClosedRange::new(1, 5);
        assert_eq!(range.start_bound(), Bound::Included(&1));
        assert_eq!(range.end_bound(), Bound::Included(&5));
        assert!(RangeBounds::contains(&range, &5));
    }

    #[test]
    fn test_conversions() {
        let range: ClosedRange<i32> = (2..=7).try_into().unwrap();
        assert_eq!(range, ClosedRange::new(2, 7));
        let back: RangeInclusive<i32> = range.into();
        assert_eq!(back, 2..=7);
        assert!(ClosedRange::try_from(7..=2).is_err());
    }

    #[test]
    fn test_into_iterator() {
        let range = ClosedRange::new(1, 3);
        let mut sum = 0;
        for x in &range {
            sum += x;
        }
        assert_eq!(sum, 6);
        assert_eq!(range.into_iter().max(), Some(3));
    }

    #[test]
    fn test_display_and_debug() {
        let range = ClosedRange::new(-1, 1);
        assert_eq!(format!("{}", range), "[-1, 1]");
        assert_eq!(
            format!("{:?}", range),
            "ClosedRange { start: -1, end: 1 }"
        );
    }

    #[test]
    fn test_error_display() {
        let err = ClosedRange::try_new(6, 3).unwrap_err();
        assert_eq!(
            format!("{}", err),
            "Invalid range: start 6 must be less than or equal to end 3"
        );
    }
}
