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

//! # Equality Notation
//!
//! Inequality (`≠`) for every `PartialEq` type and approximate equality
//! (`≈`, `≉`, `⩰`) for floating-point types.
//!
//! ## Tolerance policy
//!
//! Two floats are approximately equal when they are exactly equal, or when
//! their difference is finite and no larger than
//! `max(absolute, relative × max(|x|, |y|))`. The default tolerance uses a
//! relative tolerance of `√ε` (the square root of the machine epsilon) and an
//! absolute tolerance of `√ε × MIN_POSITIVE`, which keeps comparisons near
//! zero meaningful without swallowing every subnormal difference. A value is
//! therefore always approximately equal to itself and to its adjacent
//! representable values, but not to values a few parts in a hundred million
//! away. The largest finite value and the infinity of the same sign are
//! adjacent too, so `MAX ≈ ∞` holds even though their difference is not
//! finite.
//!
//! ```rust
//! use mathsym_core::cmp::equality::{ApproxEq, NotEqual, Tolerance};
//!
//! assert!(2i32.is_not_equal(&3));
//! assert!(2.0f64.approx_eq(2.000_000_005));
//! assert!(2.0f64.not_approx_eq(2.000_05));
//! assert!(2.0f64.approx_eq_with(2.01, Tolerance::from_relative(0.01)));
//! ```

use num_traits::Float;

/// The `≠` notation for every `PartialEq` type.
pub trait NotEqual: PartialEq {
    /// `self ≠ other`.
    #[inline(always)]
    fn is_not_equal(&self, other: &Self) -> bool {
        self != other
    }
}

impl<T> NotEqual for T where T: PartialEq + ?Sized {}

/// Identifies the tolerance component that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceComponent {
    /// The absolute tolerance.
    Absolute,
    /// The relative tolerance.
    Relative,
}

impl std::fmt::Display for ToleranceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absolute => write!(f, "absolute"),
            Self::Relative => write!(f, "relative"),
        }
    }
}

/// The error returned when a tolerance component is negative, NaN, or
/// infinite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidToleranceError {
    /// The component that was rejected.
    pub component: ToleranceComponent,
    /// The rejected value, widened to `f64`.
    pub value: f64,
}

impl std::fmt::Display for InvalidToleranceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid tolerance: {} tolerance must be finite and non-negative, got {}",
            self.component, self.value
        )
    }
}

impl std::error::Error for InvalidToleranceError {}

/// The absolute and relative tolerance used by approximate equality.
///
/// # Invariants
///
/// Both components are finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<T>
where
    T: Float,
{
    absolute: T,
    relative: T,
}

#[inline(always)]
fn is_valid_component<T>(value: T) -> bool
where
    T: Float,
{
    value.is_finite() && value >= T::zero()
}

/// Returns `true` if one operand is `±MAX` and the other the infinity of
/// the same sign, the only adjacent pair whose difference is not finite.
#[inline(always)]
fn borders_infinity<T>(x: T, y: T) -> bool
where
    T: Float,
{
    let (finite, infinite) = if x.is_infinite() { (y, x) } else { (x, y) };
    infinite.is_infinite()
        && finite.abs() == T::max_value()
        && finite.is_sign_positive() == infinite.is_sign_positive()
}

#[inline(always)]
fn check_component<T>(component: ToleranceComponent, value: T) -> Result<T, InvalidToleranceError>
where
    T: Float,
{
    if is_valid_component(value) {
        Ok(value)
    } else {
        Err(InvalidToleranceError {
            component,
            value: value.to_f64().unwrap_or(f64::NAN),
        })
    }
}

impl<T> Tolerance<T>
where
    T: Float,
{
    /// Creates a new `Tolerance`.
    ///
    /// # Panics
    ///
    /// Panics if either component is negative, NaN, or infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use mathsym_core::cmp::equality::Tolerance;
    /// let tolerance = Tolerance::new(1e-12, 1e-9);
    /// assert_eq!(tolerance.absolute(), 1e-12);
    /// assert_eq!(tolerance.relative(), 1e-9);
    /// ```
    #[inline]
    pub fn new(absolute: T, relative: T) -> Self {
        assert!(
            is_valid_component(absolute),
            "Invalid tolerance: absolute tolerance must be finite and non-negative"
        );
        assert!(
            is_valid_component(relative),
            "Invalid tolerance: relative tolerance must be finite and non-negative"
        );
        Self { absolute, relative }
    }

    /// Creates a new `Tolerance` if both components are valid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use mathsym_core::cmp::equality::{Tolerance, ToleranceComponent};
    /// assert!(Tolerance::try_new(0.0, 1e-6).is_ok());
    ///
    /// let err = Tolerance::try_new(-1.0, 1e-6).unwrap_err();
    /// assert_eq!(err.component, ToleranceComponent::Absolute);
    /// ```
    #[inline]
    pub fn try_new(absolute: T, relative: T) -> Result<Self, InvalidToleranceError> {
        let absolute = check_component(ToleranceComponent::Absolute, absolute)?;
        let relative = check_component(ToleranceComponent::Relative, relative)?;
        Ok(Self { absolute, relative })
    }

    /// Creates a purely relative tolerance. The absolute component is scaled
    /// down to `relative × MIN_POSITIVE`.
    ///
    /// # Panics
    ///
    /// Panics if `relative` is negative, NaN, or infinite.
    #[inline]
    pub fn from_relative(relative: T) -> Self {
        Self::new(relative * T::min_positive_value(), relative)
    }

    /// Returns a copy with the absolute component replaced.
    ///
    /// # Panics
    ///
    /// Panics if `absolute` is negative, NaN, or infinite.
    #[inline]
    pub fn with_absolute(self, absolute: T) -> Self {
        Self::new(absolute, self.relative)
    }

    /// Returns a copy with the relative component replaced.
    ///
    /// # Panics
    ///
    /// Panics if `relative` is negative, NaN, or infinite.
    #[inline]
    pub fn with_relative(self, relative: T) -> Self {
        Self::new(self.absolute, relative)
    }

    /// Returns the absolute component.
    #[inline]
    pub fn absolute(&self) -> T {
        self.absolute
    }

    /// Returns the relative component.
    #[inline]
    pub fn relative(&self) -> T {
        self.relative
    }

    /// Returns `true` if `x` and `y` are equal within this tolerance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use mathsym_core::cmp::equality::Tolerance;
    /// let tolerance = Tolerance::new(0.5, 0.0);
    /// assert!(tolerance.accepts(1.0, 1.4));
    /// assert!(!tolerance.accepts(1.0, 1.6));
    /// assert!(tolerance.accepts(f64::INFINITY, f64::INFINITY));
    /// assert!(!tolerance.accepts(f64::NAN, f64::NAN));
    /// ```
    #[inline]
    pub fn accepts(&self, x: T, y: T) -> bool {
        if x == y || borders_infinity(x, y) {
            return true;
        }
        let delta = (x - y).abs();
        let scale = x.abs().max(y.abs());
        let bound = self.absolute.max(scale * self.relative);
        delta.is_finite() && delta <= bound
    }
}

impl<T> Default for Tolerance<T>
where
    T: Float,
{
    /// The `√ε` relative tolerance.
    #[inline]
    fn default() -> Self {
        Self::from_relative(T::epsilon().sqrt())
    }
}

impl<T> std::fmt::Display for Tolerance<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Tolerance(absolute: {}, relative: {})",
            self.absolute, self.relative
        )
    }
}

/// Approximate equality notation (`≈`, `≉`, `⩰`) for floating-point types.
pub trait ApproxEq: Float {
    /// `self ≈ other` under the default tolerance.
    #[inline(always)]
    fn approx_eq(self, other: Self) -> bool {
        Tolerance::<Self>::default().accepts(self, other)
    }

    /// `self ≉ other` under the default tolerance.
    #[inline(always)]
    fn not_approx_eq(self, other: Self) -> bool {
        !self.approx_eq(other)
    }

    /// `self ⩰ other`, approximately or exactly equal.
    #[inline(always)]
    fn approx_eq_or_eq(self, other: Self) -> bool {
        self.approx_eq(other) || self == other
    }

    /// `self ≈ other` under a caller-chosen tolerance.
    #[inline(always)]
    fn approx_eq_with(self, other: Self, tolerance: Tolerance<Self>) -> bool {
        tolerance.accepts(self, other)
    }
}

impl<T> ApproxEq for T where T: Float {}
