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

//! # Mathematical Constants
//!
//! The constants of the notation surface (π, τ, e, φ, ε, ∞) at native
//! floating-point precision. They are available generically through the
//! associated-constant trait [`MathConstants`], implemented for `f32` and
//! `f64`, and as plain `f64` module constants for the common case.
//!
//! ```rust
//! use mathsym_core::num::constants::{MathConstants, PI, TAU};
//!
//! assert_eq!(TAU, 2.0 * PI);
//! assert_eq!(<f32 as MathConstants>::PI, std::f32::consts::PI);
//! ```

/// A trait for floating-point types that expose the standard mathematical
/// constants as associated constants.
pub trait MathConstants: Sized {
    /// π, the ratio of a circle's circumference to its diameter.
    const PI: Self;
    /// τ = 2π, a full turn in radians.
    const TAU: Self;
    /// e, Euler's number, the base of the natural logarithm.
    const E: Self;
    /// φ = (1 + √5) / 2, the golden ratio.
    const PHI: Self;
    /// ε, the machine epsilon (the distance from 1 to the next larger value).
    const EPSILON: Self;
    /// ∞, positive infinity.
    const INFINITY: Self;
}

macro_rules! impl_math_constants_for {
    ($t:ident) => {
        impl MathConstants for $t {
            const PI: Self = core::$t::consts::PI;
            const TAU: Self = core::$t::consts::TAU;
            const E: Self = core::$t::consts::E;
            const PHI: Self = 1.618_033_988_749_894_848_204_586_834_365_638;
            const EPSILON: Self = $t::EPSILON;
            const INFINITY: Self = $t::INFINITY;
        }
    };
}

impl_math_constants_for!(f32);
impl_math_constants_for!(f64);

/// π for `f64`.
pub const PI: f64 = <f64 as MathConstants>::PI;
/// τ = 2π for `f64`.
pub const TAU: f64 = <f64 as MathConstants>::TAU;
/// Euler's number e for `f64`.
pub const E: f64 = <f64 as MathConstants>::E;
/// The golden ratio φ for `f64`.
pub const PHI: f64 = <f64 as MathConstants>::PHI;
/// The machine epsilon ε for `f64`.
pub const EPSILON: f64 = <f64 as MathConstants>::EPSILON;
/// Positive infinity for `f64`.
pub const INFINITY: f64 = <f64 as MathConstants>::INFINITY;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_f64_constants_match_reference_values() {
        assert_eq!(PI, 3.141_592_653_589_793_1);
        assert_eq!(TAU, 6.283_185_307_179_586_2);
        assert_eq!(E, 2.718_281_828_459_045_1);
        assert_eq!(PHI, 1.618_033_988_749_894_9);
        assert_eq!(EPSILON, 2.220_446_049_250_313e-16);
        assert_eq!(INFINITY, f64::INFINITY);
    }

    #[test]
    fn test_golden_ratio_matches_closed_form() {
        assert_eq!(PHI, (1.0 + 5f64.sqrt()) / 2.0);
        assert_eq!(<f32 as MathConstants>::PHI, (1.0 + 5f32.sqrt()) / 2.0);
    }

    #[test]
    fn test_tau_is_twice_pi() {
        assert_eq!(TAU, 2.0 * PI);
        assert_eq!(<f32 as MathConstants>::TAU, 2.0 * <f32 as MathConstants>::PI);
    }

    #[test]
    fn test_epsilon_is_distance_from_one_to_next_value() {
        assert_eq!(1.0 + EPSILON, f64::from_bits(1f64.to_bits() + 1));
        assert!(INFINITY.is_infinite() && INFINITY.is_sign_positive());
    }
}
