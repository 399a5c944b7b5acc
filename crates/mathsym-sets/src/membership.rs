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

//! Membership notation: `∈ ∉` with the element on the left and `∋ ∌` with
//! the set on the left.
//!
//! ```rust
//! use mathsym_sets::membership::{ElementOf, SetMembership};
//! use std::collections::HashSet;
//!
//! let primes: HashSet<u32> = [2, 3, 5, 7].into_iter().collect();
//! assert!(5u32.is_element_of(&primes));
//! assert!(4u32.is_not_element_of(&primes));
//! assert!(primes.has_element(&7));
//! assert!(primes.lacks_element(&9));
//! ```

use crate::algebra::SetAlgebra;

/// Membership predicates with the element as receiver.
pub trait ElementOf: Sized {
    /// `self ∈ set`.
    #[inline]
    fn is_element_of<S>(&self, set: &S) -> bool
    where
        S: SetAlgebra<Element = Self>,
    {
        set.contains_element(self)
    }

    /// `self ∉ set`.
    #[inline]
    fn is_not_element_of<S>(&self, set: &S) -> bool
    where
        S: SetAlgebra<Element = Self>,
    {
        !self.is_element_of(set)
    }
}

impl<T> ElementOf for T {}

/// Membership predicates with the set as receiver.
pub trait SetMembership: SetAlgebra {
    /// `self ∋ element`.
    #[inline]
    fn has_element(&self, element: &Self::Element) -> bool {
        self.contains_element(element)
    }

    /// `self ∌ element`.
    #[inline]
    fn lacks_element(&self, element: &Self::Element) -> bool {
        !self.has_element(element)
    }
}

impl<S> SetMembership for S where S: SetAlgebra {}
