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

//! # Identity Notation
//!
//! `≡` and `≢` read as "is identical to": two handles refer to the very same
//! object, not merely to equal values. Plain references compare addresses,
//! while `Rc` and `Arc` compare their allocations.
//!
//! ```rust
//! use mathsym_core::cmp::identity::{Identity, identical};
//! use std::rc::Rc;
//!
//! let a = String::from("x");
//! let b = String::from("x");
//! assert!(identical(&a, &a));
//! assert!(!identical(&a, &b));
//!
//! let shared = Rc::new(5);
//! let alias = Rc::clone(&shared);
//! assert!(shared.is_identical_to(&alias));
//! assert!(shared.is_not_identical_to(&Rc::new(5)));
//! ```

use std::{rc::Rc, sync::Arc};

/// `a ≡ b`: both references point to the same object.
///
/// For unsized values the comparison includes the pointer metadata, so two
/// slices starting at the same address but with different lengths are not
/// identical.
#[inline(always)]
pub fn identical<T>(a: &T, b: &T) -> bool
where
    T: ?Sized,
{
    std::ptr::eq(a, b)
}

/// `a ≢ b`: the references point to different objects.
#[inline(always)]
pub fn not_identical<T>(a: &T, b: &T) -> bool
where
    T: ?Sized,
{
    !identical(a, b)
}

/// Identity notation for shared-ownership pointers.
pub trait Identity {
    /// `self ≡ other`.
    fn is_identical_to(&self, other: &Self) -> bool;

    /// `self ≢ other`.
    #[inline(always)]
    fn is_not_identical_to(&self, other: &Self) -> bool {
        !self.is_identical_to(other)
    }
}

impl<T> Identity for Rc<T>
where
    T: ?Sized,
{
    #[inline(always)]
    fn is_identical_to(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T> Identity for Arc<T>
where
    T: ?Sized,
{
    #[inline(always)]
    fn is_identical_to(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}
