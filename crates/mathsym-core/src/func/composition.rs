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

//! Function composition, `∘`.
//!
//! `f ∘ g` is the function `x ↦ f(g(x))`: the right operand is applied
//! first.
//!
//! ```rust
//! use mathsym_core::func::composition::{compose, Compose};
//!
//! let f = |x: i32| x * x;
//! let g = |x: i32| x + 2;
//! let h = |x: i32| x * 2 - 6;
//!
//! let fgh = compose(f, compose(g, h));
//! assert_eq!(fgh(3), 4);
//!
//! let also = f.after(g).after(h);
//! assert_eq!(also(3), 4);
//! ```

/// `f ∘ g`: returns the function `x ↦ f(g(x))`.
///
/// # Examples
///
/// ```rust
/// # use mathsym_core::func::composition::compose;
/// let describe = compose(|n: usize| format!("{n} chars"), str::len);
/// assert_eq!(describe("hello"), "5 chars");
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |x| f(g(x))
}

/// Method form of [`compose`], available on every `Fn`.
pub trait Compose<A, B>: Fn(A) -> B + Sized {
    /// `self ∘ inner`: applies `inner`, then `self`.
    #[inline]
    fn after<Z, G>(self, inner: G) -> impl Fn(Z) -> B
    where
        G: Fn(Z) -> A,
    {
        compose(self, inner)
    }

    /// `next ∘ self`: applies `self`, then `next`.
    #[inline]
    fn then<C, G>(self, next: G) -> impl Fn(A) -> C
    where
        G: Fn(B) -> C,
    {
        compose(next, self)
    }
}

impl<A, B, F> Compose<A, B> for F where F: Fn(A) -> B {}
