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

//! # Mathsym Sets
//!
//! Set notation over the standard library's set types. The notation is
//! written once against the [`SetAlgebra`](algebra::SetAlgebra) trait, which
//! is implemented for `HashSet` (with any default-constructible hasher) and
//! `BTreeSet`.
//!
//! ## Modules
//!
//! - `algebra`: The `SetAlgebra` abstraction and the empty set `Ø`.
//! - `membership`: `∈ ∉` (element receiver) and `∋ ∌` (set receiver).
//! - `subsets`: `⊂ ⊄ ⊆ ⊈ ⊊`.
//! - `supersets`: `⊃ ⊅ ⊇ ⊉ ⊋`.
//! - `operations`: `∩ ∪ ∖ ∆` and the cartesian product `×`.
//!
//! ## Example
//!
//! ```rust
//! use mathsym_sets::algebra::SetAlgebra;
//! use mathsym_sets::membership::ElementOf;
//! use mathsym_sets::operations::intersection;
//! use mathsym_sets::subsets::Subsets;
//! use std::collections::HashSet;
//!
//! let evens: HashSet<u32> = (0..10).step_by(2).collect();
//! let small: HashSet<u32> = (0..5).collect();
//! let both = intersection(&evens, &small);
//!
//! assert!(both.is_strict_subset_of(&evens));
//! assert!(4u32.is_element_of(&both));
//! assert_eq!(both.cardinality(), 3);
//! ```

pub mod algebra;
pub mod membership;
pub mod operations;
pub mod subsets;
pub mod supersets;
