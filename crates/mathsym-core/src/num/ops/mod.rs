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

//! # Numeric Operation Notation
//!
//! By-value traits that give the arithmetic symbols of the notation a name.
//! Each method is a one-line redirect to the primitive operation it stands
//! for, implemented for the core integer and float types through macros or
//! blanket impls over `num_traits` bounds.
//!
//! ## Submodules
//!
//! - `arithmetic`: `Times` (`×`, `×=`), `DividedBy` (`÷`, `÷=`, plus a checked
//!   variant) and `Percent` (postfix `%`).
//! - `powers`: `Power` (`**`, `**=`) for floats and integers.
//! - `roots`: `Root` (`√`, `∛`, `∜`, `n√x`) and the `nth_root` function with
//!   sign handling for odd indices.
//! - `plus_minus`: `PlusMinus` (`±`, `∓`) returning ordered pairs.

pub mod arithmetic;
pub mod plus_minus;
pub mod powers;
pub mod roots;
