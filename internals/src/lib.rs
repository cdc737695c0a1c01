// SPDX-License-Identifier: CC0-1.0

//! # Summer internal code
//!
//! Internal types and macros used by the `summer` crates. This is not intended to
//! be used directly by downstream users.

#![no_std]
// Coding conventions.
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod error;
