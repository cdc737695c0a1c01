// SPDX-License-Identifier: CC0-1.0

//! SHA-256 message digests following FIPS 180-4.
//!
//! The computation is split the way the standard describes it: [`pad`] turns
//! the message into 64-byte blocks, [`schedule`] expands each block into 64
//! words, [`compress`] folds those words into the eight working registers and
//! [`DigestEngine`] drives the three across the whole message.
//!
//! # Examples
//!
//! ```rust
//! use summer_hashes::Hash;
//!
//! let hash = Hash::hash(b"abc");
//! assert_eq!(
//!     hash.to_string(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
//! );
//! ```
//!
//! Hashing anything that implements `std::io::Read`:
//!
//! ```rust
//! # fn main() -> std::io::Result<()> {
//! let hash = summer_hashes::digest(&b"abc"[..])?;
//! assert_eq!(hash, summer_hashes::Hash::hash(b"abc"));
//! # Ok(())
//! # }
//! ```

#![no_std]
// Experimental features we need.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Coding conventions.
#![warn(missing_docs)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod block;
pub mod compress;
pub mod consts;
pub mod engine;
mod hash;
#[cfg(feature = "std")]
mod impls;
pub mod pad;
pub mod schedule;

use core::fmt;

pub use hex::HexToArrayError;

#[rustfmt::skip]                // Keep public re-exports separate.
#[doc(inline)]
pub use self::{
    engine::DigestEngine,
    hash::Hash,
};

/// Computes the digest of everything `reader` yields.
///
/// Fails only when reading fails; the error is returned unchanged.
#[cfg(feature = "std")]
pub fn digest<R: std::io::Read>(reader: R) -> std::io::Result<Hash> {
    let mut engine = DigestEngine::new();
    engine.read_from(reader)?;
    Ok(engine.finalize())
}

/// Attempted to create a hash from an invalid length slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromSliceError {
    expected: usize,
    got: usize,
}

impl FromSliceError {
    /// Returns the expected slice length.
    pub fn expected_length(&self) -> usize {
        self.expected
    }

    /// Returns the invalid slice length.
    pub fn invalid_length(&self) -> usize {
        self.got
    }
}

impl fmt::Display for FromSliceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid slice length {} (expected {})", self.got, self.expected)
    }
}
