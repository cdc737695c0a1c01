// SPDX-License-Identifier: CC0-1.0

//! The SHA-256 digest value.

use core::ops::Index;
use core::slice::SliceIndex;
use core::{borrow, fmt, str};

use hex::DisplayHex as _;

use crate::{DigestEngine, FromSliceError};

/// Output of the SHA-256 hash function.
///
/// Formats as 64 lowercase hex characters, most significant byte first.
#[derive(Copy, Clone, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
pub struct Hash([u8; 32]);

impl Hash {
    /// Length of the hash, in bytes.
    pub const LEN: usize = 32;

    /// Constructs a new engine.
    pub fn engine() -> DigestEngine {
        DigestEngine::new()
    }

    /// Produces a hash from the current state of a given engine.
    pub fn from_engine(e: DigestEngine) -> Hash {
        e.finalize()
    }

    /// Hashes some bytes.
    pub fn hash(data: &[u8]) -> Hash {
        let mut engine = Hash::engine();
        engine.input(data);
        Hash::from_engine(engine)
    }

    /// Constructs a hash from the underlying byte array.
    pub const fn from_byte_array(bytes: [u8; 32]) -> Hash {
        Hash(bytes)
    }

    /// Copies a byte slice into a hash object.
    pub fn from_slice(sl: &[u8]) -> Result<Hash, FromSliceError> {
        if sl.len() != Self::LEN {
            Err(FromSliceError { expected: Self::LEN, got: sl.len() })
        } else {
            let mut ret = [0; 32];
            ret.copy_from_slice(sl);
            Ok(Hash(ret))
        }
    }

    /// Returns the underlying byte array.
    pub const fn to_byte_array(self) -> [u8; 32] {
        self.0
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_byte_array(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns an all zero hash.
    ///
    /// An all zeros hash is a made up construct because there is not a known input that can
    /// create it, however it is used in places as a placeholder value.
    pub const fn all_zeros() -> Hash {
        Hash([0; 32])
    }
}

impl fmt::LowerHex for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0[..].as_hex(), f)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:x}", self)
    }
}

impl str::FromStr for Hash {
    type Err = hex::HexToArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex::FromHex::from_hex(s).map(Hash)
    }
}

impl<I: SliceIndex<[u8]>> Index<I> for Hash {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.0[index]
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl borrow::Borrow<[u8]> for Hash {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Hash {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            s.collect_str(self)
        } else {
            s.serialize_bytes(&self.0)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Hash {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Hash, D::Error> {
        use serde::de::{Error, Visitor};

        struct HashVisitor;

        impl<'de> Visitor<'de> for HashVisitor {
            type Value = Hash;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a SHA-256 digest as 64 hex characters or 32 bytes")
            }

            fn visit_str<E: Error>(self, v: &str) -> Result<Hash, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_bytes<E: Error>(self, v: &[u8]) -> Result<Hash, E> {
                Hash::from_slice(v).map_err(E::custom)
            }
        }

        if d.is_human_readable() {
            d.deserialize_str(HashVisitor)
        } else {
            d.deserialize_bytes(HashVisitor)
        }
    }
}
