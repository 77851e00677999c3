//! Ternary primitives and the hash newtype.
//!
//! A trit is a balanced ternary digit and a tryte is three of them. Both are
//! plain `i8` aliases; the fixed-width values built from them are newtypes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::conversion::{
    bytes_to_trits, bytes_to_trytes, chars_to_trytes, encode_trits, tryte_char, trytes_to_trits,
};
use crate::error::CodecError;

/// A balanced ternary digit in `[-1, 1]`.
pub type Trit = i8;

/// Three trits, a value in `[-13, 13]`.
pub type Tryte = i8;

pub const TRITS_PER_TRYTE: usize = 3;

/// Smallest tryte value, printed as `N`.
pub const MIN_TRYTE_VALUE: Tryte = -13;

/// Largest tryte value, printed as `M`.
pub const MAX_TRYTE_VALUE: Tryte = 13;

/// Trits in one hash, and in one absorbed chunk.
pub const HASH_TRITS: usize = 243;

/// Trytes in one hash.
pub const HASH_TRYTES: usize = HASH_TRITS / TRITS_PER_TRYTE;

/// Bytes in the binary form of one hash (a 384-bit integer).
pub const HASH_BYTES: usize = 48;

/// An 81-tryte Kerl digest, stored in its 48-byte form.
///
/// The bytes are a big-endian two's-complement integer whose balanced
/// ternary expansion is the tryte form. The last trit of a hash is always
/// zero, which makes the byte and tryte forms interchangeable.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KerlHash([u8; HASH_BYTES]);

impl KerlHash {
    /// Create from raw bytes.
    ///
    /// Integers outside the 242-trit range are reduced into it, so the
    /// stored bytes are always the canonical form of their tryte expansion.
    pub fn from_bytes(bytes: [u8; HASH_BYTES]) -> Self {
        Self(encode_trits(&bytes_to_trits(&bytes)))
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; HASH_BYTES] {
        &self.0
    }

    /// Create from 81 trytes. The last trit must be zero.
    pub fn from_trytes(trytes: &[Tryte]) -> Result<Self, CodecError> {
        if trytes.len() != HASH_TRYTES {
            return Err(CodecError::InvalidLength {
                what: "hash trytes",
                expected: HASH_TRYTES,
                actual: trytes.len(),
            });
        }
        let mut trits = [0; HASH_TRITS];
        trytes_to_trits(trytes, &mut trits)?;
        if trits[HASH_TRITS - 1] != 0 {
            return Err(CodecError::NonZeroLastTrit);
        }
        Ok(Self(encode_trits(&trits)))
    }

    /// The balanced ternary expansion of the hash.
    pub fn to_trits(&self) -> [Trit; HASH_TRITS] {
        bytes_to_trits(&self.0)
    }

    /// The 81 trytes of the hash.
    pub fn to_trytes(&self) -> [Tryte; HASH_TRYTES] {
        bytes_to_trytes(&self.0)
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, CodecError> {
        let bytes = hex::decode(s)?;
        Self::try_from(bytes.as_slice())
    }

    /// The all-zero hash (`999…9`).
    pub const ZERO: Self = Self([0u8; HASH_BYTES]);
}

impl fmt::Debug for KerlHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KerlHash({}…)", &self.to_string()[..16])
    }
}

impl fmt::Display for KerlHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tryte in self.to_trytes() {
            write!(f, "{}", tryte_char(tryte))?;
        }
        Ok(())
    }
}

impl FromStr for KerlHash {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trytes = chars_to_trytes(s)?;
        Self::from_trytes(&trytes)
    }
}

impl AsRef<[u8]> for KerlHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; HASH_BYTES]> for KerlHash {
    fn from(bytes: [u8; HASH_BYTES]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&[u8]> for KerlHash {
    type Error = CodecError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; HASH_BYTES] = slice.try_into().map_err(|_| CodecError::InvalidLength {
            what: "hash bytes",
            expected: HASH_BYTES,
            actual: slice.len(),
        })?;
        Ok(Self::from_bytes(arr))
    }
}

impl Serialize for KerlHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for KerlHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
