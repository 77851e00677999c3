//! Fixed-width tryte fields of a transaction.
//!
//! Both types are parsed from the printable alphabet and reject any other
//! length or character.

use kerl_bundle_core::{
    char_to_tryte, chars_to_trytes, tryte_char, trytes_to_bytes, CodecError, Tryte, HASH_BYTES,
    HASH_TRYTES, MAX_TRYTE_VALUE, MIN_TRYTE_VALUE,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Trytes in an address.
pub const ADDRESS_TRYTES: usize = HASH_TRYTES;

/// Trytes in an obsolete tag.
pub const TAG_TRYTES: usize = 27;

fn parse_fixed<const N: usize>(s: &str, what: &'static str) -> Result<[Tryte; N], CodecError> {
    let trytes = chars_to_trytes(s)?;
    trytes.try_into().map_err(|v: Vec<Tryte>| CodecError::InvalidLength {
        what,
        expected: N,
        actual: v.len(),
    })
}

/// An 81-tryte address.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([Tryte; ADDRESS_TRYTES]);

impl Address {
    /// Parse an address from exactly 81 characters.
    pub fn parse(s: &str) -> Result<Self, CodecError> {
        parse_fixed(s, "address").map(Self)
    }

    /// Parse the full form handed over by the address collaborator.
    ///
    /// Accepts 81 characters, or 82 where the trailing checksum character is
    /// dropped before it ever reaches the hash. The checksum character must
    /// still be in the alphabet.
    pub fn from_full(s: &str) -> Result<Self, CodecError> {
        let Some((split, checksum)) = s.char_indices().nth(ADDRESS_TRYTES) else {
            return Self::parse(s);
        };
        if split + checksum.len_utf8() != s.len() {
            return Self::parse(s);
        }
        let address = Self::parse(&s[..split])?;
        if char_to_tryte(checksum).is_none() {
            return Err(CodecError::InvalidChar {
                ch: checksum,
                position: ADDRESS_TRYTES,
            });
        }
        Ok(address)
    }

    /// Get the trytes.
    pub const fn trytes(&self) -> &[Tryte; ADDRESS_TRYTES] {
        &self.0
    }

    /// The address block absorbed into the sponge.
    pub fn to_bytes(&self) -> Result<[u8; HASH_BYTES], CodecError> {
        trytes_to_bytes(&self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|&t| write!(f, "{}", tryte_char(t)))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({}…)", &self.to_string()[..16])
    }
}

impl FromStr for Address {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A 27-tryte obsolete tag.
///
/// Read as a balanced ternary number (first tryte least significant), the
/// tag is the counter that the secure-hash search increments.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObsoleteTag([Tryte; TAG_TRYTES]);

impl ObsoleteTag {
    /// The all-zero tag, `999…9`.
    pub const ZERO: Self = Self([0; TAG_TRYTES]);

    /// The largest tag, `MMM…M`.
    pub const MAX: Self = Self([MAX_TRYTE_VALUE; TAG_TRYTES]);

    /// Parse a tag from exactly 27 characters.
    pub fn parse(s: &str) -> Result<Self, CodecError> {
        parse_fixed(s, "obsolete tag").map(Self)
    }

    /// Get the trytes.
    pub const fn trytes(&self) -> &[Tryte; TAG_TRYTES] {
        &self.0
    }

    /// Whether the tag cannot be incremented any further.
    pub fn is_max(&self) -> bool {
        *self == Self::MAX
    }

    /// Add one to the tag, carrying across trytes.
    ///
    /// Returns `false` and leaves the tag unchanged when it is already at
    /// its maximum.
    pub fn increment(&mut self) -> bool {
        if self.is_max() {
            return false;
        }
        for tryte in self.0.iter_mut() {
            if *tryte < MAX_TRYTE_VALUE {
                *tryte += 1;
                break;
            }
            *tryte = MIN_TRYTE_VALUE;
        }
        true
    }
}

impl Default for ObsoleteTag {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for ObsoleteTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|&t| write!(f, "{}", tryte_char(t)))
    }
}

impl fmt::Debug for ObsoleteTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObsoleteTag({})", self)
    }
}

impl FromStr for ObsoleteTag {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ObsoleteTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ObsoleteTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
