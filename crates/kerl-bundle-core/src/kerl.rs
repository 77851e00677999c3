//! Kerl: the ledger's sponge over Keccak-384.
//!
//! Each absorbed unit is a 243-trit chunk in its 48-byte form. Squeezing
//! finalizes Keccak-384 and reduces the digest so that its last trit is zero.
//! A further squeeze continues from a state seeded with the bitwise
//! complement of the previous raw digest.

use sha3::{Digest, Keccak384};
use std::fmt;

use crate::conversion::encode_trits;
use crate::error::CodecError;
use crate::types::{KerlHash, Trit, HASH_BYTES, HASH_TRITS};

/// An owned Kerl sponge.
///
/// The state is only reachable through [`absorb`](Self::absorb),
/// [`squeeze`](Self::squeeze) and [`reset`](Self::reset). Cloning takes a
/// snapshot that evolves independently of the original.
#[derive(Clone, Default)]
pub struct Kerl {
    keccak: Keccak384,
}

impl Kerl {
    /// Create a sponge in its initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        Digest::reset(&mut self.keccak);
    }

    /// Absorb one chunk in byte form.
    pub fn absorb(&mut self, chunk: &[u8; HASH_BYTES]) {
        self.keccak.update(chunk);
    }

    /// Absorb a whole number of chunks in byte form.
    pub fn absorb_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        if bytes.len() % HASH_BYTES != 0 {
            return Err(CodecError::InvalidLength {
                what: "absorbed bytes",
                expected: bytes.len().next_multiple_of(HASH_BYTES),
                actual: bytes.len(),
            });
        }
        self.keccak.update(bytes);
        Ok(())
    }

    /// Absorb a whole number of 243-trit chunks.
    ///
    /// The last trit of every chunk is ignored.
    pub fn absorb_trits(&mut self, trits: &[Trit]) -> Result<(), CodecError> {
        if trits.len() % HASH_TRITS != 0 {
            return Err(CodecError::InvalidLength {
                what: "absorbed trits",
                expected: trits.len().next_multiple_of(HASH_TRITS),
                actual: trits.len(),
            });
        }
        let mut chunk = [0; HASH_TRITS];
        for block in trits.chunks_exact(HASH_TRITS) {
            if let Some(&bad) = block.iter().find(|t| !(-1..=1).contains(*t)) {
                return Err(CodecError::TritOutOfRange(bad));
            }
            chunk.copy_from_slice(block);
            self.absorb(&encode_trits(&chunk));
        }
        Ok(())
    }

    /// Squeeze one hash.
    pub fn squeeze(&mut self) -> KerlHash {
        let digest = self.keccak.finalize_reset();
        let mut raw = [0u8; HASH_BYTES];
        raw.copy_from_slice(&digest);

        let mut next = raw;
        for byte in next.iter_mut() {
            *byte = !*byte;
        }
        self.keccak.update(next);

        KerlHash::from_bytes(raw)
    }
}

impl fmt::Debug for Kerl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kerl").finish_non_exhaustive()
    }
}
