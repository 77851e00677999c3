//! # Kerl Bundle Core
//!
//! Pure primitives for the bundle hash engine: balanced ternary values, the
//! codec between their printable, ternary and binary forms, and the Kerl
//! sponge.
//!
//! This crate contains no I/O and no global state. It is pure computation
//! over fixed-width ternary data.
//!
//! ## Key Types
//!
//! - [`Trit`] / [`Tryte`] - balanced ternary digits
//! - [`KerlHash`] - an 81-tryte digest, convertible to and from 48 bytes
//! - [`Kerl`] - the absorb/squeeze sponge over Keccak-384
//!
//! ## Codec
//!
//! All conversions live in the [`conversion`] module. The byte form of a
//! 243-trit chunk is a 384-bit two's-complement integer; see that module for
//! the exact rules.

mod bigint;
pub mod conversion;
pub mod error;
pub mod kerl;
pub mod types;

pub use conversion::{
    bytes_increment_trit, bytes_to_chars, bytes_to_trits, bytes_to_trytes, char_to_tryte,
    chars_to_bytes, chars_to_trytes, int_to_trits, trits_to_bytes, trits_to_int, trits_to_trytes,
    trytes_to_bytes, trytes_to_chars, trytes_to_trits, tryte_char, TRYTE_ALPHABET,
};
pub use error::CodecError;
pub use kerl::Kerl;
pub use types::{
    KerlHash, Trit, Tryte, HASH_BYTES, HASH_TRITS, HASH_TRYTES, MAX_TRYTE_VALUE,
    MIN_TRYTE_VALUE, TRITS_PER_TRYTE,
};
