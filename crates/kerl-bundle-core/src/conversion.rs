//! Balanced ternary codec.
//!
//! Conversions between the four representations used by the ledger:
//!
//! - **chars**: the printable alphabet `9ABCDEFGHIJKLMNOPQRSTUVWXYZ`
//! - **trytes**: values in `[-13, 13]`, one per char
//! - **trits**: values in `[-1, 1]`, three per tryte, least significant first
//! - **bytes**: a 243-trit chunk as a 48-byte big-endian two's-complement
//!   integer
//!
//! The byte form only carries 242 trits. The 243rd trit of a chunk is
//! dropped when converting to bytes and is always zero when converting back.
//! Every absorbed chunk and every squeezed digest goes through this form, so
//! the exact arithmetic here is part of the hash's binary contract.

use std::cmp::Ordering;

use crate::bigint::{self, HALF_3};
use crate::error::CodecError;
use crate::types::{
    Trit, Tryte, HASH_BYTES, HASH_TRITS, HASH_TRYTES, MAX_TRYTE_VALUE, MIN_TRYTE_VALUE,
    TRITS_PER_TRYTE,
};

/// The printable alphabet. Index `i` encodes the tryte `i` for `i <= 13`
/// and `i - 27` above.
pub const TRYTE_ALPHABET: &[u8; 27] = b"9ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Decode one printable char.
pub fn char_to_tryte(c: char) -> Option<Tryte> {
    match c {
        '9' => Some(0),
        'A'..='M' => Some((c as u8 - b'A') as Tryte + 1),
        'N'..='Z' => Some((c as u8 - b'N') as Tryte + MIN_TRYTE_VALUE),
        _ => None,
    }
}

/// Encode one tryte, or `None` when it is out of range.
pub fn tryte_to_char(tryte: Tryte) -> Option<char> {
    if (MIN_TRYTE_VALUE..=MAX_TRYTE_VALUE).contains(&tryte) {
        Some(tryte_char(tryte))
    } else {
        None
    }
}

/// Encode a tryte known to be in range.
///
/// Out-of-range values wrap modulo 27 instead of failing.
pub fn tryte_char(tryte: Tryte) -> char {
    TRYTE_ALPHABET[tryte.rem_euclid(27) as usize] as char
}

/// Decode a printable string into trytes.
pub fn chars_to_trytes(s: &str) -> Result<Vec<Tryte>, CodecError> {
    s.chars()
        .enumerate()
        .map(|(position, ch)| char_to_tryte(ch).ok_or(CodecError::InvalidChar { ch, position }))
        .collect()
}

/// Encode trytes as a printable string.
pub fn trytes_to_chars(trytes: &[Tryte]) -> Result<String, CodecError> {
    trytes
        .iter()
        .map(|&t| tryte_to_char(t).ok_or(CodecError::TryteOutOfRange(t)))
        .collect()
}

/// Expand trytes into `trits`, which must hold exactly three per tryte.
pub fn trytes_to_trits(trytes: &[Tryte], trits: &mut [Trit]) -> Result<(), CodecError> {
    if trits.len() != trytes.len() * TRITS_PER_TRYTE {
        return Err(CodecError::InvalidLength {
            what: "trit buffer",
            expected: trytes.len() * TRITS_PER_TRYTE,
            actual: trits.len(),
        });
    }
    for (&tryte, chunk) in trytes.iter().zip(trits.chunks_exact_mut(TRITS_PER_TRYTE)) {
        if !(MIN_TRYTE_VALUE..=MAX_TRYTE_VALUE).contains(&tryte) {
            return Err(CodecError::TryteOutOfRange(tryte));
        }
        write_balanced(tryte as i128, chunk);
    }
    Ok(())
}

/// Group trits into trytes. A trailing partial group is rejected.
pub fn trits_to_trytes(trits: &[Trit]) -> Result<Vec<Tryte>, CodecError> {
    if trits.len() % TRITS_PER_TRYTE != 0 {
        return Err(CodecError::InvalidLength {
            what: "trits",
            expected: trits.len() - trits.len() % TRITS_PER_TRYTE,
            actual: trits.len(),
        });
    }
    trits
        .chunks_exact(TRITS_PER_TRYTE)
        .map(|chunk| {
            if let Some(&bad) = chunk.iter().find(|t| !(-1..=1).contains(*t)) {
                return Err(CodecError::TritOutOfRange(bad));
            }
            Ok(chunk[0] + 3 * chunk[1] + 9 * chunk[2])
        })
        .collect()
}

/// Write `value` as balanced ternary, least significant trit first, and
/// return whatever did not fit.
fn write_balanced(mut value: i128, trits: &mut [Trit]) -> i128 {
    for trit in trits.iter_mut() {
        let digit = (value + 1).rem_euclid(3) - 1;
        *trit = digit as Trit;
        value = (value - digit) / 3;
    }
    value
}

/// Encode a signed integer into a fixed-width trit field.
///
/// `field` names the value in the error when it does not fit. The contents
/// of `trits` are unspecified after an error.
pub fn int_to_trits(field: &'static str, value: i64, trits: &mut [Trit]) -> Result<(), CodecError> {
    if write_balanced(value as i128, trits) != 0 {
        return Err(CodecError::ValueOutOfRange {
            field,
            value: value as i128,
            width: trits.len(),
        });
    }
    Ok(())
}

/// Decode a balanced ternary field into an `i64`.
pub fn trits_to_int(trits: &[Trit]) -> Result<i64, CodecError> {
    let overflow = || CodecError::ValueOutOfRange {
        field: "i64",
        value: 0,
        width: trits.len(),
    };
    let mut acc: i128 = 0;
    for &trit in trits.iter().rev() {
        if !(-1..=1).contains(&trit) {
            return Err(CodecError::TritOutOfRange(trit));
        }
        acc = acc
            .checked_mul(3)
            .and_then(|v| v.checked_add(trit as i128))
            .ok_or_else(overflow)?;
    }
    i64::try_from(acc).map_err(|_| CodecError::ValueOutOfRange {
        field: "i64",
        value: acc,
        width: trits.len(),
    })
}

/// Convert a 243-trit chunk to its 48-byte form. The last trit is ignored.
pub fn trits_to_bytes(trits: &[Trit; HASH_TRITS]) -> Result<[u8; HASH_BYTES], CodecError> {
    if let Some(&bad) = trits.iter().find(|t| !(-1..=1).contains(*t)) {
        return Err(CodecError::TritOutOfRange(bad));
    }
    Ok(encode_trits(trits))
}

/// [`trits_to_bytes`] for trits already known to be in `[-1, 1]`.
pub(crate) fn encode_trits(trits: &[Trit; HASH_TRITS]) -> [u8; HASH_BYTES] {
    let mut base = [0u32; bigint::WORDS];
    for &trit in trits[..HASH_TRITS - 1].iter().rev() {
        bigint::mul_add_small(&mut base, 3, (trit + 1) as u32);
    }
    // base holds the value shifted by HALF_3; undo the shift in two's complement.
    bigint::sub_assign(&mut base, &HALF_3);
    bigint::to_be_bytes(&base)
}

/// Convert 48 bytes to a 243-trit chunk.
///
/// Integers outside the 242-trit range are reduced modulo 3^242. The last
/// trit is always zero.
pub fn bytes_to_trits(bytes: &[u8; HASH_BYTES]) -> [Trit; HASH_TRITS] {
    let mut base = bigint::from_be_bytes(bytes);
    let mut flip = false;

    if !bigint::is_negative(&base) {
        bigint::add_assign(&mut base, &HALF_3);
    } else {
        // base becomes |x| - 1
        bigint::not(&mut base);
        if bigint::cmp(&base, &HALF_3) != Ordering::Less {
            // Below the representable range: encode |x| - 3^242 and negate.
            bigint::sub_assign(&mut base, &HALF_3);
            flip = true;
        } else {
            bigint::add_small(&mut base, 1);
            bigint::sub_from(&mut base, &HALF_3);
        }
    }

    let mut trits = [0; HASH_TRITS];
    for trit in trits[..HASH_TRITS - 1].iter_mut() {
        let digit = bigint::div_rem_small(&mut base, 3) as Trit - 1;
        *trit = if flip { -digit } else { digit };
    }
    trits
}

/// Convert 81 trytes to bytes.
pub fn trytes_to_bytes(trytes: &[Tryte]) -> Result<[u8; HASH_BYTES], CodecError> {
    if trytes.len() != HASH_TRYTES {
        return Err(CodecError::InvalidLength {
            what: "trytes",
            expected: HASH_TRYTES,
            actual: trytes.len(),
        });
    }
    let mut trits = [0; HASH_TRITS];
    trytes_to_trits(trytes, &mut trits)?;
    Ok(encode_trits(&trits))
}

/// Convert bytes to 81 trytes.
pub fn bytes_to_trytes(bytes: &[u8; HASH_BYTES]) -> [Tryte; HASH_TRYTES] {
    let trits = bytes_to_trits(bytes);
    let mut trytes = [0; HASH_TRYTES];
    for (tryte, chunk) in trytes.iter_mut().zip(trits.chunks_exact(TRITS_PER_TRYTE)) {
        *tryte = chunk[0] + 3 * chunk[1] + 9 * chunk[2];
    }
    trytes
}

/// Convert an 81-char printable string to bytes.
pub fn chars_to_bytes(s: &str) -> Result<[u8; HASH_BYTES], CodecError> {
    trytes_to_bytes(&chars_to_trytes(s)?)
}

/// Convert bytes to an 81-char printable string.
pub fn bytes_to_chars(bytes: &[u8; HASH_BYTES]) -> String {
    bytes_to_trytes(bytes).iter().map(|&t| tryte_char(t)).collect()
}

/// Add one unit at trit position `index` of a chunk held in byte form.
///
/// This is the same as incrementing the balanced ternary number starting at
/// `index` (with carry into the following trits), without leaving the byte
/// domain. `index` must be below 242.
pub fn bytes_increment_trit(bytes: &mut [u8; HASH_BYTES], index: usize) {
    let mut value = bigint::from_be_bytes(bytes);
    bigint::add_assign(&mut value, &bigint::power_of_three(index));
    *bytes = bigint::to_be_bytes(&value);
}
