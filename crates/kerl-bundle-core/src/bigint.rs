//! 384-bit integer arithmetic backing the byte form of a hash.
//!
//! A 48-byte hash is a big-endian two's-complement integer. Internally it is
//! held as twelve 32-bit words, least significant word first, and all
//! operations wrap modulo 2^384.

use crate::types::HASH_BYTES;

/// Number of 32-bit words in a 384-bit integer.
pub(crate) const WORDS: usize = 12;

/// A 384-bit integer, little-endian word order.
pub(crate) type Words = [u32; WORDS];

/// (3^242 - 1) / 2, the largest value representable by 242 balanced trits.
pub(crate) const HALF_3: Words = half_three();

const fn pow3(exp: usize) -> Words {
    let mut out = [0u32; WORDS];
    out[0] = 1;
    let mut i = 0;
    while i < exp {
        let mut carry = 0u64;
        let mut j = 0;
        while j < WORDS {
            let v = out[j] as u64 * 3 + carry;
            out[j] = v as u32;
            carry = v >> 32;
            j += 1;
        }
        i += 1;
    }
    out
}

const fn half_three() -> Words {
    let mut out = pow3(242);
    // 3^242 is odd, so subtracting one only touches the low word.
    out[0] -= 1;
    let mut j = 0;
    while j < WORDS {
        let hi = if j + 1 < WORDS { out[j + 1] & 1 } else { 0 };
        out[j] = (out[j] >> 1) | (hi << 31);
        j += 1;
    }
    out
}

/// 3^exp for `exp < 242`.
pub(crate) fn power_of_three(exp: usize) -> Words {
    debug_assert!(exp < 242);
    pow3(exp)
}

pub(crate) fn from_be_bytes(bytes: &[u8; HASH_BYTES]) -> Words {
    let mut words = [0u32; WORDS];
    for (i, chunk) in bytes.chunks_exact(4).enumerate() {
        let word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        words[WORDS - 1 - i] = word;
    }
    words
}

pub(crate) fn to_be_bytes(words: &Words) -> [u8; HASH_BYTES] {
    let mut bytes = [0u8; HASH_BYTES];
    for (i, chunk) in bytes.chunks_exact_mut(4).enumerate() {
        chunk.copy_from_slice(&words[WORDS - 1 - i].to_be_bytes());
    }
    bytes
}

pub(crate) fn is_negative(words: &Words) -> bool {
    words[WORDS - 1] >> 31 == 1
}

pub(crate) fn not(words: &mut Words) {
    for w in words.iter_mut() {
        *w = !*w;
    }
}

/// `a += b`, wrapping.
pub(crate) fn add_assign(a: &mut Words, b: &Words) {
    let mut carry = 0u64;
    for (x, y) in a.iter_mut().zip(b) {
        let v = *x as u64 + *y as u64 + carry;
        *x = v as u32;
        carry = v >> 32;
    }
}

/// `a -= b`, wrapping.
pub(crate) fn sub_assign(a: &mut Words, b: &Words) {
    let mut borrow = 0i64;
    for (x, y) in a.iter_mut().zip(b) {
        let v = *x as i64 - *y as i64 - borrow;
        if v < 0 {
            *x = (v + (1i64 << 32)) as u32;
            borrow = 1;
        } else {
            *x = v as u32;
            borrow = 0;
        }
    }
}

/// `a = b - a`, wrapping.
pub(crate) fn sub_from(a: &mut Words, b: &Words) {
    let mut tmp = *b;
    sub_assign(&mut tmp, a);
    *a = tmp;
}

pub(crate) fn add_small(a: &mut Words, n: u32) {
    let mut carry = n as u64;
    for x in a.iter_mut() {
        if carry == 0 {
            break;
        }
        let v = *x as u64 + carry;
        *x = v as u32;
        carry = v >> 32;
    }
}

/// `a = a * m + n`, wrapping.
pub(crate) fn mul_add_small(a: &mut Words, m: u32, n: u32) {
    let mut carry = n as u64;
    for x in a.iter_mut() {
        let v = *x as u64 * m as u64 + carry;
        *x = v as u32;
        carry = v >> 32;
    }
}

/// Divides `a` in place by `d` and returns the remainder.
pub(crate) fn div_rem_small(a: &mut Words, d: u32) -> u32 {
    let mut rem = 0u64;
    for x in a.iter_mut().rev() {
        let v = (rem << 32) | *x as u64;
        *x = (v / d as u64) as u32;
        rem = v % d as u64;
    }
    rem as u32
}

/// Unsigned comparison.
pub(crate) fn cmp(a: &Words, b: &Words) -> std::cmp::Ordering {
    a.iter().rev().cmp(b.iter().rev())
}
