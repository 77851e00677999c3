//! Error types for the Kerl bundle core.

use thiserror::Error;

/// Errors raised by the ternary codec.
///
/// All of these are caller errors: the input did not satisfy the fixed
/// widths and ranges of the encoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    #[error("invalid length for {what}: expected {expected}, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid tryte character {ch:?} at position {position}")]
    InvalidChar { ch: char, position: usize },

    #[error("tryte value {0} outside [-13, 13]")]
    TryteOutOfRange(i8),

    #[error("trit value {0} outside [-1, 1]")]
    TritOutOfRange(i8),

    #[error("{field} value {value} does not fit in {width} trits")]
    ValueOutOfRange {
        field: &'static str,
        value: i128,
        width: usize,
    },

    #[error("last trit of a hash must be zero")]
    NonZeroLastTrit,

    #[error("hex decoding error: {0}")]
    Hex(#[from] hex::FromHexError),
}
