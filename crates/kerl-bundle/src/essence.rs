//! Transaction essence serialization.
//!
//! Every transaction contributes two 243-trit chunks to the bundle hash: its
//! address, then the essence chunk below. The offsets are part of the
//! ledger's binary contract; changing any of them changes every hash.
//!
//! | field         | trits     |
//! |---------------|-----------|
//! | value         | 0..81     |
//! | obsolete tag  | 81..162   |
//! | timestamp     | 162..189  |
//! | current index | 189..216  |
//! | last index    | 216..243  |

use kerl_bundle_core::{
    bytes_increment_trit, int_to_trits, trits_to_bytes, trytes_to_trits, CodecError, Trit,
    HASH_BYTES, HASH_TRITS,
};
use serde::{Deserialize, Serialize};

use crate::types::{ObsoleteTag, TAG_TRYTES};

pub const VALUE_OFFSET: usize = 0;
pub const VALUE_TRITS: usize = 81;
pub const TAG_OFFSET: usize = 81;
pub const TAG_TRITS: usize = TAG_TRYTES * 3;
pub const TIMESTAMP_OFFSET: usize = 162;
pub const TIMESTAMP_TRITS: usize = 27;
pub const CURRENT_INDEX_OFFSET: usize = 189;
pub const LAST_INDEX_OFFSET: usize = 216;
pub const INDEX_TRITS: usize = 27;

/// Trits a value may actually occupy: the total supply is (3^33 - 1) / 2.
const VALUE_SIGNIFICANT_TRITS: usize = 33;

/// Largest absolute value of a transfer.
pub const MAX_VALUE: i64 = 2_779_530_283_277_761;

/// Largest timestamp that fits its 27 trits.
pub const MAX_TIMESTAMP: u64 = 3_812_798_742_493;

/// The hashed fields of one transaction, apart from its address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Essence {
    pub value: i64,
    pub obsolete_tag: ObsoleteTag,
    pub timestamp: u64,
    pub current_index: u32,
    pub last_index: u32,
}

impl Essence {
    /// Pack the fields into one chunk in byte form.
    pub fn to_block(&self) -> Result<[u8; HASH_BYTES], CodecError> {
        let mut trits: [Trit; HASH_TRITS] = [0; HASH_TRITS];

        int_to_trits(
            "value",
            self.value,
            &mut trits[VALUE_OFFSET..VALUE_OFFSET + VALUE_SIGNIFICANT_TRITS],
        )?;
        trytes_to_trits(
            self.obsolete_tag.trytes(),
            &mut trits[TAG_OFFSET..TAG_OFFSET + TAG_TRITS],
        )?;
        let timestamp = i64::try_from(self.timestamp).map_err(|_| CodecError::ValueOutOfRange {
            field: "timestamp",
            value: self.timestamp as i128,
            width: TIMESTAMP_TRITS,
        })?;
        int_to_trits(
            "timestamp",
            timestamp,
            &mut trits[TIMESTAMP_OFFSET..TIMESTAMP_OFFSET + TIMESTAMP_TRITS],
        )?;
        int_to_trits(
            "current index",
            self.current_index.into(),
            &mut trits[CURRENT_INDEX_OFFSET..CURRENT_INDEX_OFFSET + INDEX_TRITS],
        )?;
        int_to_trits(
            "last index",
            self.last_index.into(),
            &mut trits[LAST_INDEX_OFFSET..LAST_INDEX_OFFSET + INDEX_TRITS],
        )?;

        trits_to_bytes(&trits)
    }
}

/// Increment the obsolete tag of an essence chunk in byte form.
///
/// Produces the same bytes as re-serializing the essence with
/// [`ObsoleteTag::increment`] applied, as long as the tag was not at its
/// maximum.
pub fn increment_tag_in_block(block: &mut [u8; HASH_BYTES]) {
    bytes_increment_trit(block, TAG_OFFSET);
}
