//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use kerl_bundle::{Address, BundleBuilder, BundleConfig, ObsoleteTag, Result};
use serde::{Deserialize, Serialize};

/// Addresses with known bundle hashes, see [`crate::vectors`].
pub const KNOWN_ADDRESSES: [&str; 3] = [
    "LHWIEGUADQXNMRKQSBDJOAFMBIFKHHZXYEFOU9WFRMBGODSNJAPGFHOUOSGDICSFVA9KOUPPCMLAHPHAW",
    "WLRSPFNMBJRWS9DFXCGIROJCZCPJQG9PMOO9CUZNQXTLLQAYXGXT9LECGEQ9MQIWIBGQREFHULPOETHNZ",
    "UMDTJXHIFVYVCHXKZNMQWMDHNLVQNMJMRULXUFRLNFVVUMKYZOAETVQOWSDUAKTXVNDSVAJCASTRQNV9D",
];

/// One transaction as handed to the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxEntry {
    pub address: Address,
    pub value: i64,
    pub obsolete_tag: ObsoleteTag,
    pub timestamp: u64,
}

impl TxEntry {
    /// A transaction with a zero tag and timestamp.
    ///
    /// Panics if `address` is not 81 valid characters.
    pub fn new(address: &str, value: i64) -> Self {
        Self {
            address: Address::parse(address).expect("fixture address must be valid"),
            value,
            obsolete_tag: ObsoleteTag::ZERO,
            timestamp: 0,
        }
    }

    pub fn with_tag(mut self, obsolete_tag: ObsoleteTag) -> Self {
        self.obsolete_tag = obsolete_tag;
        self
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Build a bundle from `transactions`, leaving it ready to finalize.
///
/// The config must allow at least `transactions.len()` transactions.
pub fn construct_bundle(transactions: &[TxEntry], config: BundleConfig) -> Result<BundleBuilder> {
    let mut bundle = BundleBuilder::new(config);
    let last_index = transactions.len().saturating_sub(1) as u32;
    bundle.initialize(last_index)?;

    for tx in transactions {
        bundle.set_address(tx.address)?;
        bundle.add_transaction(tx.value, tx.obsolete_tag, tx.timestamp)?;
    }
    Ok(bundle)
}

/// The three-transaction transfer used by the golden vectors.
pub fn known_transfer() -> Vec<TxEntry> {
    vec![
        TxEntry::new(KNOWN_ADDRESSES[0], 10),
        TxEntry::new(KNOWN_ADDRESSES[1], -5),
        TxEntry::new(KNOWN_ADDRESSES[2], -5),
    ]
}
