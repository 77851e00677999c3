//! The bundle builder: accumulates transactions into a Kerl sponge and
//! finalizes them into a hash that is safe to sign.
//!
//! ```text
//! Empty --initialize--> Building --add_transaction (last)--> ReadyToFinalize --finalize--> Finalized
//! ```
//!
//! `initialize` may be called from any state and starts a fresh bundle.

use kerl_bundle_core::{Kerl, KerlHash, HASH_BYTES};
use serde::{Deserialize, Serialize};

use crate::error::{BundleError, Result};
use crate::essence::{increment_tag_in_block, Essence};
use crate::normalize::is_secure;
use crate::types::{Address, ObsoleteTag};

/// Configuration for the bundle builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleConfig {
    /// Largest number of transactions a bundle may declare.
    pub max_transactions: u32,
    /// Upper bound on tag increments during `finalize`. `None` means the
    /// search only stops when the tag itself runs out.
    pub max_tag_increments: Option<u32>,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            max_transactions: 8,
            max_tag_increments: None,
        }
    }
}

/// Lifecycle state of a [`BundleBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BundleState {
    /// Not initialized.
    Empty,
    /// Accepting transactions.
    Building,
    /// All declared transactions added.
    ReadyToFinalize,
    /// A secure hash has been produced.
    Finalized,
}

/// The outcome of [`BundleBuilder::finalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizedBundle {
    /// The bundle hash to sign. Never the normalized form.
    pub hash: KerlHash,
    /// How many times the first transaction's tag was incremented.
    pub tag_increment: u32,
    /// The first transaction's obsolete tag after the search.
    pub obsolete_tag: ObsoleteTag,
}

/// Accumulates one bundle.
///
/// The sponge belongs to this builder alone. Independent bundles need
/// independent builders.
#[derive(Debug, Clone)]
pub struct BundleBuilder {
    config: BundleConfig,
    state: BundleState,
    last_index: u32,
    current_index: u32,
    address: Option<Address>,
    /// Everything absorbed so far.
    sponge: Kerl,
    /// Snapshot taken right after the first address chunk.
    after_first_address: Option<Kerl>,
    /// Every chunk absorbed after the first address, in order. The first
    /// entry is the first transaction's essence.
    blocks: Vec<[u8; HASH_BYTES]>,
    tags: Vec<ObsoleteTag>,
}

impl Default for BundleBuilder {
    fn default() -> Self {
        Self::new(BundleConfig::default())
    }
}

impl BundleBuilder {
    /// Create an empty builder.
    pub fn new(config: BundleConfig) -> Self {
        Self {
            config,
            state: BundleState::Empty,
            last_index: 0,
            current_index: 0,
            address: None,
            sponge: Kerl::new(),
            after_first_address: None,
            blocks: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn config(&self) -> &BundleConfig {
        &self.config
    }

    pub fn state(&self) -> BundleState {
        self.state
    }

    pub fn last_index(&self) -> u32 {
        self.last_index
    }

    /// Index the next added transaction will receive.
    pub fn current_index(&self) -> u32 {
        self.current_index
    }

    pub fn is_finalized(&self) -> bool {
        self.state == BundleState::Finalized
    }

    /// Start a bundle of `last_index + 1` transactions.
    pub fn initialize(&mut self, last_index: u32) -> Result<()> {
        let requested = u64::from(last_index) + 1;
        if requested > u64::from(self.config.max_transactions) {
            return Err(BundleError::BundleTooLarge {
                requested,
                max: self.config.max_transactions,
            });
        }

        self.reset();
        self.last_index = last_index;
        self.state = BundleState::Building;
        tracing::debug!(transactions = requested, "bundle initialized");
        Ok(())
    }

    /// Drop all bundle data and return to [`BundleState::Empty`].
    pub fn reset(&mut self) {
        self.state = BundleState::Empty;
        self.last_index = 0;
        self.current_index = 0;
        self.address = None;
        self.sponge.reset();
        self.after_first_address = None;
        self.blocks.clear();
        self.tags.clear();
    }

    /// Stage the address of the next transaction.
    pub fn set_address(&mut self, address: Address) -> Result<()> {
        self.require(BundleState::Building, "set_address")?;
        self.address = Some(address);
        Ok(())
    }

    /// Stage the address of the next transaction from its 81 characters.
    pub fn set_address_chars(&mut self, address: &str) -> Result<()> {
        let address = Address::parse(address)?;
        self.set_address(address)
    }

    /// Add the next transaction, using the staged address.
    ///
    /// Returns the index assigned to the transaction. On error nothing is
    /// absorbed and the staged address is kept.
    pub fn add_transaction(
        &mut self,
        value: i64,
        obsolete_tag: ObsoleteTag,
        timestamp: u64,
    ) -> Result<u32> {
        match self.state {
            BundleState::Building => {}
            BundleState::ReadyToFinalize => {
                return Err(BundleError::TooManyTransactions {
                    count: self.last_index + 1,
                })
            }
            state => {
                return Err(BundleError::InvalidState {
                    operation: "add_transaction",
                    state,
                })
            }
        }

        let index = self.current_index;
        let address = self.address.ok_or(BundleError::AddressNotSet { index })?;
        let address_block = address.to_bytes()?;
        let essence_block = Essence {
            value,
            obsolete_tag,
            timestamp,
            current_index: index,
            last_index: self.last_index,
        }
        .to_block()?;

        self.sponge.absorb(&address_block);
        if index == 0 {
            self.after_first_address = Some(self.sponge.clone());
        } else {
            self.blocks.push(address_block);
        }
        self.sponge.absorb(&essence_block);
        self.blocks.push(essence_block);
        self.tags.push(obsolete_tag);

        self.address = None;
        self.current_index += 1;
        if self.current_index > self.last_index {
            self.state = BundleState::ReadyToFinalize;
        }
        Ok(index)
    }

    /// Squeeze the hash of the complete bundle without repairing it.
    pub fn compute_hash(&self) -> Result<KerlHash> {
        self.require(BundleState::ReadyToFinalize, "compute_hash")?;
        Ok(self.sponge.clone().squeeze())
    }

    /// Produce a hash that is safe to sign.
    ///
    /// While the normalized hash contains a maximal tryte, the first
    /// transaction's obsolete tag is incremented and the bundle re-hashed
    /// from the snapshot after the first address. If the search fails the
    /// builder is left exactly as it was.
    pub fn finalize(&mut self) -> Result<FinalizedBundle> {
        self.require(BundleState::ReadyToFinalize, "finalize")?;
        let invalid = || BundleError::InvalidState {
            operation: "finalize",
            state: BundleState::ReadyToFinalize,
        };
        let base = self.after_first_address.as_ref().ok_or_else(invalid)?;
        let mut first_essence = *self.blocks.first().ok_or_else(invalid)?;
        let mut tag = *self.tags.first().ok_or_else(invalid)?;

        let mut hash = self.sponge.clone().squeeze();
        let mut increments: u32 = 0;

        while !is_secure(&hash) {
            let budget_spent = self
                .config
                .max_tag_increments
                .is_some_and(|max| increments >= max);
            if budget_spent || increments == u32::MAX || !tag.increment() {
                tracing::warn!(increments, %tag, "no secure bundle hash found");
                return Err(BundleError::TagSpaceExhausted { increments });
            }
            increment_tag_in_block(&mut first_essence);
            increments += 1;

            let mut sponge = base.clone();
            sponge.absorb(&first_essence);
            for block in &self.blocks[1..] {
                sponge.absorb(block);
            }
            hash = sponge.squeeze();
            tracing::trace!(increments, %hash, "re-hashed with incremented tag");
        }

        self.blocks[0] = first_essence;
        self.tags[0] = tag;
        self.state = BundleState::Finalized;
        tracing::debug!(%hash, tag_increment = increments, "bundle finalized");

        Ok(FinalizedBundle {
            hash,
            tag_increment: increments,
            obsolete_tag: tag,
        })
    }

    /// The obsolete tag of a transaction, including any finalize repair.
    pub fn obsolete_tag(&self, index: u32) -> Result<ObsoleteTag> {
        self.tags
            .get(index as usize)
            .copied()
            .ok_or(BundleError::NoSuchTransaction(index))
    }

    fn require(&self, expected: BundleState, operation: &'static str) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(BundleError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }
}
