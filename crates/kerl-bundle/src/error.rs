//! Error types for the bundle engine.

use kerl_bundle_core::CodecError;
use thiserror::Error;

use crate::bundle::BundleState;

/// Errors that can occur while building or finalizing a bundle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BundleError {
    /// A field did not have the expected width, alphabet or range.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// An operation was called out of sequence.
    #[error("{operation} is not allowed in state {state:?}")]
    InvalidState {
        operation: &'static str,
        state: BundleState,
    },

    /// `add_transaction` was called without a staged address.
    #[error("no address set for transaction {index}")]
    AddressNotSet { index: u32 },

    /// More transactions were added than the bundle declared.
    #[error("bundle already holds all {count} declared transactions")]
    TooManyTransactions { count: u32 },

    /// The declared transaction count exceeds the configured limit.
    #[error("bundle of {requested} transactions exceeds the limit of {max}")]
    BundleTooLarge { requested: u64, max: u32 },

    /// No transaction exists at the given index.
    #[error("no transaction at index {0}")]
    NoSuchTransaction(u32),

    /// The tag search ran out of tag values (or of its configured budget)
    /// without finding a secure hash.
    #[error("tag search exhausted after {increments} increments")]
    TagSpaceExhausted { increments: u32 },
}

/// Result type for bundle operations.
pub type Result<T> = std::result::Result<T, BundleError>;
