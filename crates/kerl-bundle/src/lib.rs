//! # Kerl Bundle
//!
//! Computes the hash that binds a group of transactions (a bundle) together,
//! and repairs it until it is safe to sign with a one-time signature.
//!
//! ## Overview
//!
//! - **Essence**: the hashed fields of each transaction, packed into one
//!   243-trit chunk
//! - **Builder**: absorbs each transaction's address and essence into a Kerl
//!   sponge, in order
//! - **Normalization**: balances each third of a hash so it can drive a
//!   Winternitz-style signature
//! - **Finalize**: increments the first transaction's obsolete tag until the
//!   normalized hash contains no maximal tryte
//!
//! ## Usage
//!
//! ```rust
//! use kerl_bundle::{BundleBuilder, BundleConfig, ObsoleteTag};
//!
//! let mut bundle = BundleBuilder::new(BundleConfig::default());
//! bundle.initialize(0).unwrap();
//! bundle
//!     .set_address_chars(
//!         "LHWIEGUADQXNMRKQSBDJOAFMBIFKHHZXYEFOU9WFRMBGODSNJAPGFHOUOSGDICSFVA9KOUPPCMLAHPHAW",
//!     )
//!     .unwrap();
//! bundle.add_transaction(0, ObsoleteTag::ZERO, 0).unwrap();
//!
//! let finalized = bundle.finalize().unwrap();
//! assert!(kerl_bundle::is_secure(&finalized.hash));
//! ```
//!
//! ## Re-exports
//!
//! - `kerl_bundle::core` - the tryte codec and Kerl sponge

pub mod bundle;
pub mod error;
pub mod essence;
pub mod normalize;
pub mod types;

pub use kerl_bundle_core as core;

pub use bundle::{BundleBuilder, BundleConfig, BundleState, FinalizedBundle};
pub use error::{BundleError, Result};
pub use essence::{increment_tag_in_block, Essence, MAX_TIMESTAMP, MAX_VALUE};
pub use normalize::{is_secure, normalize, normalized_hash};
pub use types::{Address, ObsoleteTag, ADDRESS_TRYTES, TAG_TRYTES};

pub use kerl_bundle_core::{CodecError, Kerl, KerlHash};
