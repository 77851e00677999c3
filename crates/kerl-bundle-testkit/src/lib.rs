//! # Kerl Bundle Testkit
//!
//! Testing utilities for the Kerl bundle engine.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known bundles with expected hashes for cross-implementation verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helpers for assembling bundles in tests
//!
//! ## Golden Vectors
//!
//! ```rust
//! use kerl_bundle_testkit::vectors::verify_all_vectors;
//!
//! for result in verify_all_vectors() {
//!     assert!(result.matches, "{}: {:?}", result.name, result.outcome);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use kerl_bundle::{is_secure, BundleConfig};
//! use kerl_bundle_testkit::{construct_bundle, generators::transactions};
//!
//! proptest! {
//!     #[test]
//!     fn finalized_hash_is_secure(txs in transactions(4)) {
//!         let mut bundle = construct_bundle(&txs, BundleConfig::default()).unwrap();
//!         prop_assert!(is_secure(&bundle.finalize().unwrap().hash));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use kerl_bundle::BundleConfig;
//! use kerl_bundle_testkit::fixtures::{construct_bundle, known_transfer};
//!
//! let bundle = construct_bundle(&known_transfer(), BundleConfig::default()).unwrap();
//! let hash = bundle.compute_hash().unwrap();
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{construct_bundle, known_transfer, TxEntry, KNOWN_ADDRESSES};
pub use generators::transactions;
pub use vectors::{
    all_vectors, run_vector, verify_all_vectors, ActualOutcome, FinalizeOutcome, GoldenBundle,
    VectorResult,
};
