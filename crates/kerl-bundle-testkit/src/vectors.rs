//! Golden bundle vectors for cross-implementation verification.
//!
//! Each vector pins the unrepaired hash of one bundle and the outcome of
//! finalizing it: either the repaired hash, tag and increment count, or the
//! point at which the tag search gives up.

use kerl_bundle::{BundleConfig, BundleError, ObsoleteTag};
use serde::Serialize;

use crate::fixtures::{construct_bundle, known_transfer, TxEntry, KNOWN_ADDRESSES};

/// The expected result of `finalize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FinalizeOutcome {
    /// A secure hash was found.
    Secure {
        tag_increment: u32,
        obsolete_tag: &'static str,
        hash: &'static str,
    },
    /// The tag search failed after this many increments.
    Exhausted { increments: u32 },
}

/// A golden bundle vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenBundle {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Transactions in bundle order.
    pub transactions: Vec<TxEntry>,
    /// Expected hash before any tag repair.
    pub expected_hash: &'static str,
    /// Expected result of finalizing.
    pub expected_outcome: FinalizeOutcome,
}

/// What one vector actually produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ActualOutcome {
    Secure {
        tag_increment: u32,
        obsolete_tag: String,
        hash: String,
    },
    Exhausted {
        increments: u32,
    },
    Failed(String),
}

/// The outcome of running one vector.
#[derive(Debug, Clone, Serialize)]
pub struct VectorResult {
    pub name: String,
    pub matches: bool,
    pub hash: String,
    pub outcome: ActualOutcome,
}

/// Get all golden vectors.
pub fn all_vectors() -> Vec<GoldenBundle> {
    vec![
        GoldenBundle {
            name: "three transaction transfer",
            transactions: known_transfer(),
            expected_hash:
                "QYPTXEAWEIIAXHUKFMNJAWTWLKVXNVCQUCTF9EBPZBVVHJBOJTHTAGEQEAEWRFBG9MBWFPCR9OAYHZ9AC",
            expected_outcome: FinalizeOutcome::Secure {
                tag_increment: 404,
                obsolete_tag: "ZOA999999999999999999999999",
                hash: "VMSEGGHKOUYTE9JNZEQIZWFUYHATWEVXAIJNPG9EDPCQRFAFWPCVGHYJDJWXAFNWRGUUPULXOCEJDBUVD",
            },
        },
        GoldenBundle {
            name: "single zero-value transaction",
            transactions: vec![TxEntry::new(KNOWN_ADDRESSES[0], 0)],
            expected_hash:
                "XYDPPWVSKUDZKSPQFHFZXSSHOQUJKJDOHANO9PFHSAQUY9THOKEUKRODJHWUIHQIWJOXYJJVVUXTITYO9",
            expected_outcome: FinalizeOutcome::Secure {
                tag_increment: 23,
                obsolete_tag: "WA9999999999999999999999999",
                hash: "CJBEDGYUFHRTQKDGLRUHJNK9EBJFUJQWYJOWWJYKIXKBUWCWYCWZGCMBZUKPV9CAJIWTQOCIGWGZUGZCB",
            },
        },
        GoldenBundle {
            name: "tagged transfer with timestamps",
            transactions: vec![
                TxEntry::new(KNOWN_ADDRESSES[1], 100)
                    .with_tag("TESTTAG9999999999999999999A".parse().expect("valid tag"))
                    .with_timestamp(1_500_000_000),
                TxEntry::new(KNOWN_ADDRESSES[2], -100).with_timestamp(1_500_000_001),
            ],
            expected_hash:
                "XZPRTLOFHODCIBWWBJAVFCCAOEHLCQBPLZWETMEECOJST9YCEGJMMDM9WHSWWISXCTWQEIWXDIMPTFLB9",
            expected_outcome: FinalizeOutcome::Secure {
                tag_increment: 62,
                obsolete_tag: "AGSTTAG9999999999999999999A",
                hash: "RHEBJSZISPQROVBFBEBTABEJDAPXEANKCNVSRHJIEJSGQOTZOHLDPKXENZKK9XNQEXWQGCFZHVELXYYXB",
            },
        },
        GoldenBundle {
            name: "maximal first tag",
            transactions: vec![
                TxEntry::new(KNOWN_ADDRESSES[2], 0).with_tag(ObsoleteTag::MAX),
                TxEntry::new(KNOWN_ADDRESSES[0], 0),
            ],
            expected_hash:
                "ORTXFSRJPRFZVABRAXOKTBNWSRYFQ9WPNTE9IEWZKEUYV9PSHRRSDRFAMYAAXSLFEDSEWQKPGFKEHROXC",
            expected_outcome: FinalizeOutcome::Exhausted { increments: 0 },
        },
    ]
}

/// Run one vector and compare it with its expected outcome.
pub fn run_vector(vector: &GoldenBundle) -> VectorResult {
    let config = BundleConfig {
        max_transactions: vector.transactions.len() as u32,
        ..BundleConfig::default()
    };
    let failed = |e: BundleError| VectorResult {
        name: vector.name.to_string(),
        matches: false,
        hash: String::new(),
        outcome: ActualOutcome::Failed(e.to_string()),
    };

    let mut bundle = match construct_bundle(&vector.transactions, config) {
        Ok(bundle) => bundle,
        Err(e) => return failed(e),
    };
    let hash = match bundle.compute_hash() {
        Ok(hash) => hash.to_string(),
        Err(e) => return failed(e),
    };
    let outcome = match bundle.finalize() {
        Ok(f) => ActualOutcome::Secure {
            tag_increment: f.tag_increment,
            obsolete_tag: f.obsolete_tag.to_string(),
            hash: f.hash.to_string(),
        },
        Err(BundleError::TagSpaceExhausted { increments }) => {
            ActualOutcome::Exhausted { increments }
        }
        Err(e) => ActualOutcome::Failed(e.to_string()),
    };

    let outcome_matches = match (&vector.expected_outcome, &outcome) {
        (
            FinalizeOutcome::Secure {
                tag_increment,
                obsolete_tag,
                hash,
            },
            ActualOutcome::Secure {
                tag_increment: actual_increment,
                obsolete_tag: actual_tag,
                hash: actual_hash,
            },
        ) => {
            tag_increment == actual_increment
                && *obsolete_tag == actual_tag.as_str()
                && *hash == actual_hash.as_str()
        }
        (
            FinalizeOutcome::Exhausted { increments },
            ActualOutcome::Exhausted {
                increments: actual,
            },
        ) => increments == actual,
        _ => false,
    };

    VectorResult {
        name: vector.name.to_string(),
        matches: hash == vector.expected_hash && outcome_matches,
        hash,
        outcome,
    }
}

/// Verify all golden vectors.
///
/// Call this to verify your implementation matches the reference.
pub fn verify_all_vectors() -> Vec<VectorResult> {
    all_vectors().iter().map(run_vector).collect()
}
