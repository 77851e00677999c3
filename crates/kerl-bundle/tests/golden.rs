//! Known bundles with fixed expected hashes.
//!
//! Every implementation of the bundle engine must produce identical:
//! - unrepaired bundle hash
//! - number of tag increments
//! - finalized bundle hash

use kerl_bundle::{
    is_secure, normalized_hash, Address, BundleBuilder, BundleConfig, BundleError, BundleState,
    Essence, FinalizedBundle, KerlHash, ObsoleteTag,
};

const ADDRESSES: [&str; 3] = [
    "LHWIEGUADQXNMRKQSBDJOAFMBIFKHHZXYEFOU9WFRMBGODSNJAPGFHOUOSGDICSFVA9KOUPPCMLAHPHAW",
    "WLRSPFNMBJRWS9DFXCGIROJCZCPJQG9PMOO9CUZNQXTLLQAYXGXT9LECGEQ9MQIWIBGQREFHULPOETHNZ",
    "UMDTJXHIFVYVCHXKZNMQWMDHNLVQNMJMRULXUFRLNFVVUMKYZOAETVQOWSDUAKTXVNDSVAJCASTRQNV9D",
];
const VALUES: [i64; 3] = [10, -5, -5];

const UNREPAIRED_HASH: &str =
    "QYPTXEAWEIIAXHUKFMNJAWTWLKVXNVCQUCTF9EBPZBVVHJBOJTHTAGEQEAEWRFBG9MBWFPCR9OAYHZ9AC";
const FINALIZED_HASH: &str =
    "VMSEGGHKOUYTE9JNZEQIZWFUYHATWEVXAIJNPG9EDPCQRFAFWPCVGHYJDJWXAFNWRGUUPULXOCEJDBUVD";
const TAG_INCREMENTS: u32 = 404;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn three_transactions(first_tag: ObsoleteTag) -> BundleBuilder {
    let mut bundle = BundleBuilder::default();
    bundle.initialize(2).unwrap();
    add_known_transactions(&mut bundle, first_tag);
    bundle
}

fn add_known_transactions(bundle: &mut BundleBuilder, first_tag: ObsoleteTag) {
    for (i, (address, value)) in ADDRESSES.iter().zip(VALUES).enumerate() {
        let tag = if i == 0 { first_tag } else { ObsoleteTag::ZERO };
        bundle.set_address_chars(address).unwrap();
        assert_eq!(bundle.add_transaction(value, tag, 0).unwrap(), i as u32);
    }
}

fn assert_known_vectors(bundle: &mut BundleBuilder) {
    assert_eq!(bundle.compute_hash().unwrap().to_string(), UNREPAIRED_HASH);
    let finalized = bundle.finalize().unwrap();
    assert_eq!(finalized.tag_increment, TAG_INCREMENTS);
    assert_eq!(finalized.hash.to_string(), FINALIZED_HASH);
}

#[test]
fn test_unrepaired_hash() {
    init_tracing();
    let bundle = three_transactions(ObsoleteTag::ZERO);
    assert_eq!(bundle.state(), BundleState::ReadyToFinalize);
    assert_eq!(bundle.compute_hash().unwrap().to_string(), UNREPAIRED_HASH);
}

#[test]
fn test_unrepaired_hash_is_insecure() {
    let hash: KerlHash = UNREPAIRED_HASH.parse().unwrap();
    assert!(!is_secure(&hash));
}

#[test]
fn test_finalized_hash() {
    init_tracing();
    let mut bundle = three_transactions(ObsoleteTag::ZERO);
    let finalized = bundle.finalize().unwrap();

    assert_eq!(finalized.tag_increment, TAG_INCREMENTS);
    assert_eq!(finalized.hash.to_string(), FINALIZED_HASH);
    assert!(is_secure(&finalized.hash));
    assert!(!normalized_hash(&finalized.hash).contains(&13));

    let mut expected_tag = ObsoleteTag::ZERO;
    for _ in 0..TAG_INCREMENTS {
        assert!(expected_tag.increment());
    }
    assert_eq!(finalized.obsolete_tag, expected_tag);
    assert_ne!(finalized.obsolete_tag, ObsoleteTag::ZERO);
    assert_eq!(bundle.obsolete_tag(0).unwrap(), expected_tag);
    assert_eq!(bundle.obsolete_tag(1).unwrap(), ObsoleteTag::ZERO);
    assert_eq!(bundle.obsolete_tag(2).unwrap(), ObsoleteTag::ZERO);
}

#[test]
fn test_rebuild_with_repaired_tag() {
    let finalized = three_transactions(ObsoleteTag::ZERO).finalize().unwrap();

    let mut rebuilt = three_transactions(finalized.obsolete_tag);
    assert_eq!(rebuilt.compute_hash().unwrap(), finalized.hash);

    let again = rebuilt.finalize().unwrap();
    assert_eq!(again.tag_increment, 0);
    assert_eq!(again.hash, finalized.hash);
}

#[test]
fn test_bundle_reuse_after_initialize() {
    let mut bundle = three_transactions(ObsoleteTag::ZERO);
    bundle.finalize().unwrap();

    // Re-initializing discards the previous sponge entirely.
    bundle.initialize(2).unwrap();
    add_known_transactions(&mut bundle, ObsoleteTag::ZERO);
    assert_known_vectors(&mut bundle);
}

#[test]
fn test_reinitialize_after_extra_transaction() {
    let mut bundle = three_transactions(ObsoleteTag::ZERO);
    assert!(bundle.set_address_chars(ADDRESSES[0]).is_err());
    assert_eq!(
        bundle.add_transaction(1, ObsoleteTag::ZERO, 0),
        Err(BundleError::TooManyTransactions { count: 3 })
    );

    bundle.initialize(2).unwrap();
    add_known_transactions(&mut bundle, ObsoleteTag::ZERO);
    assert_known_vectors(&mut bundle);
}

#[test]
fn test_reinitialize_after_early_finalize() {
    let mut bundle = BundleBuilder::default();
    bundle.initialize(2).unwrap();
    bundle.set_address_chars(ADDRESSES[0]).unwrap();
    bundle.add_transaction(VALUES[0], ObsoleteTag::ZERO, 0).unwrap();
    assert_eq!(
        bundle.finalize(),
        Err(BundleError::InvalidState {
            operation: "finalize",
            state: BundleState::Building,
        })
    );

    bundle.initialize(2).unwrap();
    add_known_transactions(&mut bundle, ObsoleteTag::ZERO);
    assert_known_vectors(&mut bundle);
}

#[test]
fn test_transaction_order_matters() {
    let mut bundle = BundleBuilder::default();
    bundle.initialize(2).unwrap();
    for (address, value) in ADDRESSES.iter().zip(VALUES).rev() {
        bundle.set_address_chars(address).unwrap();
        bundle.add_transaction(value, ObsoleteTag::ZERO, 0).unwrap();
    }
    assert_ne!(bundle.compute_hash().unwrap().to_string(), UNREPAIRED_HASH);
}

#[test]
fn test_address_with_checksum_hashes_the_same() {
    let mut bundle = BundleBuilder::default();
    bundle.initialize(2).unwrap();
    for (address, value) in ADDRESSES.iter().zip(VALUES) {
        let full = format!("{}ABCDEFGHI", address);
        let address = Address::from_full(&full[..82]).unwrap();
        bundle.set_address(address).unwrap();
        bundle.add_transaction(value, ObsoleteTag::ZERO, 0).unwrap();
    }
    assert_eq!(bundle.compute_hash().unwrap().to_string(), UNREPAIRED_HASH);
}

#[test]
fn test_essence_increment_equivalence() {
    let mut block = Essence {
        value: -1,
        obsolete_tag: ObsoleteTag::ZERO,
        timestamp: 0,
        current_index: 0,
        last_index: 1,
    }
    .to_block()
    .unwrap();
    kerl_bundle::increment_tag_in_block(&mut block);

    let expected = Essence {
        value: -1,
        obsolete_tag: "A99999999999999999999999999".parse().unwrap(),
        timestamp: 0,
        current_index: 0,
        last_index: 1,
    }
    .to_block()
    .unwrap();
    assert_eq!(block, expected);
}

#[test]
fn test_tag_budget_below_requirement() {
    let mut bundle = BundleBuilder::new(BundleConfig {
        max_tag_increments: Some(TAG_INCREMENTS - 1),
        ..BundleConfig::default()
    });
    bundle.initialize(2).unwrap();
    add_known_transactions(&mut bundle, ObsoleteTag::ZERO);

    assert_eq!(
        bundle.finalize(),
        Err(BundleError::TagSpaceExhausted {
            increments: TAG_INCREMENTS - 1
        })
    );
    assert_eq!(bundle.state(), BundleState::ReadyToFinalize);
    assert_eq!(bundle.compute_hash().unwrap().to_string(), UNREPAIRED_HASH);
}

#[test]
fn test_finalized_bundle_json() {
    let finalized = three_transactions(ObsoleteTag::ZERO).finalize().unwrap();
    let json = serde_json::to_value(&finalized).unwrap();

    assert_eq!(json["hash"], FINALIZED_HASH);
    assert_eq!(json["tag_increment"], TAG_INCREMENTS);
    assert_eq!(json["obsolete_tag"], finalized.obsolete_tag.to_string());

    let back: FinalizedBundle = serde_json::from_value(json).unwrap();
    assert_eq!(back, finalized);
}
