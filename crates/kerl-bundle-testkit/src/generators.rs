//! Proptest strategies for generating test data.

use kerl_bundle::core::{Tryte, TRYTE_ALPHABET};
use kerl_bundle::{Address, ObsoleteTag, ADDRESS_TRYTES, MAX_TIMESTAMP, MAX_VALUE, TAG_TRYTES};
use proptest::prelude::*;

use crate::fixtures::TxEntry;

/// Generate a single tryte value.
pub fn tryte() -> impl Strategy<Value = Tryte> {
    -13i8..=13i8
}

/// Generate a printable tryte string of exactly `len` characters.
pub fn tryte_string(len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(TRYTE_ALPHABET.to_vec()), len)
        .prop_map(|bytes| bytes.into_iter().map(char::from).collect())
}

/// Generate a valid address.
pub fn address() -> impl Strategy<Value = Address> {
    tryte_string(ADDRESS_TRYTES)
        .prop_map(|s| Address::parse(&s).expect("generated from the alphabet"))
}

/// Generate a valid obsolete tag, excluding the maximal one.
pub fn obsolete_tag() -> impl Strategy<Value = ObsoleteTag> {
    tryte_string(TAG_TRYTES)
        .prop_map(|s| ObsoleteTag::parse(&s).expect("generated from the alphabet"))
        .prop_filter("tag must be incrementable", |tag| !tag.is_max())
}

/// Generate a transfer value within the total supply.
pub fn value() -> impl Strategy<Value = i64> {
    prop_oneof![
        Just(0i64),
        -1_000_000i64..=1_000_000i64,
        -MAX_VALUE..=MAX_VALUE,
    ]
}

/// Generate a timestamp that fits its field.
pub fn timestamp() -> impl Strategy<Value = u64> {
    prop_oneof![0u64..=2_000_000_000u64, 0u64..=MAX_TIMESTAMP]
}

impl Arbitrary for TxEntry {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (address(), value(), obsolete_tag(), timestamp())
            .prop_map(|(address, value, obsolete_tag, timestamp)| TxEntry {
                address,
                value,
                obsolete_tag,
                timestamp,
            })
            .boxed()
    }
}

/// Generate the transactions of a bundle.
pub fn transactions(max: usize) -> impl Strategy<Value = Vec<TxEntry>> {
    prop::collection::vec(any::<TxEntry>(), 1..=max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::construct_bundle;
    use kerl_bundle::{is_secure, BundleConfig};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn finalized_hash_is_secure(txs in transactions(4)) {
            let mut bundle = construct_bundle(&txs, BundleConfig::default()).unwrap();
            let finalized = bundle.finalize().unwrap();
            prop_assert!(is_secure(&finalized.hash));
        }

        #[test]
        fn repaired_tag_reproduces_hash(txs in transactions(3)) {
            let mut bundle = construct_bundle(&txs, BundleConfig::default()).unwrap();
            let finalized = bundle.finalize().unwrap();

            let mut repaired = txs.clone();
            repaired[0].obsolete_tag = finalized.obsolete_tag;
            let rebuilt = construct_bundle(&repaired, BundleConfig::default()).unwrap();
            prop_assert_eq!(rebuilt.compute_hash().unwrap(), finalized.hash);
        }

        #[test]
        fn compute_hash_is_deterministic(txs in transactions(4)) {
            let a = construct_bundle(&txs, BundleConfig::default()).unwrap();
            let b = construct_bundle(&txs, BundleConfig::default()).unwrap();
            prop_assert_eq!(a.compute_hash().unwrap(), b.compute_hash().unwrap());
        }

        #[test]
        fn address_strings_roundtrip(s in tryte_string(ADDRESS_TRYTES)) {
            prop_assert_eq!(Address::parse(&s).unwrap().to_string(), s);
        }
    }
}
