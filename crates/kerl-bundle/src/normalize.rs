//! Hash normalization and the signing-safety predicate.
//!
//! A one-time signature over a hash reveals, per tryte, a number of hashing
//! rounds derived from the normalized hash. A normalized tryte of
//! [`MAX_TRYTE_VALUE`] would expose an unhashed private key fragment, so such
//! hashes must not be signed.

use kerl_bundle_core::{KerlHash, Tryte, HASH_TRYTES, MAX_TRYTE_VALUE, MIN_TRYTE_VALUE};

/// Trytes per independently normalized group.
pub const NORMALIZED_FRAGMENT_TRYTES: usize = 27;

/// Normalize a hash so that every 27-tryte group sums to zero.
///
/// While a group's sum is positive, the first tryte above the minimum is
/// decremented; while negative, the first tryte below the maximum is
/// incremented. A group that already sums to zero is left unchanged.
pub fn normalize(trytes: &[Tryte; HASH_TRYTES]) -> [Tryte; HASH_TRYTES] {
    let mut normalized = *trytes;
    for group in normalized.chunks_exact_mut(NORMALIZED_FRAGMENT_TRYTES) {
        normalize_group(group);
    }
    normalized
}

fn normalize_group(group: &mut [Tryte]) {
    let mut sum: i32 = group.iter().map(|&t| t as i32).sum();

    while sum > 0 {
        if let Some(tryte) = group.iter_mut().find(|t| **t > MIN_TRYTE_VALUE) {
            *tryte -= 1;
        }
        sum -= 1;
    }
    while sum < 0 {
        if let Some(tryte) = group.iter_mut().find(|t| **t < MAX_TRYTE_VALUE) {
            *tryte += 1;
        }
        sum += 1;
    }
}

/// Normalize a hash given in any of its forms.
pub fn normalized_hash(hash: &KerlHash) -> [Tryte; HASH_TRYTES] {
    normalize(&hash.to_trytes())
}

/// Whether a hash may be signed.
pub fn is_secure(hash: &KerlHash) -> bool {
    !normalized_hash(hash).contains(&MAX_TRYTE_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn with_prefix(prefix: &[Tryte]) -> [Tryte; HASH_TRYTES] {
        let mut trytes = [0; HASH_TRYTES];
        trytes[..prefix.len()].copy_from_slice(prefix);
        trytes
    }

    #[test]
    fn test_normalize_zero() {
        let zero = [0; HASH_TRYTES];
        assert_eq!(normalize(&zero), zero);
    }

    #[test]
    fn test_normalize_max_pair() {
        let trytes = with_prefix(&[MAX_TRYTE_VALUE, MAX_TRYTE_VALUE]);
        assert_eq!(
            normalize(&trytes),
            with_prefix(&[MIN_TRYTE_VALUE, MAX_TRYTE_VALUE])
        );
    }

    #[test]
    fn test_normalize_min_pair() {
        let trytes = with_prefix(&[MIN_TRYTE_VALUE, MIN_TRYTE_VALUE]);
        assert_eq!(
            normalize(&trytes),
            with_prefix(&[MAX_TRYTE_VALUE, MIN_TRYTE_VALUE])
        );
    }

    #[test]
    fn test_groups_are_independent() {
        let mut trytes = [0; HASH_TRYTES];
        trytes[27] = 5;
        trytes[54] = -3;
        let normalized = normalize(&trytes);

        assert_eq!(&normalized[..27], &[0; 27]);
        assert_eq!(normalized[27], 0);
        assert_eq!(normalized[54], 0);
    }

    #[test]
    fn test_saturated_prefix_is_skipped() {
        // Sum 2: the leading minimum trytes cannot move, so the third one does.
        let trytes = with_prefix(&[MIN_TRYTE_VALUE, MIN_TRYTE_VALUE, 13, 13, 2]);
        let normalized = normalize(&trytes);
        assert_eq!(&normalized[..5], &[MIN_TRYTE_VALUE, MIN_TRYTE_VALUE, 11, 13, 2]);
    }

    #[test]
    fn test_is_secure() {
        assert!(is_secure(&KerlHash::ZERO));

        // 'M' in the first group with everything else balanced stays 'M'.
        let mut trytes = [0; HASH_TRYTES];
        trytes[3] = MAX_TRYTE_VALUE;
        trytes[4] = MIN_TRYTE_VALUE;
        let hash = KerlHash::from_trytes(&trytes).unwrap();
        assert!(!is_secure(&hash));

        trytes[3] = 12;
        trytes[4] = -12;
        let hash = KerlHash::from_trytes(&trytes).unwrap();
        assert!(is_secure(&hash));
    }

    proptest! {
        #[test]
        fn groups_sum_to_zero(trytes in prop::collection::vec(-13i8..=13, HASH_TRYTES)) {
            let mut input = [0; HASH_TRYTES];
            input.copy_from_slice(&trytes);
            let normalized = normalize(&input);

            for group in normalized.chunks_exact(NORMALIZED_FRAGMENT_TRYTES) {
                prop_assert_eq!(group.iter().map(|&t| t as i32).sum::<i32>(), 0);
                prop_assert!(group.iter().all(|t| (MIN_TRYTE_VALUE..=MAX_TRYTE_VALUE).contains(t)));
            }
        }

        #[test]
        fn normalization_is_idempotent(trytes in prop::collection::vec(-13i8..=13, HASH_TRYTES)) {
            let mut input = [0; HASH_TRYTES];
            input.copy_from_slice(&trytes);
            let once = normalize(&input);
            prop_assert_eq!(normalize(&once), once);
        }
    }
}
