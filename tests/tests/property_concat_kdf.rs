//! Property-based tests for the Concat KDF

use josekdf::prelude::*;
use proptest::prelude::*;

fn hash_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(HashAlgorithm::ALL.iter().map(|alg| alg.name()).collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn output_length_is_rounded_up_bytes(
        hash in hash_name(),
        z in prop::collection::vec(any::<u8>(), 1..=66),
        bits in 1usize..=2048,
        other_info in prop::collection::vec(any::<u8>(), 0..=64),
    ) {
        let kdf = ConcatKdf::new(hash).unwrap();
        let key = kdf.derive_key_raw(&z, bits, &other_info).unwrap();
        prop_assert_eq!(key.len(), (bits + 7) / 8);
        prop_assert_eq!(kdf.reps(bits).unwrap() as usize, (bits + kdf.hash_len_bits() - 1) / kdf.hash_len_bits());
    }

    #[test]
    fn derivation_is_deterministic(
        z in prop::collection::vec(any::<u8>(), 1..=48),
        bits in 1usize..=1024,
        apu in prop::collection::vec(any::<u8>(), 0..=16),
        apv in prop::collection::vec(any::<u8>(), 0..=16),
    ) {
        let info = OtherInfo::new().with_party_u_info(&apu).with_party_v_info(&apv);
        let first = ConcatKdf::new("SHA-256").unwrap().derive_key(&z, bits, &info).unwrap();
        let second = ConcatKdf::new("SHA-256").unwrap().derive_key(&z, bits, &info).unwrap();
        prop_assert_eq!(first, second);
    }

    /// A shorter request is a prefix of a longer one with the same inputs
    #[test]
    fn shorter_keys_are_prefixes(
        hash in hash_name(),
        z in prop::collection::vec(any::<u8>(), 1..=32),
        short in 1usize..=512,
        extra in 0usize..=512,
    ) {
        let kdf = ConcatKdf::new(hash).unwrap();
        let long = kdf.derive_key_raw(&z, short + extra, b"info").unwrap();
        let short_key = kdf.derive_key_raw(&z, short, b"info").unwrap();
        prop_assert_eq!(&long[..short_key.len()], short_key.as_slice());
    }

    #[test]
    fn components_equal_concatenation(
        parts in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..=12), 5),
        bits in 1usize..=512,
    ) {
        let z = [0x33u8; 32];
        let kdf = ConcatKdf::new("SHA-384").unwrap();
        let by_parts = kdf
            .derive_key_with_components(&z, bits, &parts[0], &parts[1], &parts[2], &parts[3], &parts[4])
            .unwrap();
        let by_bytes = kdf.derive_key_raw(&z, bits, &parts.concat()).unwrap();
        prop_assert_eq!(by_parts, by_bytes);
    }

    #[test]
    fn length_prefix_encodes_length(data in prop::collection::vec(any::<u8>(), 0..=300)) {
        let encoded = length_prefixed(&data).unwrap();
        prop_assert_eq!(&encoded[..4], &(data.len() as u32).to_be_bytes()[..]);
        prop_assert_eq!(&encoded[4..], data.as_slice());
    }
}
