use proptest::prelude::*;

use keyforge_primitives::mnemonic::ENTROPY_LENGTHS;
use keyforge_primitives::{base58, base64, hex as hexcodec, Mnemonic};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn base58_roundtrip(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let encoded = base58::encode(&bytes);
        prop_assert_eq!(base58::decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn base64_roundtrip(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let encoded = base64::encode(&bytes);
        prop_assert_eq!(base64::decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn hex_roundtrip(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let encoded = hexcodec::encode(&bytes);
        prop_assert_eq!(hexcodec::decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn encode_range_agrees_with_slicing(
        bytes in prop::collection::vec(any::<u8>(), 1..64),
        offset in 0usize..64,
        length in 0usize..64
    ) {
        let in_bounds = offset
            .checked_add(length)
            .map(|end| end <= bytes.len())
            .unwrap_or(false);
        let b64 = base64::encode_range(&bytes, offset, length);
        let hx = hexcodec::encode_range(&bytes, offset, length);
        if in_bounds {
            let slice = &bytes[offset..offset + length];
            prop_assert_eq!(b64.unwrap(), base64::encode(slice));
            prop_assert_eq!(hx.unwrap(), hexcodec::encode(slice));
        } else {
            prop_assert!(b64.is_err());
            prop_assert!(hx.is_err());
        }
    }

    #[test]
    fn mnemonic_roundtrip(
        class in 0usize..5,
        bytes in prop::collection::vec(any::<u8>(), 32)
    ) {
        let entropy = &bytes[..ENTROPY_LENGTHS[class]];
        let mnemonic = Mnemonic::from_entropy(entropy).unwrap();
        let rebuilt = Mnemonic::from_phrase(&mnemonic.phrase()).unwrap();
        prop_assert_eq!(rebuilt.to_entropy(), entropy);
    }
}
