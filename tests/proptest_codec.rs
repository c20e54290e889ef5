use proptest::prelude::*;

use keyconv::crypto::{expand_seed, KeyCodec, KeyScheme, Keypair};
use keyconv::KeyConvError;

const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn keypair_bytes_survive_encode_decode(bytes in prop::collection::vec(any::<u8>(), 64)) {
        let codec = KeyCodec::new(KeyScheme::Keypair);
        let encoded = codec.encode(&bytes).unwrap();
        prop_assert!(encoded.chars().all(|c| ALPHABET.contains(c)));
        let decoded = codec.decode(&encoded).unwrap();
        prop_assert_eq!(decoded.expose(), bytes.as_slice());
    }

    #[test]
    fn decoded_text_re_encodes_identically(bytes in prop::array::uniform32(any::<u8>())) {
        // Any text the codec accepts must come back unchanged
        let codec = KeyCodec::new(KeyScheme::Seed);
        let text = bs58::encode(bytes).into_string();
        let decoded = codec.decode(&text).unwrap();
        prop_assert_eq!(codec.encode(decoded.expose()).unwrap(), text);
    }

    #[test]
    fn encoding_is_deterministic(bytes in prop::collection::vec(any::<u8>(), 64)) {
        let codec = KeyCodec::default();
        prop_assert_eq!(codec.encode(&bytes).unwrap(), codec.encode(&bytes).unwrap());
    }

    #[test]
    fn wrong_lengths_are_rejected(len in 1usize..128) {
        prop_assume!(len != 64);
        let codec = KeyCodec::default();
        let bytes = vec![0xA5u8; len];

        let encode_err = codec.encode(&bytes).unwrap_err();
        prop_assert!(matches!(encode_err, KeyConvError::InvalidInput(_)));

        let text = bs58::encode(&bytes).into_string();
        let decode_err = codec.decode(&text).unwrap_err();
        prop_assert!(matches!(decode_err, KeyConvError::InvalidEncoding(_)));
    }

    #[test]
    fn text_with_ambiguous_character_is_rejected(
        prefix in "[1-9A-HJ-NP-Za-km-z]{0,40}",
        bad in prop::sample::select(vec!['0', 'O', 'I', 'l', ' ', '+', '/']),
    ) {
        let codec = KeyCodec::default();
        let text = format!("{}{}", prefix, bad);
        let err = codec.decode(&text).unwrap_err();
        prop_assert!(matches!(err, KeyConvError::InvalidEncoding(_)));
    }

    #[test]
    fn expanded_seed_is_a_consistent_keypair(seed in prop::array::uniform32(any::<u8>())) {
        let expanded = expand_seed(&seed).unwrap();
        prop_assert_eq!(&expanded.expose()[..32], &seed[..]);

        let keypair = Keypair::from_keypair_bytes(expanded.expose()).unwrap();
        let from_seed = Keypair::from_seed(&seed).unwrap();
        prop_assert_eq!(keypair.public_key(), from_seed.public_key());
    }
}
