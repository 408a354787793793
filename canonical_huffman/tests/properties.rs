use canonical_huffman::{is_complete, limit_code_lengths, Codec, Coding, ProvisionalTree};
use proptest::prelude::*;

fn text() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..16, 1..300)
}

fn weights() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(1u32..10_000, 2..64)
}

fn check_prefix_free<V>(coding: &Coding<V>) -> Result<(), TestCaseError> {
    for (i, a) in coding.codes.iter().enumerate() {
        for (j, b) in coding.codes.iter().enumerate() {
            if i != j { prop_assert!(!a.is_prefix_of(b), "{} is a prefix of {}", a, b); }
        }
    }
    Ok(())
}

fn check_canonical<V>(coding: &Coding<V>) -> Result<(), TestCaseError> {
    let codes: Vec<_> = coding.codes().map(|(_, c)| *c).collect();
    prop_assert_eq!(codes[0].content, 0);
    for pair in codes.windows(2) {
        prop_assert!(pair[0].len <= pair[1].len);
        prop_assert_eq!(pair[0].successor(pair[1].len), pair[1]);
    }
    Ok(())
}

proptest! {
    #[test]
    fn unlimited_round_trip(text in text()) {
        let codec = Codec::new();
        let encoded = codec.encode(&text).unwrap();
        prop_assert_eq!(codec.decode(&encoded), text.clone());
        prop_assert_eq!(encoded.coding.decode_exact(&encoded.bits).unwrap(), text);
    }

    #[test]
    fn codes_are_prefix_free_and_canonical(text in text(), max_code_length in 0u32..8) {
        if let Ok(encoded) = Codec::with_max_code_length(max_code_length).encode(&text) {
            check_prefix_free(&encoded.coding)?;
            check_canonical(&encoded.coding)?;
            for (index, code) in encoded.coding.codes.iter().enumerate() {
                prop_assert_eq!(encoded.coding.trie.code_of(index), Some(*code));
            }
        }
    }

    #[test]
    fn tree_depths_are_complete(weights in weights()) {
        let lengths = ProvisionalTree::build(&weights).unwrap().code_lengths();
        prop_assert!(is_complete(&lengths));
    }

    #[test]
    fn limiting_keeps_completeness(weights in weights(), max_code_length in 1u32..12) {
        let mut lengths = ProvisionalTree::build(&weights).unwrap().code_lengths().into_vec();
        let mut before = lengths.clone();
        before.sort_unstable();
        match limit_code_lengths(&mut lengths, max_code_length) {
            Ok(()) => {
                prop_assert!(lengths.iter().all(|l| *l <= max_code_length));
                prop_assert!(lengths.windows(2).all(|p| p[0] <= p[1]));
                prop_assert!(is_complete(&lengths));
                prop_assert_eq!(lengths.len(), before.len());
                if before.last().copied().unwrap_or(0) <= max_code_length {
                    prop_assert_eq!(lengths, before);
                }
            }
            Err(_) => prop_assert!(before.last().copied().unwrap_or(0) > max_code_length)
        }
    }

    #[test]
    fn limited_round_trip(text in text(), max_code_length in 1u32..8) {
        let codec = Codec::with_max_code_length(max_code_length);
        if let Ok(encoded) = codec.encode(&text) {
            prop_assert!(encoded.coding.max_code_length() <= max_code_length);
            prop_assert_eq!(codec.decode(&encoded), text);
        }
    }

    #[test]
    fn limiting_never_shortens_the_encoding(text in text(), max_code_length in 1u32..8) {
        let unlimited = Codec::new().encode(&text).unwrap();
        if let Ok(limited) = Codec::with_max_code_length(max_code_length).encode(&text) {
            prop_assert!(limited.len() >= unlimited.len());
        }
    }
}
