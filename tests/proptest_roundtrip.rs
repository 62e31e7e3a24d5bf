//! Property-based tests for the LZ11 codec.
//!
//! - compress/decompress round trip for arbitrary and highly repetitive input
//! - pass-through for buffers without the marker byte
//! - configured windows round trip as well

use proptest::prelude::*;

use lz11::{CompressionOptions, MARKER, compress_to_vec, compress_with, decompress_to_vec};

/// Inputs built from a small alphabet so that matches of every length occur.
fn repetitive_input() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec((0u8..4, 1usize..400), 0..24).prop_map(|runs| {
        runs.into_iter()
            .flat_map(|(b, n)| core::iter::repeat_n(b, n))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        max_shrink_iters: 100,
        ..ProptestConfig::default()
    })]

    /// Property: decompress(compress(x)) == x.
    #[test]
    fn prop_round_trip(input in prop::collection::vec(any::<u8>(), 0..2048)) {
        let compressed = compress_to_vec(&input);
        prop_assert_eq!(decompress_to_vec(&compressed).unwrap(), input);
    }

    /// Property: round trip holds on run-heavy input that exercises long matches.
    #[test]
    fn prop_round_trip_repetitive(input in repetitive_input()) {
        let compressed = compress_to_vec(&input);
        prop_assert_eq!(decompress_to_vec(&compressed).unwrap(), input);
    }

    /// Property: anything not starting with the marker comes back unchanged.
    #[test]
    fn prop_pass_through(input in prop::collection::vec(any::<u8>(), 0..512)) {
        prop_assume!(input.first() != Some(&MARKER));
        prop_assert_eq!(decompress_to_vec(&input).unwrap(), input);
    }

    /// Property: every valid configuration produces a stream the decoder accepts.
    #[test]
    fn prop_round_trip_with_options(
        input in repetitive_input(),
        window in 1usize..=4096,
        max_match_len in 3usize..=272,
    ) {
        let opts = CompressionOptions::new(window, max_match_len).unwrap();
        let mut compressed = Vec::new();
        compress_with(&input, &opts, &mut compressed);
        prop_assert_eq!(decompress_to_vec(&compressed).unwrap(), input);
    }

    /// Property: arbitrary marker-prefixed garbage never panics the decoder.
    #[test]
    fn prop_malformed_never_panics(body in prop::collection::vec(any::<u8>(), 0..256)) {
        let mut data = vec![MARKER];
        data.extend(body);
        let _ = decompress_to_vec(&data);
    }
}
