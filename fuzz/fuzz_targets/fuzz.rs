#![no_main]

use libfuzzer_sys::fuzz_target;
use lz11::{MARKER, compress, decompress};

/// Arbitrary bytes, with and without the marker in front, must decode to
/// `Ok` or `Err` and never panic.
fn verify_decompression_robustness(data: &[u8]) {
    let mut output = Vec::new();
    let _ = decompress(data, &mut output);

    let mut marked = Vec::with_capacity(data.len() + 1);
    marked.push(MARKER);
    marked.extend_from_slice(data);
    output.clear();
    if decompress(&marked, &mut output).is_err() {
        assert!(output.is_empty(), "failed decode left partial output");
    }
}

/// `decompress(compress(data)) == data`.
///
/// # Panics
/// On mismatch, or if the decoder rejects the compressor's output.
fn verify_round_trip(data: &[u8]) {
    let mut compressed = Vec::new();
    compress(data, &mut compressed);

    let mut decompressed = Vec::new();
    if let Err(e) = decompress(&compressed, &mut decompressed) {
        panic!(
            "Decoder rejected compressor output: {e:?}\nInput len: {}",
            data.len()
        );
    }
    assert!(
        decompressed == data,
        "Round-trip mismatch!\nInput len: {}\nCompressed len: {}\nDecompressed len: {}",
        data.len(),
        compressed.len(),
        decompressed.len()
    );
}

fuzz_target!(|data: &[u8]| {
    verify_decompression_robustness(data);
    verify_round_trip(data);
});
