use crate::header::write_header;
use crate::options::{CompressionOptions, MIN_MATCH_LEN};
use crate::search::find_longest_match;
use alloc::vec::Vec;

/// Tokens described by one flag byte.
const GROUP_SIZE: usize = 8;

/// Lengths below this use the 2-byte match token.
const SHORT_MATCH_LIMIT: usize = 0x11;

/// Widest token the compressor emits (the 3-byte match form).
const MAX_TOKEN_LEN: usize = 3;

/// Collects up to 8 tokens behind a flag byte.
///
/// Flag bits are assigned from the most significant bit down (1=Match, 0=Literal).
struct FlagGroup {
    flags: u8,
    item_count: usize,
    buffer: [u8; GROUP_SIZE * MAX_TOKEN_LEN],
    buffer_len: usize,
}

impl FlagGroup {
    const fn new() -> Self {
        Self {
            flags: 0,
            item_count: 0,
            buffer: [0; GROUP_SIZE * MAX_TOKEN_LEN],
            buffer_len: 0,
        }
    }

    fn push_literal(&mut self, byte: u8, output: &mut Vec<u8>) {
        self.buffer[self.buffer_len] = byte;
        self.buffer_len += 1;
        self.commit_item(output);
    }

    /// Encodes a back-reference `distance` bytes back, `len` bytes long.
    fn push_match(&mut self, distance: usize, len: usize, output: &mut Vec<u8>) {
        self.flags |= 0x80 >> self.item_count;

        let delta = distance - 1;
        if len < SHORT_MATCH_LIMIT {
            self.push_bytes(&[
                ((delta >> 8) | ((len - 1) << 4)) as u8,
                delta as u8,
            ]);
        } else {
            let extra = len - SHORT_MATCH_LIMIT;
            self.push_bytes(&[
                (extra >> 4) as u8,
                ((delta >> 8) | ((extra & 0xF) << 4)) as u8,
                delta as u8,
            ]);
        }

        self.commit_item(output);
    }

    fn push_bytes(&mut self, bytes: &[u8]) {
        self.buffer[self.buffer_len..self.buffer_len + bytes.len()].copy_from_slice(bytes);
        self.buffer_len += bytes.len();
    }

    fn commit_item(&mut self, output: &mut Vec<u8>) {
        self.item_count += 1;
        if self.item_count == GROUP_SIZE {
            self.flush(output);
        }
    }

    /// Writes the flag byte and its tokens, then resets.
    fn flush(&mut self, output: &mut Vec<u8>) {
        if self.item_count > 0 {
            output.push(self.flags);
            output.extend_from_slice(&self.buffer[..self.buffer_len]);
            self.flags = 0;
            self.item_count = 0;
            self.buffer_len = 0;
        }
    }
}

/// Compresses `input` with the default 4096-byte window and 272-byte matches,
/// appending the stream to `output`.
///
/// # Panics
/// Panics if `input` is longer than `u32::MAX` bytes.
pub fn compress(input: &[u8], output: &mut Vec<u8>) {
    compress_with(input, &CompressionOptions::default(), output);
}

/// Compresses `input` using the given search parameters.
///
/// Greedy: at every position the longest match in the window is taken if it
/// is at least 3 bytes long, otherwise one literal is emitted.
///
/// # Panics
/// Panics if `input` is longer than `u32::MAX` bytes.
pub fn compress_with(input: &[u8], options: &CompressionOptions, output: &mut Vec<u8>) {
    let start_out = output.len();
    write_header(input.len(), output);

    let mut group = FlagGroup::new();
    let mut pos = 0;

    while pos < input.len() {
        let found = find_longest_match(
            input,
            pos,
            options.max_match_len(),
            options.window(),
            input.len(),
        );

        if found.len >= MIN_MATCH_LEN {
            group.push_match(found.distance(pos), found.len, output);
            pos += found.len;
        } else {
            group.push_literal(input[pos], output);
            pos += 1;
        }
    }

    group.flush(output);

    tracing::trace!(
        input_len = input.len(),
        output_len = output.len() - start_out,
        "lz11 compressed"
    );
}

/// Compresses `input` into a new vector.
#[must_use]
pub fn compress_to_vec(input: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len() / 2 + 8);
    compress(input, &mut output);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn empty_input_is_header_only() {
        assert_eq!(compress_to_vec(b""), vec![0x11, 0, 0, 0]);
    }

    #[test]
    fn literals_only() {
        assert_eq!(
            compress_to_vec(b"abc"),
            vec![0x11, 3, 0, 0, 0x00, b'a', b'b', b'c']
        );
    }

    #[test]
    fn short_match_token() {
        // "abc" then a 3-byte repeat 3 back: 2-byte token (len-1=2, delta=2).
        assert_eq!(
            compress_to_vec(b"abcabc"),
            vec![0x11, 6, 0, 0, 0b0001_0000, b'a', b'b', b'c', 0x20, 0x02]
        );
    }

    #[test]
    fn medium_match_token() {
        // 20 distinct bytes repeated: one 3-byte token with len-17=3, delta=19.
        let mut input: Vec<u8> = (0..20).collect();
        input.extend(0..20u8);
        let out = compress_to_vec(&input);

        // 20 literals fill two and a half groups; the match is slot 4 of group 3.
        let tail = &out[out.len() - 8..];
        assert_eq!(tail[0], 0b0000_1000);
        assert_eq!(&tail[1..5], &[16, 17, 18, 19]);
        assert_eq!(&tail[5..], &[0x00, 0x30, 0x13]);
    }

    #[test]
    fn flag_group_splits_after_eight() {
        let out = compress_to_vec(b"0123456789");
        assert_eq!(out[4], 0);
        assert_eq!(out[13], 0);
        assert_eq!(out.len(), 4 + 1 + 8 + 1 + 2);
    }

    #[test]
    fn appends_to_existing_output() {
        let mut out = vec![0xAA];
        compress(b"x", &mut out);
        assert_eq!(out, vec![0xAA, 0x11, 1, 0, 0, 0, b'x']);
    }

    #[test]
    fn custom_window_limits_distance() {
        let mut input = b"pattern!".to_vec();
        input.extend(core::iter::repeat_n(b'.', 100));
        input.extend_from_slice(b"pattern!");

        let narrow = CompressionOptions::new(64, 272).unwrap();
        let mut small = Vec::new();
        compress_with(&input, &narrow, &mut small);

        let wide = compress_to_vec(&input);
        assert!(wide.len() < small.len());
    }
}
