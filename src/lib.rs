//! # LZ11 Compression
//!
//! `lz11` is a safe, pure-Rust implementation of the LZ11 LZSS variant found in
//! game-console resource archives. Streams start with the marker byte `0x11`
//! and a little-endian uncompressed size, followed by groups of one flag byte
//! and up to 8 literals or back-references.
//!
//! Buffers that do not start with the marker are returned unchanged by the
//! decompressor, so already-uncompressed assets can be fed through the same path.
//!
//! ## Example
//!
//! ```rust
//! extern crate alloc;
//! use lz11::decompress;
//! use alloc::vec::Vec;
//!
//! // "abcabc" compressed
//! // Header: marker + size 6 (3-byte LE)
//! // Flags 0b0001_0000: 3 literals, then a match
//! // Match 0x20 0x02: length 3, distance 3
//! let compressed_data = [
//!     0x11, 0x06, 0x00, 0x00,
//!     0b0001_0000,
//!     b'a', b'b', b'c',
//!     0x20, 0x02,
//! ];
//!
//! let mut buffer = Vec::new();
//! decompress(&compressed_data, &mut buffer).expect("Decompression failed");
//! assert_eq!(buffer, b"abcabc");
//! ```

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod compress;
pub mod decompress;
pub mod error;
pub mod header;
pub mod options;
pub mod search;

pub use compress::{compress, compress_to_vec, compress_with};
pub use decompress::{decompress, decompress_to_vec};
pub use error::{DecompressionError, OptionsError};
pub use header::{MARKER, is_compressed, uncompressed_size};
pub use options::CompressionOptions;
