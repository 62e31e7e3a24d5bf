use crate::error::DecompressionError;
use alloc::vec::Vec;

/// Leading byte identifying an LZ11 stream.
pub const MARKER: u8 = 0x11;

/// Largest size the 3-byte header form can carry.
const SHORT_FORM_MAX: usize = 0x00FF_FFFF;

/// Header length with the 3-byte size field.
const SHORT_HEADER_LEN: usize = 4;

/// Header length with the escaped 4-byte size field.
const LONG_HEADER_LEN: usize = 8;

/// Parsed stream header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Declared length of the decompressed data.
    pub uncompressed_size: usize,
    /// Offset of the first flag byte.
    pub body_offset: usize,
}

/// Reads the size fields following the marker byte.
///
/// A zero 24-bit size escapes to a 32-bit size in bytes 4..8. The marker
/// itself is not checked here.
///
/// # Errors
/// Returns [`DecompressionError::InputTooShort`] if fewer than 4 bytes are
/// given, or if the long size field is cut short. Exactly `11 00 00 00` is
/// the empty stream.
pub fn read_header(input: &[u8]) -> Result<Header, DecompressionError> {
    if input.len() < SHORT_HEADER_LEN {
        return Err(DecompressionError::InputTooShort);
    }

    let short = u32::from_le_bytes([input[1], input[2], input[3], 0]);
    if short != 0 {
        return Ok(Header {
            uncompressed_size: short as usize,
            body_offset: SHORT_HEADER_LEN,
        });
    }

    // A bare 4-byte zero header is the empty stream.
    if input.len() == SHORT_HEADER_LEN {
        return Ok(Header {
            uncompressed_size: 0,
            body_offset: SHORT_HEADER_LEN,
        });
    }

    if input.len() < LONG_HEADER_LEN {
        return Err(DecompressionError::InputTooShort);
    }

    let long = u32::from_le_bytes([input[4], input[5], input[6], input[7]]);
    Ok(Header {
        uncompressed_size: long as usize,
        body_offset: LONG_HEADER_LEN,
    })
}

/// Appends the marker and size of a stream declaring `uncompressed_size` bytes.
///
/// Sizes that fit in 24 bits (including zero) use the short form.
///
/// # Panics
/// Panics if `uncompressed_size` does not fit in 32 bits.
pub fn write_header(uncompressed_size: usize, output: &mut Vec<u8>) {
    output.push(MARKER);

    if uncompressed_size <= SHORT_FORM_MAX {
        output.extend_from_slice(&(uncompressed_size as u32).to_le_bytes()[..3]);
    } else {
        let size = u32::try_from(uncompressed_size)
            .expect("LZ11 streams cannot declare more than u32::MAX bytes");
        output.extend_from_slice(&[0, 0, 0]);
        output.extend_from_slice(&size.to_le_bytes());
    }
}

/// Returns `true` if `input` starts with the LZ11 marker byte.
#[must_use]
pub fn is_compressed(input: &[u8]) -> bool {
    input.first() == Some(&MARKER)
}

/// Declared decompressed length, or `None` for data that would pass through unchanged.
pub fn uncompressed_size(input: &[u8]) -> Result<Option<usize>, DecompressionError> {
    if !is_compressed(input) {
        return Ok(None);
    }
    read_header(input).map(|h| Some(h.uncompressed_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn short_form() {
        let h = read_header(&[MARKER, 0x34, 0x12, 0x00]).unwrap();
        assert_eq!(h.uncompressed_size, 0x1234);
        assert_eq!(h.body_offset, 4);
    }

    #[test]
    fn long_form() {
        let h = read_header(&[MARKER, 0, 0, 0, 0x78, 0x56, 0x34, 0x12]).unwrap();
        assert_eq!(h.uncompressed_size, 0x1234_5678);
        assert_eq!(h.body_offset, 8);
    }

    #[test]
    fn truncated() {
        assert_eq!(
            read_header(&[MARKER, 1, 0]),
            Err(DecompressionError::InputTooShort)
        );
    }

    #[test]
    fn empty_stream_header() {
        let h = read_header(&[MARKER, 0, 0, 0]).unwrap();
        assert_eq!(h.uncompressed_size, 0);
        assert_eq!(h.body_offset, 4);

    }

    #[test]
    fn truncated_long_form() {
        for len in 5..8 {
            let data = [MARKER, 0, 0, 0, 5, 0, 0, 0];
            assert_eq!(
                read_header(&data[..len]),
                Err(DecompressionError::InputTooShort)
            );
        }
    }

    #[test]
    fn write_short_and_long() {
        let mut out = Vec::new();
        write_header(0, &mut out);
        assert_eq!(out, vec![MARKER, 0, 0, 0]);

        out.clear();
        write_header(0x0100_0000, &mut out);
        assert_eq!(out, vec![MARKER, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(read_header(&out).unwrap().uncompressed_size, 0x0100_0000);
    }

    #[test]
    fn size_query() {
        assert_eq!(uncompressed_size(b"plain"), Ok(None));
        assert_eq!(uncompressed_size(&[]), Ok(None));
        assert_eq!(uncompressed_size(&[MARKER, 5, 0, 0]), Ok(Some(5)));
    }
}
