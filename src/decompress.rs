use crate::error::DecompressionError;
use crate::header::{MARKER, read_header};
use alloc::vec::Vec;

type Result<T> = core::result::Result<T, DecompressionError>;

// --- Constants ---

/// Tokens described by one flag byte.
const GROUP_SIZE: usize = 8;

/// First bytes at or above this select the 2-byte match token.
const SHORT_TOKEN_MIN: u8 = 0x20;

/// First bytes at or above this (and below `SHORT_TOKEN_MIN`) select the 4-byte token.
const LONG_TOKEN_MIN: u8 = 0x10;

/// Length bias of the 3-byte match token.
const MEDIUM_LENGTH_BIAS: usize = 0x11;

/// Length bias of the 4-byte match token.
const LONG_LENGTH_BIAS: usize = 0x111;

/// Most output a single body byte can account for (a 4-byte token yields at most 0xFFFF + 273).
const MAX_EXPANSION: usize = (0xFFFF + LONG_LENGTH_BIAS) / 4;

/// Decompresses an LZ11 stream, appending the result to `output`.
///
/// Input that does not start with the marker byte is treated as already
/// uncompressed and appended unchanged. On error, `output` is left as it was
/// before the call.
///
/// # Errors
/// Returns a [`DecompressionError`] when the header or body is truncated, a
/// back-reference points before the start of the output, or a match runs
/// past the declared size.
pub fn decompress(input: &[u8], output: &mut Vec<u8>) -> Result<()> {
    if input.first() != Some(&MARKER) {
        tracing::trace!(len = input.len(), "no lz11 marker, passing through");
        output.extend_from_slice(input);
        return Ok(());
    }

    let header = read_header(input).inspect_err(|e| tracing::debug!(%e, "bad lz11 header"))?;
    let body = &input[header.body_offset..];
    let out_len = header.uncompressed_size;

    // Reject impossible sizes before allocating for them.
    if out_len > body.len().saturating_mul(MAX_EXPANSION) {
        let e = DecompressionError::SizeExceedsInput {
            declared: out_len,
            body_len: body.len(),
        };
        tracing::debug!(%e, "lz11 declared size too large");
        return Err(e);
    }

    let start = output.len();
    output.resize(start + out_len, 0);

    match decode_body(body, &mut output[start..]) {
        Ok(()) => {
            tracing::trace!(input_len = input.len(), output_len = out_len, "lz11 decompressed");
            Ok(())
        }
        Err(e) => {
            tracing::debug!(%e, "lz11 body rejected");
            output.truncate(start);
            Err(e)
        }
    }
}

/// Decompresses `input` into a new vector.
///
/// # Errors
/// See [`decompress`].
pub fn decompress_to_vec(input: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    decompress(input, &mut output)?;
    Ok(output)
}

/// Runs the flag/token state machine until `out` is full.
fn decode_body(input: &[u8], out: &mut [u8]) -> Result<()> {
    let mut in_idx = 0;
    let mut out_idx = 0;

    while out_idx < out.len() {
        let flags = *input.get(in_idx).ok_or(DecompressionError::UnexpectedEof)?;
        in_idx += 1;

        for bit in (0..GROUP_SIZE).rev() {
            if out_idx >= out.len() {
                break;
            }

            if flags & (1 << bit) != 0 {
                let (distance, length) = read_match(input, &mut in_idx)?;
                copy_match(out, out_idx, distance, length)?;
                out_idx += length;
            } else {
                out[out_idx] = *input.get(in_idx).ok_or(DecompressionError::UnexpectedEof)?;
                in_idx += 1;
                out_idx += 1;
            }
        }
    }

    Ok(())
}

/// Decodes one match token at `*in_idx`, returning `(distance, length)`.
#[inline]
fn read_match(input: &[u8], in_idx: &mut usize) -> Result<(usize, usize)> {
    let b0 = *input.get(*in_idx).ok_or(DecompressionError::UnexpectedEof)?;

    let token_len = match b0 {
        SHORT_TOKEN_MIN.. => 2,
        LONG_TOKEN_MIN.. => 4,
        _ => 3,
    };
    let t = input
        .get(*in_idx..*in_idx + token_len)
        .ok_or(DecompressionError::UnexpectedEof)?;
    *in_idx += token_len;

    let nib = |b: u8| (b & 0xF) as usize;

    let decoded = match token_len {
        2 => ((nib(t[0]) << 8 | t[1] as usize) + 1, (t[0] >> 4) as usize + 1),
        3 => (
            (nib(t[1]) << 8 | t[2] as usize) + 1,
            (nib(t[0]) << 4 | (t[1] >> 4) as usize) + MEDIUM_LENGTH_BIAS,
        ),
        _ => (
            (nib(t[2]) << 8 | t[3] as usize) + 1,
            (nib(t[0]) << 12 | (t[1] as usize) << 4 | (t[2] >> 4) as usize) + LONG_LENGTH_BIAS,
        ),
    };

    Ok(decoded)
}

/// Copies `length` bytes from `distance` back, one byte at a time.
///
/// Source and destination overlap whenever `length > distance`; each byte
/// must see the ones written earlier in the same copy.
#[inline]
fn copy_match(out: &mut [u8], out_idx: usize, distance: usize, length: usize) -> Result<()> {
    if distance > out_idx {
        return Err(DecompressionError::InvalidOffset);
    }
    if out_idx + length > out.len() {
        return Err(DecompressionError::OutputOverrun);
    }

    let src = out_idx - distance;
    for k in 0..length {
        out[out_idx + k] = out[src + k];
    }

    Ok(())
}
