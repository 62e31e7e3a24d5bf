use thiserror::Error;

/// Reasons a marker-prefixed stream was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecompressionError {
    #[error("Input buffer too short for stream header")]
    InputTooShort,

    #[error("Unexpected end of stream")]
    UnexpectedEof,

    #[error("Lookback offset out of bounds")]
    InvalidOffset,

    #[error("Match runs past the declared uncompressed size")]
    OutputOverrun,

    #[error("Declared size {declared} cannot be produced from {body_len} body bytes")]
    SizeExceedsInput { declared: usize, body_len: usize },
}

/// Rejected compression parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Window {0} outside 1..=4096")]
    InvalidWindow(usize),

    #[error("Maximum match length {0} outside 3..=272")]
    InvalidMaxMatchLen(usize),
}
