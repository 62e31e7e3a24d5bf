use crate::error::OptionsError;

/// Largest back-reference distance a match token can carry.
pub const MAX_WINDOW: usize = 0x1000;

/// Largest length the 3-byte match token can carry.
pub const MAX_MATCH_LEN: usize = 0x110;

/// Shortest match the compressor will emit.
pub const MIN_MATCH_LEN: usize = 3;

/// Search parameters for the compressor.
///
/// Every valid configuration produces the same wire format; these only trade
/// compression ratio against search time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionOptions {
    window: usize,
    max_match_len: usize,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            window: MAX_WINDOW,
            max_match_len: MAX_MATCH_LEN,
        }
    }
}

impl CompressionOptions {
    /// Validates a lookback window and maximum match length.
    ///
    /// # Errors
    /// `window` must be in `1..=4096` and `max_match_len` in `3..=272`.
    pub fn new(window: usize, max_match_len: usize) -> Result<Self, OptionsError> {
        Self::default()
            .with_window(window)?
            .with_max_match_len(max_match_len)
    }

    /// Replaces the lookback window.
    ///
    /// # Errors
    /// Returns [`OptionsError::InvalidWindow`] unless `window` is in `1..=4096`.
    pub fn with_window(self, window: usize) -> Result<Self, OptionsError> {
        if !(1..=MAX_WINDOW).contains(&window) {
            return Err(OptionsError::InvalidWindow(window));
        }
        Ok(Self { window, ..self })
    }

    /// Replaces the maximum match length.
    ///
    /// # Errors
    /// Returns [`OptionsError::InvalidMaxMatchLen`] unless `max_match_len` is in `3..=272`.
    pub fn with_max_match_len(self, max_match_len: usize) -> Result<Self, OptionsError> {
        if !(MIN_MATCH_LEN..=MAX_MATCH_LEN).contains(&max_match_len) {
            return Err(OptionsError::InvalidMaxMatchLen(max_match_len));
        }
        Ok(Self {
            max_match_len,
            ..self
        })
    }

    #[must_use]
    pub const fn window(&self) -> usize {
        self.window
    }

    #[must_use]
    pub const fn max_match_len(&self) -> usize {
        self.max_match_len
    }
}
