//! Longest-match search over a bounded lookback window.
//!
//! The search binary-searches the candidate length: a prefix of length `L`
//! occurring in the window implies every shorter prefix does too, so the
//! longest occurring length can be bracketed with `log2(max_len)` substring
//! scans instead of extending every candidate position byte by byte.

use memchr::memmem;

/// Result of a window search. `len == 0` means nothing was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Match {
    /// Absolute position of the earlier occurrence in `data`.
    pub pos: usize,
    /// Number of bytes matched.
    pub len: usize,
}

impl Match {
    /// Backward distance from `cursor` to this occurrence.
    #[inline]
    #[must_use]
    pub const fn distance(&self, cursor: usize) -> usize {
        cursor - self.pos
    }
}

/// Finds the longest prefix of `data[pos..src_end]` that occurs entirely
/// inside the `max_window` bytes preceding `pos`.
///
/// Occurrences may not run into `pos` itself. Among occurrences of the
/// winning length, the leftmost one in the window is returned. `src_end` is
/// clamped to `data.len()`.
///
/// # Panics
/// Panics if `pos > data.len()`.
#[must_use]
pub fn find_longest_match(
    data: &[u8],
    pos: usize,
    max_len: usize,
    max_window: usize,
    src_end: usize,
) -> Match {
    let src_end = src_end.min(data.len());
    let start = pos.saturating_sub(max_window);
    let window = &data[start..pos];

    let mut lower = 0;
    let mut upper = max_len.min(src_end.saturating_sub(pos));
    let mut best = Match::default();

    while lower <= upper {
        let len = (lower + upper) / 2;
        let needle = &data[pos..pos + len];

        match memmem::find(window, needle) {
            Some(found) => {
                if len > best.len {
                    best = Match {
                        pos: start + found,
                        len,
                    };
                }
                lower = len + 1;
            }
            // len > 0 here, the empty needle always matches.
            None => upper = len - 1,
        }
    }

    best
}
