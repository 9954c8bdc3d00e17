//! Bounded-buffer text duplication.
//!
//! Writes a source string into a fixed-capacity buffer twice, back to
//! back, with the same truncation rules as two chained `snprintf` calls:
//! the second copy is only attempted if the first fit completely, and
//! every write is NUL-terminated inside the buffer.

use std::fmt;
use std::io::{self, Write};

use tracing::trace;

/// Write `src` into `out` twice. Returns the content bytes written, not
/// counting the terminator.
///
/// `src` ends at its first NUL byte, if any. The first copy receives
/// `min(len(src), out.len() - 1)` bytes plus a terminator. If the whole
/// first copy fit (`out.len() > len(src)`), the second copy starts where
/// the first ended (overwriting its terminator) and is truncated to the
/// remaining space. Nothing is ever written past `out.len()`; an empty
/// `out` is left untouched.
pub fn write_twice(src: &[u8], out: &mut [u8]) -> usize {
    let src = until_nul(src);
    let first = write_terminated(src, out);
    if out.len() <= src.len() {
        return first;
    }
    let second = write_terminated(src, &mut out[src.len()..]);
    if second < src.len() {
        trace!(
            capacity = out.len(),
            source_len = src.len(),
            second_copy = second,
            "second copy truncated"
        );
    }
    first + second
}

/// Write `text` to `w` twice, back to back.
pub fn print_twice<W: Write>(w: &mut W, text: &[u8]) -> io::Result<()> {
    let text = until_nul(text);
    w.write_all(text)?;
    w.write_all(text)
}

fn until_nul(src: &[u8]) -> &[u8] {
    match src.iter().position(|&b| b == 0) {
        Some(end) => &src[..end],
        None => src,
    }
}

fn write_terminated(src: &[u8], out: &mut [u8]) -> usize {
    let Some(room) = out.len().checked_sub(1) else {
        return 0;
    };
    let n = src.len().min(room);
    out[..n].copy_from_slice(&src[..n]);
    out[n] = 0;
    n
}

/// A NUL-terminated text buffer with a fixed capacity of `N` bytes,
/// terminator included.
#[derive(Clone, PartialEq, Eq)]
pub struct BoundedBuf<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> BoundedBuf<N> {
    /// An empty, zero-filled buffer.
    pub const fn new() -> Self {
        Self { bytes: [0; N] }
    }

    /// Total capacity, terminator included.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Overwrite the buffer with two back-to-back copies of `src`.
    ///
    /// See [`write_twice`] for the truncation rules.
    pub fn write_twice(&mut self, src: &str) -> usize {
        write_twice(src.as_bytes(), &mut self.bytes)
    }

    /// Contents up to (not including) the first NUL.
    pub fn as_bytes(&self) -> &[u8] {
        until_nul(&self.bytes)
    }

    /// Contents as text, or `None` if truncation split a UTF-8 sequence.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    /// Contents as text, replacing a split trailing sequence.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }

    /// Length of the contents in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns `true` if the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const N: usize> Default for BoundedBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for BoundedBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedBuf")
            .field("capacity", &N)
            .field("contents", &self.to_string_lossy())
            .finish()
    }
}
