//! Forward-only byte cursor over the scanned input.
//!
//! The cursor holds a single position. The lookahead position is always
//! `pos + 1`, so the two can never drift apart, and `pos` never exceeds the
//! input length. Running off the end is reported as `None` rather than as a
//! sentinel byte, so a literal `0x00` in the input stays an ordinary byte.

/// Read-only cursor over a byte slice.
///
/// The cursor is [`Copy`], so callers can snapshot it before a speculative
/// read.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    /// Current read position. Invariant: `pos <= buf.len()`.
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the byte at the current position, or `None` past the end.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Returns the byte one position ahead of current without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos + 1).copied()
    }

    /// Advance the cursor by one byte. A no-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.buf.len() {
            self.pos += 1;
        }
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source content.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.buf.len()
    }

    /// Extract the source bytes in `start..end`.
    ///
    /// Out-of-range bounds are clamped to the source content.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        let end = end.min(self.buf.len());
        let start = start.min(end);
        &self.buf[start..end]
    }

    /// Extract the source bytes from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` accepts the current byte.
    ///
    /// Stops at end of input regardless of `pred`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.current() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Advance past whitespace: space, tab, `\n` and `\r`.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }
}

/// Bytes skipped between tokens.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}
