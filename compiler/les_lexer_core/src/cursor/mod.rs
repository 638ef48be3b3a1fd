//! Byte cursor over borrowed source text.
//!
//! The cursor advances through the text byte-by-byte. Reads past the end
//! return the sentinel `0x00`, so scanners can peek freely without bounds
//! checks of their own.
//!
//! # Interior Null Bytes
//!
//! If the source contains interior null bytes (U+0000), the cursor
//! distinguishes them from EOF by comparing `pos` against the source length.
//! A null at `pos < source_len` is an interior null; a null at
//! `pos >= source_len` is EOF.

/// Cursor over a source string.
///
/// The cursor is [`Copy`], so scanners take cheap snapshots for bounded
/// lookahead and restore them when a speculative match fails.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: u32,
}

/// &str = 16 (fat pointer), u32 = 4, padded to 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    ///
    /// Sources longer than `u32::MAX` bytes are not supported; spans are
    /// 32-bit.
    pub fn new(source: &'a str) -> Self {
        debug_assert!(
            u32::try_from(source.len()).is_ok(),
            "source length {} exceeds u32::MAX",
            source.len()
        );
        Self { source, pos: 0 }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    ///
    /// Interior null bytes also return `0x00`; use
    /// [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.peek_at(0)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.peek_at(1)
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.peek_at(2)
    }

    /// Returns the byte `n` positions ahead of current, or `0x00` past EOF.
    #[inline]
    pub fn peek_at(&self, n: u32) -> u8 {
        self.source
            .as_bytes()
            .get(self.pos as usize + n as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Returns the byte just before the current position, or `0x00` at the
    /// start of the source.
    #[inline]
    pub fn prev(&self) -> u8 {
        match self.pos.checked_sub(1) {
            Some(p) => self.source.as_bytes().get(p as usize).copied().unwrap_or(0),
            None => 0,
        }
    }

    /// Decode the full character at the current position.
    ///
    /// Returns `'\0'` at EOF.
    pub fn current_char(&self) -> char {
        self.rest().chars().next().unwrap_or('\0')
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Advance the cursor past one full UTF-8 character.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "len_utf8() is at most 4"
    )]
    #[inline]
    pub fn advance_char(&mut self) {
        let width = self.rest().chars().next().map_or(1, char::len_utf8);
        self.advance_n(width as u32);
    }

    /// Returns `true` if the cursor has reached the end of the source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source in bytes.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "source length is checked against u32::MAX on construction"
    )]
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source.len() as u32
    }

    /// Extract a source substring.
    ///
    /// `start..end` must fall on character boundaries, which holds for any
    /// pair of token boundaries produced by the scanner. An invalid range
    /// yields the empty string.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.source.get(start as usize..end as usize).unwrap_or("")
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Remaining source from the current position.
    fn rest(&self) -> &'a str {
        self.source.get(self.pos as usize..).unwrap_or("")
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, otherwise the loop would never see EOF.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) && !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` or `\r` byte, or to EOF.
    ///
    /// Used to skip comment and shebang bodies. The line ending itself is
    /// not consumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_line_end(&mut self) {
        let remaining = self.rest().as_bytes();
        match memchr::memchr2(b'\n', b'\r', remaining) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len(),
        }
    }

    /// Advance to the next byte that ends a short quoted literal: the
    /// closing `delim`, a backslash, a line ending, or EOF.
    ///
    /// Returns the byte found, or 0 for EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_quote_delim(&mut self, delim: u8) -> u8 {
        let remaining = self.rest().as_bytes();
        let primary = memchr::memchr3(delim, b'\\', b'\n', remaining);
        let cr = memchr::memchr(b'\r', remaining);
        match earliest_of(primary, cr) {
            Some(off) => {
                self.pos += off as u32;
                self.current()
            }
            None => {
                self.pos = self.source_len();
                0
            }
        }
    }

    /// Advance past the next occurrence of `needle`.
    ///
    /// Returns `true` if `needle` was found; otherwise the cursor lands on
    /// EOF and returns `false`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len which fits in u32"
    )]
    pub fn eat_through(&mut self, needle: &[u8]) -> bool {
        let remaining = self.rest().as_bytes();
        match memchr::memmem::find(remaining, needle) {
            Some(offset) => {
                self.pos += (offset + needle.len()) as u32;
                true
            }
            None => {
                self.pos = self.source_len();
                false
            }
        }
    }
}

/// Returns the earliest (minimum) of two optional positions.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests;
