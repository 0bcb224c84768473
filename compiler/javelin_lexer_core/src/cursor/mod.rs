//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte by byte. End of input is
//! detected when the current byte equals the sentinel (`0x00`) and the
//! position has reached the source length, so an interior NUL at
//! `pos < source_len` is never mistaken for EOF.
//!
//! Bulk skips (comment bodies, string contents) use `memchr` and are bounded
//! by the source length, never reaching into the padding.

/// Returns the earliest (minimum) of two optional positions.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so the scanner can snapshot it for lookahead.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00`. Guaranteed
/// by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe at any position inside the source: the sentinel and padding
    /// cover reads past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached the end of the source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` so the sentinel terminates the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// Continuation and invalid leading bytes count as width 1.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Decode the character at the current position.
    ///
    /// Returns `None` at EOF or if the position is not on a character
    /// boundary.
    pub fn current_char(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        let start = self.pos as usize;
        let end = start + Self::utf8_char_width(self.current()) as usize;
        let bytes = self.buf.get(start..end.min(self.source_len as usize))?;
        std::str::from_utf8(bytes).ok()?.chars().next()
    }

    /// Bytes from the current position up to the end of the source.
    fn remaining(&self) -> &'a [u8] {
        let start = (self.pos as usize).min(self.source_len as usize);
        &self.buf[start..self.source_len as usize]
    }

    /// Move to `offset` bytes past the current position, or to EOF if `None`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets come from remaining(), whose length fits in u32"
    )]
    fn jump(&mut self, offset: Option<usize>) -> u8 {
        match offset {
            Some(off) => {
                self.pos += off as u32;
                self.current()
            }
            None => {
                self.pos = self.source_len;
                0
            }
        }
    }

    /// Advance to the next line terminator (`\n` or `\r`) or EOF.
    ///
    /// The terminator itself is not consumed.
    pub fn eat_until_line_end(&mut self) {
        let found = memchr::memchr2(b'\n', b'\r', self.remaining());
        self.jump(found);
    }

    /// Advance past ordinary quoted content to the next interesting byte.
    /// Returns the byte found, or 0 for EOF.
    ///
    /// Interesting bytes: the closing `quote`, `\`, `\n` and `\r`.
    pub fn skip_to_quote_delim(&mut self, quote: u8) -> u8 {
        let remaining = self.remaining();
        let primary = memchr::memchr3(quote, b'\\', b'\n', remaining);
        let cr = memchr::memchr(b'\r', remaining);
        self.jump(earliest_of(primary, cr))
    }

    /// Advance to the next `"` or `\` inside a text block.
    /// Returns the byte found, or 0 for EOF.
    pub fn skip_to_text_block_delim(&mut self) -> u8 {
        let found = memchr::memchr2(b'"', b'\\', self.remaining());
        self.jump(found)
    }

    /// Advance past the first `*/` at or after the current position.
    ///
    /// Returns `false` (cursor at EOF) if the comment is never closed.
    pub fn skip_to_comment_close(&mut self) -> bool {
        loop {
            let found = memchr::memchr(b'*', self.remaining());
            if self.jump(found) == 0 && self.is_eof() {
                return false;
            }
            self.advance(); // '*'
            if self.current() == b'/' {
                self.advance();
                return true;
            }
        }
    }

    /// Advance past horizontal whitespace: space, tab and form feed.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | 0x0C));
    }
}
