//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and never
//! allocates. It does not resolve keywords, validate escapes or check
//! numeric literals; the cooking layer does that. It does decide token
//! boundaries: longest-match operators, literal extents (escapes are skipped
//! so `'\''` stays one token), and comment extents.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. The sentinel
//! byte (`0x00`) dispatches to `eof()`. Malformed input never stops the scan:
//! it becomes an error tag covering at least one whole character.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// ASCII SUB (Ctrl-Z). Ignored by Java when it is the final character.
const SUB: u8 = 0x1A;

/// Allocation-free scanner for Java-like source text.
///
/// Produces one token at a time. Cloning is cheap (it copies the cursor),
/// which the cooking layer uses for lookahead.
#[derive(Clone, Debug)]
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Byte offset of the next token.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' | 0x0C => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.single(start, RawTag::Newline),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'$' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string(start),
            b'\'' => self.char_literal(start),
            b'/' => self.slash_or_comment(start),
            b'+' => self.plus(start),
            b'-' => self.minus(start),
            b'*' => self.with_equal(start, RawTag::Star, RawTag::StarEqual),
            b'%' => self.with_equal(start, RawTag::Percent, RawTag::PercentEqual),
            b'^' => self.with_equal(start, RawTag::Caret, RawTag::CaretEqual),
            b'!' => self.with_equal(start, RawTag::Bang, RawTag::BangEqual),
            b'=' => self.with_equal(start, RawTag::Equal, RawTag::EqualEqual),
            b'&' => self.ampersand(start),
            b'|' => self.pipe(start),
            b'<' => self.less(start),
            b'>' => self.greater(start),
            b'~' => self.single(start, RawTag::Tilde),
            b'?' => self.single(start, RawTag::Question),
            b':' => self.colon(start),
            b'.' => self.dot(start),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b',' => self.single(start, RawTag::Comma),
            b';' => self.single(start, RawTag::Semicolon),
            b'@' => self.single(start, RawTag::At),
            SUB => self.sub(start),
            // `#`, `\`, backtick, control characters and DEL start no rule.
            1..=8 | 11 | 14..=25 | 27..=31 | b'#' | b'\\' | b'`' | 127 => {
                self.single(start, RawTag::InvalidChar)
            }
            128..=255 => self.non_ascii(start),
        }
    }

    #[inline]
    fn emit(&self, tag: RawTag, start: u32) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    /// Single-byte token: advance one byte and emit the given tag.
    #[inline]
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.emit(tag, start)
    }

    // ─── EOF ───────────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            self.single(start, RawTag::InteriorNull)
        }
    }

    // ─── Whitespace & Newlines ─────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.emit(RawTag::Whitespace, start)
    }

    fn carriage_return(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '\r'
        if self.cursor.current() == b'\n' {
            self.cursor.advance();
        }
        self.emit(RawTag::Newline, start)
    }

    fn sub(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.cursor.is_eof() {
            self.emit(RawTag::Whitespace, start)
        } else {
            self.emit(RawTag::InvalidChar, start)
        }
    }

    // ─── Comments ──────────────────────────────────────────────────

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '/'
        match self.cursor.current() {
            b'/' => {
                self.cursor.eat_until_line_end();
                self.emit(RawTag::LineComment, start)
            }
            b'*' => self.block_comment(start),
            b'=' => self.single(start, RawTag::SlashEqual),
            _ => self.emit(RawTag::Slash, start),
        }
    }

    /// Scan `/* ... */`. The opener's `*` never counts toward the closer,
    /// so `/*/` is still open.
    fn block_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '*'
        let is_doc = self.cursor.current() == b'*' && self.cursor.peek() != b'/';
        if !self.cursor.skip_to_comment_close() {
            return self.emit(RawTag::UnterminatedBlockComment, start);
        }
        if is_doc {
            self.emit(RawTag::DocComment, start)
        } else {
            self.emit(RawTag::BlockComment, start)
        }
    }

    // ─── Identifiers ───────────────────────────────────────────────

    #[inline]
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // first byte already classified
        self.eat_ident_continue();
        self.emit(RawTag::Ident, start)
    }

    fn eat_ident_continue(&mut self) {
        loop {
            let b = self.cursor.current();
            if is_ident_continue(b) {
                self.cursor.advance();
            } else if b >= 0x80
                && self
                    .cursor
                    .current_char()
                    .is_some_and(is_unicode_ident_continue)
            {
                self.cursor.advance_char();
            } else {
                return;
            }
        }
    }

    /// Non-ASCII lead byte: a Unicode identifier or a single invalid char.
    fn non_ascii(&mut self, start: u32) -> RawToken {
        let starts_ident = self
            .cursor
            .current_char()
            .is_some_and(is_unicode_ident_start);
        self.cursor.advance_char();
        if starts_ident {
            self.eat_ident_continue();
            self.emit(RawTag::Ident, start)
        } else {
            self.emit(RawTag::InvalidChar, start)
        }
    }

    // ─── Operators ─────────────────────────────────────────────────

    /// `op` or `op=`.
    fn with_equal(&mut self, start: u32, plain: RawTag, assign: RawTag) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.single(start, assign)
        } else {
            self.emit(plain, start)
        }
    }

    fn plus(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '+'
        match self.cursor.current() {
            b'+' => self.single(start, RawTag::PlusPlus),
            b'=' => self.single(start, RawTag::PlusEqual),
            _ => self.emit(RawTag::Plus, start),
        }
    }

    fn minus(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '-'
        match self.cursor.current() {
            b'-' => self.single(start, RawTag::MinusMinus),
            b'=' => self.single(start, RawTag::MinusEqual),
            b'>' => self.single(start, RawTag::Arrow),
            _ => self.emit(RawTag::Minus, start),
        }
    }

    fn ampersand(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '&'
        match self.cursor.current() {
            b'&' => self.single(start, RawTag::AmpersandAmpersand),
            b'=' => self.single(start, RawTag::AmpersandEqual),
            _ => self.emit(RawTag::Ampersand, start),
        }
    }

    fn pipe(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '|'
        match self.cursor.current() {
            b'|' => self.single(start, RawTag::PipePipe),
            b'=' => self.single(start, RawTag::PipeEqual),
            _ => self.emit(RawTag::Pipe, start),
        }
    }

    fn less(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '<'
        match self.cursor.current() {
            b'=' => self.single(start, RawTag::LessEqual),
            b'<' => self.with_equal(start, RawTag::Shl, RawTag::ShlEqual),
            _ => self.emit(RawTag::Less, start),
        }
    }

    /// `>`, `>=`, `>>`, `>>=`, `>>>`, `>>>=` by longest match.
    fn greater(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '>'
        match self.cursor.current() {
            b'=' => self.single(start, RawTag::GreaterEqual),
            b'>' => {
                self.cursor.advance();
                match self.cursor.current() {
                    b'=' => self.single(start, RawTag::ShrEqual),
                    b'>' => self.with_equal(start, RawTag::UShr, RawTag::UShrEqual),
                    _ => self.emit(RawTag::Shr, start),
                }
            }
            _ => self.emit(RawTag::Greater, start),
        }
    }

    fn colon(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume ':'
        if self.cursor.current() == b':' {
            self.single(start, RawTag::ColonColon)
        } else {
            self.emit(RawTag::Colon, start)
        }
    }

    fn dot(&mut self, start: u32) -> RawToken {
        if self.cursor.peek().is_ascii_digit() {
            return self.fraction(start);
        }
        self.cursor.advance(); // consume '.'
        if self.cursor.current() == b'.' && self.cursor.peek() == b'.' {
            self.cursor.advance_n(2);
            self.emit(RawTag::DotDotDot, start)
        } else {
            self.emit(RawTag::Dot, start)
        }
    }

    // ─── Numeric Literals ──────────────────────────────────────────

    #[inline]
    fn number(&mut self, start: u32) -> RawToken {
        let first = self.cursor.current();
        self.cursor.advance();

        if first == b'0' {
            match self.cursor.current() {
                b'x' | b'X' => return self.hex_number(start),
                b'b' | b'B' => return self.bin_number(start),
                _ => {}
            }
        }

        self.eat_decimal_digits();

        // A `.` after decimal digits always belongs to the literal (`2.`).
        let mut is_float = false;
        if self.cursor.current() == b'.' {
            self.cursor.advance();
            self.eat_decimal_digits();
            is_float = true;
        }
        if matches!(self.cursor.current(), b'e' | b'E') {
            self.eat_exponent();
            is_float = true;
        }
        self.decimal_suffix(start, is_float)
    }

    /// `.` followed by a digit (`.1`, `.5e3f`).
    fn fraction(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '.'
        self.eat_decimal_digits();
        self.eat_exponent();
        self.decimal_suffix(start, true)
    }

    fn hex_number(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume 'x' or 'X'
        self.cursor.eat_while(|b| b.is_ascii_hexdigit() || b == b'_');

        let mut is_float = false;
        if self.cursor.current() == b'.' {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_hexdigit() || b == b'_');
            is_float = true;
        }
        if matches!(self.cursor.current(), b'p' | b'P') {
            self.cursor.advance();
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.advance();
            }
            self.eat_decimal_digits();
            is_float = true;
        }

        if is_float {
            if matches!(self.cursor.current(), b'f' | b'F' | b'd' | b'D') {
                self.cursor.advance();
            }
            self.emit(RawTag::HexFloat, start)
        } else {
            self.eat_long_suffix();
            self.emit(RawTag::HexInt, start)
        }
    }

    fn bin_number(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume 'b' or 'B'
        self.cursor.eat_while(|b| b == b'0' || b == b'1' || b == b'_');
        self.eat_long_suffix();
        self.emit(RawTag::BinInt, start)
    }

    fn eat_decimal_digits(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
    }

    fn eat_exponent(&mut self) {
        if matches!(self.cursor.current(), b'e' | b'E') {
            self.cursor.advance();
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.advance();
            }
            self.eat_decimal_digits();
        }
    }

    fn eat_long_suffix(&mut self) {
        if matches!(self.cursor.current(), b'l' | b'L') {
            self.cursor.advance();
        }
    }

    /// Type suffix after a decimal literal: `l`/`L` on integers,
    /// `f`/`F`/`d`/`D` on anything (and `3f` becomes a float).
    fn decimal_suffix(&mut self, start: u32, is_float: bool) -> RawToken {
        match self.cursor.current() {
            b'l' | b'L' if !is_float => self.single(start, RawTag::Int),
            b'f' | b'F' | b'd' | b'D' => self.single(start, RawTag::Float),
            _ if is_float => self.emit(RawTag::Float, start),
            _ => self.emit(RawTag::Int, start),
        }
    }

    // ─── String & Char Literals ────────────────────────────────────

    fn string(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'"' && self.cursor.peek2() == b'"' {
            return self.text_block(start);
        }
        self.cursor.advance(); // consume opening '"'
        self.quoted(start, b'"', RawTag::String, RawTag::UnterminatedString)
    }

    fn char_literal(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume opening '\''
        self.quoted(start, b'\'', RawTag::Char, RawTag::UnterminatedChar)
    }

    /// Scan quoted content up to the closing `quote`.
    ///
    /// A backslash skips the following character (so `\'` and `\"` never
    /// close). A line terminator or EOF ends the literal as unterminated,
    /// without consuming the terminator.
    fn quoted(&mut self, start: u32, quote: u8, done: RawTag, unterminated: RawTag) -> RawToken {
        loop {
            match self.cursor.skip_to_quote_delim(quote) {
                b if b == quote => return self.single(start, done),
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    if !self.cursor.is_eof() && !matches!(self.cursor.current(), b'\n' | b'\r')
                    {
                        self.cursor.advance_char(); // escaped char (may be multi-byte)
                    }
                }
                b'\n' | b'\r' => return self.emit(unterminated, start),
                0 if self.cursor.is_eof() => return self.emit(unterminated, start),
                // Interior NUL; the tokenizer reports it via encoding issues.
                _ => self.cursor.advance(),
            }
        }
    }

    /// `"""` ... `"""`, spanning lines. Escapes skip one character.
    fn text_block(&mut self, start: u32) -> RawToken {
        self.cursor.advance_n(3); // consume opening '"""'
        loop {
            match self.cursor.skip_to_text_block_delim() {
                b'"' => {
                    if self.cursor.peek() == b'"' && self.cursor.peek2() == b'"' {
                        self.cursor.advance_n(3);
                        return self.emit(RawTag::TextBlock, start);
                    }
                    self.cursor.advance();
                }
                b'\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_eof() {
                        self.cursor.advance_char();
                    }
                }
                0 if self.cursor.is_eof() => {
                    return self.emit(RawTag::UnterminatedTextBlock, start);
                }
                _ => self.cursor.advance(),
            }
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

impl std::iter::FusedIterator for RawScanner<'_> {}

/// 256-byte lookup table for ASCII identifier continuation bytes:
/// a-z, A-Z, 0-9, `_` and `$`. The sentinel maps to `false`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'$'
        );
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

fn is_unicode_ident_start(c: char) -> bool {
    c.is_alphabetic()
}

fn is_unicode_ident_continue(c: char) -> bool {
    c.is_alphanumeric()
}

/// Convenience function: tokenize a source string and collect all raw tokens.
///
/// Returns every token except the final `Eof`. For streaming access,
/// construct a `SourceBuffer` + `RawScanner` directly.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}
