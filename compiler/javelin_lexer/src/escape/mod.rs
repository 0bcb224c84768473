//! Escape processing for char, string and text block literals.
//!
//! Valid in every literal: `\b` `\t` `\n` `\f` `\r` `\s` `\"` `\'` `\\`,
//! octal escapes `\0` through `\377`, and unicode escapes (`\u` with one or
//! more `u`, then exactly four hex digits). Text blocks also accept `\` before
//! a line terminator, which joins the lines.
//!
//! Invalid escapes push errors into the accumulator and are kept verbatim in
//! the unescaped value.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::lex_error::{LexError, LexErrorKind};

/// Which literal the content came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LiteralKind {
    Char,
    String,
    TextBlock,
}

type Chars<'a> = Peekable<CharIndices<'a>>;

/// Unescape a literal's content (between the delimiters).
///
/// `base_offset` is the absolute offset of `content` in the source; error
/// spans cover the offending escape sequence.
///
/// Fast path: if there are no backslashes, returns `None` to signal the
/// content is its own value.
#[allow(
    clippy::cast_possible_truncation,
    reason = "source offsets bounded by u32 by the source buffer"
)]
pub(crate) fn unescape(
    content: &str,
    kind: LiteralKind,
    base_offset: u32,
    errors: &mut Vec<LexError>,
) -> Option<String> {
    if !content.contains('\\') {
        return None;
    }

    let span = |from: usize, to: usize| (base_offset + from as u32, base_offset + to as u32);
    let mut out = Utf16Builder::with_capacity(content.len());
    let mut chars = content.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some((j, esc)) = chars.next() else {
            // Trailing backslash
            let (start, end) = span(i, i + 1);
            errors.push(LexError::invalid_escape('\\', start, end));
            out.push('\\');
            break;
        };
        match esc {
            'b' => out.push('\u{8}'),
            't' => out.push('\t'),
            'n' => out.push('\n'),
            'f' => out.push('\u{c}'),
            'r' => out.push('\r'),
            's' => out.push(' '),
            '"' | '\'' | '\\' => out.push(esc),
            '0'..='7' => out.push(octal_escape(esc, &mut chars)),
            'u' => {
                while chars.next_if(|&(_, c)| c == 'u').is_some() {}
                if let Some(unit) = hex4(&mut chars) {
                    out.push_unit(unit);
                } else {
                    let end = chars.peek().map_or(content.len(), |&(k, _)| k);
                    let (start, end) = span(i, end);
                    errors.push(LexError::new(
                        LexErrorKind::MalformedUnicodeEscape,
                        start,
                        end,
                    ));
                    out.push(char::REPLACEMENT_CHARACTER);
                }
            }
            '\n' if kind == LiteralKind::TextBlock => {}
            '\r' if kind == LiteralKind::TextBlock => {
                chars.next_if(|&(_, c)| c == '\n');
            }
            _ => {
                let (start, end) = span(i, j + esc.len_utf8());
                errors.push(LexError::invalid_escape(esc, start, end));
                out.push('\\');
                out.push(esc);
            }
        }
    }

    Some(out.finish())
}

/// `\0` to `\377`: up to three digits when the first is `0`-`3`, else two.
fn octal_escape(first: char, chars: &mut Chars<'_>) -> char {
    let max_digits = if first <= '3' { 3 } else { 2 };
    let mut value = first.to_digit(8).unwrap_or(0);
    for _ in 1..max_digits {
        match chars.next_if(|&(_, c)| c.is_digit(8)) {
            Some((_, c)) => value = value * 8 + c.to_digit(8).unwrap_or(0),
            None => break,
        }
    }
    char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Exactly four hex digits, consumed only on success.
fn hex4(chars: &mut Chars<'_>) -> Option<u16> {
    let mut ahead = chars.clone();
    let mut value: u16 = 0;
    for _ in 0..4 {
        let (_, c) = ahead.next()?;
        let digit = u16::try_from(c.to_digit(16)?).ok()?;
        value = value * 16 + digit;
    }
    *chars = ahead;
    Some(value)
}

/// String builder that pairs UTF-16 surrogate escapes (`\uD83D\uDE00`).
/// Unpaired surrogates become U+FFFD.
struct Utf16Builder {
    out: String,
    high: Option<u16>,
}

impl Utf16Builder {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            high: None,
        }
    }

    fn flush_high(&mut self) {
        if self.high.take().is_some() {
            self.out.push(char::REPLACEMENT_CHARACTER);
        }
    }

    fn push(&mut self, c: char) {
        self.flush_high();
        self.out.push(c);
    }

    fn push_unit(&mut self, unit: u16) {
        if let Some(high) = self.high.take() {
            if (0xDC00..=0xDFFF).contains(&unit) {
                let c = char::decode_utf16([high, unit])
                    .next()
                    .and_then(Result::ok)
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                self.out.push(c);
                return;
            }
            self.out.push(char::REPLACEMENT_CHARACTER);
        }
        if (0xD800..=0xDBFF).contains(&unit) {
            self.high = Some(unit);
        } else {
            self.out
                .push(char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER));
        }
    }

    fn finish(mut self) -> String {
        self.flush_high();
        self.out
    }
}

#[cfg(test)]
mod tests;
