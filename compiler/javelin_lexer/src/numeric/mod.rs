//! Numeric literal validation.
//!
//! The raw scanner takes the longest numeric-looking run, so forms like `0x`
//! or `1e+` arrive here as single tokens. This module decides whether the
//! run is a well-formed literal; it never splits a token.

use javelin_lexer_core::RawTag;

pub(crate) const NO_HEX_DIGITS: &str = "hexadecimal literal has no digits";
pub(crate) const NO_BINARY_DIGITS: &str = "binary literal has no digits";
pub(crate) const NO_EXPONENT_DIGITS: &str = "exponent has no digits";
pub(crate) const NO_BINARY_EXPONENT: &str = "hexadecimal float needs a binary exponent";
pub(crate) const BAD_OCTAL_DIGIT: &str = "invalid digit in octal literal";
pub(crate) const MISPLACED_UNDERSCORE: &str = "underscore must be between digits";

/// Reason the literal is malformed, or `None` if it is valid.
pub(crate) fn check(tag: RawTag, text: &str) -> Option<&'static str> {
    match tag {
        RawTag::Int => check_int(text),
        RawTag::Float => check_float(text),
        RawTag::HexInt => check_hex_int(text),
        RawTag::HexFloat => check_hex_float(text),
        RawTag::BinInt => check_bin_int(text),
        _ => None,
    }
}

fn check_int(text: &str) -> Option<&'static str> {
    let digits = strip_long_suffix(text);
    if digits.len() > 1 && digits.starts_with('0') && digits.contains(['8', '9']) {
        return Some(BAD_OCTAL_DIGIT);
    }
    underscores(digits, u8::is_ascii_digit)
}

fn check_float(text: &str) -> Option<&'static str> {
    let body = strip_float_suffix(text);
    if let Some((_, exponent)) = body.split_once(['e', 'E']) {
        if !has_digit(signless(exponent), u8::is_ascii_digit) {
            return Some(NO_EXPONENT_DIGITS);
        }
    }
    underscores(body, u8::is_ascii_digit)
}

fn check_hex_int(text: &str) -> Option<&'static str> {
    let digits = strip_long_suffix(after_prefix(text));
    if !has_digit(digits, u8::is_ascii_hexdigit) {
        return Some(NO_HEX_DIGITS);
    }
    underscores(digits, u8::is_ascii_hexdigit)
}

fn check_hex_float(text: &str) -> Option<&'static str> {
    let body = after_prefix(text);
    let Some((mantissa, exponent)) = body.split_once(['p', 'P']) else {
        return if has_digit(body, u8::is_ascii_hexdigit) {
            Some(NO_BINARY_EXPONENT)
        } else {
            Some(NO_HEX_DIGITS)
        };
    };
    if !has_digit(mantissa, u8::is_ascii_hexdigit) {
        return Some(NO_HEX_DIGITS);
    }
    let exponent = signless(strip_float_suffix(exponent));
    if !has_digit(exponent, u8::is_ascii_digit) {
        return Some(NO_EXPONENT_DIGITS);
    }
    underscores(mantissa, u8::is_ascii_hexdigit).or_else(|| underscores(exponent, u8::is_ascii_digit))
}

fn check_bin_int(text: &str) -> Option<&'static str> {
    let digits = strip_long_suffix(after_prefix(text));
    if !has_digit(digits, |&b| matches!(b, b'0' | b'1')) {
        return Some(NO_BINARY_DIGITS);
    }
    underscores(digits, |&b| matches!(b, b'0' | b'1'))
}

/// Digits after a `0x`/`0b` prefix.
fn after_prefix(text: &str) -> &str {
    text.get(2..).unwrap_or_default()
}

fn strip_long_suffix(text: &str) -> &str {
    text.strip_suffix(['l', 'L']).unwrap_or(text)
}

fn strip_float_suffix(text: &str) -> &str {
    text.strip_suffix(['f', 'F', 'd', 'D']).unwrap_or(text)
}

fn signless(exponent: &str) -> &str {
    exponent.strip_prefix(['+', '-']).unwrap_or(exponent)
}

fn has_digit(text: &str, is_digit: fn(&u8) -> bool) -> bool {
    text.as_bytes().iter().any(is_digit)
}

/// Every run of `_` must sit between two digits (`1__000` is fine, `1_.5`
/// and `0x_1` are not).
fn underscores(text: &str, is_digit: fn(&u8) -> bool) -> Option<&'static str> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'_' {
            i += 1;
            continue;
        }
        let run_start = i;
        while bytes.get(i) == Some(&b'_') {
            i += 1;
        }
        let before = run_start.checked_sub(1).and_then(|k| bytes.get(k));
        let after = bytes.get(i);
        if !before.is_some_and(is_digit) || !after.is_some_and(is_digit) {
            return Some(MISPLACED_UNDERSCORE);
        }
    }
    None
}

#[cfg(test)]
mod tests;
