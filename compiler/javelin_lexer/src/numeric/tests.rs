use super::*;

fn int(text: &str) -> Option<&'static str> {
    check(RawTag::Int, text)
}

fn float(text: &str) -> Option<&'static str> {
    check(RawTag::Float, text)
}

// === Valid ===

#[test]
fn valid_integers() {
    for text in ["0", "7", "123", "1_000_000", "1__0", "0L", "1l", "010", "0_7", "00"] {
        assert_eq!(int(text), None, "{text}");
    }
    assert_eq!(check(RawTag::HexInt, "0x1"), None);
    assert_eq!(check(RawTag::HexInt, "0XFF_FFL"), None);
    assert_eq!(check(RawTag::BinInt, "0b1010"), None);
    assert_eq!(check(RawTag::BinInt, "0B1_0L"), None);
}

#[test]
fn valid_floats() {
    for text in ["2.", "1.0", ".1", "4.e-1", "1e5", "1E+5", "3f", "2d", ".5e3f", "09.5", "1_0.0_1"] {
        assert_eq!(float(text), None, "{text}");
    }
    assert_eq!(check(RawTag::HexFloat, "0x3p+0"), None);
    assert_eq!(check(RawTag::HexFloat, "0x1.8p1f"), None);
    assert_eq!(check(RawTag::HexFloat, "0x.8p-2"), None);
}

// === Malformed ===

#[test]
fn prefix_without_digits() {
    assert_eq!(check(RawTag::HexInt, "0x"), Some(NO_HEX_DIGITS));
    assert_eq!(check(RawTag::HexInt, "0xL"), Some(NO_HEX_DIGITS));
    assert_eq!(check(RawTag::BinInt, "0b"), Some(NO_BINARY_DIGITS));
}

#[test]
fn exponent_without_digits() {
    assert_eq!(float("1e+"), Some(NO_EXPONENT_DIGITS));
    assert_eq!(float("1e"), Some(NO_EXPONENT_DIGITS));
    assert_eq!(float("2.5E-f"), Some(NO_EXPONENT_DIGITS));
    assert_eq!(check(RawTag::HexFloat, "0x1p"), Some(NO_EXPONENT_DIGITS));
}

#[test]
fn hex_float_needs_exponent() {
    assert_eq!(check(RawTag::HexFloat, "0x1.8"), Some(NO_BINARY_EXPONENT));
    assert_eq!(check(RawTag::HexFloat, "0x.p1"), Some(NO_HEX_DIGITS));
    assert_eq!(check(RawTag::HexFloat, "0x."), Some(NO_HEX_DIGITS));
}

#[test]
fn octal_with_decimal_digits() {
    assert_eq!(int("09"), Some(BAD_OCTAL_DIGIT));
    assert_eq!(int("0128L"), Some(BAD_OCTAL_DIGIT));
    assert_eq!(int("9"), None);
}

#[test]
fn misplaced_underscores() {
    assert_eq!(int("1_"), Some(MISPLACED_UNDERSCORE));
    assert_eq!(int("1_L"), Some(MISPLACED_UNDERSCORE));
    assert_eq!(float("1_.5"), Some(MISPLACED_UNDERSCORE));
    assert_eq!(float("1._5"), Some(MISPLACED_UNDERSCORE));
    assert_eq!(float("1e_5"), Some(MISPLACED_UNDERSCORE));
    assert_eq!(check(RawTag::HexInt, "0x_1"), Some(MISPLACED_UNDERSCORE));
    assert_eq!(check(RawTag::BinInt, "0b1_"), Some(MISPLACED_UNDERSCORE));
}

#[test]
fn non_numeric_tags_pass() {
    assert_eq!(check(RawTag::Ident, "0x"), None);
}
