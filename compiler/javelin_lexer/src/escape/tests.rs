use super::*;
use pretty_assertions::assert_eq;

fn run(content: &str, kind: LiteralKind) -> (Option<String>, Vec<LexError>) {
    let mut errors = Vec::new();
    let value = unescape(content, kind, 10, &mut errors);
    (value, errors)
}

fn value(content: &str) -> String {
    let (value, errors) = run(content, LiteralKind::String);
    assert_eq!(errors, vec![], "unexpected errors for {content:?}");
    value.unwrap_or_else(|| content.to_owned())
}

// === Fast path ===

#[test]
fn no_backslash_returns_none() {
    assert_eq!(run("plain text", LiteralKind::String), (None, vec![]));
}

// === Simple escapes ===

#[test]
fn single_character_escapes() {
    assert_eq!(value(r#"\b\t\n\f\r\s"#), "\u{8}\t\n\u{c}\r ");
    assert_eq!(value(r#"\"\'\\"#), "\"'\\");
}

#[test]
fn escaped_backslash_then_u_is_not_unicode() {
    assert_eq!(value(r"\\u0041"), "\\u0041");
}

// === Octal ===

#[test]
fn octal_escapes() {
    assert_eq!(value(r"\0"), "\0");
    assert_eq!(value(r"\12"), "\n");
    assert_eq!(value(r"\101"), "A");
    assert_eq!(value(r"\377"), "\u{ff}");
}

#[test]
fn octal_digit_limits() {
    // First digit above 3 allows only two digits.
    assert_eq!(value(r"\477"), "'7");
    // Three digits at most.
    assert_eq!(value(r"\1012"), "A2");
    assert_eq!(value(r"\08"), "\u{0}8");
}

// === Unicode ===

#[test]
fn unicode_escape() {
    assert_eq!(value(r"\u0041"), "A");
    assert_eq!(value(r"\u03bb"), "\u{3bb}");
}

#[test]
fn repeated_u_is_allowed() {
    assert_eq!(value(r"\uuuuuuuuu007B"), "{");
}

#[test]
fn surrogate_pair_combines() {
    assert_eq!(value(r"\uD83D\uDE00"), "\u{1F600}");
}

#[test]
fn lone_surrogate_is_replaced() {
    assert_eq!(value(r"\uD83Dx"), "\u{FFFD}x");
    assert_eq!(value(r"\uDE00"), "\u{FFFD}");
}

#[test]
fn malformed_unicode_escape() {
    let (value, errors) = run(r"a\u12G4", LiteralKind::String);
    assert_eq!(value.as_deref(), Some("a\u{FFFD}12G4"));
    assert_eq!(
        errors,
        vec![LexError::new(LexErrorKind::MalformedUnicodeEscape, 11, 13)]
    );
}

#[test]
fn short_unicode_escape_at_end() {
    let (_, errors) = run(r"\uu00", LiteralKind::Char);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LexErrorKind::MalformedUnicodeEscape);
    assert_eq!((errors[0].start, errors[0].end), (10, 13));
}

// === Invalid ===

#[test]
fn invalid_escape_is_kept_and_reported() {
    let (value, errors) = run(r"x\qy", LiteralKind::String);
    assert_eq!(value.as_deref(), Some(r"x\qy"));
    assert_eq!(errors, vec![LexError::invalid_escape('q', 11, 13)]);
}

#[test]
fn invalid_non_ascii_escape_spans_full_char() {
    let (_, errors) = run("\\\u{3bb}", LiteralKind::String);
    assert_eq!(errors, vec![LexError::invalid_escape('\u{3bb}', 10, 13)]);
}

#[test]
fn trailing_backslash() {
    let (_, errors) = run("abc\\", LiteralKind::String);
    assert_eq!(errors, vec![LexError::invalid_escape('\\', 13, 14)]);
}

// === Text blocks ===

#[test]
fn line_continuation_only_in_text_blocks() {
    let (value, errors) = run("one \\\ntwo", LiteralKind::TextBlock);
    assert_eq!(errors, vec![]);
    assert_eq!(value.as_deref(), Some("one two"));

    let (value, errors) = run("one \\\r\ntwo", LiteralKind::TextBlock);
    assert_eq!(errors, vec![]);
    assert_eq!(value.as_deref(), Some("one two"));

    let (_, errors) = run("one \\\ntwo", LiteralKind::String);
    assert_eq!(errors.len(), 1);
}
