//! Tokenizes the bundled Java corpus end to end.
//!
//! The corpus mixes valid and intentionally odd Java: annotations in type
//! positions, comment decoys inside generics, labels next to ternaries,
//! unusual literals, a mis-encoded identifier and a SUB that is not the
//! last character. The file is kept byte for byte, so those last two show
//! up as `UNKNOWN` tokens.

use javelin_lexer::{
    tokenize_with_errors, AnnotationMode, KindCounts, LexErrorKind, LexerConfig, Token,
    TokenFlags, TokenKind, Tokenizer,
};
use pretty_assertions::assert_eq;

const CORPUS: &str = include_str!("fixtures/example.java");

/// Mojibake on the two `Tester` interface lines, then the SUB.
const UNRECOGNIZED: [(char, u32); 7] = [
    ('\u{256c}', 489),
    ('\u{a7}', 492),
    ('\u{256c}', 494),
    ('\u{256c}', 3121),
    ('\u{a7}', 3124),
    ('\u{256c}', 3126),
    ('\u{1a}', 6959),
];

fn tokens() -> Vec<Token<'static>> {
    let (tokens, errors) = tokenize_with_errors(CORPUS);
    let unrecognized: Vec<_> = errors
        .iter()
        .map(|e| match e.kind {
            LexErrorKind::UnrecognizedCharacter { ch } => Some((ch, e.start)),
            _ => None,
        })
        .collect();
    let expected: Vec<_> = UNRECOGNIZED.iter().copied().map(Some).collect();
    assert_eq!(unrecognized, expected);
    tokens
}

fn lexemes_of(tokens: &[Token<'static>], kind: TokenKind) -> Vec<&'static str> {
    tokens
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.lexeme)
        .collect()
}

#[test]
fn corpus_is_lossless() {
    let text: String = tokens().iter().map(|t| t.lexeme).collect();
    assert_eq!(text, CORPUS);
}

#[test]
fn unknown_tokens_are_the_unrecognized_characters() {
    let tokens = tokens();
    let counts = KindCounts::from_tokens(&tokens);
    assert_eq!(counts.get(TokenKind::Unknown), UNRECOGNIZED.len());
    assert!(counts.get(TokenKind::Keyword) > 0);
    assert!(counts.get(TokenKind::Annotation) > 0);

    let unknown: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Unknown)
        .map(|t| (t.lexeme, t.start, t.has_error()))
        .collect();
    assert_eq!(
        unknown,
        vec![
            ("\u{256c}", 489, true),
            ("\u{a7}", 492, true),
            ("\u{256c}", 494, true),
            ("\u{256c}", 3121, true),
            ("\u{a7}", 3124, true),
            ("\u{256c}", 3126, true),
            ("\u{1a}", 6959, true),
        ]
    );
}

#[test]
fn annotations() {
    let tokens = tokens();
    let annotations = lexemes_of(&tokens, TokenKind::Annotation);
    assert_eq!(annotations.len(), 26);
    assert_eq!(
        annotations.iter().filter(|a| **a == "@Override").count(),
        15
    );
    assert!(annotations.contains(&"@Retention(RetentionPolicy.RUNTIME)"));
    assert!(annotations.contains(&"@Documented()"));
    assert!(annotations.contains(&"@Note(\"A more specific exception type would be preferable\")"));
    assert!(annotations.contains(&"@Note(\"The args aren't used\")"));
    assert!(annotations.contains(
        &"@Note(\"The \\\"assert\\\" statement disables labels until the next \"\n              + \"colon, yet \\\"? :\\\" doesn't break anything\")"
    ));
}

#[test]
fn interface_keyword_is_one_token() {
    let tokens = tokens();
    let keywords = lexemes_of(&tokens, TokenKind::Keyword);
    assert!(keywords.contains(&"@interface"));
}

#[test]
fn non_ascii_identifier_after_mojibake() {
    let tokens = tokens();
    let idents = lexemes_of(&tokens, TokenKind::Identifier);
    assert_eq!(
        idents.iter().filter(|i| **i == "\u{137}Tester").count(),
        2
    );
}

#[test]
fn labels_and_ternaries() {
    let tokens = tokens();
    let labels: Vec<_> = tokens
        .iter()
        .filter(|t| t.flags.contains(TokenFlags::LABEL))
        .map(|t| t.lexeme)
        .collect();
    assert_eq!(labels, vec!["label1", "label2"]);

    let ternary: Vec<_> = tokens
        .iter()
        .filter(|t| t.flags.contains(TokenFlags::TERNARY))
        .map(|t| (t.kind, t.lexeme))
        .collect();
    assert_eq!(
        ternary,
        vec![
            (TokenKind::Operator, "?"),
            (TokenKind::Operator, ":"),
            (TokenKind::Operator, "?"),
            (TokenKind::Operator, ":"),
        ]
    );
}

#[test]
fn assert_message_colon_is_punctuation() {
    let tokens = tokens();
    let colons: Vec<_> = tokens
        .windows(2)
        .filter(|w| w[0].lexeme == "eleven" && w[1].lexeme == ":")
        .map(|w| w[1].kind)
        .collect();
    assert_eq!(colons, vec![TokenKind::Punctuation]);
}

#[test]
fn number_literals() {
    let tokens = tokens();
    let numbers = lexemes_of(&tokens, TokenKind::NumberLiteral);
    for expected in [
        "1l", "0x1", "2.", "1.0", ".1", "0.3", "4.e-1", "3L", "1F", "3f", "0x3p+0", "010", "00",
    ] {
        assert!(numbers.contains(&expected), "missing {expected}");
    }
}

#[test]
fn char_and_string_literals() {
    let tokens = tokens();
    let chars = lexemes_of(&tokens, TokenKind::CharLiteral);
    assert_eq!(chars, vec!["'\\173'", "'\\uuuuuuuuu007B'", "'\\''", "'\\t'"]);

    let strings = lexemes_of(&tokens, TokenKind::StringLiteral);
    assert!(strings.contains(&"\"\\uuuuu0001\""));
    assert!(strings.contains(&"\"Addition is broken\""));
}

#[test]
fn comment_decoys() {
    let tokens = tokens();
    let comments = lexemes_of(&tokens, TokenKind::Comment);
    assert!(comments.contains(&"/*) /*/"));
    assert!(comments.contains(&"/*>*/"));
    assert!(comments.contains(&"// TODO static non-*"));
    assert!(comments[0].starts_with("/*\nwildcards"));
}

#[test]
fn method_references_and_varargs() {
    let tokens = tokens();
    let punctuation = lexemes_of(&tokens, TokenKind::Punctuation);
    assert_eq!(punctuation.iter().filter(|p| **p == "::").count(), 2);
    assert_eq!(punctuation.iter().filter(|p| **p == "...").count(), 1);
}

#[test]
fn sub_before_final_newline_is_unknown() {
    let tokens = tokens();
    let tail: Vec<_> = tokens[tokens.len() - 3..]
        .iter()
        .map(|t| (t.kind, t.lexeme))
        .collect();
    assert_eq!(
        tail,
        vec![
            (TokenKind::Whitespace, "\n"),
            (TokenKind::Unknown, "\u{1a}"),
            (TokenKind::Whitespace, "\n"),
        ]
    );
}

#[test]
fn name_only_annotations_still_lossless() {
    let tokenizer =
        Tokenizer::with_config(CORPUS, LexerConfig::with_annotations(AnnotationMode::NameOnly));
    let mut stream = tokenizer.tokens();
    let tokens: Vec<_> = stream.by_ref().collect();
    assert_eq!(stream.errors().len(), UNRECOGNIZED.len());
    let text: String = tokens.iter().map(|t| t.lexeme).collect();
    assert_eq!(text, CORPUS);
    assert!(tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Annotation)
        .all(|t| !t.lexeme.contains('(')));
}
