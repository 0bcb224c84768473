use super::*;

// === RawTag discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    assert_eq!(RawTag::Ident as u8, 0);
    assert_eq!(RawTag::Char as u8, 8);

    assert_eq!(RawTag::Plus as u8, 32);
    assert_eq!(RawTag::UShrEqual as u8, 69);

    assert_eq!(RawTag::LeftParen as u8, 80);
    assert_eq!(RawTag::At as u8, 91);

    assert_eq!(RawTag::Whitespace as u8, 112);
    assert_eq!(RawTag::DocComment as u8, 116);

    assert_eq!(RawTag::InvalidChar as u8, 240);
    assert_eq!(RawTag::InteriorNull as u8, 245);

    assert_eq!(RawTag::Eof as u8, 255);
}

#[test]
fn tag_is_one_byte() {
    assert_eq!(std::mem::size_of::<RawTag>(), 1);
}

// === Groups ===

#[test]
fn trivia_group() {
    for tag in [
        RawTag::Whitespace,
        RawTag::Newline,
        RawTag::LineComment,
        RawTag::BlockComment,
        RawTag::DocComment,
    ] {
        assert!(tag.is_trivia(), "{tag:?} should be trivia");
    }
    assert!(!RawTag::Ident.is_trivia());
    assert!(!RawTag::UnterminatedBlockComment.is_trivia());
}

#[test]
fn error_group() {
    for tag in [
        RawTag::InvalidChar,
        RawTag::UnterminatedString,
        RawTag::UnterminatedChar,
        RawTag::UnterminatedTextBlock,
        RawTag::UnterminatedBlockComment,
        RawTag::InteriorNull,
    ] {
        assert!(tag.is_error(), "{tag:?} should be an error tag");
    }
    assert!(!RawTag::Eof.is_error());
}

#[test]
fn operator_and_separator_groups_are_disjoint() {
    assert!(RawTag::Colon.is_operator());
    assert!(!RawTag::Colon.is_separator());
    assert!(RawTag::ColonColon.is_separator());
    assert!(!RawTag::ColonColon.is_operator());
    assert!(RawTag::Arrow.is_operator());
    assert!(RawTag::DotDotDot.is_separator());
}

// === Lexeme ===

#[test]
fn fixed_lexeme_operators() {
    assert_eq!(RawTag::Plus.lexeme(), Some("+"));
    assert_eq!(RawTag::Question.lexeme(), Some("?"));
    assert_eq!(RawTag::Arrow.lexeme(), Some("->"));
    assert_eq!(RawTag::UShr.lexeme(), Some(">>>"));
    assert_eq!(RawTag::UShrEqual.lexeme(), Some(">>>="));
    assert_eq!(RawTag::ShlEqual.lexeme(), Some("<<="));
}

#[test]
fn fixed_lexeme_separators() {
    assert_eq!(RawTag::DotDotDot.lexeme(), Some("..."));
    assert_eq!(RawTag::ColonColon.lexeme(), Some("::"));
    assert_eq!(RawTag::At.lexeme(), Some("@"));
}

#[test]
fn variable_tags_have_no_lexeme() {
    for tag in [
        RawTag::Ident,
        RawTag::Int,
        RawTag::String,
        RawTag::Whitespace,
        RawTag::LineComment,
        RawTag::InvalidChar,
        RawTag::Eof,
    ] {
        assert_eq!(tag.lexeme(), None, "{tag:?} has variable text");
    }
}

#[test]
fn lexeme_length_matches_operator_width() {
    for tag in [RawTag::Shr, RawTag::PlusPlus, RawTag::PipePipe, RawTag::BangEqual] {
        assert_eq!(tag.lexeme().map(str::len), Some(2));
    }
}
