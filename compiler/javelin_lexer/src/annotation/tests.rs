use super::*;
use javelin_lexer_core::SourceBuffer;
use pretty_assertions::assert_eq;

/// Fold at the `@` that starts `source`; returns the result and the
/// folded text.
fn fold_at(source: &str, mode: AnnotationMode) -> (AtToken, &str) {
    let buf = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor());
    assert_eq!(scanner.next_token().tag, RawTag::At);
    let result = fold(&mut scanner, source, mode);
    (result, &source[..scanner.pos() as usize])
}

fn region(source: &str) -> (AtToken, &str) {
    fold_at(source, AnnotationMode::Region)
}

const BALANCED: AtToken = AtToken::Annotation { balanced: true };

// === Names ===

#[test]
fn bare_name() {
    assert_eq!(region("@Override public"), (BALANCED, "@Override"));
}

#[test]
fn qualified_name() {
    assert_eq!(
        region("@java.lang.Deprecated void f()"),
        (BALANCED, "@java.lang.Deprecated")
    );
}

#[test]
fn qualification_stops_at_keyword() {
    assert_eq!(region("@Foo.class"), (BALANCED, "@Foo"));
}

#[test]
fn unicode_name() {
    assert_eq!(region("@\u{e9}t\u{e9} x"), (BALANCED, "@\u{e9}t\u{e9}"));
}

// === Arguments ===

#[test]
fn argument_list_is_folded() {
    assert_eq!(region("@Note(\"x\") int"), (BALANCED, "@Note(\"x\")"));
}

#[test]
fn nested_parentheses_and_annotations() {
    let source = "@A(b = @B(c = (1 + 2)), d = {3}) x";
    assert_eq!(region(source), (BALANCED, "@A(b = @B(c = (1 + 2)), d = {3})"));
}

#[test]
fn parentheses_in_literals_and_comments_do_not_count() {
    let source = "@A(\")\" + ')' /* ) */) y";
    assert_eq!(region(source), (BALANCED, "@A(\")\" + ')' /* ) */)"));
}

#[test]
fn space_before_paren_ends_the_name() {
    assert_eq!(region("@Note (x)"), (BALANCED, "@Note"));
}

#[test]
fn unbalanced_runs_to_end() {
    let source = "@Note(\"a\", (b";
    assert_eq!(
        region(source),
        (AtToken::Annotation { balanced: false }, source)
    );
}

#[test]
fn name_only_mode_leaves_arguments() {
    assert_eq!(
        fold_at("@Note(\"x\")", AnnotationMode::NameOnly),
        (BALANCED, "@Note")
    );
}

// === Not annotations ===

#[test]
fn interface_keyword() {
    assert_eq!(
        region("@interface Note {}"),
        (AtToken::InterfaceKeyword, "@interface")
    );
}

#[test]
fn lone_at() {
    assert_eq!(region("@ Note"), (AtToken::Punctuation, "@"));
    assert_eq!(region("@"), (AtToken::Punctuation, "@"));
    assert_eq!(region("@1"), (AtToken::Punctuation, "@"));
}

#[test]
fn at_before_keyword() {
    assert_eq!(region("@class"), (AtToken::Punctuation, "@"));
}
