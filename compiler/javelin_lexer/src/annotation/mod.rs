//! Annotation folding.
//!
//! After an `@`, the raw tokens of `@Name`, `@pkg.Name` and, in
//! [`AnnotationMode::Region`], a directly following `( ... )` argument list
//! are folded into one token. Arguments are balanced by counting raw `(`
//! and `)` tokens: string, char and comment tokens are opaque, so
//! parentheses inside them never count, and nested annotations are simply
//! part of the region.

use javelin_lexer_core::{RawScanner, RawTag};

use crate::config::AnnotationMode;
use crate::keywords;

/// What an `@` turned out to start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AtToken {
    /// `@` not followed by an annotation name; the `@` stands alone.
    Punctuation,
    /// `@interface`
    InterfaceKeyword,
    /// `balanced` is `false` when the argument list ran to end of input.
    Annotation { balanced: bool },
}

/// Fold the annotation starting at an `@`.
///
/// `scanner` must be positioned just after the `@`. On return it is
/// positioned after the folded region; for [`AtToken::Punctuation`] it is
/// left untouched.
pub(crate) fn fold(scanner: &mut RawScanner<'_>, source: &str, mode: AnnotationMode) -> AtToken {
    let mut ahead = scanner.clone();
    let Some(name) = next_name(&mut ahead, source) else {
        return AtToken::Punctuation;
    };
    if name == "interface" {
        *scanner = ahead;
        return AtToken::InterfaceKeyword;
    }
    if keywords::is_keyword(name) {
        return AtToken::Punctuation;
    }
    *scanner = ahead;

    // `.Name` qualification
    loop {
        let mut probe = scanner.clone();
        if probe.next_token().tag != RawTag::Dot {
            break;
        }
        match next_name(&mut probe, source) {
            Some(part) if !keywords::is_keyword(part) => *scanner = probe,
            _ => break,
        }
    }

    if mode == AnnotationMode::NameOnly || scanner.clone().next_token().tag != RawTag::LeftParen {
        return AtToken::Annotation { balanced: true };
    }
    AtToken::Annotation {
        balanced: eat_arguments(scanner),
    }
}

/// Consume a parenthesized argument list up to its matching `)`.
/// Returns `false` if input ends first.
fn eat_arguments(scanner: &mut RawScanner<'_>) -> bool {
    let mut depth = 0u32;
    loop {
        match scanner.next_token().tag {
            RawTag::LeftParen => depth += 1,
            RawTag::RightParen => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return true;
                }
            }
            RawTag::Eof => return false,
            _ => {}
        }
    }
}

/// Next raw token's text if it is an identifier.
fn next_name<'src>(scanner: &mut RawScanner<'_>, source: &'src str) -> Option<&'src str> {
    let start = scanner.pos() as usize;
    let tok = scanner.next_token();
    if tok.tag != RawTag::Ident {
        return None;
    }
    source.get(start..start + tok.len as usize)
}

#[cfg(test)]
mod tests;
