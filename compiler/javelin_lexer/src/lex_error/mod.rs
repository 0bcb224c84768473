//! Lexer diagnostics.
//!
//! Tokenizing never fails: malformed input still yields tokens, and each
//! problem is recorded as a [`LexError`] next to the stream. A token that
//! carries a diagnostic has [`TokenFlags::HAS_ERROR`](crate::TokenFlags::HAS_ERROR) set.

use thiserror::Error;

use crate::line_index::LineIndex;

/// A diagnostic with its byte span in the source.
#[derive(Clone, Debug, Error, Eq, PartialEq, Hash)]
#[error("{kind} at {start}..{end}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub start: u32,
    pub end: u32,
}

/// What went wrong.
#[derive(Clone, Debug, Error, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    // === Characters ===
    /// A character that starts no token rule (includes interior NUL and BOM).
    #[error("unrecognized character {ch:?}")]
    UnrecognizedCharacter { ch: char },

    // === Unterminated constructs ===
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated character literal")]
    UnterminatedChar,
    #[error("unterminated text block")]
    UnterminatedTextBlock,
    /// `@Name(` whose parentheses never balance before end of input.
    #[error("unbalanced annotation arguments")]
    UnbalancedAnnotation,

    // === Literal contents ===
    /// Backslash followed by a character that forms no escape (`\q`).
    #[error("invalid escape sequence `\\{escape}`")]
    InvalidEscape { escape: char },
    /// `\u` not followed by four hex digits.
    #[error("malformed unicode escape")]
    MalformedUnicodeEscape,
    #[error("empty character literal")]
    EmptyCharLiteral,
    #[error("character literal contains more than one character")]
    MultiCharLiteral,
    #[error("malformed number literal: {reason}")]
    MalformedNumber { reason: &'static str },
}

impl LexError {
    pub fn new(kind: LexErrorKind, start: u32, end: u32) -> Self {
        Self { kind, start, end }
    }

    #[cold]
    pub fn unrecognized(ch: char, start: u32, end: u32) -> Self {
        Self::new(LexErrorKind::UnrecognizedCharacter { ch }, start, end)
    }

    #[cold]
    pub fn invalid_escape(escape: char, start: u32, end: u32) -> Self {
        Self::new(LexErrorKind::InvalidEscape { escape }, start, end)
    }

    #[cold]
    pub fn malformed_number(reason: &'static str, start: u32, end: u32) -> Self {
        Self::new(LexErrorKind::MalformedNumber { reason }, start, end)
    }

    /// Whether the diagnostic marks a construct that ran to end of line or input.
    pub fn is_unterminated(&self) -> bool {
        matches!(
            self.kind,
            LexErrorKind::UnterminatedBlockComment
                | LexErrorKind::UnterminatedString
                | LexErrorKind::UnterminatedChar
                | LexErrorKind::UnterminatedTextBlock
                | LexErrorKind::UnbalancedAnnotation
        )
    }

    /// Render as `line:column: message`, both 1-based.
    pub fn render(&self, index: &LineIndex) -> String {
        let (line, column) = index.line_col(self.start);
        format!("{line}:{column}: {}", self.kind)
    }
}
