//! Classified tokens.
//!
//! A [`Token`] borrows its lexeme from the input, so a token stream is a
//! zero-copy view of the source: concatenating every lexeme in order
//! reproduces the input exactly.

use std::fmt;
use std::ops::Range;

use crate::keywords::{self, KeywordClass};

/// Syntactic category assigned to a lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Keyword,
    Identifier,
    /// `@Name`, optionally with its balanced argument list.
    Annotation,
    Operator,
    NumberLiteral,
    CharLiteral,
    StringLiteral,
    Comment,
    Punctuation,
    /// Spaces, tabs, form feeds and line terminators.
    Whitespace,
    /// A single character that starts no token rule.
    Unknown,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 11] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Annotation,
        TokenKind::Operator,
        TokenKind::NumberLiteral,
        TokenKind::CharLiteral,
        TokenKind::StringLiteral,
        TokenKind::Comment,
        TokenKind::Punctuation,
        TokenKind::Whitespace,
        TokenKind::Unknown,
    ];

    /// Upper-case name used in reports (`NUMBER_LITERAL`).
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Annotation => "ANNOTATION",
            TokenKind::Operator => "OPERATOR",
            TokenKind::NumberLiteral => "NUMBER_LITERAL",
            TokenKind::CharLiteral => "CHAR_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::Comment => "COMMENT",
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Unknown => "UNKNOWN",
        }
    }

    /// Whitespace and comments.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// Number, char and string literals.
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::NumberLiteral | TokenKind::CharLiteral | TokenKind::StringLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// Per-token metadata. Flags refine a token; they never change its kind.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u8 {
        /// A diagnostic was recorded for this token.
        const HAS_ERROR = 1 << 0;
        /// Literal, comment or annotation ran to end of line or input.
        const UNTERMINATED = 1 << 1;
        /// `/** ... */`
        const DOC_COMMENT = 1 << 2;
        /// `"""` string.
        const TEXT_BLOCK = 1 << 3;
        /// Identifier used as a statement label.
        const LABEL = 1 << 4;
        /// `?` or `:` of a conditional expression.
        const TERNARY = 1 << 5;
        /// `?` as a generic wildcard.
        const WILDCARD = 1 << 6;
    }
}

/// A classified slice of the input.
///
/// `start..end` are byte offsets; `lexeme` is exactly `source[start..end]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub start: u32,
    pub end: u32,
    pub flags: TokenFlags,
}

impl<'src> Token<'src> {
    /// Byte length of the lexeme.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Tokens are never empty; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Byte range in the source, for slicing.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }

    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    #[inline]
    pub fn has_error(&self) -> bool {
        self.flags.contains(TokenFlags::HAS_ERROR)
    }

    /// Highlighting category of a keyword token; `None` for other kinds.
    pub fn keyword_class(&self) -> Option<KeywordClass> {
        if self.kind != TokenKind::Keyword {
            return None;
        }
        match self.lexeme.strip_prefix('@') {
            Some("interface") => Some(KeywordClass::Declaration),
            _ => keywords::lookup(self.lexeme),
        }
    }
}

/// Number of tokens of each kind in a stream.
///
/// Built with `collect()` over token kinds:
///
/// ```
/// use javelin_lexer::{tokenize, KindCounts, TokenKind};
///
/// let counts: KindCounts = tokenize("int x = 1;").iter().map(|t| t.kind).collect();
/// assert_eq!(counts.get(TokenKind::Keyword), 1);
/// assert_eq!(counts.get(TokenKind::NumberLiteral), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct KindCounts([usize; TokenKind::ALL.len()]);

impl KindCounts {
    pub fn from_tokens<'a, 'src: 'a>(tokens: impl IntoIterator<Item = &'a Token<'src>>) -> Self {
        tokens.into_iter().map(|token| token.kind).collect()
    }

    pub fn get(&self, kind: TokenKind) -> usize {
        self.0[kind as usize]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Kinds with a non-zero count, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenKind, usize)> + '_ {
        TokenKind::ALL
            .iter()
            .map(|&kind| (kind, self.get(kind)))
            .filter(|&(_, n)| n > 0)
    }
}

impl Extend<TokenKind> for KindCounts {
    fn extend<I: IntoIterator<Item = TokenKind>>(&mut self, iter: I) {
        for kind in iter {
            self.0[kind as usize] += 1;
        }
    }
}

impl FromIterator<TokenKind> for KindCounts {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        let mut counts = KindCounts::default();
        counts.extend(iter);
        counts
    }
}

impl fmt::Display for KindCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, n) in self.iter() {
            writeln!(f, "{kind}: {n}")?;
        }
        Ok(())
    }
}
