//! Token cooking layer.
//!
//! Turns `(RawTag, len)` pairs from the raw scanner into classified tokens:
//!
//! ```text
//! source → RawScanner → (RawTag, len) → TokenCooker → (TokenKind, TokenFlags)
//! ```
//!
//! Each `RawTag` category has a dedicated cooking path:
//! - **Operators/separators**: direct mapping, except `:` (ternary or not)
//!   and `?` (conditional or wildcard)
//! - **Identifiers**: keyword lookup, label detection
//! - **Numerics**: malformed-literal checks
//! - **Strings/chars**: escape validation, char literal arity
//! - **Errors**: push a `LexError`, flag the token
//!
//! Annotations and whitespace runs span several raw tokens and are folded by
//! the driver loop before they get here.

use javelin_lexer_core::{RawScanner, RawTag};
use tracing::debug;

use crate::annotation::AtToken;
use crate::config::LexerConfig;
use crate::context::StatementContext;
use crate::escape::{self, LiteralKind};
use crate::keywords;
use crate::lex_error::{LexError, LexErrorKind};
use crate::numeric;
use crate::token::{TokenFlags, TokenKind};

/// Cooks raw tokens into classified tokens, one call per token.
///
/// Carries the statement context across calls and accumulates diagnostics
/// for the whole input.
pub(crate) struct TokenCooker<'src> {
    source: &'src str,
    config: LexerConfig,
    context: StatementContext,
    errors: Vec<LexError>,
    /// Flags of the token currently being cooked.
    flags: TokenFlags,
    /// The previous significant token was `<` or `,`, so a `?` here sits in
    /// a type argument position.
    type_argument_start: bool,
}

impl<'src> TokenCooker<'src> {
    pub(crate) fn new(source: &'src str, config: LexerConfig) -> Self {
        Self {
            source,
            config,
            context: StatementContext::default(),
            errors: Vec::new(),
            flags: TokenFlags::empty(),
            type_argument_start: false,
        }
    }

    pub(crate) fn source(&self) -> &'src str {
        self.source
    }

    pub(crate) fn config(&self) -> &LexerConfig {
        &self.config
    }

    pub(crate) fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Consume the cooker, returning accumulated errors.
    pub(crate) fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    /// Brace depth of the statement context.
    pub(crate) fn depth(&self) -> usize {
        self.context.depth()
    }

    /// Source text of `start..end`.
    #[inline]
    pub(crate) fn text(&self, start: u32, end: u32) -> &'src str {
        self.source
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    /// Cook a single raw token.
    ///
    /// `ahead` is the scanner positioned right after the token; it is
    /// cloned for lookahead, never advanced.
    pub(crate) fn cook(
        &mut self,
        tag: RawTag,
        start: u32,
        end: u32,
        ahead: &RawScanner<'_>,
    ) -> (TokenKind, TokenFlags) {
        self.flags = TokenFlags::empty();
        let kind = match tag {
            // Trivia leaves the statement context alone.
            RawTag::Whitespace | RawTag::Newline => TokenKind::Whitespace,
            RawTag::LineComment | RawTag::BlockComment => TokenKind::Comment,
            RawTag::DocComment => {
                self.flags |= TokenFlags::DOC_COMMENT;
                TokenKind::Comment
            }
            RawTag::UnterminatedBlockComment => {
                if self.text(start, end).starts_with("/**") {
                    self.flags |= TokenFlags::DOC_COMMENT;
                }
                self.unterminated(LexErrorKind::UnterminatedBlockComment, start, end);
                TokenKind::Comment
            }

            RawTag::Ident => self.cook_ident(start, end, ahead),

            RawTag::Int | RawTag::Float | RawTag::HexInt | RawTag::HexFloat | RawTag::BinInt => {
                self.context.operand();
                if let Some(reason) = numeric::check(tag, self.text(start, end)) {
                    self.report(LexError::malformed_number(reason, start, end));
                }
                TokenKind::NumberLiteral
            }
            RawTag::String => {
                self.context.operand();
                self.check_escapes(start + 1, end - 1, LiteralKind::String);
                TokenKind::StringLiteral
            }
            RawTag::TextBlock => {
                self.context.operand();
                self.flags |= TokenFlags::TEXT_BLOCK;
                self.check_escapes(start + 3, end - 3, LiteralKind::TextBlock);
                TokenKind::StringLiteral
            }
            RawTag::Char => {
                self.context.operand();
                self.check_char(start, end);
                TokenKind::CharLiteral
            }
            RawTag::UnterminatedString => {
                self.context.operand();
                self.unterminated(LexErrorKind::UnterminatedString, start, end);
                TokenKind::StringLiteral
            }
            RawTag::UnterminatedTextBlock => {
                self.context.operand();
                self.flags |= TokenFlags::TEXT_BLOCK;
                self.unterminated(LexErrorKind::UnterminatedTextBlock, start, end);
                TokenKind::StringLiteral
            }
            RawTag::UnterminatedChar => {
                self.context.operand();
                self.unterminated(LexErrorKind::UnterminatedChar, start, end);
                TokenKind::CharLiteral
            }

            RawTag::Question => self.cook_question(ahead),
            RawTag::Colon => {
                if self.context.colon() {
                    self.flags |= TokenFlags::TERNARY;
                    TokenKind::Operator
                } else {
                    TokenKind::Punctuation
                }
            }
            RawTag::Arrow => {
                self.context.arrow();
                TokenKind::Operator
            }
            RawTag::LeftBrace => {
                self.context.open_brace();
                TokenKind::Punctuation
            }
            RawTag::RightBrace => {
                self.context.close_brace();
                TokenKind::Punctuation
            }
            RawTag::Semicolon => {
                self.context.semicolon();
                TokenKind::Punctuation
            }

            RawTag::InvalidChar | RawTag::InteriorNull => {
                self.context.operand();
                let ch = self.text(start, end).chars().next().unwrap_or('\0');
                self.report(LexError::unrecognized(ch, start, end));
                TokenKind::Unknown
            }

            tag if tag.is_operator() => {
                self.context.operand();
                TokenKind::Operator
            }
            // Remaining separators, including a lone `@`.
            tag if tag.is_separator() => {
                self.context.operand();
                TokenKind::Punctuation
            }
            _ => TokenKind::Unknown,
        };
        if !tag.is_trivia() {
            self.type_argument_start = matches!(tag, RawTag::Less | RawTag::Comma);
        }
        (kind, self.flags)
    }

    /// Cook the token an `@` folded into.
    pub(crate) fn cook_at(&mut self, at: AtToken, start: u32, end: u32) -> (TokenKind, TokenFlags) {
        self.flags = TokenFlags::empty();
        let kind = match at {
            AtToken::Punctuation => {
                self.type_argument_start = false;
                self.context.operand();
                TokenKind::Punctuation
            }
            AtToken::InterfaceKeyword => {
                self.type_argument_start = false;
                self.context.keyword("@interface");
                TokenKind::Keyword
            }
            // Type annotations keep the position open: `List<@NonNull ?>`.
            AtToken::Annotation { balanced } => {
                self.context.operand();
                if !balanced {
                    self.unterminated(LexErrorKind::UnbalancedAnnotation, start, end);
                }
                debug!(start, end, balanced, "folded annotation");
                TokenKind::Annotation
            }
        };
        (kind, self.flags)
    }

    fn cook_ident(&mut self, start: u32, end: u32, ahead: &RawScanner<'_>) -> TokenKind {
        let text = self.text(start, end);
        if keywords::is_keyword(text) {
            self.context.keyword(text);
            return TokenKind::Keyword;
        }
        if self.context.label_allowed()
            && matches!(next_significant(ahead, self.source), Some((RawTag::Colon, _)))
        {
            self.flags |= TokenFlags::LABEL;
        }
        self.context.operand();
        TokenKind::Identifier
    }

    /// `?` right after `<` or `,` and closing over `>`, `,`, `extends` or
    /// `super` is a wildcard (`List<?>`, `Map<?, ?>`, `<? super T>`);
    /// anything else is a conditional waiting for its `:`.
    fn cook_question(&mut self, ahead: &RawScanner<'_>) -> TokenKind {
        let wildcard = self.type_argument_start
            && matches!(
                next_significant(ahead, self.source),
                Some((RawTag::Greater | RawTag::Shr | RawTag::UShr | RawTag::Comma, _))
                    | Some((RawTag::Ident, "extends" | "super"))
            );
        if wildcard {
            self.flags |= TokenFlags::WILDCARD;
            self.context.operand();
        } else {
            self.flags |= TokenFlags::TERNARY;
            self.context.question();
        }
        TokenKind::Operator
    }

    fn check_escapes(&mut self, content_start: u32, content_end: u32, kind: LiteralKind) {
        let content = self.text(content_start, content_end);
        let mut issues = Vec::new();
        escape::unescape(content, kind, content_start, &mut issues);
        for issue in issues {
            self.report(issue);
        }
    }

    /// A char literal must hold exactly one character once unescaped.
    fn check_char(&mut self, start: u32, end: u32) {
        let content_start = start + 1;
        let content = self.text(content_start, end - 1);
        let mut issues = Vec::new();
        let value = escape::unescape(content, LiteralKind::Char, content_start, &mut issues);
        if !issues.is_empty() {
            for issue in issues {
                self.report(issue);
            }
            return;
        }
        let kind = match value.as_deref().unwrap_or(content).chars().count() {
            1 => return,
            0 => LexErrorKind::EmptyCharLiteral,
            _ => LexErrorKind::MultiCharLiteral,
        };
        self.report(LexError::new(kind, start, end));
    }

    fn unterminated(&mut self, kind: LexErrorKind, start: u32, end: u32) {
        self.flags |= TokenFlags::UNTERMINATED;
        self.report(LexError::new(kind, start, end));
    }

    /// Record a diagnostic. The token is flagged even when the error limit
    /// drops the diagnostic itself.
    #[cold]
    fn report(&mut self, error: LexError) {
        self.flags |= TokenFlags::HAS_ERROR;
        debug!(kind = %error.kind, start = error.start, end = error.end, "lex diagnostic");
        if self.config.accepts_error(self.errors.len()) {
            self.errors.push(error);
        }
    }
}

/// Next non-trivia raw token after `ahead`, with its text.
fn next_significant<'src>(ahead: &RawScanner<'_>, source: &'src str) -> Option<(RawTag, &'src str)> {
    let mut scanner = ahead.clone();
    loop {
        let start = scanner.pos();
        let tok = scanner.next_token();
        match tok.tag {
            RawTag::Eof => return None,
            tag if tag.is_trivia() => {}
            tag => {
                let text = source
                    .get(start as usize..(start + tok.len) as usize)
                    .unwrap_or_default();
                return Some((tag, text));
            }
        }
    }
}
