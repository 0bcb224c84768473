//! Lossless classifying tokenizer for Java-like source text.
//!
//! Splits text into a contiguous sequence of classified tokens for syntax
//! highlighting. The stream is lossless: concatenating every token's lexeme
//! in order reproduces the input exactly, for any input. Malformed text
//! never aborts tokenizing; problems degrade to `UNKNOWN` tokens, token
//! flags and [`LexError`] diagnostics.
//!
//! # Architecture
//!
//! ```text
//! &str → SourceBuffer → RawScanner (javelin_lexer_core)
//!      → Tokens driver: whitespace merging, annotation folding
//!      → TokenCooker: keywords, labels/ternaries, literal checks
//!      → Token { kind, lexeme, start, end, flags }
//! ```
//!
//! # Example
//!
//! ```
//! use javelin_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("@Override public String toString() { return \"x\"; }");
//! assert_eq!(tokens[0].kind, TokenKind::Annotation);
//! assert_eq!(tokens[2].kind, TokenKind::Keyword);
//! let text: String = tokens.iter().map(|t| t.lexeme).collect();
//! assert_eq!(text, "@Override public String toString() { return \"x\"; }");
//! ```

mod annotation;
mod config;
mod context;
mod cooker;
mod escape;
mod keywords;
mod lex_error;
mod line_index;
mod numeric;
mod token;

use std::iter::FusedIterator;
use std::sync::Once;

use javelin_lexer_core::{EncodingIssue, RawScanner, RawTag, SourceBuffer};
use tracing::trace;

use cooker::TokenCooker;

pub use config::{AnnotationMode, LexerConfig};
pub use keywords::KeywordClass;
pub use lex_error::{LexError, LexErrorKind};
pub use line_index::LineIndex;
pub use token::{KindCounts, Token, TokenFlags, TokenKind};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=javelin_lexer=debug` (diagnostics and folded
/// annotations) or `RUST_LOG=javelin_lexer=trace` (every token).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// A tokenizer bound to one source text.
///
/// Immutable after construction: [`tokens`](Self::tokens) can be called any
/// number of times and always yields the same sequence.
pub struct Tokenizer<'src> {
    source: &'src str,
    buffer: SourceBuffer,
    config: LexerConfig,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: &'src str, config: LexerConfig) -> Self {
        Self {
            source,
            buffer: SourceBuffer::new(source),
            config,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// BOM and interior NUL positions found while buffering the source.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        self.buffer.encoding_issues()
    }

    /// A fresh token iterator from the start of the input.
    pub fn tokens(&self) -> Tokens<'_, 'src> {
        Tokens {
            scanner: RawScanner::new(self.buffer.cursor()),
            cooker: TokenCooker::new(self.source, self.config),
        }
    }
}

impl<'t, 'src> IntoIterator for &'t Tokenizer<'src> {
    type Item = Token<'src>;
    type IntoIter = Tokens<'t, 'src>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens()
    }
}

/// Incremental token stream over a [`Tokenizer`]'s source.
///
/// Diagnostics accumulate as tokens are pulled; read them with
/// [`errors`](Self::errors) at any point, or take them with
/// [`into_errors`](Self::into_errors) when done.
pub struct Tokens<'t, 'src> {
    scanner: RawScanner<'t>,
    cooker: TokenCooker<'src>,
}

impl<'src> Tokens<'_, 'src> {
    /// Diagnostics recorded so far.
    pub fn errors(&self) -> &[LexError] {
        self.cooker.errors()
    }

    pub fn into_errors(self) -> Vec<LexError> {
        self.cooker.into_errors()
    }

    /// Absorb the whitespace and newline tokens that follow.
    fn eat_whitespace_run(&mut self) {
        loop {
            let mut ahead = self.scanner.clone();
            if !matches!(ahead.next_token().tag, RawTag::Whitespace | RawTag::Newline) {
                return;
            }
            self.scanner = ahead;
        }
    }
}

impl<'src> Iterator for Tokens<'_, 'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        let start = self.scanner.pos();
        let raw = self.scanner.next_token();
        let (kind, flags) = match raw.tag {
            RawTag::Eof => return None,
            RawTag::Whitespace | RawTag::Newline if self.cooker.config().merge_whitespace => {
                self.eat_whitespace_run();
                (TokenKind::Whitespace, TokenFlags::empty())
            }
            RawTag::At => {
                let mode = self.cooker.config().annotations;
                let at = annotation::fold(&mut self.scanner, self.cooker.source(), mode);
                self.cooker.cook_at(at, start, self.scanner.pos())
            }
            tag => self.cooker.cook(tag, start, start + raw.len, &self.scanner),
        };
        let end = self.scanner.pos();
        let token = Token {
            kind,
            lexeme: self.cooker.text(start, end),
            start,
            end,
            flags,
        };
        trace!(
            kind = %token.kind,
            start,
            end,
            flags = ?token.flags,
            depth = self.cooker.depth(),
            "token"
        );
        Some(token)
    }
}

impl FusedIterator for Tokens<'_, '_> {}

/// Tokenize `source` with the default configuration.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Tokenizer::new(source).tokens().collect()
}

/// Tokenize `source` with the default configuration, returning the
/// diagnostics alongside the tokens.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize_with_errors(source: &str) -> (Vec<Token<'_>>, Vec<LexError>) {
    let tokenizer = Tokenizer::new(source);
    let mut tokens = tokenizer.tokens();
    let collected: Vec<Token<'_>> = tokens.by_ref().collect();
    let errors = tokens.into_errors();
    tracing::debug!(tokens = collected.len(), errors = errors.len(), "tokenized");
    (collected, errors)
}
