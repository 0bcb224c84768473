//! Tokenizer configuration.

/// How much text an annotation token covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnnotationMode {
    /// `@Name` plus a directly following balanced `( ... )` argument list.
    #[default]
    Region,
    /// `@Name` (with dotted qualification) only; arguments tokenize normally.
    NameOnly,
}

/// Options for a [`Tokenizer`](crate::Tokenizer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LexerConfig {
    /// Extent of annotation tokens.
    /// Defaults to [`AnnotationMode::Region`].
    pub annotations: AnnotationMode,

    /// Merge adjacent whitespace and line terminators into one token.
    /// Defaults to `true`; when `false` every line terminator is its own token.
    pub merge_whitespace: bool,

    /// Maximum number of diagnostics to keep (0 = unlimited).
    /// Tokens are flagged regardless of the limit.
    pub error_limit: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            annotations: AnnotationMode::Region,
            merge_whitespace: true,
            error_limit: 0,
        }
    }
}

impl LexerConfig {
    /// Create a new config with the specified annotation mode.
    pub fn with_annotations(annotations: AnnotationMode) -> Self {
        Self {
            annotations,
            ..Default::default()
        }
    }

    /// Create a new config that keeps line terminators as separate tokens.
    pub fn with_split_whitespace() -> Self {
        Self {
            merge_whitespace: false,
            ..Default::default()
        }
    }

    /// Create a new config with the specified diagnostic limit.
    pub fn with_error_limit(error_limit: usize) -> Self {
        Self {
            error_limit,
            ..Default::default()
        }
    }

    /// Whether another diagnostic may be stored after `stored` ones.
    #[inline]
    pub(crate) fn accepts_error(&self, stored: usize) -> bool {
        self.error_limit == 0 || stored < self.error_limit
    }
}
