//! Raw token tags produced by the scanner.
//!
//! Tags are grouped into discriminant ranges so consumers can classify by
//! range:
//!
//! | Range   | Group                   |
//! |---------|-------------------------|
//! | 0-15    | identifiers & literals  |
//! | 32-79   | operators               |
//! | 80-111  | separators              |
//! | 112-127 | trivia                  |
//! | 240-254 | errors                  |
//! | 255     | end of input            |

/// Kind of a raw token. One byte wide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Identifiers & Literals ===
    /// Identifier or keyword (`[\p{Alphabetic}_$][\p{Alphanumeric}_$]*`).
    Ident = 0,
    /// Decimal or octal integer, with optional `l`/`L` suffix.
    Int = 1,
    /// Decimal floating-point literal (`1.`, `.5`, `1e3`, `3f`).
    Float = 2,
    /// Hexadecimal integer (`0x1F`).
    HexInt = 3,
    /// Hexadecimal floating-point literal (`0x1p3`).
    HexFloat = 4,
    /// Binary integer (`0b1010`).
    BinInt = 5,
    /// Double-quoted string literal.
    String = 6,
    /// `"""` text block.
    TextBlock = 7,
    /// Single-quoted character literal.
    Char = 8,

    // === Operators ===
    Plus = 32,
    Minus = 33,
    Star = 34,
    Slash = 35,
    Percent = 36,
    Caret = 37,
    Ampersand = 38,
    Pipe = 39,
    Tilde = 40,
    Bang = 41,
    Equal = 42,
    Less = 43,
    Greater = 44,
    Question = 45,
    /// `:` (label, case, enhanced for, assert message or ternary).
    Colon = 46,
    EqualEqual = 47,
    BangEqual = 48,
    LessEqual = 49,
    GreaterEqual = 50,
    AmpersandAmpersand = 51,
    PipePipe = 52,
    PlusPlus = 53,
    MinusMinus = 54,
    /// `->`
    Arrow = 55,
    /// `<<`
    Shl = 56,
    /// `>>`
    Shr = 57,
    /// `>>>`
    UShr = 58,
    PlusEqual = 59,
    MinusEqual = 60,
    StarEqual = 61,
    SlashEqual = 62,
    PercentEqual = 63,
    CaretEqual = 64,
    AmpersandEqual = 65,
    PipeEqual = 66,
    ShlEqual = 67,
    ShrEqual = 68,
    UShrEqual = 69,

    // === Separators ===
    LeftParen = 80,
    RightParen = 81,
    LeftBracket = 82,
    RightBracket = 83,
    LeftBrace = 84,
    RightBrace = 85,
    Comma = 86,
    Semicolon = 87,
    Dot = 88,
    /// `...`
    DotDotDot = 89,
    /// `::`
    ColonColon = 90,
    At = 91,

    // === Trivia ===
    /// Spaces, tabs, form feeds (and a final ASCII SUB).
    Whitespace = 112,
    /// `\n`, `\r\n` or a lone `\r`.
    Newline = 113,
    /// `//` up to (not including) the line terminator.
    LineComment = 114,
    BlockComment = 115,
    /// `/** ... */`
    DocComment = 116,

    // === Errors ===
    /// A character that starts no token rule. Always exactly one character.
    InvalidChar = 240,
    UnterminatedString = 241,
    UnterminatedChar = 242,
    UnterminatedTextBlock = 243,
    UnterminatedBlockComment = 244,
    /// NUL byte inside the source content.
    InteriorNull = 245,

    // === Control ===
    Eof = 255,
}

impl RawTag {
    /// Fixed source text for tags that always match the same bytes.
    pub fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            RawTag::Plus => "+",
            RawTag::Minus => "-",
            RawTag::Star => "*",
            RawTag::Slash => "/",
            RawTag::Percent => "%",
            RawTag::Caret => "^",
            RawTag::Ampersand => "&",
            RawTag::Pipe => "|",
            RawTag::Tilde => "~",
            RawTag::Bang => "!",
            RawTag::Equal => "=",
            RawTag::Less => "<",
            RawTag::Greater => ">",
            RawTag::Question => "?",
            RawTag::Colon => ":",
            RawTag::EqualEqual => "==",
            RawTag::BangEqual => "!=",
            RawTag::LessEqual => "<=",
            RawTag::GreaterEqual => ">=",
            RawTag::AmpersandAmpersand => "&&",
            RawTag::PipePipe => "||",
            RawTag::PlusPlus => "++",
            RawTag::MinusMinus => "--",
            RawTag::Arrow => "->",
            RawTag::Shl => "<<",
            RawTag::Shr => ">>",
            RawTag::UShr => ">>>",
            RawTag::PlusEqual => "+=",
            RawTag::MinusEqual => "-=",
            RawTag::StarEqual => "*=",
            RawTag::SlashEqual => "/=",
            RawTag::PercentEqual => "%=",
            RawTag::CaretEqual => "^=",
            RawTag::AmpersandEqual => "&=",
            RawTag::PipeEqual => "|=",
            RawTag::ShlEqual => "<<=",
            RawTag::ShrEqual => ">>=",
            RawTag::UShrEqual => ">>>=",
            RawTag::LeftParen => "(",
            RawTag::RightParen => ")",
            RawTag::LeftBracket => "[",
            RawTag::RightBracket => "]",
            RawTag::LeftBrace => "{",
            RawTag::RightBrace => "}",
            RawTag::Comma => ",",
            RawTag::Semicolon => ";",
            RawTag::Dot => ".",
            RawTag::DotDotDot => "...",
            RawTag::ColonColon => "::",
            RawTag::At => "@",
            _ => return None,
        };
        Some(text)
    }

    /// Whitespace, newlines and comments.
    #[inline]
    pub fn is_trivia(self) -> bool {
        (112..=127).contains(&(self as u8))
    }

    /// Any operator tag, including `:`.
    #[inline]
    pub fn is_operator(self) -> bool {
        (32..=79).contains(&(self as u8))
    }

    /// Parentheses, brackets, braces and the other separators.
    #[inline]
    pub fn is_separator(self) -> bool {
        (80..=111).contains(&(self as u8))
    }

    /// Tags the scanner emits for malformed input.
    #[inline]
    pub fn is_error(self) -> bool {
        (240..=254).contains(&(self as u8))
    }
}

/// A raw token: tag plus byte length. The scanner tracks the offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);

#[cfg(test)]
mod tests;
