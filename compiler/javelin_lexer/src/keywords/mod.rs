//! Reserved word lookup.
//!
//! Java's reserved words plus the literals `true`, `false` and `null`.
//! A lone `_` is reserved too (unnamed variables). Contextual words (`var`, `record`, `yield`, `sealed`, `permits`,
//! module directives) stay identifiers. `@interface` is handled by the
//! cooker, which sees the `@`.
//!
//! Lookup uses the identifier's length as a first-pass filter (2-12
//! bytes, plus the single `_`), then matches against the words of that
//! length.

use std::fmt;

/// Highlighting group of a keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeywordClass {
    /// Modifiers and declaration introducers (`public`, `class`, `extends`),
    /// and the unnamed variable `_`.
    Declaration,
    /// Primitive types and `void`.
    Type,
    /// `true`, `false`, `null`.
    Constant,
    /// `package`, `import`.
    Namespace,
    /// Control flow and expression keywords (`if`, `new`, `this`).
    Statement,
}

impl fmt::Display for KeywordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeywordClass::Declaration => "declaration",
            KeywordClass::Type => "type",
            KeywordClass::Constant => "constant",
            KeywordClass::Namespace => "namespace",
            KeywordClass::Statement => "statement",
        })
    }
}

/// Look up a reserved word. `None` for ordinary identifiers.
#[inline]
pub fn lookup(text: &str) -> Option<KeywordClass> {
    use KeywordClass::{Constant, Declaration, Namespace, Statement, Type};

    let bytes = text.as_bytes();
    let len = bytes.len();

    if text == "_" {
        return Some(Declaration);
    }

    // Guard: all other keywords are 2-12 chars of lowercase ASCII
    if !(2..=12).contains(&len) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "do" | "if" => Some(Statement),
            _ => None,
        },
        3 => match text {
            "for" | "new" | "try" => Some(Statement),
            "int" => Some(Type),
            _ => None,
        },
        4 => match text {
            "case" | "else" | "goto" | "this" => Some(Statement),
            "byte" | "char" | "long" | "void" => Some(Type),
            "enum" => Some(Declaration),
            "null" | "true" => Some(Constant),
            _ => None,
        },
        5 => match text {
            "break" | "catch" | "throw" | "while" => Some(Statement),
            "class" | "const" | "final" | "super" => Some(Declaration),
            "float" | "short" => Some(Type),
            "false" => Some(Constant),
            _ => None,
        },
        6 => match text {
            "assert" | "return" | "switch" => Some(Statement),
            "double" => Some(Type),
            "import" => Some(Namespace),
            "native" | "public" | "static" | "throws" => Some(Declaration),
            _ => None,
        },
        7 => match text {
            "boolean" => Some(Type),
            "default" | "finally" => Some(Statement),
            "extends" | "private" => Some(Declaration),
            "package" => Some(Namespace),
            _ => None,
        },
        8 => match text {
            "abstract" | "strictfp" | "volatile" => Some(Declaration),
            "continue" => Some(Statement),
            _ => None,
        },
        9 => match text {
            "interface" | "protected" | "transient" => Some(Declaration),
            _ => None,
        },
        10 => match text {
            "implements" => Some(Declaration),
            "instanceof" => Some(Statement),
            _ => None,
        },
        12 => match text {
            "synchronized" => Some(Declaration),
            _ => None,
        },
        _ => None,
    }
}

/// Whether `text` is a reserved word.
#[inline]
pub fn is_keyword(text: &str) -> bool {
    lookup(text).is_some()
}
