//! Low-level scanner for Java-like source text.
//!
//! Produces `(RawTag, len)` pairs over a sentinel-terminated buffer. Every
//! byte of input belongs to exactly one raw token, so summing the lengths
//! always reproduces the source length. Keyword resolution, annotation
//! regions, label/ternary disambiguation and escape validation live in the
//! cooking layer (`javelin_lexer`).
//!
//! ```text
//! &str → SourceBuffer → Cursor → RawScanner → RawToken { tag, len }
//! ```

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use tag::{RawTag, RawToken};
