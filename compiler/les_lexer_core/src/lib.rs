//! LES lexer core - the raw scanning layer.
//!
//! Splits source text into `(RawTag, len)` pairs without allocating,
//! decoding values, or producing diagnostics. Malformed lexemes are encoded
//! as error tags; the cooking layer in `les_lexer` turns raw tokens into
//! valued tokens and reports errors.
//!
//! ```
//! use les_lexer_core::{tokenize, RawTag};
//!
//! let tags: Vec<RawTag> = tokenize("x += 1").iter().map(|t| t.tag).collect();
//! assert_eq!(
//!     tags,
//!     [RawTag::Ident, RawTag::Spaces, RawTag::Operator, RawTag::Spaces, RawTag::Number]
//! );
//! ```

pub mod char_class;
mod cursor;
mod raw_scanner;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use tag::{RawTag, RawToken};
