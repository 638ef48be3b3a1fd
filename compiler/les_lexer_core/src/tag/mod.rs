//! Raw token tags produced by the scanner.
//!
//! Discriminants are grouped into semantic ranges so a tag can be
//! classified with a single comparison:
//!
//! | Range   | Group                       |
//! |---------|-----------------------------|
//! | 0-15    | identifiers and literals    |
//! | 32-47   | operators and punctuation   |
//! | 64-79   | delimiters                  |
//! | 112-127 | trivia                      |
//! | 240-254 | malformed lexemes           |
//! | 255     | end of input                |

/// Kind of a raw token.
///
/// Error conditions are tags, never `Result::Err`; the cooking layer
/// reports them and still produces a token of the expected kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Identifiers & Literals: 0-15 ===
    /// `foo`, `#error`, `won't`
    Ident = 0,
    /// `@` followed by an escaped run or a back-quoted string
    EscapedIdent = 1,
    /// `@@` followed by a run, a back-quoted or a double-quoted string
    Symbol = 2,
    /// Numeric literal, possibly negative, possibly malformed
    Number = 3,
    /// `"..."`
    String = 4,
    /// `'...'`
    Char = 5,
    /// `` `...` ``
    BackQuote = 6,
    /// `"""..."""` or `'''...'''`
    TripleQuote = 7,

    // === Operators & Punctuation: 32-47 ===
    /// Run of operator characters, or `\` + identifier
    Operator = 32,
    /// A lone `@`
    At = 33,
    Comma = 34,
    Semicolon = 35,

    // === Delimiters: 64-79 ===
    LParen = 64,
    RParen = 65,
    LBrace = 66,
    RBrace = 67,
    LBrack = 68,
    RBrack = 69,

    // === Trivia: 112-127 ===
    /// Run of spaces and tabs
    Spaces = 112,
    /// One or more identical line endings
    Newline = 113,
    LineComment = 114,
    BlockComment = 115,
    /// `#!` line at offset 0, without its line ending
    Shebang = 116,

    // === Malformed lexemes: 240-254 ===
    UnterminatedString = 240,
    UnterminatedChar = 241,
    UnterminatedBackQuote = 242,
    UnterminatedTripleQuote = 243,
    UnterminatedBlockComment = 244,
    UnterminatedSymbol = 245,
    UnterminatedEscapedIdent = 246,
    /// Control character, interior null, or non-letter non-ASCII scalar
    Unknown = 247,

    // === Control ===
    Eof = 255,
}

impl RawTag {
    /// Fixed source text for tags that always cover the same lexeme.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            RawTag::At => Some("@"),
            RawTag::Comma => Some(","),
            RawTag::Semicolon => Some(";"),
            RawTag::LParen => Some("("),
            RawTag::RParen => Some(")"),
            RawTag::LBrace => Some("{"),
            RawTag::RBrace => Some("}"),
            RawTag::LBrack => Some("["),
            RawTag::RBrack => Some("]"),
            _ => None,
        }
    }

    /// Human-readable description.
    pub const fn name(self) -> &'static str {
        match self {
            RawTag::Ident => "identifier",
            RawTag::EscapedIdent => "escaped identifier",
            RawTag::Symbol => "symbol literal",
            RawTag::Number => "numeric literal",
            RawTag::String => "string literal",
            RawTag::Char => "character literal",
            RawTag::BackQuote => "back-quoted string",
            RawTag::TripleQuote => "triple-quoted string",
            RawTag::Operator => "operator",
            RawTag::At => "'@'",
            RawTag::Comma => "','",
            RawTag::Semicolon => "';'",
            RawTag::LParen => "'('",
            RawTag::RParen => "')'",
            RawTag::LBrace => "'{'",
            RawTag::RBrace => "'}'",
            RawTag::LBrack => "'['",
            RawTag::RBrack => "']'",
            RawTag::Spaces => "spaces",
            RawTag::Newline => "newline",
            RawTag::LineComment => "line comment",
            RawTag::BlockComment => "block comment",
            RawTag::Shebang => "shebang",
            RawTag::UnterminatedString => "unterminated string",
            RawTag::UnterminatedChar => "unterminated character literal",
            RawTag::UnterminatedBackQuote => "unterminated back-quoted string",
            RawTag::UnterminatedTripleQuote => "unterminated triple-quoted string",
            RawTag::UnterminatedBlockComment => "unterminated block comment",
            RawTag::UnterminatedSymbol => "unterminated symbol literal",
            RawTag::UnterminatedEscapedIdent => "unterminated escaped identifier",
            RawTag::Unknown => "unexpected character",
            RawTag::Eof => "end of input",
        }
    }

    /// `true` for tags that encode a malformed lexeme.
    #[inline]
    pub const fn is_error(self) -> bool {
        let d = self as u8;
        d >= 240 && d < 255
    }

    /// `true` for spaces, newlines, comments and the shebang line.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        let d = self as u8;
        d >= 112 && d < 128
    }
}

/// A raw token: tag and byte length.
///
/// The start offset is not stored; consumers accumulate lengths.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);

#[cfg(test)]
mod tests;
