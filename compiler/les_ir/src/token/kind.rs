//! Token kinds.

use std::fmt;

use super::TokenValue;

/// Closed classification of every lexeme.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// Identifier, including `@`-escaped identifiers: `foo`, `#error`, `@if`
    Id,
    /// Numeric literal: `42`, `0xFFu`, `1.5e3f`, `9.99m`
    Number,
    /// Double-quoted or triple-quoted string
    String,
    /// Single-quoted character literal
    CharLiteral,
    /// Back-quoted string
    BackQuotedString,
    /// `@@name` symbol literal
    Symbol,
    /// Operator run that is none of the more specific operator kinds
    NormalOp,
    /// Operator run starting with two backslashes: `\\`, `\\++`
    SuffixOp,
    /// Operator run ending in `=`: `=`, `+=`, `>>=`
    Assignment,
    Colon,
    Comma,
    Dot,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBrack,
    RBrack,
    /// A lone `@`
    At,
    /// Run of spaces and tabs
    Spaces,
    /// One or more identical line endings
    Newline,
    /// `// ...` up to, not including, the line ending
    LineComment,
    /// `/* ... */`
    BlockComment,
    /// `#!...` on the first line
    Shebang,
}

impl TokenKind {
    /// Whether a token of this kind may carry `value`.
    ///
    /// Number tokens carry a numeric variant, string kinds a string,
    /// identifier-like and operator-like kinds an interned name, and the
    /// rest nothing.
    pub fn accepts(self, value: &TokenValue) -> bool {
        match self {
            TokenKind::Id
            | TokenKind::Symbol
            | TokenKind::NormalOp
            | TokenKind::SuffixOp
            | TokenKind::Assignment
            | TokenKind::Colon
            | TokenKind::Comma
            | TokenKind::Dot
            | TokenKind::Semicolon
            | TokenKind::At => matches!(value, TokenValue::Name(_)),
            TokenKind::Number => value.is_numeric(),
            TokenKind::String | TokenKind::BackQuotedString => {
                matches!(value, TokenValue::Str(_))
            }
            TokenKind::CharLiteral => matches!(value, TokenValue::Char(_)),
            TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::LBrace
            | TokenKind::RBrace
            | TokenKind::LBrack
            | TokenKind::RBrack
            | TokenKind::Spaces
            | TokenKind::Newline
            | TokenKind::LineComment
            | TokenKind::BlockComment
            | TokenKind::Shebang => matches!(value, TokenValue::None),
        }
    }

    /// Whitespace, newlines, comments and the shebang line.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Spaces
                | TokenKind::Newline
                | TokenKind::LineComment
                | TokenKind::BlockComment
                | TokenKind::Shebang
        )
    }

    /// Human-readable name for diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Id => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::CharLiteral => "character literal",
            TokenKind::BackQuotedString => "back-quoted string",
            TokenKind::Symbol => "symbol",
            TokenKind::NormalOp => "operator",
            TokenKind::SuffixOp => "suffix operator",
            TokenKind::Assignment => "assignment",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBrack => "[",
            TokenKind::RBrack => "]",
            TokenKind::At => "@",
            TokenKind::Spaces => "spaces",
            TokenKind::Newline => "newline",
            TokenKind::LineComment => "line comment",
            TokenKind::BlockComment => "block comment",
            TokenKind::Shebang => "shebang",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
