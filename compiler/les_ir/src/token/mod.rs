//! Tokens produced by the lexer.
//!
//! A [`Token`] is a kind, the byte span it covers, and a decoded
//! [`TokenValue`]. Tokens never carry an error flag; malformed lexemes are
//! reported through the lexer's error sink at the moment they are produced.

mod kind;
mod value;

pub use kind::TokenKind;
pub use value::TokenValue;

use std::fmt;

use crate::Span;

/// A classified, positioned slice of source text.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub value: TokenValue,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, value: TokenValue) -> Self {
        debug_assert!(
            kind.accepts(&value),
            "{kind:?} token cannot carry {value:?}"
        );
        Token { kind, span, value }
    }

    /// Byte offset of the first character.
    #[inline]
    pub const fn start(&self) -> u32 {
        self.span.start
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.span.len()
    }

    /// Returns `true` for zero-length tokens (never produced by the lexer).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Returns `true` for tokens a parser normally skips.
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)?;
        if !matches!(self.value, TokenValue::None) {
            write!(f, " = {:?}", self.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
