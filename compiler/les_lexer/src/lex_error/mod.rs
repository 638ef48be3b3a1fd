//! Lexer error types.
//!
//! Every error is non-fatal: the driver still produces a best-effort token
//! covering the malformed lexeme and keeps scanning. Errors carry the span
//! that was being scanned and a kind describing what went wrong.

use les_ir::Span;

use crate::cook_number::NumberError;

/// A lexer error located in the source.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    /// Where the error occurred.
    pub span: Span,
    /// What went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A quoted literal reached a line ending or EOF before its closing
    /// delimiter.
    #[error("unterminated literal: missing closing `{delimiter}`")]
    UnterminatedString { delimiter: &'static str },

    /// `/*` without a matching `*/`.
    #[error("unterminated block comment: missing closing `*/`")]
    UnterminatedComment,

    /// Bad digits, bad exponent, or a value that does not fit its type.
    #[error("malformed numeric literal: {0}")]
    MalformedNumericLiteral(#[from] NumberError),

    /// A character literal that decodes to zero or several characters.
    #[error("character literal must contain exactly one character, found {count}")]
    InvalidSingleCharacterLiteral { count: usize },

    /// A backslash escape that is not recognized.
    #[error("unrecognized escape sequence `{escape}`")]
    UnrecognizedEscapeSequence { escape: String },

    /// A character that starts no token.
    #[error("unexpected character {ch:?}")]
    UnexpectedCharacter { ch: char },
}

impl LexError {
    /// Human-readable message, as passed to callback sinks.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Create an unterminated literal error.
    #[cold]
    pub fn unterminated_string(span: Span, delimiter: &'static str) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedString { delimiter },
        }
    }

    /// Create an unterminated block comment error.
    #[cold]
    pub fn unterminated_comment(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedComment,
        }
    }

    /// Create a malformed numeric literal error.
    #[cold]
    pub fn malformed_number(span: Span, error: NumberError) -> Self {
        Self {
            span,
            kind: LexErrorKind::MalformedNumericLiteral(error),
        }
    }

    /// Create an invalid character literal error.
    #[cold]
    pub fn invalid_char_literal(span: Span, count: usize) -> Self {
        Self {
            span,
            kind: LexErrorKind::InvalidSingleCharacterLiteral { count },
        }
    }

    /// Create an unrecognized escape error.
    #[cold]
    pub fn unrecognized_escape(span: Span, escape: impl Into<String>) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnrecognizedEscapeSequence {
                escape: escape.into(),
            },
        }
    }

    /// Create an unexpected character error.
    #[cold]
    pub fn unexpected_character(span: Span, ch: char) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnexpectedCharacter { ch },
        }
    }
}

#[cfg(test)]
mod tests;
