//! Token cooking layer.
//!
//! Transforms `(RawTag, len)` pairs from the raw scanner into [`Token`]s
//! with interned names, decoded strings and parsed numbers.
//!
//! # Architecture
//!
//! ```text
//! source → RawScanner → (RawTag, len) → TokenCooker → Token
//! ```
//!
//! Each `RawTag` category has a dedicated cooking path:
//! - **Punctuation/trivia**: direct 1:1 mapping
//! - **Identifiers and symbols**: unescape if quoted, then intern
//! - **Operators**: classify the run, then intern its `#`-prefixed name
//! - **Numerics**: parse value, detect overflow
//! - **Strings/chars**: unescape
//! - **Errors**: push `LexError`, still return a token of the expected kind

use les_ir::{Span, Symbol, Token, TokenKind, TokenValue};
use les_lexer_core::char_class::is_ident_start_char;
use les_lexer_core::{RawTag, RawToken};

use crate::cook_escape::unescape;
use crate::cook_number::parse_number;
use crate::lex_error::LexError;

/// Cooks raw tokens into valued tokens.
///
/// Stateless with respect to individual tokens: each `cook()` call is
/// independent. Accumulates errors until the driver drains them.
pub(crate) struct TokenCooker<'src> {
    source: &'src str,
    errors: Vec<LexError>,
}

impl<'src> TokenCooker<'src> {
    /// Create a new cooker for the given source.
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            source,
            errors: Vec::new(),
        }
    }

    /// Take the errors accumulated since the last drain.
    pub(crate) fn drain_errors(&mut self) -> std::vec::Drain<'_, LexError> {
        self.errors.drain(..)
    }

    /// Cook a single raw token.
    ///
    /// `offset` is the byte position of the token in source.
    pub(crate) fn cook(&mut self, raw: RawToken, offset: u32) -> Token {
        let span = Span::at(offset, raw.len);
        let text = self.source.get(span.to_range()).unwrap_or("");
        let (kind, value) = match raw.tag {
            // Punctuation
            RawTag::LParen => (TokenKind::LParen, TokenValue::None),
            RawTag::RParen => (TokenKind::RParen, TokenValue::None),
            RawTag::LBrace => (TokenKind::LBrace, TokenValue::None),
            RawTag::RBrace => (TokenKind::RBrace, TokenValue::None),
            RawTag::LBrack => (TokenKind::LBrack, TokenValue::None),
            RawTag::RBrack => (TokenKind::RBrack, TokenValue::None),
            RawTag::Comma => (TokenKind::Comma, op_name(text)),
            RawTag::Semicolon => (TokenKind::Semicolon, op_name(text)),
            RawTag::At => (TokenKind::At, op_name(text)),

            // Trivia
            RawTag::Spaces => (TokenKind::Spaces, TokenValue::None),
            RawTag::Newline => (TokenKind::Newline, TokenValue::None),
            RawTag::LineComment => (TokenKind::LineComment, TokenValue::None),
            RawTag::BlockComment => (TokenKind::BlockComment, TokenValue::None),
            RawTag::Shebang => (TokenKind::Shebang, TokenValue::None),
            RawTag::UnterminatedBlockComment => {
                self.errors.push(LexError::unterminated_comment(span));
                (TokenKind::BlockComment, TokenValue::None)
            }

            // Names
            RawTag::Ident => (TokenKind::Id, TokenValue::Name(Symbol::intern(text))),
            RawTag::EscapedIdent => (TokenKind::Id, self.cook_escaped(text, 1, span, true)),
            RawTag::UnterminatedEscapedIdent => {
                (TokenKind::Id, self.cook_escaped(text, 1, span, false))
            }
            RawTag::Symbol => (TokenKind::Symbol, self.cook_escaped(text, 2, span, true)),
            RawTag::UnterminatedSymbol => {
                (TokenKind::Symbol, self.cook_escaped(text, 2, span, false))
            }
            RawTag::Operator => classify_operator(text),

            // Literals
            RawTag::Number => (TokenKind::Number, self.cook_number(text, span)),
            RawTag::String => (TokenKind::String, self.cook_quoted(text, span, "\"", true)),
            RawTag::UnterminatedString => {
                (TokenKind::String, self.cook_quoted(text, span, "\"", false))
            }
            RawTag::BackQuote => (
                TokenKind::BackQuotedString,
                self.cook_quoted(text, span, "`", true),
            ),
            RawTag::UnterminatedBackQuote => (
                TokenKind::BackQuotedString,
                self.cook_quoted(text, span, "`", false),
            ),
            RawTag::TripleQuote => (TokenKind::String, cook_triple(text, true)),
            RawTag::UnterminatedTripleQuote => {
                let delimiter = if text.starts_with('\'') { "'''" } else { "\"\"\"" };
                self.errors
                    .push(LexError::unterminated_string(span, delimiter));
                (TokenKind::String, cook_triple(text, false))
            }
            RawTag::Char => (TokenKind::CharLiteral, self.cook_char(text, span, true)),
            RawTag::UnterminatedChar => {
                (TokenKind::CharLiteral, self.cook_char(text, span, false))
            }

            RawTag::Unknown => {
                let ch = text.chars().next().unwrap_or('\0');
                self.errors.push(LexError::unexpected_character(span, ch));
                (TokenKind::NormalOp, op_name(text))
            }

            // EOF (should not reach cook; handled by the driver)
            RawTag::Eof => {
                debug_assert!(false, "Eof should be handled by the driver, not cook()");
                (TokenKind::Spaces, TokenValue::None)
            }
        };
        Token::new(kind, span, value)
    }

    // Cooking helpers

    fn cook_number(&mut self, text: &str, span: Span) -> TokenValue {
        match parse_number(text) {
            Ok(value) => value,
            Err(err) => {
                self.errors.push(LexError::malformed_number(span, err));
                TokenValue::I32(0)
            }
        }
    }

    /// Decoded content of a short quoted literal, reporting a missing
    /// closing delimiter when `terminated` is false.
    fn quoted_content(
        &mut self,
        text: &'src str,
        span: Span,
        delimiter: &'static str,
        terminated: bool,
    ) -> String {
        let open = delimiter.len();
        let content = if terminated {
            text.get(open..text.len().saturating_sub(open))
        } else {
            self.errors
                .push(LexError::unterminated_string(span, delimiter));
            text.get(open..)
        }
        .unwrap_or("");
        #[allow(
            clippy::cast_possible_truncation,
            reason = "delimiter length is 1"
        )]
        let base = span.start + open as u32;
        unescape(content, base, &mut self.errors).unwrap_or_else(|| content.to_owned())
    }

    fn cook_quoted(
        &mut self,
        text: &'src str,
        span: Span,
        delimiter: &'static str,
        terminated: bool,
    ) -> TokenValue {
        TokenValue::Str(self.quoted_content(text, span, delimiter, terminated))
    }

    /// Character literal: must decode to exactly one character.
    fn cook_char(&mut self, text: &'src str, span: Span, terminated: bool) -> TokenValue {
        if text.starts_with("''") {
            // Empty literal, possibly with recovery text after it.
            self.errors.push(LexError::invalid_char_literal(span, 0));
            return TokenValue::Char('\0');
        }
        let decoded = self.quoted_content(text, span, "'", terminated);
        let mut chars = decoded.chars();
        let first = chars.next();
        let count = usize::from(first.is_some()) + chars.count();
        if terminated && count != 1 {
            self.errors.push(LexError::invalid_char_literal(span, count));
        }
        TokenValue::Char(first.unwrap_or('\0'))
    }

    /// `@`-escaped identifier or `@@` symbol; `prefix_len` is 1 or 2.
    ///
    /// A quoted form is unescaped; a bare run is interned as written.
    fn cook_escaped(
        &mut self,
        text: &'src str,
        prefix_len: usize,
        span: Span,
        terminated: bool,
    ) -> TokenValue {
        let body = text.get(prefix_len..).unwrap_or("");
        let name = match body.as_bytes().first() {
            Some(&quote @ (b'`' | b'"')) => {
                let delimiter = if quote == b'`' { "`" } else { "\"" };
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "prefix length is 1 or 2"
                )]
                let body_span = Span::new(span.start + prefix_len as u32, span.end);
                self.quoted_content(body, body_span, delimiter, terminated)
            }
            _ => return TokenValue::Name(Symbol::intern(body)),
        };
        TokenValue::Name(Symbol::intern_owned(name))
    }
}

/// Interned operator name: the lexeme prefixed with `#`.
fn op_name(text: &str) -> TokenValue {
    let mut name = String::with_capacity(text.len() + 1);
    name.push('#');
    name.push_str(text);
    TokenValue::Name(Symbol::intern_owned(name))
}

/// Classify an operator run.
///
/// - `.` and `:` are Dot and Colon.
/// - `\name` is a NormalOp named `name`.
/// - `\\...` is a SuffixOp named by the text after the first backslash.
/// - A run ending in `=` is an Assignment, except the comparisons `==`,
///   `!=`, `<=`, `>=` and longer runs starting with `=`.
pub(crate) fn classify_operator(text: &str) -> (TokenKind, TokenValue) {
    match text {
        "." => return (TokenKind::Dot, op_name(text)),
        ":" => return (TokenKind::Colon, op_name(text)),
        _ => {}
    }
    if let Some(rest) = text.strip_prefix('\\') {
        if rest.chars().next().is_some_and(is_ident_start_char) {
            return (TokenKind::NormalOp, TokenValue::Name(Symbol::intern(rest)));
        }
        if rest.starts_with('\\') {
            return (TokenKind::SuffixOp, TokenValue::Name(Symbol::intern(rest)));
        }
    }
    let is_comparison = matches!(text, "==" | "!=" | "<=" | ">=");
    let is_assignment = text.ends_with('=')
        && !is_comparison
        && !(text.starts_with('=') && text.len() > 1);
    let kind = if is_assignment {
        TokenKind::Assignment
    } else {
        TokenKind::NormalOp
    };
    (kind, op_name(text))
}

/// Raw content of a triple-quoted string.
fn cook_triple(text: &str, terminated: bool) -> TokenValue {
    let end = if terminated {
        text.len().saturating_sub(3)
    } else {
        text.len()
    };
    TokenValue::Str(text.get(3..end).unwrap_or("").to_owned())
}
