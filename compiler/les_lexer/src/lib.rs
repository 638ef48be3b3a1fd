//! Tokenizer for LES.
//!
//! Turns source text into a flat stream of [`Token`]s. Scanning is split in
//! two layers:
//!
//! - [`les_lexer_core`] decides token extents (`RawTag`, length) without
//!   allocating or reporting anything.
//! - This crate "cooks" each raw token: it decodes numbers, unescapes
//!   strings, interns names and classifies operators.
//!
//! Malformed input never stops the stream. Each problem is reported once to
//! the [`ErrorSink`] given at construction, and the lexer still produces a
//! best-effort token covering the malformed lexeme.
//!
//! ```
//! use les_lexer::{Lexer, TokenKind, TokenValue};
//!
//! let mut errors = Vec::new();
//! let kinds: Vec<TokenKind> = Lexer::new("c+='0'", &mut errors).map(|t| t.kind).collect();
//! assert_eq!(kinds, [TokenKind::Id, TokenKind::Assignment, TokenKind::CharLiteral]);
//! assert!(errors.is_empty());
//! ```

mod cook_escape;
mod cook_number;
mod cooker;
mod lex_error;
mod sink;

use les_lexer_core::{RawScanner, RawTag};

use crate::cooker::TokenCooker;

pub use cook_number::{parse_number, NumberError};
pub use les_ir::{Decimal, Span, Symbol, SymbolTable, Token, TokenKind, TokenValue};
pub use lex_error::{LexError, LexErrorKind};
pub use sink::{ErrorSink, FnSink};

/// Lexer driver: produces one token per [`next_token`](Self::next_token)
/// call and reports errors to its sink as they are found.
pub struct Lexer<'src, S: ErrorSink> {
    scanner: RawScanner<'src>,
    cooker: TokenCooker<'src>,
    sink: S,
    done: bool,
}

impl<'src, S: ErrorSink> Lexer<'src, S> {
    /// Create a lexer over `source` reporting errors to `sink`.
    pub fn new(source: &'src str, sink: S) -> Self {
        Self {
            scanner: RawScanner::from_source(source),
            cooker: TokenCooker::new(source),
            sink,
            done: false,
        }
    }

    /// Next token, or `None` at end of input.
    ///
    /// Keeps returning `None` once the input is exhausted. Errors found in
    /// the returned token have already been reported when this returns.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let offset = self.scanner.pos();
        let raw = self.scanner.next_token();
        if raw.tag == RawTag::Eof {
            self.done = true;
            return None;
        }

        let token = self.cooker.cook(raw, offset);
        tracing::trace!(kind = ?token.kind, start = token.span.start, len = raw.len, "token");
        for error in self.cooker.drain_errors() {
            tracing::debug!(span = %error.span, "{error}");
            self.sink.report(error);
        }
        Some(token)
    }

    /// The error sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the lexer, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<'src, F: FnMut(Span, &str)> Lexer<'src, FnSink<F>> {
    /// Create a lexer that passes each error's span and message to
    /// `callback`.
    pub fn with_callback(source: &'src str, callback: F) -> Self {
        Self::new(source, FnSink(callback))
    }
}

impl<S: ErrorSink> Iterator for Lexer<'_, S> {
    type Item = Token;

    #[inline]
    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl<S: ErrorSink> std::iter::FusedIterator for Lexer<'_, S> {}

/// All tokens and errors of one source text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    /// Whether any error was reported.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex `source` to completion, collecting tokens and errors.
pub fn tokenize(source: &str) -> LexOutput {
    let mut lexer = Lexer::new(source, Vec::new());
    let tokens = lexer.by_ref().collect();
    LexOutput {
        tokens,
        errors: lexer.into_sink(),
    }
}
