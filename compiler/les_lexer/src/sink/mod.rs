//! Error reporting sinks.
//!
//! The lexer never stops on a malformed lexeme; it hands each error to an
//! [`ErrorSink`] and keeps going. Collect errors into a `Vec<LexError>`, or
//! forward them to a callback with [`FnSink`].

use les_ir::Span;

use crate::lex_error::LexError;

/// Receiver for non-fatal lexer errors.
pub trait ErrorSink {
    /// Record one error. Called in source order.
    fn report(&mut self, error: LexError);
}

impl ErrorSink for Vec<LexError> {
    #[inline]
    fn report(&mut self, error: LexError) {
        self.push(error);
    }
}

impl<S: ErrorSink + ?Sized> ErrorSink for &mut S {
    #[inline]
    fn report(&mut self, error: LexError) {
        (**self).report(error);
    }
}

/// Adapts a `(span, message)` callback into an [`ErrorSink`].
///
/// ```
/// use les_lexer::{FnSink, Lexer, Span};
///
/// let mut messages = Vec::new();
/// let lexer = Lexer::new("\"open", FnSink(|span: Span, msg: &str| {
///     messages.push(format!("{span:?}: {msg}"));
/// }));
/// assert_eq!(lexer.count(), 1);
/// assert_eq!(messages, ["0..5: unterminated literal: missing closing `\"`"]);
/// ```
pub struct FnSink<F>(pub F);

impl<F: FnMut(Span, &str)> ErrorSink for FnSink<F> {
    fn report(&mut self, error: LexError) {
        (self.0)(error.span, &error.message());
    }
}

#[cfg(test)]
mod tests;
