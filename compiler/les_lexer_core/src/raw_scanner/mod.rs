//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a [`Cursor`] and produces [`RawToken`] values
//! with zero heap allocation. It does not decode escapes, validate digits,
//! or parse numeric values; those are deferred to the cooking layer.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. Lookahead is
//! bounded: at most three bytes for delimiters, plus one speculative
//! literal scan for negative numbers, restored from a cursor snapshot.

use crate::char_class::{
    is_digit_of, is_escape_run, is_ident_continue, is_ident_continue_char, is_ident_start,
    is_ident_start_char, is_line_end, is_op_char,
};
use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner.
///
/// Produces one token at a time as a `(tag, length)` pair.
/// Error conditions are encoded as `RawTag` variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Create a scanner at the start of `source`.
    pub fn from_source(source: &'a str) -> Self {
        Self::new(Cursor::new(source))
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' => self.spaces(start),
            b'\n' | b'\r' => self.newline(start),
            b'#' if start == 0 && self.cursor.peek() == b'!' => self.shebang(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'#' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'.' if self.cursor.peek().is_ascii_digit() => self.number(start),
            b'-' => self.minus(start),
            b'/' => self.slash(start),
            b'"' => self.double_quote(start),
            b'\'' => self.single_quote(start),
            b'`' => self.back_quote(start),
            b'@' => self.at(start),
            b',' => self.single(start, RawTag::Comma),
            b';' => self.single(start, RawTag::Semicolon),
            b'(' => self.single(start, RawTag::LParen),
            b')' => self.single(start, RawTag::RParen),
            b'{' => self.single(start, RawTag::LBrace),
            b'}' => self.single(start, RawTag::RBrace),
            b'[' => self.single(start, RawTag::LBrack),
            b']' => self.single(start, RawTag::RBrack),
            b'~' | b'!' | b'%' | b'^' | b'&' | b'*' | b'\\' | b'+' | b'=' | b'|' | b'<' | b'>'
            | b'?' | b':' | b'.' | b'$' => self.operator(start),
            0x80..=0xFF => self.non_ascii(start),
            // Control characters (excluding \t, \n, \r) and DEL
            1..=8 | 11..=12 | 14..=31 | 127 => self.single(start, RawTag::Unknown),
        }
    }

    #[inline]
    fn token(&self, tag: RawTag, start: u32) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(tag, start)
    }

    // ─── EOF ─────────────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior null byte
            self.single(start, RawTag::Unknown)
        }
    }

    // ─── Whitespace & Newlines ───────────────────────────────────────

    fn spaces(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(|b| b == b' ' || b == b'\t');
        self.token(RawTag::Spaces, start)
    }

    /// One line ending plus any immediately repeated identical endings.
    fn newline(&mut self, start: u32) -> RawToken {
        let crlf = self.cursor.current() == b'\r' && self.cursor.peek() == b'\n';
        let first = self.cursor.current();
        loop {
            if crlf {
                self.cursor.advance_n(2);
                if !(self.cursor.current() == b'\r' && self.cursor.peek() == b'\n') {
                    break;
                }
            } else {
                self.cursor.advance();
                let next = self.cursor.current();
                // A `\r` that opens a `\r\n` is a different ending.
                if next != first || (next == b'\r' && self.cursor.peek() == b'\n') {
                    break;
                }
            }
        }
        self.token(RawTag::Newline, start)
    }

    fn shebang(&mut self, start: u32) -> RawToken {
        self.cursor.advance_n(2); // consume '#!'
        self.cursor.eat_until_line_end();
        self.token(RawTag::Shebang, start)
    }

    // ─── Comments ────────────────────────────────────────────────────

    fn slash(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'/' => {
                self.cursor.advance_n(2);
                self.cursor.eat_until_line_end();
                self.token(RawTag::LineComment, start)
            }
            b'*' => {
                self.cursor.advance_n(2);
                if self.cursor.eat_through(b"*/") {
                    self.token(RawTag::BlockComment, start)
                } else {
                    self.token(RawTag::UnterminatedBlockComment, start)
                }
            }
            _ => self.operator(start),
        }
    }

    // ─── Identifiers ─────────────────────────────────────────────────

    fn identifier(&mut self, start: u32) -> RawToken {
        self.eat_ident_continue();
        self.token(RawTag::Ident, start)
    }

    /// Consume identifier-continue characters, including non-ASCII letters.
    fn eat_ident_continue(&mut self) {
        loop {
            let b = self.cursor.current();
            if is_ident_continue(b) {
                self.cursor.advance();
            } else if b >= 0x80 && is_ident_continue_char(self.cursor.current_char()) {
                self.cursor.advance_char();
            } else {
                break;
            }
        }
    }

    fn at_ident_start(&self) -> bool {
        let b = self.cursor.current();
        is_ident_start(b) || (b >= 0x80 && is_ident_start_char(self.cursor.current_char()))
    }

    fn non_ascii(&mut self, start: u32) -> RawToken {
        if is_ident_start_char(self.cursor.current_char()) {
            self.identifier(start)
        } else {
            self.cursor.advance_char();
            self.token(RawTag::Unknown, start)
        }
    }

    // ─── Operators ───────────────────────────────────────────────────

    /// Maximal run of operator characters.
    ///
    /// The run stops before a comment opener and before a `.` that opens a
    /// fractional literal. A lone `\` followed by an identifier extends over
    /// that identifier.
    fn operator(&mut self, start: u32) -> RawToken {
        self.eat_op_run(start);
        if self.cursor.slice_from(start) == "\\" && self.at_ident_start() {
            self.eat_ident_continue();
        }
        self.token(RawTag::Operator, start)
    }

    fn eat_op_run(&mut self, start: u32) {
        loop {
            let b = self.cursor.current();
            if !is_op_char(b) || self.at_comment_opener() {
                break;
            }
            if b == b'.' && self.cursor.pos() > start && self.cursor.peek().is_ascii_digit() {
                break;
            }
            self.cursor.advance();
        }
    }

    #[inline]
    fn at_comment_opener(&self) -> bool {
        self.cursor.current() == b'/' && matches!(self.cursor.peek(), b'/' | b'*')
    }

    /// `-` starts a negative literal in operand position when a digit
    /// follows; otherwise it is an ordinary operator.
    fn minus(&mut self, start: u32) -> RawToken {
        let next = self.cursor.peek();
        let starts_number =
            next.is_ascii_digit() || (next == b'.' && self.cursor.peek2().is_ascii_digit());
        if !(starts_number && self.in_operand_position()) {
            return self.operator(start);
        }

        let snapshot = self.cursor;
        self.cursor.advance(); // consume '-'
        let token = self.number(start);
        if has_unsigned_suffix(self.cursor.slice_from(start)) {
            // `-1U`: the minus stands alone and the literal stays unsigned.
            self.cursor = snapshot;
            return self.single(start, RawTag::Operator);
        }
        token
    }

    fn in_operand_position(&self) -> bool {
        self.cursor.pos() == 0
            || matches!(
                self.cursor.prev(),
                b' ' | b'\t' | b'\n' | b'\r' | b'(' | b'[' | b'{' | b',' | b';'
            )
    }

    // ─── Numbers ─────────────────────────────────────────────────────

    /// Numeric literal extent:
    /// `[0x|0b] digits ['.' digits] [exponent] [suffix]`.
    ///
    /// The extent is decided here; digit validity, overflow and value
    /// decoding happen in the cooking layer.
    fn number(&mut self, start: u32) -> RawToken {
        let radix = match (self.cursor.current(), self.cursor.peek()) {
            (b'0', b'x' | b'X') => {
                self.cursor.advance_n(2);
                16
            }
            (b'0', b'b' | b'B') => {
                self.cursor.advance_n(2);
                2
            }
            _ => 10,
        };

        self.eat_digits(radix);
        if radix == 2 {
            // Stray decimal digits are reported as invalid binary digits.
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }

        if self.cursor.current() == b'.' && is_digit_of(self.cursor.peek(), radix) {
            self.cursor.advance();
            self.eat_digits(radix);
        }

        self.eat_exponent(radix);
        self.eat_suffix();
        self.token(RawTag::Number, start)
    }

    /// Digits of `radix`, with single `_` separators between digits.
    fn eat_digits(&mut self, radix: u32) {
        loop {
            let b = self.cursor.current();
            if is_digit_of(b, radix) {
                self.cursor.advance();
            } else if b == b'_' && is_digit_of(self.cursor.peek(), radix) {
                self.cursor.advance_n(2);
            } else {
                break;
            }
        }
    }

    /// `e`/`E` (decimal) or `p`/`P` (hex/binary) exponent, taken only when
    /// followed by a digit or a sign. A dangling sign is consumed.
    fn eat_exponent(&mut self, radix: u32) {
        let marker = self.cursor.current().to_ascii_lowercase();
        let expected = if radix == 10 { b'e' } else { b'p' };
        if marker != expected {
            return;
        }
        let next = self.cursor.peek();
        if !(next.is_ascii_digit() || next == b'+' || next == b'-') {
            return;
        }
        self.cursor.advance(); // marker
        if !next.is_ascii_digit() {
            self.cursor.advance(); // sign
        }
        self.eat_digits(10);
    }

    /// `u`, `l`, `ul`, `lu`, `f`, `d`, `m` in either case.
    fn eat_suffix(&mut self) {
        match self.cursor.current().to_ascii_lowercase() {
            b'u' => {
                self.cursor.advance();
                if self.cursor.current().to_ascii_lowercase() == b'l' {
                    self.cursor.advance();
                }
            }
            b'l' => {
                self.cursor.advance();
                if self.cursor.current().to_ascii_lowercase() == b'u' {
                    self.cursor.advance();
                }
            }
            b'f' | b'd' | b'm' => self.cursor.advance(),
            _ => {}
        }
    }

    // ─── Strings ─────────────────────────────────────────────────────

    fn double_quote(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'"' && self.cursor.peek2() == b'"' {
            return self.triple_quote(start, b"\"\"\"");
        }
        self.cursor.advance();
        if self.eat_quoted(b'"') {
            self.token(RawTag::String, start)
        } else {
            self.token(RawTag::UnterminatedString, start)
        }
    }

    fn single_quote(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'\'' {
            if self.cursor.peek2() == b'\'' {
                return self.triple_quote(start, b"'''");
            }
            // Empty literal: malformed, recover at the end of the line.
            self.cursor.eat_until_line_end();
            return self.token(RawTag::Char, start);
        }
        self.cursor.advance();
        if self.eat_quoted(b'\'') {
            self.token(RawTag::Char, start)
        } else {
            self.token(RawTag::UnterminatedChar, start)
        }
    }

    fn back_quote(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.eat_quoted(b'`') {
            self.token(RawTag::BackQuote, start)
        } else {
            self.token(RawTag::UnterminatedBackQuote, start)
        }
    }

    /// Raw multi-line body up to the next identical three-quote run.
    fn triple_quote(&mut self, start: u32, delim: &[u8; 3]) -> RawToken {
        self.cursor.advance_n(3);
        if self.cursor.eat_through(delim) {
            self.token(RawTag::TripleQuote, start)
        } else {
            self.token(RawTag::UnterminatedTripleQuote, start)
        }
    }

    /// Body of a short quoted literal, after the opening `delim`.
    ///
    /// Returns `true` if the closing delimiter was consumed. Stops before a
    /// line ending or at EOF otherwise. A backslash always takes the next
    /// character with it unless that character ends the line.
    fn eat_quoted(&mut self, delim: u8) -> bool {
        loop {
            match self.cursor.skip_to_quote_delim(delim) {
                b'\\' => {
                    self.cursor.advance();
                    let next = self.cursor.current();
                    if !is_line_end(next) && !self.cursor.is_eof() {
                        self.cursor.advance_char();
                    }
                }
                b if b == delim => {
                    self.cursor.advance();
                    return true;
                }
                _ => return false,
            }
        }
    }

    // ─── Escapes & Symbols ───────────────────────────────────────────

    /// `@` forms: `@@symbol`, `@ident`, `` @`quoted` ``, or a lone `@`.
    fn at(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '@'
        if self.cursor.current() == b'@' {
            let snapshot = self.cursor;
            self.cursor.advance();
            let quoted = match self.cursor.current() {
                b'`' | b'"' => {
                    let delim = self.cursor.current();
                    self.cursor.advance();
                    Some(self.eat_quoted(delim))
                }
                _ => None,
            };
            match quoted {
                Some(true) => return self.token(RawTag::Symbol, start),
                Some(false) => return self.token(RawTag::UnterminatedSymbol, start),
                None => {
                    if self.eat_escape_run() {
                        return self.token(RawTag::Symbol, start);
                    }
                }
            }
            // `@@` with nothing symbolisable: the first `@` stands alone.
            self.cursor = snapshot;
            return self.token(RawTag::At, start);
        }

        if self.cursor.current() == b'`' {
            self.cursor.advance();
            return if self.eat_quoted(b'`') {
                self.token(RawTag::EscapedIdent, start)
            } else {
                self.token(RawTag::UnterminatedEscapedIdent, start)
            };
        }

        if self.eat_escape_run() {
            self.token(RawTag::EscapedIdent, start)
        } else {
            self.token(RawTag::At, start)
        }
    }

    /// Identifier and operator characters after `@` or `@@`, stopping at
    /// `@` and before a comment opener. A leading `'` opens a character
    /// literal and is not eaten. Returns `true` if anything was eaten.
    fn eat_escape_run(&mut self) -> bool {
        let begin = self.cursor.pos();
        loop {
            let b = self.cursor.current();
            if b == b'\'' && self.cursor.pos() == begin {
                break;
            }
            if is_escape_run(b) && !self.at_comment_opener() {
                self.cursor.advance();
            } else if b >= 0x80 && is_ident_continue_char(self.cursor.current_char()) {
                self.cursor.advance_char();
            } else {
                break;
            }
        }
        self.cursor.pos() > begin
    }
}

/// `true` if a numeric literal's text ends in an unsigned suffix
/// (`u`, `ul` or `lu`, either case).
fn has_unsigned_suffix(text: &str) -> bool {
    let bytes = text.as_bytes();
    let last = |n: usize| {
        bytes
            .len()
            .checked_sub(n)
            .and_then(|i| bytes.get(i))
            .map(u8::to_ascii_lowercase)
    };
    match last(1) {
        Some(b'u') => true,
        // Hex digits cannot end in `l`, so `lu`/`ul` are unambiguous here.
        Some(b'l') => last(2) == Some(b'u'),
        _ => false,
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Convenience function: tokenize a source string and collect all raw tokens.
///
/// Returns a `Vec<RawToken>` containing all tokens except the final `Eof`.
/// For streaming access, construct a [`RawScanner`] directly.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    RawScanner::from_source(source).collect()
}
