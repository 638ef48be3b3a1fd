use super::*;
use pretty_assertions::assert_eq;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new("abc");
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.prev(), b'a');
}

#[test]
fn advance_through_entire_source() {
    let mut cursor = Cursor::new("hi");
    cursor.advance_n(2);
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

// === Peek ===

#[test]
fn peek_past_end_returns_sentinel() {
    let cursor = Cursor::new("ab");
    assert_eq!(cursor.peek(), b'b');
    assert_eq!(cursor.peek2(), 0);
    assert_eq!(cursor.peek_at(100), 0);
}

#[test]
fn prev_at_start_is_sentinel() {
    assert_eq!(Cursor::new("x").prev(), 0);
}

// === EOF vs Interior Null ===

#[test]
fn interior_null_is_not_eof() {
    let mut cursor = Cursor::new("a\0b");
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

#[test]
fn empty_source_is_eof() {
    assert!(Cursor::new("").is_eof());
}

// === Characters ===

#[test]
fn advance_char_skips_multibyte() {
    let mut cursor = Cursor::new("é€😀x");
    assert_eq!(cursor.current_char(), 'é');
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current_char(), '€');
    cursor.advance_char();
    assert_eq!(cursor.pos(), 5);
    cursor.advance_char();
    assert_eq!(cursor.pos(), 9);
    assert_eq!(cursor.current_char(), 'x');
}

#[test]
fn current_char_at_eof() {
    assert_eq!(Cursor::new("").current_char(), '\0');
}

// === Slicing ===

#[test]
fn slice_and_slice_from() {
    let mut cursor = Cursor::new("hello world");
    cursor.advance_n(5);
    assert_eq!(cursor.slice_from(0), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
}

// === Scanning Helpers ===

#[test]
fn eat_while_stops_at_predicate() {
    let mut cursor = Cursor::new("aaab");
    cursor.eat_while(|b| b == b'a');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_while_stops_at_eof() {
    let mut cursor = Cursor::new("aaa");
    cursor.eat_while(|b| b == b'a');
    assert!(cursor.is_eof());
}

#[test]
fn eat_until_line_end_stops_before_newline() {
    let mut cursor = Cursor::new("// c\r\nx");
    cursor.eat_until_line_end();
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.current(), b'\r');
}

#[test]
fn eat_until_line_end_without_newline() {
    let mut cursor = Cursor::new("// c");
    cursor.eat_until_line_end();
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_quote_delim_finds_each_stop() {
    let mut cursor = Cursor::new("ab\\\"");
    assert_eq!(cursor.skip_to_quote_delim(b'"'), b'\\');
    assert_eq!(cursor.pos(), 2);

    let mut cursor = Cursor::new("ab\rc`");
    assert_eq!(cursor.skip_to_quote_delim(b'`'), b'\r');

    let mut cursor = Cursor::new("abc");
    assert_eq!(cursor.skip_to_quote_delim(b'\''), 0);
    assert!(cursor.is_eof());
}

#[test]
fn eat_through_consumes_needle() {
    let mut cursor = Cursor::new("/* x */y");
    cursor.advance_n(2);
    assert!(cursor.eat_through(b"*/"));
    assert_eq!(cursor.current(), b'y');

    let mut cursor = Cursor::new("/* x");
    cursor.advance_n(2);
    assert!(!cursor.eat_through(b"*/"));
    assert!(cursor.is_eof());
}

#[test]
fn cursor_is_copy() {
    let mut a = Cursor::new("xyz");
    let snapshot = a;
    a.advance();
    assert_eq!(snapshot.pos(), 0);
    assert_eq!(a.pos(), 1);
}
