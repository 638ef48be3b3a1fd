use super::*;
use pretty_assertions::assert_eq;

#[test]
fn messages() {
    let span = Span::new(0, 1);
    assert_eq!(
        LexError::unterminated_string(span, "\"").message(),
        "unterminated literal: missing closing `\"`"
    );
    assert_eq!(
        LexError::unterminated_comment(span).message(),
        "unterminated block comment: missing closing `*/`"
    );
    assert_eq!(
        LexError::invalid_char_literal(span, 3).message(),
        "character literal must contain exactly one character, found 3"
    );
    assert_eq!(
        LexError::unrecognized_escape(span, "\\q").message(),
        "unrecognized escape sequence `\\q`"
    );
    assert_eq!(
        LexError::unexpected_character(span, '\u{7}').message(),
        "unexpected character '\\u{7}'"
    );
}

#[test]
fn number_errors_convert() {
    let kind: LexErrorKind = NumberError::Overflow { target: "u32" }.into();
    assert_eq!(
        kind,
        LexErrorKind::MalformedNumericLiteral(NumberError::Overflow { target: "u32" })
    );
    assert_eq!(
        kind.to_string(),
        "malformed numeric literal: value does not fit in u32"
    );
}

#[test]
fn display_matches_message() {
    let err = LexError::malformed_number(Span::new(2, 4), NumberError::MalformedExponent);
    assert_eq!(err.to_string(), err.message());
    assert_eq!(err.span, Span::new(2, 4));
}
