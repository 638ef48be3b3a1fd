use super::*;
use crate::lex_error::LexErrorKind;
use pretty_assertions::assert_eq;

fn decode(content: &str) -> (Option<String>, Vec<LexError>) {
    let mut errors = Vec::new();
    let out = unescape(content, 10, &mut errors);
    (out, errors)
}

#[test]
fn no_backslash_is_fast_path() {
    assert_eq!(decode("plain text"), (None, vec![]));
}

#[test]
fn simple_escapes() {
    let (out, errors) = decode(r#"\a\b\f\v\`\'\""#);
    assert_eq!(out.as_deref(), Some("\u{7}\u{8}\u{c}\u{b}`'\""));
    assert!(errors.is_empty());

    let (out, _) = decode(r"\n\r\t\0\\");
    assert_eq!(out.as_deref(), Some("\n\r\t\0\\"));
}

#[test]
fn unicode_escapes() {
    let (out, errors) = decode(r"A\U00000062c");
    assert_eq!(out.as_deref(), Some("Abc"));
    assert!(errors.is_empty());

    let (out, _) = decode(r"\U0001F600!");
    assert_eq!(out.as_deref(), Some("😀!"));
}

#[test]
fn short_unicode_escape_is_kept_verbatim() {
    let (out, errors) = decode(r"\u12x");
    assert_eq!(out.as_deref(), Some(r"\u12x"));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].span, Span::new(10, 14));
    assert_eq!(
        errors[0].kind,
        LexErrorKind::UnrecognizedEscapeSequence {
            escape: r"\u12".to_owned()
        }
    );
}

#[test]
fn surrogate_is_rejected() {
    let (out, errors) = decode(r"\uD800");
    assert_eq!(out.as_deref(), Some(r"\uD800"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn unknown_escape_is_kept_verbatim() {
    let (out, errors) = decode(r"a\qb");
    assert_eq!(out.as_deref(), Some(r"a\qb"));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].span, Span::new(11, 13));
}

#[test]
fn trailing_backslash() {
    let (out, errors) = decode("abc\\");
    assert_eq!(out.as_deref(), Some("abc\\"));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].span, Span::new(13, 14));
}

#[test]
fn multiple_errors_each_reported() {
    let (_, errors) = decode(r"\q\w\n");
    assert_eq!(errors.len(), 2);
}
