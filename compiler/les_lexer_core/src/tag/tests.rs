use super::*;
use pretty_assertions::assert_eq;

#[test]
fn repr_u8_semantic_ranges() {
    assert_eq!(RawTag::Ident as u8, 0);
    assert_eq!(RawTag::TripleQuote as u8, 7);
    assert_eq!(RawTag::Operator as u8, 32);
    assert_eq!(RawTag::LParen as u8, 64);
    assert_eq!(RawTag::Spaces as u8, 112);
    assert_eq!(RawTag::Shebang as u8, 116);
    assert_eq!(RawTag::UnterminatedString as u8, 240);
    assert_eq!(RawTag::Unknown as u8, 247);
    assert_eq!(RawTag::Eof as u8, 255);
}

#[test]
fn tag_is_one_byte() {
    assert_eq!(std::mem::size_of::<RawTag>(), 1);
}

#[test]
fn error_tags() {
    assert!(RawTag::UnterminatedString.is_error());
    assert!(RawTag::UnterminatedEscapedIdent.is_error());
    assert!(RawTag::Unknown.is_error());
    assert!(!RawTag::Eof.is_error());
    assert!(!RawTag::Number.is_error());
}

#[test]
fn trivia_tags() {
    for tag in [
        RawTag::Spaces,
        RawTag::Newline,
        RawTag::LineComment,
        RawTag::BlockComment,
        RawTag::Shebang,
    ] {
        assert!(tag.is_trivia(), "{tag:?}");
    }
    assert!(!RawTag::UnterminatedBlockComment.is_trivia());
    assert!(!RawTag::Ident.is_trivia());
}

#[test]
fn fixed_lexemes() {
    assert_eq!(RawTag::Comma.lexeme(), Some(","));
    assert_eq!(RawTag::RBrack.lexeme(), Some("]"));
    assert_eq!(RawTag::At.lexeme(), Some("@"));
    assert_eq!(RawTag::Operator.lexeme(), None);
    assert_eq!(RawTag::Ident.lexeme(), None);
}

#[test]
fn names_are_readable() {
    assert_eq!(RawTag::Ident.name(), "identifier");
    assert_eq!(RawTag::Number.name(), "numeric literal");
    assert_eq!(RawTag::Eof.name(), "end of input");
}
