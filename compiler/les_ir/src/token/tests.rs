use super::*;
use crate::{Decimal, Span, Symbol};
use pretty_assertions::assert_eq;

#[test]
fn name_kinds_accept_only_names() {
    let name = TokenValue::Name(Symbol::intern("#+"));
    for kind in [
        TokenKind::Id,
        TokenKind::Symbol,
        TokenKind::NormalOp,
        TokenKind::Assignment,
        TokenKind::At,
    ] {
        assert!(kind.accepts(&name), "{kind:?}");
        assert!(!kind.accepts(&TokenValue::I32(1)), "{kind:?}");
        assert!(!kind.accepts(&TokenValue::None), "{kind:?}");
    }
}

#[test]
fn number_accepts_every_numeric_variant() {
    let values = [
        TokenValue::I32(1),
        TokenValue::U32(1),
        TokenValue::I64(1),
        TokenValue::U64(1),
        TokenValue::F32(1.0),
        TokenValue::F64(1.0),
        TokenValue::Decimal(Decimal::ZERO),
    ];
    for v in &values {
        assert!(TokenKind::Number.accepts(v), "{v:?}");
    }
    assert!(!TokenKind::Number.accepts(&TokenValue::Str(String::new())));
}

#[test]
fn each_value_variant_fits_some_kind() {
    let values = [
        TokenValue::None,
        TokenValue::Name(Symbol::intern("x")),
        TokenValue::Str("s".to_owned()),
        TokenValue::Char('c'),
        TokenValue::U64(7),
    ];
    let kinds = [
        TokenKind::Spaces,
        TokenKind::Id,
        TokenKind::String,
        TokenKind::CharLiteral,
        TokenKind::Number,
    ];
    for (kind, v) in kinds.iter().zip(&values) {
        assert!(kind.accepts(v), "{kind:?} {v:?}");
    }
}

#[test]
fn trivia_kinds() {
    assert!(TokenKind::Spaces.is_trivia());
    assert!(TokenKind::Shebang.is_trivia());
    assert!(TokenKind::BlockComment.is_trivia());
    assert!(!TokenKind::Comma.is_trivia());
    assert!(!TokenKind::LParen.is_trivia());
}

#[test]
fn token_accessors() {
    let tok = Token::new(
        TokenKind::Id,
        Span::new(3, 8),
        TokenValue::Name(Symbol::intern("hello")),
    );
    assert_eq!(tok.start(), 3);
    assert_eq!(tok.len(), 5);
    assert!(!tok.is_empty());
    assert!(!tok.is_trivia());
    assert_eq!(tok.value.as_name().map(Symbol::as_str), Some("hello"));
    assert_eq!(format!("{tok:?}"), "Id @ 3..8 = Name(Symbol(\"hello\"))");
}

#[test]
fn value_display() {
    assert_eq!(TokenValue::U32(5).to_string(), "5u");
    assert_eq!(TokenValue::Str("a\n".to_owned()).to_string(), "\"a\\n\"");
    assert_eq!(TokenValue::None.to_string(), "");
    assert_eq!(TokenValue::Str("q".to_owned()).as_str(), Some("q"));
}
