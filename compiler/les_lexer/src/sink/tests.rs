use super::*;
use pretty_assertions::assert_eq;

#[test]
fn vec_collects_in_order() {
    let mut sink: Vec<LexError> = Vec::new();
    sink.report(LexError::unterminated_comment(Span::new(0, 2)));
    sink.report(LexError::unexpected_character(Span::new(3, 4), '\u{1}'));
    assert_eq!(sink.len(), 2);
    assert_eq!(sink[0].span, Span::new(0, 2));
    assert_eq!(sink[1].span, Span::new(3, 4));
}

fn report_one<S: ErrorSink>(mut sink: S) {
    sink.report(LexError::unterminated_comment(Span::new(0, 2)));
}

#[test]
fn mutable_reference_forwards() {
    let mut errors: Vec<LexError> = Vec::new();
    report_one(&mut errors);
    report_one(&mut errors);
    assert_eq!(errors.len(), 2);
}

#[test]
fn callback_receives_span_and_message() {
    let mut seen = Vec::new();
    let mut sink = FnSink(|span: Span, msg: &str| seen.push((span, msg.to_owned())));
    sink.report(LexError::invalid_char_literal(Span::new(5, 9), 2));
    drop(sink);
    assert_eq!(
        seen,
        [(
            Span::new(5, 9),
            "character literal must contain exactly one character, found 2".to_owned()
        )]
    );
}
