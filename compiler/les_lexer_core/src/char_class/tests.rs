use super::*;

#[test]
fn sentinel_is_in_no_class() {
    assert!(!is_ident_start(0));
    assert!(!is_ident_continue(0));
    assert!(!is_op_char(0));
    assert!(!is_escape_run(0));
}

#[test]
fn hash_starts_identifiers() {
    assert!(is_ident_start(b'#'));
    assert!(is_ident_continue(b'#'));
    assert!(!is_op_char(b'#'));
}

#[test]
fn apostrophe_continues_but_does_not_start() {
    assert!(!is_ident_start(b'\''));
    assert!(is_ident_continue(b'\''));
}

#[test]
fn operator_set() {
    for b in b"~!%^&*\\-+=|<>/?:.$" {
        assert!(is_op_char(*b), "{:?}", *b as char);
    }
    for b in b"@#,;()[]{}\"'`_ a0" {
        assert!(!is_op_char(*b), "{:?}", *b as char);
    }
}

#[test]
fn escape_run_excludes_at_and_brackets() {
    assert!(is_escape_run(b'='));
    assert!(is_escape_run(b'x'));
    assert!(is_escape_run(b'0'));
    assert!(!is_escape_run(b'@'));
    assert!(!is_escape_run(b'('));
    assert!(!is_escape_run(b','));
}

#[test]
fn non_ascii_letters() {
    assert!(is_ident_start_char('é'));
    assert!(is_ident_start_char('λ'));
    assert!(!is_ident_start_char('€'));
    assert!(is_ident_continue_char('٣'));
    assert!(!is_ident_start_char('٣'));
}

#[test]
fn digits_by_radix() {
    assert!(is_digit_of(b'1', 2));
    assert!(!is_digit_of(b'2', 2));
    assert!(is_digit_of(b'9', 10));
    assert!(!is_digit_of(b'a', 10));
    assert!(is_digit_of(b'F', 16));
    assert!(!is_digit_of(b'g', 16));
}
