//! Byte and character classification.
//!
//! ASCII classes are 256-entry lookup tables; the sentinel byte (0x00) maps
//! to `false` in every table, naturally terminating scan loops. Non-ASCII
//! scalars are classified with [`char`] methods after decoding.

/// Build a 256-entry lookup table from a `const fn(u8) -> bool`.
macro_rules! byte_table {
    ($pred:ident) => {{
        let mut table = [false; 256];
        let mut i = 0usize;
        while i < 256 {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "loop counter i is 0..=255, always fits in u8"
            )]
            let b = i as u8;
            table[i] = $pred(b);
            i += 1;
        }
        table
    }};
}

const fn ident_start_byte(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'#')
}

const fn ident_continue_byte(b: u8) -> bool {
    ident_start_byte(b) || matches!(b, b'0'..=b'9' | b'\'')
}

const fn op_byte(b: u8) -> bool {
    matches!(
        b,
        b'~' | b'!'
            | b'%'
            | b'^'
            | b'&'
            | b'*'
            | b'\\'
            | b'-'
            | b'+'
            | b'='
            | b'|'
            | b'<'
            | b'>'
            | b'/'
            | b'?'
            | b':'
            | b'.'
            | b'$'
    )
}

static IS_IDENT_START_TABLE: [bool; 256] = byte_table!(ident_start_byte);
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = byte_table!(ident_continue_byte);
static IS_OP_TABLE: [bool; 256] = byte_table!(op_byte);

/// `true` for ASCII letters, `_` and `#`.
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    IS_IDENT_START_TABLE[b as usize]
}

/// `true` for identifier-start bytes, ASCII digits and `'`.
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// `true` for operator characters: `~ ! % ^ & * \ - + = | < > / ? : . $`.
#[inline]
pub fn is_op_char(b: u8) -> bool {
    IS_OP_TABLE[b as usize]
}

/// `true` for bytes that may appear in an `@`-escaped run.
#[inline]
pub fn is_escape_run(b: u8) -> bool {
    is_ident_continue(b) || is_op_char(b)
}

/// Identifier start for any scalar, including non-ASCII letters.
pub fn is_ident_start_char(c: char) -> bool {
    if c.is_ascii() {
        is_ident_start(c as u8)
    } else {
        c.is_alphabetic()
    }
}

/// Identifier continuation for any scalar, including non-ASCII letters and
/// digits.
pub fn is_ident_continue_char(c: char) -> bool {
    if c.is_ascii() {
        is_ident_continue(c as u8)
    } else {
        c.is_alphanumeric()
    }
}

/// `true` if `b` is an ASCII digit valid in `radix` (2, 10 or 16).
#[inline]
pub fn is_digit_of(b: u8, radix: u32) -> bool {
    match radix {
        2 => matches!(b, b'0' | b'1'),
        16 => b.is_ascii_hexdigit(),
        _ => b.is_ascii_digit(),
    }
}

/// `true` for line-ending bytes.
#[inline]
pub fn is_line_end(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

#[cfg(test)]
mod tests;
