//! Escape processing for quoted literals.
//!
//! Double-quoted, single-quoted and back-quoted literals share one escape
//! set: `\a \b \f \v \n \r \t \0 \\ \' \" \``, plus `\uXXXX` and
//! `\UXXXXXXXX` Unicode escapes. Invalid escapes push an error into the
//! accumulator and are kept verbatim in the decoded text.

use les_ir::Span;

use crate::lex_error::LexError;

/// Resolve a single-character escape.
#[inline]
fn resolve_simple_escape(c: char) -> Option<char> {
    match c {
        'a' => Some('\u{07}'),
        'b' => Some('\u{08}'),
        'f' => Some('\u{0C}'),
        'v' => Some('\u{0B}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '0' => Some('\0'),
        '\\' | '\'' | '"' | '`' => Some(c),
        _ => None,
    }
}

/// Unescape the content of a quoted literal (between its delimiters).
///
/// Fast path: if there are no backslashes, returns `None` to signal the
/// caller can use the source slice directly.
///
/// `base_offset` is the source offset of `content`, used to locate errors.
#[allow(
    clippy::cast_possible_truncation,
    reason = "source offsets fit in u32: the source is smaller than u32::MAX bytes"
)]
pub(crate) fn unescape(
    content: &str,
    base_offset: u32,
    errors: &mut Vec<LexError>,
) -> Option<String> {
    if !content.contains('\\') {
        return None;
    }

    let span = |i: usize, len: usize| Span::at(base_offset + i as u32, len as u32);
    let mut result = String::with_capacity(content.len());
    let mut chars = content.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        let Some(&(_, e)) = chars.peek() else {
            // Trailing backslash of an unterminated literal.
            errors.push(LexError::unrecognized_escape(span(i, 1), "\\"));
            result.push('\\');
            break;
        };

        if let Some(decoded) = resolve_simple_escape(e) {
            chars.next();
            result.push(decoded);
            continue;
        }

        if e == 'u' || e == 'U' {
            let width = if e == 'u' { 4 } else { 8 };
            let hex_start = i + 2;
            let decoded = content
                .get(hex_start..hex_start + width)
                .filter(|h| h.bytes().all(|b| b.is_ascii_hexdigit()))
                .and_then(|h| u32::from_str_radix(h, 16).ok())
                .and_then(char::from_u32);
            let hex_len = match decoded {
                Some(ch) => {
                    result.push(ch);
                    width
                }
                None => {
                    let present = content
                        .get(hex_start..)
                        .unwrap_or("")
                        .bytes()
                        .take(width)
                        .take_while(u8::is_ascii_hexdigit)
                        .count();
                    let escape = content.get(i..hex_start + present).unwrap_or("\\u");
                    errors.push(LexError::unrecognized_escape(
                        span(i, 2 + present),
                        escape,
                    ));
                    result.push_str(escape);
                    present
                }
            };
            // Marker plus the hex digits, all ASCII.
            for _ in 0..=hex_len {
                chars.next();
            }
            continue;
        }

        chars.next();
        let escape_len = 1 + e.len_utf8();
        errors.push(LexError::unrecognized_escape(
            span(i, escape_len),
            format!("\\{e}"),
        ));
        result.push('\\');
        result.push(e);
    }

    Some(result)
}

#[cfg(test)]
mod tests;
