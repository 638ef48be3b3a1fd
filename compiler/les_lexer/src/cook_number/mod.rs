//! Numeric literal decoding.
//!
//! The raw scanner decides a literal's extent; this module validates its
//! digits and computes its value:
//!
//! ```text
//! ['-'] ['0x' | '0b'] digits ['.' digits] [exponent] [suffix]
//! ```
//!
//! Integer literals take the narrowest width their suffix allows. Literals
//! with a fraction, an exponent, or an `F`/`D`/`M` suffix are floating point
//! (or [`Decimal`] for `M`).

use les_ir::{Decimal, TokenValue};

/// Why a numeric literal is malformed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum NumberError {
    /// A base prefix with no digits after it: `0x`, `0b`.
    #[error("no digits in literal")]
    MissingDigits,
    /// A digit outside the literal's base: `0b102`.
    #[error("invalid digit `{digit}` for base {radix}")]
    InvalidDigit { digit: char, radix: u32 },
    /// An exponent marker with a sign but no digits: `2.0e+`.
    #[error("exponent has no digits")]
    MalformedExponent,
    /// The value does not fit the type chosen by the suffix.
    #[error("value does not fit in {target}")]
    Overflow { target: &'static str },
    /// A `U`, `L` or `UL` suffix after a fraction or exponent: `1.5L`.
    #[error("integer suffix on a floating-point literal")]
    IntegerSuffixOnFloat,
}

/// Type suffix of a literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Suffix {
    None,
    Unsigned,
    Long,
    UnsignedLong,
    Float,
    Double,
    Decimal,
}

impl Suffix {
    fn parse(text: &str) -> Option<Suffix> {
        Some(match text.to_ascii_lowercase().as_str() {
            "" => Suffix::None,
            "u" => Suffix::Unsigned,
            "l" => Suffix::Long,
            "ul" | "lu" => Suffix::UnsignedLong,
            "f" => Suffix::Float,
            "d" => Suffix::Double,
            "m" => Suffix::Decimal,
            _ => return None,
        })
    }

    fn is_float(self) -> bool {
        matches!(self, Suffix::Float | Suffix::Double | Suffix::Decimal)
    }
}

/// A literal split into its parts. Digit strings keep their `_` separators.
#[derive(Debug)]
struct Parts<'a> {
    negative: bool,
    radix: u32,
    int_digits: &'a str,
    frac_digits: Option<&'a str>,
    exponent: Option<&'a str>,
    suffix: Suffix,
}

/// Take the longest prefix of `s` whose bytes satisfy `pred`.
fn split_while(s: &str, pred: impl Fn(u8) -> bool) -> (&str, &str) {
    let end = s.bytes().position(|b| !pred(b)).unwrap_or(s.len());
    s.split_at(end)
}

fn split_parts(text: &str) -> Result<Parts<'_>, NumberError> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let prefix = rest.get(..2).map(str::to_ascii_lowercase);
    let (radix, rest) = match prefix.as_deref() {
        Some("0x") => (16, &rest[2..]),
        Some("0b") => (2, &rest[2..]),
        _ => (10, rest),
    };

    // Binary digit runs may contain stray decimal digits, validated below.
    let is_digit = |b: u8| {
        b == b'_'
            || if radix == 16 {
                b.is_ascii_hexdigit()
            } else {
                b.is_ascii_digit()
            }
    };

    let (int_digits, rest) = split_while(rest, is_digit);

    let (frac_digits, rest) = match rest.strip_prefix('.') {
        Some(after_dot) => {
            let (frac, rest) = split_while(after_dot, is_digit);
            (Some(frac), rest)
        }
        None => (None, rest),
    };

    let marker = if radix == 10 { b'e' } else { b'p' };
    let (exponent, rest) = match rest.as_bytes().first() {
        Some(b) if b.to_ascii_lowercase() == marker => {
            let after_marker = &rest[1..];
            let sign_len = usize::from(after_marker.starts_with(['+', '-']));
            let (digits, rest) =
                split_while(&after_marker[sign_len..], |b| b.is_ascii_digit() || b == b'_');
            if !digits.bytes().any(|b| b.is_ascii_digit()) {
                return Err(NumberError::MalformedExponent);
            }
            (Some(&after_marker[..sign_len + digits.len()]), rest)
        }
        _ => (None, rest),
    };

    let suffix = Suffix::parse(rest).ok_or_else(|| NumberError::InvalidDigit {
        digit: rest.chars().next().unwrap_or('?'),
        radix,
    })?;

    let has_digits = int_digits
        .bytes()
        .chain(frac_digits.unwrap_or("").bytes())
        .any(|b| b != b'_');
    if !has_digits {
        return Err(NumberError::MissingDigits);
    }
    if radix == 2 {
        let mut digits = int_digits.chars().chain(frac_digits.unwrap_or("").chars());
        if let Some(digit) = digits.find(|c| matches!(c, '2'..='9')) {
            return Err(NumberError::InvalidDigit { digit, radix });
        }
    }

    Ok(Parts {
        negative,
        radix,
        int_digits,
        frac_digits,
        exponent,
        suffix,
    })
}

/// Decode a numeric literal's full source text.
pub fn parse_number(text: &str) -> Result<TokenValue, NumberError> {
    let parts = split_parts(text)?;
    if parts.frac_digits.is_some() || parts.exponent.is_some() || parts.suffix.is_float() {
        parse_float(&parts)
    } else {
        parse_integer(&parts)
    }
}

/// Digit values of a digit string, skipping separators.
fn digit_values(digits: &str) -> impl Iterator<Item = u32> + '_ {
    digits.chars().filter_map(|c| c.to_digit(16))
}

fn parse_integer(parts: &Parts<'_>) -> Result<TokenValue, NumberError> {
    let radix = u128::from(parts.radix);
    let magnitude = digit_values(parts.int_digits)
        .try_fold(0u128, |acc, d| acc.checked_mul(radix)?.checked_add(u128::from(d)))
        .ok_or(NumberError::Overflow { target: "u64" })?;

    if parts.negative {
        let value = i128::try_from(magnitude)
            .map(|m| -m)
            .map_err(|_| NumberError::Overflow { target: "i64" })?;
        return match parts.suffix {
            Suffix::None => i32::try_from(value)
                .map(TokenValue::I32)
                .or_else(|_| i64::try_from(value).map(TokenValue::I64))
                .map_err(|_| NumberError::Overflow { target: "i64" }),
            Suffix::Long => i64::try_from(value)
                .map(TokenValue::I64)
                .map_err(|_| NumberError::Overflow { target: "i64" }),
            _ => Err(NumberError::Overflow { target: "an unsigned type" }),
        };
    }

    match parts.suffix {
        Suffix::Unsigned => u32::try_from(magnitude)
            .map(TokenValue::U32)
            .map_err(|_| NumberError::Overflow { target: "u32" }),
        Suffix::Long => i64::try_from(magnitude)
            .map(TokenValue::I64)
            .map_err(|_| NumberError::Overflow { target: "i64" }),
        Suffix::UnsignedLong => u64::try_from(magnitude)
            .map(TokenValue::U64)
            .map_err(|_| NumberError::Overflow { target: "u64" }),
        _ => i32::try_from(magnitude)
            .map(TokenValue::I32)
            .or_else(|_| u32::try_from(magnitude).map(TokenValue::U32))
            .or_else(|_| i64::try_from(magnitude).map(TokenValue::I64))
            .or_else(|_| u64::try_from(magnitude).map(TokenValue::U64))
            .map_err(|_| NumberError::Overflow { target: "u64" }),
    }
}

fn parse_float(parts: &Parts<'_>) -> Result<TokenValue, NumberError> {
    match parts.suffix {
        Suffix::Decimal => return parse_decimal(parts),
        Suffix::Unsigned | Suffix::Long | Suffix::UnsignedLong => {
            return Err(NumberError::IntegerSuffixOnFloat);
        }
        Suffix::None | Suffix::Float | Suffix::Double => {}
    }
    let value = if parts.radix == 10 {
        parse_decimal_float(parts)
    } else {
        parse_binary_float(parts)?
    };
    let value = if parts.negative { -value } else { value };

    if parts.suffix == Suffix::Float {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "narrowing to f32 is the meaning of the F suffix"
        )]
        let narrowed = value as f32;
        if narrowed.is_infinite() {
            return Err(NumberError::Overflow { target: "f32" });
        }
        Ok(TokenValue::F32(narrowed))
    } else if !value.is_finite() {
        Err(NumberError::Overflow { target: "f64" })
    } else {
        Ok(TokenValue::F64(value))
    }
}

/// Base-10 float via the standard library parser (correctly rounded).
fn parse_decimal_float(parts: &Parts<'_>) -> f64 {
    let mut cleaned = String::with_capacity(parts.int_digits.len() + 8);
    cleaned.extend(parts.int_digits.chars().filter(|&c| c != '_'));
    if cleaned.is_empty() {
        cleaned.push('0');
    }
    if let Some(frac) = parts.frac_digits {
        cleaned.push('.');
        cleaned.extend(frac.chars().filter(|&c| c != '_'));
    }
    if let Some(exp) = parts.exponent {
        cleaned.push('e');
        cleaned.extend(exp.chars().filter(|&c| c != '_'));
    }
    // The scanner only admits digits, '.', 'e' and a sign here.
    cleaned.parse::<f64>().unwrap_or(f64::NAN)
}

/// Hex or binary float: `mantissa * 2^(exponent - frac_digits * bits)`.
fn parse_binary_float(parts: &Parts<'_>) -> Result<f64, NumberError> {
    let bits_per_digit: i64 = if parts.radix == 16 { 4 } else { 1 };
    let radix = f64::from(parts.radix);
    let frac = parts.frac_digits.unwrap_or("");

    let mantissa = digit_values(parts.int_digits)
        .chain(digit_values(frac))
        .fold(0f64, |acc, d| acc * radix + f64::from(d));
    let frac_count = i64::try_from(digit_values(frac).count()).unwrap_or(i64::MAX);

    let exponent = match parts.exponent {
        Some(exp) => parse_exponent(exp)?,
        None => 0,
    };
    let scale = exponent
        .checked_sub(frac_count.saturating_mul(bits_per_digit))
        .and_then(|s| i32::try_from(s).ok())
        .ok_or(NumberError::Overflow { target: "f64" })?;

    if mantissa == 0.0 {
        return Ok(0.0);
    }
    // 2^scale alone underflows below 2^-1022 even when the product is a
    // representable subnormal.
    let half = scale / 2;
    Ok(mantissa * 2f64.powi(half) * 2f64.powi(scale - half))
}

/// Signed decimal exponent digits, separators skipped.
fn parse_exponent(exp: &str) -> Result<i64, NumberError> {
    let cleaned: String = exp.chars().filter(|&c| c != '_').collect();
    cleaned
        .parse::<i64>()
        .map_err(|_| NumberError::Overflow { target: "f64" })
}

fn parse_decimal(parts: &Parts<'_>) -> Result<TokenValue, NumberError> {
    const OVERFLOW: NumberError = NumberError::Overflow { target: "decimal" };

    if parts.radix != 10 {
        // Hex/binary decimals go through f64 and its shortest round-trip text.
        let value = parse_binary_float(parts)?;
        if !value.is_finite() {
            return Err(OVERFLOW);
        }
        let text = format!("{value}");
        let (int, frac) = text.split_once('.').unwrap_or((text.as_str(), ""));
        return Decimal::from_digits(int, frac, 0, parts.negative)
            .map(TokenValue::Decimal)
            .ok_or(OVERFLOW);
    }

    let exponent = match parts.exponent {
        Some(exp) => i32::try_from(parse_exponent(exp)?).map_err(|_| OVERFLOW)?,
        None => 0,
    };
    Decimal::from_digits(
        parts.int_digits,
        parts.frac_digits.unwrap_or(""),
        exponent,
        parts.negative,
    )
    .map(TokenValue::Decimal)
    .ok_or(OVERFLOW)
}
