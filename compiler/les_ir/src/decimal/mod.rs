//! High-precision decimal values for `M`-suffixed literals.
//!
//! A [`Decimal`] is a 96-bit unsigned mantissa, a sign, and a base-10 scale
//! in `0..=28`, so its value is `mantissa * 10^-scale`. Values are kept
//! normalised (no trailing zero digits in the fraction) which makes derived
//! equality numeric: `0.250` and `0.25` are the same value.

use std::fmt;

/// Largest mantissa representable in 96 bits.
const MAX_MANTISSA: u128 = (1u128 << 96) - 1;

/// Largest supported scale (digits after the decimal point).
const MAX_SCALE: u32 = 28;

/// Normalised 96-bit decimal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Decimal {
    mantissa: u128,
    scale: u32,
    negative: bool,
}

impl Decimal {
    /// Zero.
    pub const ZERO: Decimal = Decimal {
        mantissa: 0,
        scale: 0,
        negative: false,
    };

    /// Build from parts, normalising trailing zeros.
    ///
    /// Returns `None` if the mantissa needs more than 96 bits or the scale
    /// exceeds 28.
    pub fn new(mantissa: u128, scale: u32, negative: bool) -> Option<Decimal> {
        if mantissa > MAX_MANTISSA || scale > MAX_SCALE {
            return None;
        }
        Some(Self::normalized(mantissa, scale, negative))
    }

    fn normalized(mut mantissa: u128, mut scale: u32, negative: bool) -> Decimal {
        while scale > 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            scale -= 1;
        }
        Decimal {
            mantissa,
            scale,
            // There is no negative zero.
            negative: negative && mantissa != 0,
        }
    }

    /// Build from decimal digit strings and a base-10 exponent.
    ///
    /// `int_digits` and `frac_digits` may contain `_` separators, which are
    /// ignored. Digits beyond what 96 bits can hold are rounded away from the
    /// fraction (half away from zero). Returns `None` when the integer part
    /// itself does not fit.
    pub fn from_digits(
        int_digits: &str,
        frac_digits: &str,
        exponent: i32,
        negative: bool,
    ) -> Option<Decimal> {
        let mut digits: Vec<u8> = int_digits
            .bytes()
            .chain(frac_digits.bytes())
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();
        let frac_len = frac_digits.bytes().filter(u8::is_ascii_digit).count();
        let mut scale = i64::try_from(frac_len).ok()? - i64::from(exponent);

        // Leading zeros never carry precision.
        let leading = digits.iter().take_while(|&&d| d == 0).count();
        digits.drain(..leading);

        if scale < 0 {
            let zeros = usize::try_from(-scale).ok()?;
            if digits.len() + zeros > 40 {
                return if digits.is_empty() {
                    Some(Decimal::ZERO)
                } else {
                    None
                };
            }
            digits.resize(digits.len() + zeros, 0);
            scale = 0;
        }

        // Find the fewest fraction digits to cut so the value fits both the
        // scale limit and the mantissa width. Each candidate is rounded once
        // from the full digit string.
        let mut cut = usize::try_from((scale - i64::from(MAX_SCALE)).max(0)).ok()?;
        loop {
            if i64::try_from(cut).ok()? > scale {
                return None;
            }
            let keep = digits.len().checked_sub(cut);
            let mut kept = digits[..keep.unwrap_or(0)].to_vec();
            if keep.and_then(|k| digits.get(k)).is_some_and(|&d| d >= 5) {
                round_up(&mut kept);
            }
            if let Some(mantissa) = digits_value(&kept).filter(|&m| m <= MAX_MANTISSA) {
                let scale = u32::try_from(scale - i64::try_from(cut).ok()?).ok()?;
                return Decimal::new(mantissa, scale, negative);
            }
            cut += 1;
        }
    }

    /// The 96-bit magnitude.
    pub const fn mantissa(&self) -> u128 {
        self.mantissa
    }

    /// Digits after the decimal point.
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns `true` for values below zero.
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

}

/// Value of a big-endian digit vector, or `None` past `u128`.
fn digits_value(digits: &[u8]) -> Option<u128> {
    digits.iter().try_fold(0u128, |acc, &d| {
        acc.checked_mul(10)?.checked_add(u128::from(d))
    })
}

/// Add one unit in the last place, carrying leftwards.
fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        let digits = self.mantissa.to_string();
        let scale = self.scale as usize;
        if scale == 0 {
            return f.write_str(&digits);
        }
        if digits.len() > scale {
            let (int, frac) = digits.split_at(digits.len() - scale);
            write!(f, "{int}.{frac}")
        } else {
            write!(f, "0.{}{digits}", "0".repeat(scale - digits.len()))
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Decimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests;
