use super::*;
use pretty_assertions::assert_eq;

fn dec(int: &str, frac: &str, exp: i32) -> Option<Decimal> {
    Decimal::from_digits(int, frac, exp, false)
}

#[test]
fn simple_values() {
    assert_eq!(dec("25", "", 0), Decimal::new(25, 0, false));
    assert_eq!(dec("0", "25", 0), Decimal::new(25, 2, false));
    assert_eq!(dec("", "5", 0), Decimal::new(5, 1, false));
}

#[test]
fn exponent_shifts_scale() {
    // 0.3e+2 == 30
    assert_eq!(dec("0", "3", 2), Decimal::new(30, 0, false));
    // 5e-3 == 0.005
    assert_eq!(dec("5", "", -3), Decimal::new(5, 3, false));
}

#[test]
fn normalisation_makes_equality_numeric() {
    assert_eq!(Decimal::new(250, 3, false), Decimal::new(25, 2, false));
    assert_eq!(dec("0", "250", 0), dec("0", "25", 0));
    assert_eq!(Decimal::new(0, 5, true), Some(Decimal::ZERO));
}

#[test]
fn separators_are_ignored() {
    assert_eq!(dec("1_000", "0_5", 0), dec("1000", "05", 0));
}

#[test]
fn excess_fraction_digits_round() {
    let long = dec("0", "12345678901234567890123456788", 0);
    // 29 fraction digits, the last one rounds away.
    assert_eq!(long.map(|d| d.scale()), Some(28));
    let rounded = dec("0", "99999999999999999999999999995", 0);
    assert_eq!(rounded, Decimal::new(1, 0, false));
}

#[test]
fn dropped_digits_round_once() {
    // 27 zeros then the significant digits: 4.49e-28 and 4.51e-28.
    let tail = |digits: &str| format!("{}{digits}", "0".repeat(27));
    assert_eq!(dec("0", &tail("449"), 0), Decimal::new(4, 28, false));
    assert_eq!(dec("0", &tail("451"), 0), Decimal::new(5, 28, false));
    // 9.000...0449 is too wide for 29 digits, so three digits go at once.
    assert_eq!(dec("9", &tail("449"), 0), Decimal::new(9, 0, false));
}

#[test]
fn integer_overflow_is_rejected() {
    // 2^96 = 79228162514264337593543950336
    assert!(dec("79228162514264337593543950336", "", 0).is_none());
    assert!(dec("79228162514264337593543950335", "", 0).is_some());
    assert!(dec("1", "", 40).is_none());
}

#[test]
fn zero_with_large_exponent_is_zero() {
    assert_eq!(dec("0", "", 60), Some(Decimal::ZERO));
}

#[test]
fn display_formats_scale() {
    let show = |d: Option<Decimal>| d.map(|d| d.to_string()).unwrap_or_default();
    assert_eq!(show(dec("0", "25", 0)), "0.25");
    assert_eq!(show(dec("", "005", 0)), "0.005");
    assert_eq!(show(dec("30", "", 0)), "30");
    assert_eq!(show(Decimal::from_digits("1", "5", 0, true)), "-1.5");
}
