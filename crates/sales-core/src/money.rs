//! Two-place decimal helpers.
//!
//! Money values are drawn as `f64` and immediately pinned to whole cents so
//! that every derived field (Total, Profit) is exact decimal arithmetic.

use rust_decimal::Decimal;

/// Number of fractional digits carried by every money field.
pub const MONEY_SCALE: u32 = 2;

/// Round a value to whole cents, half away from zero.
///
/// `1.005` is not representable exactly as `f64`, so callers must not rely on
/// any particular outcome for inputs that sit on a float boundary; values
/// that are exact halves of a cent in binary (e.g. `0.125`) round up.
pub fn round_to_cents(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Build a two-place decimal from a cent count.
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, MONEY_SCALE)
}

/// Render a money value with exactly two fractional digits.
pub fn format_money(value: Decimal) -> String {
    // Arithmetic can leave a signed zero behind
    let value = if value.is_zero() { Decimal::ZERO } else { value };
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(1.0), 100);
        assert_eq!(round_to_cents(999.9), 99990);
        assert_eq!(round_to_cents(12.344), 1234);
        assert_eq!(round_to_cents(12.346), 1235);
        assert_eq!(round_to_cents(0.0), 0);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        // 0.125 and 0.375 are exact in binary, so these pin the midpoint rule
        assert_eq!(round_to_cents(0.125), 13);
        assert_eq!(round_to_cents(0.375), 38);
        assert_eq!(round_to_cents(-0.125), -13);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(from_cents(100)), "1.00");
        assert_eq!(format_money(from_cents(5)), "0.05");
        assert_eq!(format_money(from_cents(0)), "0.00");
        assert_eq!(format_money(from_cents(-1234)), "-12.34");
        assert_eq!(format_money(from_cents(99990)), "999.90");
    }

    #[test]
    fn test_format_signed_zero() {
        let zero = from_cents(150) - from_cents(100) - from_cents(50);
        assert_eq!(format_money(zero), "0.00");
    }

    #[test]
    fn test_derived_arithmetic_is_exact() {
        let total = from_cents(1999) * Decimal::from(3u32);
        assert_eq!(format_money(total), "59.97");

        let profit = total - from_cents(1) - from_cents(2) - from_cents(3);
        assert_eq!(format_money(profit), "59.91");
    }
}
