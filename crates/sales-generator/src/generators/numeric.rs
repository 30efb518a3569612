//! Numeric value generators.

use rand::Rng;
use rust_decimal::Decimal;
use sales_core::{from_cents, round_to_cents, GeneratorSettings, MoneyRange, QuantityRange};

/// Generate a two-place decimal drawn uniformly from `range`.
///
/// The continuous draw is rounded to cents (half away from zero) and kept
/// inside the range's cent bounds.
pub fn generate_money<R: Rng>(rng: &mut R, range: MoneyRange) -> Decimal {
    let value = rng.random_range(range.min..=range.max);
    let cents = round_to_cents(value).clamp(range.min_cents(), range.max_cents());
    from_cents(cents)
}

/// Generate a random integer quantity in the given range (inclusive).
pub fn generate_quantity<R: Rng>(rng: &mut R, range: QuantityRange) -> u32 {
    rng.random_range(range.min..=range.max)
}

pub fn generate_price<R: Rng>(rng: &mut R, settings: &GeneratorSettings) -> Decimal {
    generate_money(rng, settings.price)
}

pub fn generate_discount<R: Rng>(rng: &mut R, settings: &GeneratorSettings) -> Decimal {
    generate_money(rng, settings.discount)
}

pub fn generate_tax<R: Rng>(rng: &mut R, settings: &GeneratorSettings) -> Decimal {
    generate_money(rng, settings.tax)
}

pub fn generate_shipping<R: Rng>(rng: &mut R, settings: &GeneratorSettings) -> Decimal {
    generate_money(rng, settings.shipping)
}
