//! Two-decimal rounding for hours and money.
//!
//! Money always carries exactly two decimal places (`"0.00"`, `"45.50"`).
//! Hours are rounded to two places and then normalized (`"0"`, `"1.18"`,
//! `"10"`), so a drained pool reads the same as an untouched one.

use rust_decimal::{Decimal, RoundingStrategy};

fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a money value to pence, halves away from zero, at scale 2.
///
/// Every money field is rounded with this at the point it is computed, and
/// weekly totals are sums of already-rounded daily values.
///
/// # Examples
///
/// ```
/// use nursery_fees::calculation::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(
///     round_to_cents(Decimal::from_str("34.762").unwrap()).to_string(),
///     "34.76"
/// );
/// assert_eq!(
///     round_to_cents(Decimal::from_str("0.125").unwrap()).to_string(),
///     "0.13"
/// );
/// assert_eq!(round_to_cents(Decimal::ZERO).to_string(), "0.00");
/// ```
pub fn round_to_cents(value: Decimal) -> Decimal {
    let mut rounded = round_half_up(value);
    rounded.rescale(2);
    rounded
}

/// Rounds an hour value to two decimal places and drops trailing zeros.
///
/// ```
/// use nursery_fees::calculation::round_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_hours(Decimal::from_str("0.00").unwrap()).to_string(), "0");
/// assert_eq!(round_hours(Decimal::from_str("3.8200").unwrap()).to_string(), "3.82");
/// ```
pub fn round_hours(value: Decimal) -> Decimal {
    round_half_up(value).normalize()
}
