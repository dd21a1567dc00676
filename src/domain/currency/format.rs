// SPDX-License-Identifier: MPL-2.0
//! Display formatting for monetary values.

use super::CurrencyCode;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats `value` with exactly `places` fractional digits.
///
/// Rounds half away from zero and pads with zeros, so `450` becomes `450.00`
/// for two places.
#[must_use]
pub fn format_fixed(value: Decimal, places: u32) -> String {
    let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", places as usize, rounded)
}

/// Formats the unit rate line, e.g. `1 USD = 90.00 RUB`.
#[must_use]
pub fn unit_rate_text(from: &CurrencyCode, rate: Decimal, to: &CurrencyCode) -> String {
    format!("1 {from} = {} {to}", format_fixed(rate, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_requested_places() {
        assert_eq!(format_fixed(Decimal::from(450), 2), "450.00");
        assert_eq!(format_fixed(Decimal::new(9, 1), 2), "0.90");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_fixed(Decimal::new(12345, 3), 2), "12.35");
        assert_eq!(format_fixed(Decimal::new(12344, 3), 2), "12.34");
    }

    #[test]
    fn zero_places_drops_fraction() {
        assert_eq!(format_fixed(Decimal::new(100, 1), 0), "10");
    }

    #[test]
    fn unit_rate_uses_two_decimals() {
        let text = unit_rate_text(
            &CurrencyCode::new("USD"),
            Decimal::new(9012345, 5),
            &CurrencyCode::new("RUB"),
        );
        assert_eq!(text, "1 USD = 90.12 RUB");
    }
}
