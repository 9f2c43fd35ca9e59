//! Currency formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// The fixed prefix placed before every formatted amount.
pub const CURRENCY_SYMBOL: &str = "$";

/// Formats an amount with the currency prefix and exactly two decimals.
///
/// Midpoints round away from zero. There is no locale handling and no
/// thousands separator; negative amounts keep their sign after the prefix.
///
/// # Examples
///
/// ```
/// use idms_site::calculation::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(6030, 0)), "$6030.00");
/// assert_eq!(format_currency(Decimal::ZERO), "$0.00");
/// assert_eq!(format_currency(Decimal::new(-1250, 2)), "$-12.50");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{:.2}", CURRENCY_SYMBOL, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn decimal(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_pads_whole_numbers() {
        assert_eq!(format_currency(decimal("5000")), "$5000.00");
        assert_eq!(format_currency(decimal("20.5")), "$20.50");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(format_currency(decimal("1.005")), "$1.01");
        assert_eq!(format_currency(decimal("1.004")), "$1.00");
        assert_eq!(format_currency(decimal("-1.005")), "$-1.01");
    }

    #[test]
    fn test_keeps_long_scale_inputs_to_two_places() {
        assert_eq!(format_currency(decimal("7200.000000")), "$7200.00");
    }

    proptest! {
        #[test]
        fn prop_always_two_decimals(cents in 0i64..1_000_000_000, scale in 0u32..6) {
            let formatted = format_currency(Decimal::new(cents, scale));
            prop_assert!(formatted.starts_with(CURRENCY_SYMBOL));
            let (_, fraction) = formatted.split_once('.').unwrap();
            prop_assert_eq!(fraction.len(), 2);
        }
    }
}
