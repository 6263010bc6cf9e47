//! Currency rendering for final quote amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Locale-style currency formatting, supplied as configuration.
///
/// Defaults to Brazilian Real in pt-BR style (`R$ 1.234,56`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Currency symbol prefixed to the amount
    pub symbol: String,

    /// Separator between the integer and fractional part
    pub decimal_separator: char,

    /// Separator between groups of three integer digits
    pub thousands_separator: char,

    /// Number of fractional digits to render
    pub decimal_places: u32,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            decimal_separator: ',',
            thousands_separator: '.',
            decimal_places: 2,
        }
    }
}

impl CurrencyFormat {
    /// Render an amount as a currency string.
    ///
    /// Rounding happens here and only here: the amount is rounded half-up
    /// to `decimal_places` in a single step, so intermediate arithmetic
    /// must hand over the raw unrounded value.
    pub fn format(&self, amount: Decimal) -> String {
        let mut rounded = amount.round_dp_with_strategy(
            self.decimal_places,
            RoundingStrategy::MidpointAwayFromZero,
        );
        rounded.rescale(self.decimal_places);

        let negative = rounded.is_sign_negative();
        let digits = rounded.abs().to_string();
        let (units, cents) = match digits.split_once('.') {
            Some((units, cents)) => (units.to_string(), Some(cents.to_string())),
            None => (digits, None),
        };

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push(' ');
        out.push_str(&group_thousands(&units, self.thousands_separator));
        if let Some(cents) = cents {
            out.push(self.decimal_separator);
            out.push_str(&cents);
        }
        out
    }
}

/// Insert a separator between groups of three digits, right to left.
fn group_thousands(digits: &str, separator: char) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(*ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_brl_with_two_decimals() {
        let format = CurrencyFormat::default();
        assert_eq!(format.format(Decimal::new(2444, 1)), "R$ 244,40");
    }

    #[test]
    fn test_groups_thousands_pt_br_style() {
        let format = CurrencyFormat::default();
        assert_eq!(format.format(Decimal::new(12345, 1)), "R$ 1.234,50");
        assert_eq!(format.format(Decimal::from(1_000_000)), "R$ 1.000.000,00");
    }

    #[test]
    fn test_rounds_half_up_once() {
        let format = CurrencyFormat::default();
        // 2.345 -> 2.35, not the 2.34 a banker's rounding would give
        assert_eq!(format.format(Decimal::new(2345, 3)), "R$ 2,35");
    }

    #[test]
    fn test_pads_short_fractions() {
        let format = CurrencyFormat::default();
        assert_eq!(format.format(Decimal::from(75)), "R$ 75,00");
    }

    #[test]
    fn test_negative_amounts_keep_symbol() {
        let format = CurrencyFormat::default();
        assert_eq!(format.format(Decimal::new(-105, 1)), "-R$ 10,50");
    }

    #[test]
    fn test_custom_format_without_decimals() {
        let format = CurrencyFormat {
            symbol: "¥".to_string(),
            decimal_separator: '.',
            thousands_separator: ',',
            decimal_places: 0,
        };
        assert_eq!(format.format(Decimal::new(12344, 1)), "¥ 1,234");
    }
}
