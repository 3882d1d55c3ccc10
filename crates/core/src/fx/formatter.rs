//! Display formatting of currency amounts.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::currency::symbol_for;
use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Digit grouping and decimal separators of a display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberLocale {
    pub group_separator: char,
    pub decimal_separator: char,
}

impl NumberLocale {
    /// `1,234.50`
    pub const EN_US: NumberLocale = NumberLocale {
        group_separator: ',',
        decimal_separator: '.',
    };

    /// `1.234,50`
    pub const ES_AR: NumberLocale = NumberLocale {
        group_separator: '.',
        decimal_separator: ',',
    };

    /// Resolves a BCP 47 tag such as `en-US` or `es_AR`.
    pub fn from_tag(tag: &str) -> Option<NumberLocale> {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "en" => Some(Self::EN_US),
            "es" => Some(Self::ES_AR),
            _ => None,
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::EN_US
    }
}

/// Formats amounts as `<symbol><grouped amount>` with two decimals.
///
/// Formatting is total: unknown currency codes are shown as their own
/// symbol and non-finite amounts render as `NaN` or `∞`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyFormatter {
    locale: NumberLocale,
}

impl CurrencyFormatter {
    pub fn new(locale: NumberLocale) -> Self {
        Self { locale }
    }

    pub fn format(&self, amount: f64, currency_code: &str) -> String {
        let symbol = symbol_for(currency_code);

        if amount.is_nan() {
            return format!("{}NaN", symbol);
        }
        if amount.is_infinite() {
            let sign = if amount < 0.0 { "-" } else { "" };
            return format!("{}{}∞", symbol, sign);
        }

        // Near the top of Decimal's range there is no room left for two
        // fractional digits and `rescale` stops short.
        let decimal = Decimal::from_f64(amount)
            .map(|value| {
                let mut rounded = value.round_dp_with_strategy(
                    DISPLAY_DECIMAL_PRECISION,
                    RoundingStrategy::MidpointAwayFromZero,
                );
                rounded.rescale(DISPLAY_DECIMAL_PRECISION);
                rounded
            })
            .filter(|rounded| rounded.scale() == DISPLAY_DECIMAL_PRECISION);

        let (negative, digits) = match decimal {
            Some(mut rounded) => {
                let negative = rounded.is_sign_negative() && !rounded.is_zero();
                rounded.set_sign_positive(true);
                (negative, rounded.to_string())
            }
            // Amounts this large are already integers in binary.
            None => (
                amount < 0.0,
                format!(
                    "{:.*}",
                    DISPLAY_DECIMAL_PRECISION as usize,
                    amount.abs()
                ),
            ),
        };

        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
        format!(
            "{}{}{}{}{}",
            symbol,
            if negative { "-" } else { "" },
            self.group_digits(integer),
            self.locale.decimal_separator,
            fraction
        )
    }

    /// Reads back an amount produced by [`format`](Self::format) for the
    /// same currency and locale.
    pub fn parse(&self, text: &str, currency_code: &str) -> Option<f64> {
        let symbol = symbol_for(currency_code);
        let number = text.trim().strip_prefix(symbol)?.trim();

        let normalized: String = number
            .chars()
            .filter(|c| *c != self.locale.group_separator)
            .map(|c| {
                if c == self.locale.decimal_separator {
                    '.'
                } else {
                    c
                }
            })
            .collect();

        normalized.parse::<f64>().ok()
    }

    fn group_digits(&self, integer: &str) -> String {
        let len = integer.len();
        let mut grouped = String::with_capacity(len + len / 3);
        for (i, digit) in integer.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push(self.locale.group_separator);
            }
            grouped.push(digit);
        }
        grouped
    }
}

/// Formats `amount` for display in the default locale.
pub fn format_currency(amount: f64, currency_code: &str) -> String {
    CurrencyFormatter::default().format(amount, currency_code)
}

/// Inverse of [`format_currency`].
pub fn parse_formatted(text: &str, currency_code: &str) -> Option<f64> {
    CurrencyFormatter::default().parse(text, currency_code)
}
