//! Presentation of prices and dates.
//!
//! Nothing here is process-wide: a [`Formatting`] value is built from the
//! configuration and handed to the service that needs it.

use chrono::{Locale, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Renders a decimal amount as a currency string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFormat {
    pub symbol: String,
    /// Placed between the symbol and the number.
    pub symbol_spacing: String,
    pub decimal_separator: char,
    pub group_separator: char,
    pub fraction_digits: u32,
}

impl CurrencyFormat {
    /// Brazilian real: `R$ 1.234,56`.
    pub fn brl() -> Self {
        Self {
            symbol: "R$".to_string(),
            symbol_spacing: " ".to_string(),
            decimal_separator: ',',
            group_separator: '.',
            fraction_digits: 2,
        }
    }

    /// US dollar: `$1,234.56`.
    pub fn usd() -> Self {
        Self {
            symbol: "$".to_string(),
            symbol_spacing: String::new(),
            decimal_separator: '.',
            group_separator: ',',
            fraction_digits: 2,
        }
    }

    /// Rounds half away from zero to `fraction_digits` and renders the
    /// result. Negative amounts carry the sign before the symbol.
    pub fn format(&self, amount: Decimal) -> String {
        let mut rounded = amount
            .round_dp_with_strategy(self.fraction_digits, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(self.fraction_digits);

        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = rounded.abs().to_string();
        let (integer, fraction) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push_str(&self.symbol_spacing);
        out.push_str(&group_thousands(integer, self.group_separator));
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::brl()
    }
}

fn group_thousands(integer: &str, separator: char) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
    out
}

/// Long-form calendar date styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateStyle {
    /// `15 de março de 2024`
    #[default]
    PtBr,
    /// `March 15, 2024`
    EnUs,
}

impl DateStyle {
    pub fn format(&self, date: NaiveDate) -> String {
        let (pattern, locale) = match self {
            DateStyle::PtBr => ("%-d de %B de %Y", Locale::pt_BR),
            DateStyle::EnUs => ("%B %-d, %Y", Locale::en_US),
        };
        date.format_localized(pattern, locale).to_string()
    }
}

/// Currency and date presentation used when building a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Formatting {
    pub currency: CurrencyFormat,
    pub date: DateStyle,
}
