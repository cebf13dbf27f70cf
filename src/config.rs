//! Quote configuration: the tax table and how amounts and dates are shown.
//!
//! Every field is optional in the JSON document; missing fields fall back to
//! the built-in age brackets and Brazilian presentation.

use crate::domain::tax::{TaxBracket, TaxTable};
use crate::error::Result;
use crate::format::{CurrencyFormat, DateStyle, Formatting};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    pub taxes: Vec<TaxBracket>,
    pub currency: CurrencyFormat,
    pub date: DateStyle,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            taxes: TaxTable::default().brackets().to_vec(),
            currency: CurrencyFormat::default(),
            date: DateStyle::default(),
        }
    }
}

impl QuoteConfig {
    /// Reads a JSON configuration file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn tax_table(&self) -> TaxTable {
        TaxTable::new(self.taxes.clone())
    }

    pub fn formatting(&self) -> Formatting {
        Formatting {
            currency: self.currency.clone(),
            date: self.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RentalError;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: QuoteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, QuoteConfig::default());
        assert_eq!(config.tax_table(), TaxTable::default());
        assert_eq!(config.formatting(), Formatting::default());
    }

    #[test]
    fn test_partial_document_overrides_taxes_only() {
        let config: QuoteConfig =
            serde_json::from_str(r#"{"taxes": [{"from": 21, "to": 26, "multiplier": "1.1"}]}"#)
                .unwrap();
        assert_eq!(config.taxes, vec![TaxBracket::new(21, 26, dec!(1.1))]);
        assert_eq!(config.currency, CurrencyFormat::brl());
    }

    #[test]
    fn test_from_path_reports_missing_file() {
        assert!(matches!(
            QuoteConfig::from_path("no-such-config.json"),
            Err(RentalError::IoError(_))
        ));
    }

    #[test]
    fn test_from_path_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        assert!(matches!(
            QuoteConfig::from_path(file.path()),
            Err(RentalError::JsonError(_))
        ));
    }
}
