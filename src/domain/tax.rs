use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// An inclusive age range mapped to a price multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub from: u32,
    pub to: u32,
    #[serde(alias = "then")]
    pub multiplier: Decimal,
}

impl TaxBracket {
    pub fn new(from: u32, to: u32, multiplier: Decimal) -> Self {
        Self {
            from,
            to,
            multiplier,
        }
    }

    pub fn contains(&self, age: u32) -> bool {
        self.from <= age && age <= self.to
    }
}

/// Ordered collection of [`TaxBracket`]s.
///
/// Brackets are assumed not to overlap; when they do, the first one listed
/// wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxTable(Vec<TaxBracket>);

impl TaxTable {
    pub fn new(brackets: Vec<TaxBracket>) -> Self {
        Self(brackets)
    }

    pub fn bracket_for(&self, age: u32) -> Option<&TaxBracket> {
        self.0.iter().find(|bracket| bracket.contains(age))
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.0
    }
}

impl Default for TaxTable {
    fn default() -> Self {
        Self(vec![
            TaxBracket::new(18, 25, dec!(1.1)),
            TaxBracket::new(26, 30, dec!(1.5)),
            TaxBracket::new(31, 100, dec!(1.3)),
        ])
    }
}
