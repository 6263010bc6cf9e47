//! Configuration for the quoting service

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::TaxBracket;

use super::currency::CurrencyFormat;

/// Default age tax table: young drivers pay a premium, the highest rate
/// sits in the 26-30 band.
static DEFAULT_TAX_TABLE: Lazy<Vec<TaxBracket>> = Lazy::new(|| {
    vec![
        TaxBracket::new(18, 25, Decimal::new(11, 1)),
        TaxBracket::new(26, 30, Decimal::new(15, 1)),
        TaxBracket::new(31, 100, Decimal::new(13, 1)),
    ]
});

/// Configuration for the quoting service.
///
/// Both the tax table and the currency rendering are data, not code:
/// callers swap either without touching the lookup or formatting logic.
/// Lookups take the first bracket in `tax_brackets` order that covers the
/// customer's age.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotingConfig {
    /// Ordered age-to-multiplier table
    pub tax_brackets: Vec<TaxBracket>,

    /// Currency rendering for the final quote
    pub currency: CurrencyFormat,
}

impl Default for QuotingConfig {
    fn default() -> Self {
        Self {
            tax_brackets: DEFAULT_TAX_TABLE.clone(),
            currency: CurrencyFormat::default(),
        }
    }
}
