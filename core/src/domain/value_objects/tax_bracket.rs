//! Age-based tax bracket applied to a category's base price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the age tax table: an inclusive age range mapped to a price
/// multiplier.
///
/// The table a service consumes is an ordered sequence of brackets.
/// Correct data is non-overlapping and gap-free over the supported age
/// domain, but nothing enforces that: lookups take the first bracket in
/// table order that covers the age, and an uncovered age is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive lower age bound
    pub from: u32,

    /// Inclusive upper age bound
    pub to: u32,

    /// Multiplier applied to the base daily price
    pub then: Decimal,
}

impl TaxBracket {
    /// Creates a new TaxBracket instance
    pub fn new(from: u32, to: u32, then: Decimal) -> Self {
        Self { from, to, then }
    }

    /// Whether this bracket covers the given age (both bounds inclusive).
    pub fn covers(&self, age: u32) -> bool {
        age >= self.from && age <= self.to
    }
}
