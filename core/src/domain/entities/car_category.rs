//! Car category entity grouping interchangeable vehicles under one rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A grouping of interchangeable cars sharing a base daily price.
///
/// Customers request a category ("SUV") rather than a specific vehicle;
/// `car_ids` lists the candidate cars a selection may resolve to. The list
/// must be non-empty by the time a selection is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarCategory {
    /// Unique identifier for the category
    pub id: Uuid,

    /// Display name (e.g. "SUV", "Hatch")
    pub name: String,

    /// Candidate car identifiers, in catalog order
    #[serde(rename = "carIds")]
    pub car_ids: Vec<Uuid>,

    /// Base daily rate before age adjustment
    pub price: Decimal,
}

impl CarCategory {
    /// Creates a new CarCategory instance
    pub fn new(name: String, car_ids: Vec<Uuid>, price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            car_ids,
            price,
        }
    }
}
