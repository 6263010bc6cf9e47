//! Customer entity representing the person requesting a quote.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer requesting a rental quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier for the customer
    pub id: Uuid,

    /// Customer display name
    pub name: String,

    /// Age in whole years, used for tax-bracket lookup
    pub age: u32,
}

impl Customer {
    /// Creates a new Customer instance
    pub fn new(name: String, age: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer() {
        let customer = Customer::new("Ana Souza".to_string(), 50);

        assert_eq!(customer.name, "Ana Souza");
        assert_eq!(customer.age, 50);
    }
}
