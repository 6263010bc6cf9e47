//! Car entity representing a single rentable vehicle.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A concrete vehicle in the fleet.
///
/// Car records are owned by the repository collaborator; the quoting core
/// only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Unique identifier for the car
    pub id: Uuid,

    /// Display name (make and model)
    pub name: String,

    /// Year the model was released
    #[serde(rename = "releaseYear")]
    pub release_year: i32,

    /// Whether the car is currently available for rental
    pub available: bool,

    /// Whether the car is fueled and ready to leave the lot
    #[serde(rename = "gasAvailable")]
    pub gas_available: bool,
}

impl Car {
    /// Creates a new Car instance
    pub fn new(name: String, release_year: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            release_year,
            available: true,
            gas_available: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_car_is_available() {
        let car = Car::new("Chevrolet Onix".to_string(), 2021);

        assert_eq!(car.name, "Chevrolet Onix");
        assert_eq!(car.release_year, 2021);
        assert!(car.available);
        assert!(car.gas_available);
    }

    #[test]
    fn test_car_json_field_names() {
        let car = Car::new("Fiat Argo".to_string(), 2020);
        let json = serde_json::to_string(&car).unwrap();

        assert!(json.contains("\"releaseYear\":2020"));
        assert!(json.contains("\"gasAvailable\":true"));
    }
}
