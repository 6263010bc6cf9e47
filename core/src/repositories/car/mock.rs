//! Mock implementation of CarRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::car::Car;
use crate::errors::DomainError;

use super::trait_::CarRepository;

/// Mock car repository for testing
pub struct MockCarRepository {
    cars: Arc<RwLock<HashMap<Uuid, Car>>>,
}

impl MockCarRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            cars: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a mock repository pre-populated with the given cars
    pub fn with_cars(cars: Vec<Car>) -> Self {
        let map = cars.into_iter().map(|c| (c.id, c)).collect();
        Self {
            cars: Arc::new(RwLock::new(map)),
        }
    }

    /// Insert a car into the mock store
    pub async fn insert(&self, car: Car) {
        self.cars.write().await.insert(car.id, car);
    }
}

impl Default for MockCarRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CarRepository for MockCarRepository {
    async fn find(&self, id: Uuid) -> Result<Car, DomainError> {
        let cars = self.cars.read().await;
        cars.get(&id).cloned().ok_or(DomainError::NotFound {
            resource: format!("Car {id}"),
        })
    }
}
