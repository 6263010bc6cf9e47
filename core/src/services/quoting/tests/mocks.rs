//! Mock implementations for testing the quoting service

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::Car;
use crate::errors::DomainError;
use crate::repositories::CarRepository;
use crate::services::quoting::IndexSelector;

/// Selector that always returns a fixed position and counts invocations.
pub struct CountingSelector {
    position: usize,
    calls: AtomicUsize,
}

impl CountingSelector {
    pub fn new(position: usize) -> Self {
        Self {
            position,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IndexSelector for CountingSelector {
    fn random_position(&self, _len: usize) -> usize {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.position
    }
}

/// Car repository that records every looked-up id.
pub struct RecordingCarRepository {
    cars: HashMap<Uuid, Car>,
    pub lookups: Mutex<Vec<Uuid>>,
}

impl RecordingCarRepository {
    pub fn new() -> Self {
        Self {
            cars: HashMap::new(),
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn with_cars(cars: Vec<Car>) -> Self {
        Self {
            cars: cars.into_iter().map(|c| (c.id, c)).collect(),
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }
}

#[async_trait]
impl CarRepository for RecordingCarRepository {
    async fn find(&self, id: Uuid) -> Result<Car, DomainError> {
        self.lookups.lock().unwrap().push(id);
        self.cars.get(&id).cloned().ok_or(DomainError::NotFound {
            resource: format!("Car {id}"),
        })
    }
}

/// Car repository whose storage is permanently broken.
pub struct BrokenCarRepository;

#[async_trait]
impl CarRepository for BrokenCarRepository {
    async fn find(&self, _id: Uuid) -> Result<Car, DomainError> {
        Err(DomainError::Database {
            message: "connection refused".to_string(),
        })
    }
}
