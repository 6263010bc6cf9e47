//! JSON-file implementation of the CarRepository trait.

use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use rac_core::domain::entities::Car;
use rac_core::errors::DomainError;
use rac_core::repositories::CarRepository;

use super::store::JsonStore;

/// Car repository over a JSON fleet file.
///
/// Each lookup re-reads the file: the catalog is small and the file may be
/// edited between requests, so nothing is cached in memory.
pub struct JsonCarRepository {
    store: JsonStore,
}

impl JsonCarRepository {
    /// Create a repository over the given fleet file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonStore::new(path),
        }
    }
}

#[async_trait]
impl CarRepository for JsonCarRepository {
    async fn find(&self, id: Uuid) -> Result<Car, DomainError> {
        let cars: Vec<Car> = self.store.load().await?;

        cars.into_iter().find(|c| c.id == id).ok_or_else(|| {
            tracing::debug!(
                car_id = %id,
                store = %self.store.path().display(),
                "car not present in fleet store"
            );
            DomainError::NotFound {
                resource: format!("Car {id}"),
            }
        })
    }
}
