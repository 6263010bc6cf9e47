//! Car repository trait defining the interface for fleet data access.
//!
//! The quoting core owns no persistence logic: any storage backend can be
//! substituted by implementing this trait. Implementations are injected at
//! service construction time.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::car::Car;
use crate::errors::DomainError;

/// Repository capability for resolving car identifiers to full records.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use rac_core::repositories::CarRepository;
/// use rac_core::domain::entities::car::Car;
/// use rac_core::errors::DomainError;
///
/// struct StaticCarRepository {
///     cars: Vec<Car>,
/// }
///
/// #[async_trait]
/// impl CarRepository for StaticCarRepository {
///     async fn find(&self, id: Uuid) -> Result<Car, DomainError> {
///         self.cars
///             .iter()
///             .find(|c| c.id == id)
///             .cloned()
///             .ok_or(DomainError::NotFound { resource: format!("Car {id}") })
///     }
/// }
/// ```
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Resolve a car identifier to its full record
    ///
    /// # Arguments
    /// * `id` - The UUID of the car
    ///
    /// # Returns
    /// * `Ok(Car)` - Car found
    /// * `Err(DomainError::NotFound)` - No car with the given id
    /// * `Err(DomainError::Database)` - Storage failure
    async fn find(&self, id: Uuid) -> Result<Car, DomainError>;
}
