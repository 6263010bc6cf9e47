//! Main quoting service implementation

use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::entities::{Car, CarCategory, Customer};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::CarRepository;

use super::config::QuotingConfig;
use super::selector::{IndexSelector, RandomIndexSelector};

/// Quoting service: selects a car from a requested category and prices the
/// rental for a customer.
///
/// Holds only immutable shared state, so one instance can serve any number
/// of concurrent callers. Every operation is independent; the only await
/// point is the repository lookup in [`get_available_car`].
///
/// [`get_available_car`]: CarService::get_available_car
pub struct CarService<R: CarRepository> {
    /// Fleet data access
    car_repository: Arc<R>,
    /// Random-position strategy, injectable for deterministic tests
    selector: Arc<dyn IndexSelector>,
    /// Tax table and currency rendering
    config: QuotingConfig,
}

impl<R: CarRepository> CarService<R> {
    /// Create a quoting service with the default random selector
    pub fn new(car_repository: Arc<R>, config: QuotingConfig) -> Self {
        Self::with_selector(car_repository, Arc::new(RandomIndexSelector), config)
    }

    /// Create a quoting service with an injected selection strategy
    pub fn with_selector(
        car_repository: Arc<R>,
        selector: Arc<dyn IndexSelector>,
        config: QuotingConfig,
    ) -> Self {
        Self {
            car_repository,
            selector,
            config,
        }
    }

    /// Pick one candidate car id from the category, uniformly at random.
    ///
    /// # Returns
    /// * `Ok(Uuid)` - An id drawn from `category.car_ids`
    /// * `Err(DomainError::InvalidInput)` - The category has no candidates
    pub fn choose_random_car(&self, category: &CarCategory) -> DomainResult<Uuid> {
        if category.car_ids.is_empty() {
            return Err(DomainError::InvalidInput {
                message: format!("category {} has no candidate cars", category.name),
            });
        }

        let position = self.selector.random_position(category.car_ids.len());
        let car_id = category.car_ids.get(position).copied().ok_or_else(|| {
            DomainError::InvalidInput {
                message: format!(
                    "selector produced position {position} for {} candidates",
                    category.car_ids.len()
                ),
            }
        })?;

        tracing::debug!(
            category = %category.name,
            position,
            car_id = %car_id,
            "picked candidate car"
        );

        Ok(car_id)
    }

    /// Select a car from the category and resolve it to a full record.
    ///
    /// Single-attempt, fail-fast: one selection, one repository lookup.
    /// A lookup miss is propagated unchanged rather than triggering
    /// re-selection of another candidate.
    ///
    /// # Returns
    /// * `Ok(Car)` - The resolved car record
    /// * `Err(DomainError::InvalidInput)` - The category has no candidates
    /// * `Err(DomainError::NotFound)` - The chosen id is not in the fleet
    /// * `Err(DomainError::Database)` - Storage failure during lookup
    pub async fn get_available_car(&self, category: &CarCategory) -> DomainResult<Car> {
        let car_id = self.choose_random_car(category)?;
        self.car_repository.find(car_id).await
    }

    /// Quote the rental: base daily price, adjusted by the customer's age
    /// bracket, times the number of days, rendered as currency.
    ///
    /// The tax table is scanned in order and the first bracket covering
    /// the age wins; overlap resolution is therefore table order, and a
    /// gap surfaces as an error instead of a silently unadjusted price.
    /// Rounding happens once, inside the currency formatting.
    ///
    /// # Returns
    /// * `Ok(String)` - The formatted quote (e.g. `R$ 244,40`)
    /// * `Err(DomainError::InvalidInput)` - `number_of_days` is zero
    /// * `Err(DomainError::OutOfRange)` - No bracket covers the age
    pub fn calculate_final_price(
        &self,
        customer: &Customer,
        category: &CarCategory,
        number_of_days: u32,
    ) -> DomainResult<String> {
        if number_of_days == 0 {
            return Err(DomainError::InvalidInput {
                message: "number of days must be positive".to_string(),
            });
        }

        let bracket = self
            .config
            .tax_brackets
            .iter()
            .find(|b| b.covers(customer.age))
            .ok_or_else(|| {
                tracing::warn!(
                    age = customer.age,
                    category = %category.name,
                    "no tax bracket covers customer age"
                );
                DomainError::OutOfRange { age: customer.age }
            })?;

        let amount = category.price * bracket.then * Decimal::from(number_of_days);

        tracing::debug!(
            category = %category.name,
            age = customer.age,
            multiplier = %bracket.then,
            days = number_of_days,
            amount = %amount,
            "calculated final price"
        );

        Ok(self.config.currency.format(amount))
    }
}
