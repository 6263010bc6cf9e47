//! Integration tests for the JSON-file car repository against committed
//! fixtures.

use std::path::PathBuf;
use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use rac_core::domain::entities::CarCategory;
use rac_core::errors::DomainError;
use rac_core::repositories::CarRepository;
use rac_core::services::quoting::{CarService, FixedIndexSelector, QuotingConfig};
use rac_infra::JsonCarRepository;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

const ONIX_ID: &str = "6cb2f093-9da9-4404-9a97-bbee0d1be4c1";
const RENEGADE_ID: &str = "b9b3a9c7-2c5a-4b8e-8e0a-3f6f5d4c2e11";

#[tokio::test]
async fn test_find_resolves_fixture_car() {
    let repository = JsonCarRepository::new(fixture("cars.json"));

    let id = Uuid::parse_str(ONIX_ID).unwrap();
    let car = repository.find(id).await.unwrap();

    assert_eq!(car.id, id);
    assert_eq!(car.name, "Chevrolet Onix");
    assert_eq!(car.release_year, 2021);
    assert!(car.available);
}

#[tokio::test]
async fn test_find_unknown_id_is_not_found() {
    let repository = JsonCarRepository::new(fixture("cars.json"));

    let result = repository.find(Uuid::new_v4()).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_missing_store_file_is_database_error() {
    let repository = JsonCarRepository::new(fixture("no-such-file.json"));

    let result = repository.find(Uuid::new_v4()).await;
    assert!(matches!(result, Err(DomainError::Database { .. })));
}

#[tokio::test]
async fn test_malformed_store_file_is_database_error() {
    let repository = JsonCarRepository::new(fixture("malformed.json"));

    let result = repository.find(Uuid::new_v4()).await;
    assert!(matches!(result, Err(DomainError::Database { .. })));
}

#[tokio::test]
async fn test_quoting_service_end_to_end_over_json_fleet() {
    let onix = Uuid::parse_str(ONIX_ID).unwrap();
    let renegade = Uuid::parse_str(RENEGADE_ID).unwrap();
    let category = CarCategory::new(
        "SUV".to_string(),
        vec![onix, renegade],
        Decimal::new(376, 1),
    );

    let repository = Arc::new(JsonCarRepository::new(fixture("cars.json")));
    let service = CarService::with_selector(
        repository,
        Arc::new(FixedIndexSelector(1)),
        QuotingConfig::default(),
    );

    let car = service.get_available_car(&category).await.unwrap();
    assert_eq!(car.id, renegade);
    assert_eq!(car.name, "Jeep Renegade");
}
