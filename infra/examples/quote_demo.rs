//! Example demonstrating the full quoting flow over a JSON fleet file
//!
//! Run with: cargo run --example quote_demo

use std::path::PathBuf;
use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use rac_core::domain::entities::{CarCategory, Customer};
use rac_core::services::quoting::{CarService, QuotingConfig};
use rac_infra::JsonCarRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let fleet = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/cars.json");
    let repository = Arc::new(JsonCarRepository::new(fleet));
    let service = CarService::new(repository, QuotingConfig::default());

    // Candidates from the fixture fleet
    let category = CarCategory::new(
        "SUV".to_string(),
        vec![
            Uuid::parse_str("6cb2f093-9da9-4404-9a97-bbee0d1be4c1")?,
            Uuid::parse_str("b9b3a9c7-2c5a-4b8e-8e0a-3f6f5d4c2e11")?,
        ],
        Decimal::new(376, 1),
    );
    let customer = Customer::new("Ana Souza".to_string(), 50);

    println!("=== RentACar quoting demo ===");

    let car = service.get_available_car(&category).await?;
    println!(
        "Selected car: {} ({}), available: {}",
        car.name, car.release_year, car.available
    );

    let number_of_days = 5;
    let quote = service.calculate_final_price(&customer, &category, number_of_days)?;
    println!(
        "Quote for {} ({} years, {} days): {}",
        customer.name, customer.age, number_of_days, quote
    );

    Ok(())
}
