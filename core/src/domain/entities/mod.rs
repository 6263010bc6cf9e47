//! Domain entities representing core business objects.

pub mod car;
pub mod car_category;
pub mod customer;

// Re-export commonly used types
pub use car::Car;
pub use car_category::CarCategory;
pub use customer::Customer;
