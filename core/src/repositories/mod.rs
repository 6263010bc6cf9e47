//! Repository interfaces abstracting data access from the domain layer.

pub mod car;

pub use car::{CarRepository, MockCarRepository};
