//! Quoting service module
//!
//! This module implements the category-based quoting flow:
//! - Random selection of a candidate car from a category
//! - Resolution of the chosen id through the car repository
//! - Final price calculation from an age-based tax table
//! - Currency rendering of the resulting amount

mod config;
mod currency;
mod selector;
mod service;

#[cfg(test)]
mod tests;

pub use config::QuotingConfig;
pub use currency::CurrencyFormat;
pub use selector::{FixedIndexSelector, IndexSelector, RandomIndexSelector};
pub use service::CarService;
