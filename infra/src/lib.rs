//! # RentACar Infrastructure
//!
//! Infrastructure layer for the RentACar backend: concrete implementations
//! of the data-access capabilities the core defines at its boundary. The
//! fleet lives in JSON files on disk, matching the catalog format the
//! reservation flow is seeded from.

pub mod database;

// Re-export commonly used types
pub use database::json::{JsonCarRepository, JsonStore};
