//! Business services containing domain logic and use cases.

pub mod quoting;

// Re-export commonly used types
pub use quoting::{
    CarService, CurrencyFormat, FixedIndexSelector, IndexSelector, QuotingConfig,
    RandomIndexSelector,
};
