//! Value objects used by the quoting domain.

pub mod tax_bracket;

pub use tax_bracket::TaxBracket;
