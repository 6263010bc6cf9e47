//! Database implementations of the core repository traits.

pub mod json;
