//! JSON-file-backed storage.

mod car_repository_impl;
mod store;

pub use car_repository_impl::JsonCarRepository;
pub use store::JsonStore;
