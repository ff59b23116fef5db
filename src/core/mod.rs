//! Core business logic - framework-agnostic product persistence.

/// Product record store
pub mod product;

pub use product::ProductStore;
