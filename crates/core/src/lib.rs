//! `warehouse-core`: shared building blocks for the catalog crates.
//!
//! This crate contains **pure** primitives (no locking, no logging).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{CatalogError, CatalogResult};
pub use id::ProductId;
pub use value_object::ValueObject;
