//! Warehouse catalog: interned categories, named warehouses and their
//! concurrency-safe product stores.
//!
//! Everything hangs off an explicit [`Catalog`] context so independent
//! catalogs (e.g. one per test) never observe each other's state.
//! [`Catalog::global`] provides a lazily-built process-wide instance.

pub mod catalog;
pub mod category;
pub mod config;
pub mod product;
pub mod store;
pub mod warehouse;

mod sync;

pub use catalog::Catalog;
pub use category::{Category, CategoryRegistry};
pub use config::{CatalogConfig, StoreScope};
pub use product::{NewProduct, ProductRecord};
pub use store::{ProductStore, StoreStats};
pub use warehouse::{DEFAULT_WAREHOUSE_NAME, Warehouse, WarehouseRegistry};

pub use rust_decimal::Decimal;
pub use warehouse_core::{CatalogError, CatalogResult, ProductId};
