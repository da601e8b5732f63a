//! Named warehouses and their registry.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, RwLock};

use rust_decimal::Decimal;
use warehouse_core::{CatalogResult, ProductId};

use crate::category::Category;
use crate::config::StoreScope;
use crate::product::{NewProduct, ProductRecord};
use crate::store::{ProductStore, StoreStats};
use crate::sync::{read, write};

/// Name of the warehouse returned by [`WarehouseRegistry::default_warehouse`].
pub const DEFAULT_WAREHOUSE_NAME: &str = "";

#[derive(Debug)]
struct WarehouseInner {
    name: String,
    store: Arc<ProductStore>,
}

/// Handle to a registered warehouse.
///
/// Cloning is cheap. Two handles are equal only when they come from the same
/// registration.
#[derive(Debug, Clone)]
pub struct Warehouse {
    inner: Arc<WarehouseInner>,
}

impl PartialEq for Warehouse {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Warehouse {}

impl Warehouse {
    fn new(name: &str, store: Arc<ProductStore>) -> Self {
        Self {
            inner: Arc::new(WarehouseInner {
                name: name.to_string(),
                store,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// True when both warehouses read and write the same product store.
    pub fn shares_store_with(&self, other: &Warehouse) -> bool {
        Arc::ptr_eq(&self.inner.store, &other.inner.store)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.store.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.store.len()
    }

    pub fn products(&self) -> Vec<ProductRecord> {
        self.inner.store.products()
    }

    pub fn product_by_id(&self, id: ProductId) -> Option<ProductRecord> {
        self.inner.store.product_by_id(id)
    }

    pub fn add_product(&self, new: NewProduct) -> CatalogResult<ProductRecord> {
        self.inner.store.add_product(new)
    }

    pub fn update_product_price(
        &self,
        id: ProductId,
        new_price: Decimal,
    ) -> CatalogResult<ProductRecord> {
        self.inner.store.update_product_price(id, new_price)
    }

    /// Clear this warehouse's store (every warehouse's, under shared scope).
    pub fn clear_all_products(&self) {
        self.inner.store.clear_all_products()
    }

    pub fn changed_products(&self) -> HashSet<ProductRecord> {
        self.inner.store.changed_products()
    }

    pub fn products_grouped_by_category(&self) -> BTreeMap<Category, Vec<ProductRecord>> {
        self.inner.store.products_grouped_by_category()
    }

    pub fn products_by(&self, category: &Category) -> Vec<ProductRecord> {
        self.inner.store.products_by(category)
    }

    pub fn stats(&self) -> StoreStats {
        self.inner.store.stats()
    }
}

/// Intern table for warehouses.
#[derive(Debug)]
pub struct WarehouseRegistry {
    scope: StoreScope,
    shared: Arc<ProductStore>,
    warehouses: RwLock<HashMap<String, Warehouse>>,
}

impl WarehouseRegistry {
    pub fn new(scope: StoreScope) -> Self {
        Self {
            scope,
            shared: Arc::new(ProductStore::new()),
            warehouses: RwLock::new(HashMap::new()),
        }
    }

    pub fn scope(&self) -> StoreScope {
        self.scope
    }

    /// Get-or-create the warehouse registered under `name`.
    pub fn get_or_create(&self, name: &str) -> Warehouse {
        if let Some(warehouse) = read(&self.warehouses).get(name) {
            return warehouse.clone();
        }

        let mut warehouses = write(&self.warehouses);
        warehouses
            .entry(name.to_string())
            .or_insert_with(|| {
                tracing::debug!(warehouse = name, scope = %self.scope, "warehouse registered");
                Warehouse::new(name, self.store_for_new_warehouse())
            })
            .clone()
    }

    /// The default (empty-name) warehouse, with its store reset.
    ///
    /// Clearing is an observable side effect: under [`StoreScope::Shared`]
    /// every registered warehouse comes back empty.
    ///
    /// Lookup and reset take separate locks, so an add racing with this call
    /// may land before or after the clear.
    pub fn default_warehouse(&self) -> Warehouse {
        let warehouse = self.get_or_create(DEFAULT_WAREHOUSE_NAME);
        warehouse.clear_all_products();
        warehouse
    }

    pub fn get(&self, name: &str) -> Option<Warehouse> {
        read(&self.warehouses).get(name).cloned()
    }

    /// Registered warehouse names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = read(&self.warehouses).keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        read(&self.warehouses).len()
    }

    pub fn is_empty(&self) -> bool {
        read(&self.warehouses).is_empty()
    }

    fn store_for_new_warehouse(&self) -> Arc<ProductStore> {
        match self.scope {
            StoreScope::Shared => Arc::clone(&self.shared),
            StoreScope::PerWarehouse => Arc::new(ProductStore::new()),
        }
    }
}

impl Default for WarehouseRegistry {
    fn default() -> Self {
        Self::new(StoreScope::default())
    }
}
