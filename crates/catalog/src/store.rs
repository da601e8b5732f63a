//! Concurrency-safe product store.
//!
//! A store keeps three views of its products behind a single lock:
//!
//! - the ordered product list (insertion order, replaced in place on update),
//! - the id index used for direct lookup,
//! - the changed-set of *superseded* records (the value before each update).
//!
//! Every mutation validates first and then applies all three views under one
//! write-lock acquisition, so readers never see an id that is indexed but not
//! listed (or the reverse).

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::RwLock;

use rust_decimal::Decimal;
use serde::Serialize;
use warehouse_core::{CatalogError, CatalogResult, ProductId};

use crate::category::Category;
use crate::product::{NewProduct, ProductRecord, ensure_name, ensure_price};
use crate::sync::{read, write};

#[derive(Debug, Default)]
struct StoreState {
    products: Vec<ProductRecord>,
    by_id: HashMap<ProductId, ProductRecord>,
    changed: HashSet<ProductRecord>,
}

/// Point-in-time counters for a store.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub products: usize,
    pub changed: usize,
}

#[derive(Debug, Default)]
pub struct ProductStore {
    state: RwLock<StoreState>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        read(&self.state).products.is_empty()
    }

    pub fn len(&self) -> usize {
        read(&self.state).products.len()
    }

    /// Snapshot of all products in store order.
    pub fn products(&self) -> Vec<ProductRecord> {
        read(&self.state).products.clone()
    }

    pub fn product_by_id(&self, id: ProductId) -> Option<ProductRecord> {
        read(&self.state).by_id.get(&id).cloned()
    }

    /// Add a new product.
    ///
    /// Fails with `InvalidArgument` for a blank name, a negative price, or an
    /// explicit id that is already present (use
    /// [`ProductStore::update_product_price`] for existing products).
    pub fn add_product(&self, new: NewProduct) -> CatalogResult<ProductRecord> {
        let NewProduct {
            id,
            name,
            category,
            price,
        } = new;

        ensure_name(&name)?;
        let price = price.unwrap_or(Decimal::ZERO);
        ensure_price(price)?;

        let mut state = write(&self.state);
        let id = match id {
            Some(id) if state.by_id.contains_key(&id) => {
                return Err(CatalogError::invalid_argument(format!(
                    "product {id} already exists, use update_product_price for updates"
                )));
            }
            Some(id) => id,
            None => ProductId::new(),
        };

        let product = ProductRecord::new(id, name, category, price);
        state.products.push(product.clone());
        state.by_id.insert(id, product.clone());

        tracing::debug!(
            product_id = %id,
            category = %product.category(),
            price = %product.price(),
            "product added"
        );
        Ok(product)
    }

    /// Replace the product's record with one carrying `new_price`.
    ///
    /// The superseded record goes into the changed-set. Returns the new record.
    pub fn update_product_price(
        &self,
        id: ProductId,
        new_price: Decimal,
    ) -> CatalogResult<ProductRecord> {
        ensure_price(new_price)?;

        let mut state = write(&self.state);
        let Some(existing) = state.by_id.get(&id).cloned() else {
            return Err(CatalogError::invalid_argument(format!(
                "product {id} doesn't exist"
            )));
        };

        let updated = existing.with_price(new_price);
        let position = state.products.iter().position(|p| *p == existing);
        match position {
            Some(index) => state.products[index] = updated.clone(),
            None => {
                // Index and list disagree; keep the product visible rather
                // than drop the update.
                tracing::warn!(product_id = %id, "superseded record not in product list, appending");
                state.products.push(updated.clone());
            }
        }
        state.by_id.insert(id, updated.clone());
        state.changed.insert(existing);

        tracing::debug!(product_id = %id, price = %new_price, "product price updated");
        Ok(updated)
    }

    /// Drop every product, index entry and changed snapshot.
    pub fn clear_all_products(&self) {
        let mut state = write(&self.state);
        let cleared = state.products.len();
        state.products.clear();
        state.by_id.clear();
        state.changed.clear();
        tracing::info!(cleared, "product store cleared");
    }

    /// Snapshot of the records superseded by price updates.
    pub fn changed_products(&self) -> HashSet<ProductRecord> {
        read(&self.state).changed.clone()
    }

    /// Products partitioned by category, each group in store order.
    pub fn products_grouped_by_category(&self) -> BTreeMap<Category, Vec<ProductRecord>> {
        let state = read(&self.state);
        let mut groups: BTreeMap<Category, Vec<ProductRecord>> = BTreeMap::new();
        for product in &state.products {
            groups
                .entry(product.category().clone())
                .or_default()
                .push(product.clone());
        }
        groups
    }

    /// Products in `category`, in store order.
    pub fn products_by(&self, category: &Category) -> Vec<ProductRecord> {
        read(&self.state)
            .products
            .iter()
            .filter(|p| p.category() == category)
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> StoreStats {
        let state = read(&self.state);
        StoreStats {
            products: state.products.len(),
            changed: state.changed.len(),
        }
    }

    #[cfg(test)]
    fn forget_listed(&self, id: ProductId) {
        write(&self.state).products.retain(|p| p.id() != id);
    }
}
