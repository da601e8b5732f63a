//! The catalog context: category and warehouse registries bundled together.

use std::sync::OnceLock;

use warehouse_core::CatalogResult;

use crate::category::{Category, CategoryRegistry};
use crate::config::CatalogConfig;
use crate::warehouse::{Warehouse, WarehouseRegistry};

/// Owned catalog state.
///
/// Pass a `Catalog` (or an `Arc<Catalog>`) to whatever needs it; independent
/// instances share nothing.
#[derive(Debug)]
pub struct Catalog {
    config: CatalogConfig,
    categories: CategoryRegistry,
    warehouses: WarehouseRegistry,
}

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            categories: CategoryRegistry::new(),
            warehouses: WarehouseRegistry::new(config.store_scope),
            config,
        }
    }

    /// Process-wide catalog, built from the environment on first use.
    pub fn global() -> &'static Catalog {
        GLOBAL.get_or_init(|| Catalog::new(CatalogConfig::from_env()))
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    pub fn warehouses(&self) -> &WarehouseRegistry {
        &self.warehouses
    }

    /// Shorthand for `categories().of(name)`.
    pub fn category(&self, name: &str) -> CatalogResult<Category> {
        self.categories.of(name)
    }

    /// Shorthand for `warehouses().get_or_create(name)`.
    pub fn warehouse(&self, name: &str) -> Warehouse {
        self.warehouses.get_or_create(name)
    }

    /// Shorthand for `warehouses().default_warehouse()`; clears its store.
    pub fn default_warehouse(&self) -> Warehouse {
        self.warehouses.default_warehouse()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreScope;
    use crate::product::NewProduct;
    use rust_decimal_macros::dec;

    #[test]
    fn independent_catalogs_do_not_share_state() {
        let left = Catalog::default();
        let right = Catalog::default();

        let fruit = left.category("fruit").unwrap();
        left.warehouse("main")
            .add_product(NewProduct::new("Apple", &fruit))
            .unwrap();

        assert!(right.warehouse("main").is_empty());
        assert!(right.categories().is_empty());
    }

    #[test]
    fn scope_follows_config() {
        let catalog = Catalog::new(CatalogConfig::default().with_store_scope(StoreScope::Shared));
        assert_eq!(catalog.warehouses().scope(), StoreScope::Shared);
        assert!(catalog.warehouse("a").shares_store_with(&catalog.warehouse("b")));
    }

    #[test]
    fn global_is_a_single_instance() {
        assert!(core::ptr::eq(Catalog::global(), Catalog::global()));
    }

    #[test]
    fn widget_price_update_end_to_end() {
        let catalog = Catalog::default();
        let gadgets = catalog.category("gadgets").unwrap();
        let warehouse = catalog.default_warehouse();

        let widget = warehouse
            .add_product(NewProduct::new("Widget", &gadgets).with_price(dec!(9.99)))
            .unwrap();
        warehouse.update_product_price(widget.id(), dec!(12.50)).unwrap();

        assert_eq!(warehouse.product_by_id(widget.id()).unwrap().price(), dec!(12.50));
        let changed: Vec<_> = warehouse.changed_products().into_iter().collect();
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].id(), widget.id());
        assert_eq!(changed[0].price(), dec!(9.99));

        assert!(catalog.default_warehouse().is_empty());
    }
}
