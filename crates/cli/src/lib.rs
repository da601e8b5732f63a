//! Demo wiring: seed a warehouse, reprice a product and report the result.

use std::collections::BTreeMap;

use anyhow::Context;
use serde::Serialize;
use warehouse_catalog::{Catalog, Decimal, NewProduct, ProductRecord, StoreScope, StoreStats};

/// Environment variable naming the warehouse to seed.
pub const WAREHOUSE_NAME_ENV: &str = "WAREHOUSE_NAME";
pub const DEFAULT_WAREHOUSE: &str = "main";

/// JSON summary printed by the binary.
#[derive(Debug, Serialize)]
pub struct Report {
    pub warehouse: String,
    /// False when the warehouse was already registered before this run.
    pub created: bool,
    pub store_scope: StoreScope,
    pub registered_warehouses: Vec<String>,
    pub registered_categories: Vec<String>,
    pub products: Vec<ProductRecord>,
    pub by_category: BTreeMap<String, Vec<ProductRecord>>,
    pub changed: Vec<ProductRecord>,
    pub stats: StoreStats,
}

const REPRICED_WIDGET: Decimal = Decimal::from_parts(1250, 0, 0, false, 2);

const SEED: &[(&str, &str, &str)] = &[
    ("Apple", "fruit", "0.45"),
    ("Pear", "fruit", "0.60"),
    ("Hammer", "tools", "14.90"),
    ("Widget", "gadgets", "9.99"),
    ("Milk", "dairy", "1.15"),
];

pub fn warehouse_name_from_env() -> String {
    std::env::var(WAREHOUSE_NAME_ENV)
        .ok()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_WAREHOUSE.to_string())
}

/// Seed `warehouse_name`, raise the widgets' price, and summarise the store.
pub fn run(catalog: &Catalog, warehouse_name: &str) -> anyhow::Result<Report> {
    let created = catalog.warehouses().get(warehouse_name).is_none();
    let warehouse = catalog.warehouse(warehouse_name);

    for (name, category, price) in SEED {
        let category = catalog
            .category(category)
            .with_context(|| format!("registering category '{category}'"))?;
        let price: Decimal = price
            .parse()
            .with_context(|| format!("parsing seed price '{price}'"))?;
        warehouse
            .add_product(NewProduct::new(*name, &category).with_price(price))
            .with_context(|| format!("adding '{name}'"))?;
    }

    let gadgets = catalog
        .categories()
        .get("gadgets")
        .context("gadgets category missing after seeding")?;
    for widget in warehouse
        .products_by(&gadgets)
        .iter()
        .filter(|p| p.name() == "Widget" && p.price() != REPRICED_WIDGET)
    {
        warehouse
            .update_product_price(widget.id(), REPRICED_WIDGET)
            .context("repricing widget")?;
    }

    let by_category = warehouse
        .products_grouped_by_category()
        .into_iter()
        .map(|(category, products)| (category.name().to_string(), products))
        .collect();

    let mut changed: Vec<ProductRecord> = warehouse.changed_products().into_iter().collect();
    changed.sort_by(|a, b| a.name().cmp(b.name()));

    let report = Report {
        warehouse: warehouse.name().to_string(),
        created,
        store_scope: catalog.config().store_scope,
        registered_warehouses: catalog.warehouses().names(),
        registered_categories: catalog
            .categories()
            .categories()
            .iter()
            .map(|c| c.name().to_string())
            .collect(),
        products: warehouse.products(),
        by_category,
        changed,
        stats: warehouse.stats(),
    };
    tracing::info!(
        warehouse = %report.warehouse,
        products = report.stats.products,
        changed = report.stats.changed,
        "demo catalog seeded"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn run_seeds_and_reprices() {
        let catalog = Catalog::default();
        let report = run(&catalog, "demo").unwrap();

        assert_eq!(report.warehouse, "demo");
        assert!(report.created);
        assert_eq!(report.registered_warehouses, ["demo"]);
        assert_eq!(report.registered_categories, ["Dairy", "Fruit", "Gadgets", "Tools"]);
        assert_eq!(report.products.len(), SEED.len());
        assert_eq!(report.by_category.len(), 4);
        assert_eq!(report.by_category["Fruit"].len(), 2);

        assert_eq!(report.changed.len(), 1);
        assert_eq!(report.changed[0].name(), "Widget");
        assert_eq!(report.changed[0].price(), dec!(9.99));

        let widget = report.products.iter().find(|p| p.name() == "Widget").unwrap();
        assert_eq!(widget.price(), dec!(12.50));
    }

    #[test]
    fn report_serializes_to_json() {
        let catalog = Catalog::default();
        let report = run(&catalog, "demo").unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["store_scope"], "per-warehouse");
        assert_eq!(json["stats"]["products"], 5);
        assert_eq!(json["changed"][0]["price"], "9.99");
    }

    #[test]
    fn running_twice_into_one_warehouse_duplicates_products() {
        let catalog = Catalog::default();
        run(&catalog, "demo").unwrap();
        let report = run(&catalog, "demo").unwrap();

        assert!(!report.created);
        assert_eq!(report.products.len(), SEED.len() * 2);
        assert_eq!(report.registered_warehouses, ["demo"]);
        assert!(
            report
                .products
                .iter()
                .filter(|p| p.name() == "Widget")
                .all(|p| p.price() == dec!(12.50))
        );
    }
}
