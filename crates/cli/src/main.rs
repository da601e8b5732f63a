use warehouse_catalog::{Catalog, CatalogConfig};

fn main() -> anyhow::Result<()> {
    warehouse_observability::init();

    let config = CatalogConfig::from_env();
    let catalog = Catalog::new(config);
    let warehouse_name = warehouse_cli::warehouse_name_from_env();

    tracing::info!(warehouse = %warehouse_name, scope = %catalog.config().store_scope, "starting");

    let report = warehouse_cli::run(&catalog, &warehouse_name)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
