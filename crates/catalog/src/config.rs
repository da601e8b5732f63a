//! Catalog configuration.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use warehouse_core::CatalogError;

/// How warehouses map onto product stores.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoreScope {
    /// Every warehouse owns an independent store.
    #[default]
    PerWarehouse,
    /// All warehouses delegate to one store, so a product added through one
    /// name is visible through every other.
    Shared,
}

impl StoreScope {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreScope::PerWarehouse => "per-warehouse",
            StoreScope::Shared => "shared",
        }
    }
}

impl core::fmt::Display for StoreScope {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreScope {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per-warehouse" | "per_warehouse" => Ok(StoreScope::PerWarehouse),
            "shared" => Ok(StoreScope::Shared),
            other => Err(CatalogError::invalid_argument(format!(
                "unknown store scope '{other}' (expected 'shared' or 'per-warehouse')"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub store_scope: StoreScope,
}

impl CatalogConfig {
    pub const STORE_SCOPE_ENV: &'static str = "WAREHOUSE_STORE_SCOPE";

    pub fn with_store_scope(mut self, store_scope: StoreScope) -> Self {
        self.store_scope = store_scope;
        self
    }

    /// Build from process environment (`WAREHOUSE_STORE_SCOPE`).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let store_scope = match lookup(Self::STORE_SCOPE_ENV) {
            None => StoreScope::default(),
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!(%err, "ignoring {}; using default", Self::STORE_SCOPE_ENV);
                StoreScope::default()
            }),
        };
        Self { store_scope }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_per_warehouse_stores() {
        assert_eq!(CatalogConfig::default().store_scope, StoreScope::PerWarehouse);
        assert_eq!(CatalogConfig::from_lookup(|_| None), CatalogConfig::default());
    }

    #[test]
    fn reads_scope_from_lookup() {
        let config = CatalogConfig::from_lookup(|key| {
            (key == CatalogConfig::STORE_SCOPE_ENV).then(|| " Shared ".to_string())
        });
        assert_eq!(config.store_scope, StoreScope::Shared);
    }

    #[test]
    fn invalid_scope_falls_back_to_default() {
        let config = CatalogConfig::from_lookup(|_| Some("global".to_string()));
        assert_eq!(config.store_scope, StoreScope::PerWarehouse);
    }

    #[test]
    fn scope_round_trips_through_display() {
        for scope in [StoreScope::PerWarehouse, StoreScope::Shared] {
            assert_eq!(scope.to_string().parse::<StoreScope>().unwrap(), scope);
        }
    }

    #[test]
    fn deserializes_kebab_case() {
        let config: CatalogConfig = serde_json::from_str(r#"{"store_scope":"shared"}"#).unwrap();
        assert_eq!(config.store_scope, StoreScope::Shared);

        let empty: CatalogConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, CatalogConfig::default());
    }
}
