//! Product categories, interned by canonical name.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::{Serialize, Serializer};
use warehouse_core::{CatalogError, CatalogResult, ValueObject};

use crate::sync::{read, write};

/// A product category.
///
/// Categories are only handed out by a [`CategoryRegistry`], which keeps one
/// instance per canonical name. Equality, hashing and ordering therefore go
/// by name; [`Category::ptr_eq`] exposes the underlying identity.
#[derive(Clone)]
pub struct Category {
    name: Arc<str>,
}

impl Category {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when both handles point at the same interned instance.
    pub fn ptr_eq(a: &Category, b: &Category) -> bool {
        Arc::ptr_eq(&a.name, &b.name)
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.name, &other.name) || self.name == other.name
    }
}

impl Eq for Category {}

impl core::hash::Hash for Category {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.name.cmp(&other.name)
    }
}

impl core::fmt::Debug for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Category").field(&&*self.name).finish()
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

impl ValueObject for Category {}

/// Canonical form of a category name: first character upper-cased, the rest
/// left as given.
///
/// This is not case folding; `"WIDGET"` and `"widget"` stay distinct.
pub fn canonical_name(name: &str) -> CatalogResult<String> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(CatalogError::invalid_argument("category name can't be empty"));
    };

    let mut canonical: String = first.to_uppercase().collect();
    canonical.push_str(chars.as_str());
    Ok(canonical)
}

/// Intern table for categories.
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    categories: RwLock<HashMap<Arc<str>, Category>>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get-or-create the category for `name`'s canonical form.
    pub fn of(&self, name: &str) -> CatalogResult<Category> {
        let canonical = canonical_name(name)?;

        if let Some(category) = read(&self.categories).get(canonical.as_str()) {
            return Ok(category.clone());
        }

        // Re-checked under the write lock: a racing caller may have inserted
        // the same name between the two acquisitions.
        let mut categories = write(&self.categories);
        let category = categories
            .entry(Arc::from(canonical))
            .or_insert_with_key(|key| {
                tracing::debug!(category = %key, "category registered");
                Category { name: key.clone() }
            })
            .clone();
        Ok(category)
    }

    /// Look up an already-registered category without creating it.
    pub fn get(&self, name: &str) -> Option<Category> {
        let canonical = canonical_name(name).ok()?;
        read(&self.categories).get(canonical.as_str()).cloned()
    }

    pub fn len(&self) -> usize {
        read(&self.categories).len()
    }

    pub fn is_empty(&self) -> bool {
        read(&self.categories).is_empty()
    }

    /// All registered categories, sorted by name.
    pub fn categories(&self) -> Vec<Category> {
        let mut all: Vec<Category> = read(&self.categories).values().cloned().collect();
        all.sort();
        all
    }
}
