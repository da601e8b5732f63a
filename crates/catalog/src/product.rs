//! Product records and the input used to create them.

use rust_decimal::Decimal;
use serde::Serialize;
use warehouse_core::{CatalogError, CatalogResult, ProductId, ValueObject};

use crate::category::Category;

/// Immutable snapshot of a product.
///
/// A price update never mutates a record: the store builds a replacement via
/// [`ProductRecord::with_price`] and keeps the old value in its changed-set.
///
/// Equality is exact: prices compare by mantissa and scale, so `1` and
/// `1.00` are different records.
#[derive(Debug, Clone, Serialize)]
pub struct ProductRecord {
    id: ProductId,
    name: String,
    category: Category,
    price: Decimal,
}

impl ProductRecord {
    pub(crate) fn new(id: ProductId, name: String, category: Category, price: Decimal) -> Self {
        Self {
            id,
            name,
            category,
            price,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Same id, name and category with a different price.
    pub fn with_price(&self, price: Decimal) -> Self {
        Self {
            price,
            ..self.clone()
        }
    }

    fn exact_price(&self) -> (i128, u32) {
        (self.price.mantissa(), self.price.scale())
    }
}

impl PartialEq for ProductRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.category == other.category
            && self.exact_price() == other.exact_price()
    }
}

impl Eq for ProductRecord {}

impl core::hash::Hash for ProductRecord {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
        self.category.hash(state);
        self.exact_price().hash(state);
    }
}

impl ValueObject for ProductRecord {}

/// Input for `add_product`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    /// Explicit id; a fresh one is generated when `None`.
    pub id: Option<ProductId>,
    pub name: String,
    pub category: Category,
    /// Defaults to zero when `None`.
    pub price: Option<Decimal>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, category: &Category) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: category.clone(),
            price: None,
        }
    }

    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }
}

pub(crate) fn ensure_name(name: &str) -> CatalogResult<()> {
    if name.trim().is_empty() {
        return Err(CatalogError::invalid_argument("product name can't be blank"));
    }
    Ok(())
}

pub(crate) fn ensure_price(price: Decimal) -> CatalogResult<()> {
    if price < Decimal::ZERO {
        return Err(CatalogError::invalid_argument(format!(
            "price can't be negative (got {price})"
        )));
    }
    Ok(())
}
